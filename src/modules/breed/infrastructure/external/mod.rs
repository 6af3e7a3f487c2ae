pub mod catalog;
pub mod http;

pub use catalog::HttpCatalogClient;
pub use http::CommonHttpHandler;
