pub mod breed_store;

pub use breed_store::BreedStore;
#[cfg(test)]
pub use breed_store::MockBreedStore;
