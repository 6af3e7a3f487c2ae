pub mod breed_repository_impl;
pub mod mapper;

pub use breed_repository_impl::BreedRepositoryImpl;
pub use mapper::BreedRecordMapper;
