pub mod result_repository;

pub use result_repository::{MongoResultRepository, ResultRepository};

#[cfg(test)]
pub use result_repository::MockResultRepository;
