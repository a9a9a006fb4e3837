//! Storage adapters implementing the leaderboard repository port

pub mod in_memory_repository;
pub mod json_file_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;
