//! Trait boundaries between domain logic and infrastructure

pub mod repository;

pub use repository::LeaderboardRepository;
