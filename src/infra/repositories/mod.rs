//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data storage,
//! following the Repository pattern for clean separation of concerns.

mod user_repository;

pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use user_repository::MockUserRepository;
