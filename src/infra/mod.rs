//! Infrastructure layer - Storage backing the API
//!
//! Holds the in-memory user store and the repository trait the
//! request handlers depend on.

pub mod repositories;

pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
