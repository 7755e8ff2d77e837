//! Domain layer - Core business entities
//!
//! Plain data types for user records and the payloads that create
//! or modify them. No infrastructure dependencies.

pub mod user;

pub use user::{NewUser, UserPatch, UserRecord, UserResponse};
