//! User Registry - In-memory user records behind a REST API
//!
//! A single store of user records with create, read, update and delete
//! operations, exposed over HTTP with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record and request payloads
//! - **infra**: The in-memory user store
//! - **api**: HTTP handlers, extractors, routes and OpenAPI docs
//! - **types**: Response envelope and status helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Never reuse numbers freed by deleting the newest user
//! USER_NUMBER_POLICY=monotonic cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, NumberPolicy};
pub use domain::{NewUser, UserPatch, UserRecord};
pub use errors::{AppError, AppResult};
pub use infra::{UserRepository, UserStore};
