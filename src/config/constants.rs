//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Routes
// =============================================================================

/// Path prefix of the user resource
pub const USERS_PATH: &str = "/users";

// =============================================================================
// User Store
// =============================================================================

/// Number assigned to the first record of an empty store
pub const FIRST_USER_NUMBER: u32 = 1;

/// Seed records loaded at store construction: (id, password, name)
pub const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("user01", "pass01", "너구리"),
    ("user02", "pass02", "코알라"),
    ("user03", "pass03", "깜지곰"),
];

/// Whether the store is seeded unless configured otherwise
pub const DEFAULT_SEED_SAMPLE_USERS: bool = true;

// =============================================================================
// Response Envelope
// =============================================================================

/// Message attached to successful lookups
pub const MESSAGE_LOOKUP_OK: &str = "Lookup successful";

/// Envelope data key for a list of users
pub const DATA_KEY_USERS: &str = "users";

/// Envelope data key for a single user
pub const DATA_KEY_USER: &str = "user";
