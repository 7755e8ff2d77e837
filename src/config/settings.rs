//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use super::constants::{DEFAULT_SEED_SAMPLE_USERS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// How the store picks the number of a newly inserted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPolicy {
    /// Highest stored number + 1. Deleting the top record frees its number
    /// for the next insert.
    #[default]
    MaxPlusOne,
    /// Highest number ever issued + 1. Numbers are never handed out twice.
    Monotonic,
}

impl FromStr for NumberPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max-plus-one" | "max_plus_one" => Ok(NumberPolicy::MaxPlusOne),
            "monotonic" => Ok(NumberPolicy::Monotonic),
            other => Err(format!("unknown number policy '{}'", other)),
        }
    }
}

impl fmt::Display for NumberPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberPolicy::MaxPlusOne => write!(f, "max-plus-one"),
            NumberPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub number_policy: NumberPolicy,
    pub seed_sample_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            number_policy: NumberPolicy::default(),
            seed_sample_users: DEFAULT_SEED_SAMPLE_USERS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            number_policy: parse_or(&lookup, "USER_NUMBER_POLICY", defaults.number_policy),
            seed_sample_users: parse_or(&lookup, "SEED_SAMPLE_USERS", defaults.seed_sample_users),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "Ignoring invalid setting");
            default
        }),
        None => default,
    }
}
