//! Read-only application configuration.
//!
//! Everything here is built once at startup and passed down by value or
//! reference. Nothing in the crate mutates configuration after construction.

pub mod messages;

use std::time::Duration;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "COURSE_API_URL";

/// Base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const MIN_QUANTITY_PER_LESSON: u32 = 1;
pub const MAX_QUANTITY_PER_LESSON: u32 = 10;

/// Top-level configuration bundle.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub cart: CartConfig,
    pub storage: StorageKeys,
}

impl AppConfig {
    /// Default configuration with the API section read from the environment.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Connection settings for the lessons API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the base URL from `COURSE_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Per-lesson quantity bounds enforced by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartConfig {
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl CartConfig {
    pub fn contains(&self, quantity: u32) -> bool {
        (self.min_quantity..=self.max_quantity).contains(&quantity)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            min_quantity: MIN_QUANTITY_PER_LESSON,
            max_quantity: MAX_QUANTITY_PER_LESSON,
        }
    }
}

/// Keys used in the local key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub cart: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "course_management_cart".to_string(),
        }
    }
}
