//! # Client configuration — `userboard.toml`
//!
//! Where the users collection lives and what the client sends as the phone number
//! on every write.
//!
//! ```toml
//! base_url = "https://jsonplaceholder.typicode.com"
//! placeholder_phone = "123-456-7890"
//! ```
//!
//! Every field has a default, so a missing or empty file equals
//! [`ApiConfig::default`]. On native targets [`ApiConfig::load`] layers the
//! environment (`USERS_API_URL`, `USERS_PLACEHOLDER_PHONE`, optionally from a
//! `.env` file) over the file.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use crate::error::ConfigError;

/// Public demo API the client talks to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Phone number sent with every create and update.
pub const PLACEHOLDER_PHONE: &str = "123-456-7890";

/// Settings for [`crate::HttpUsersApi`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; the collection is `{base_url}/users`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_placeholder_phone")]
    pub placeholder_phone: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_placeholder_phone() -> String {
    PLACEHOLDER_PHONE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            placeholder_phone: default_placeholder_phone(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the placeholder phone.
    pub fn with_placeholder_phone(mut self, phone: impl Into<String>) -> Self {
        self.placeholder_phone = phone.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read [`Self::filename`] from the working directory if present, then
    /// apply environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match std::fs::read_to_string(Self::filename()) {
            Ok(text) => Self::from_toml(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `USERS_API_URL` / `USERS_PLACEHOLDER_PHONE` from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("USERS_API_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(phone) = lookup("USERS_PLACEHOLDER_PHONE") {
            self.placeholder_phone = phone;
        }
        self
    }
}
