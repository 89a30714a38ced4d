//! Build-time application configuration.
//!
//! DESIGN
//! ======
//! The identity provider's publishable key is the only external setting.
//! It is read once, in the entry point, and handed to the composition root
//! as an explicit value — never read from ambient globals elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time environment variable carrying the publishable key.
pub const PUBLISHABLE_KEY_VAR: &str = "CASEBOOK_CLERK_PUBLISHABLE_KEY";

/// Startup configuration passed into the composition root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Identity provider publishable key (`pk_test_...` / `pk_live_...`).
    /// Empty when the build did not supply one; the app then stays
    /// permanently signed out.
    pub publishable_key: String,
}

impl AppConfig {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    /// Build the configuration from compile-time environment variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CASEBOOK_CLERK_PUBLISHABLE_KEY").unwrap_or_default())
    }
}
