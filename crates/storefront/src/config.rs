//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (exactly one)
//! - `CARTWHEEL_CATALOG_URL` - HTTP(S) URL of the product feed
//! - `CARTWHEEL_CATALOG_FILE` - Path to a local product feed JSON file
//!
//! ## Optional
//! - `CARTWHEEL_STORAGE_DIR` - Directory for the persisted cart slot
//!   (default: `./.cartwheel`)
//! - `CARTWHEEL_CART_KEY` - Slot key for the cart (default: `cart`)
//! - `CARTWHEEL_CATALOG_TTL_SECS` - Catalog cache TTL in seconds
//!   (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::catalog::CatalogSource;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Conflicting environment variables: set {0} or {1}, not both")]
    ConflictingEnvVars(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where the product feed lives.
    pub catalog_source: CatalogSource,
    /// Directory holding the persisted cart slot.
    pub storage_dir: PathBuf,
    /// Slot key under which the cart is stored.
    pub cart_key: String,
    /// How long a loaded catalog stays fresh.
    pub catalog_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog source is missing, ambiguous,
    /// or unparseable, or if the TTL is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_source = catalog_source_from_env()?;
        let storage_dir = PathBuf::from(get_env_or_default("CARTWHEEL_STORAGE_DIR", ".cartwheel"));
        let cart_key = get_env_or_default("CARTWHEEL_CART_KEY", "cart");
        let catalog_ttl = parse_ttl(&get_env_or_default("CARTWHEEL_CATALOG_TTL_SECS", "300"))?;

        Ok(Self {
            catalog_source,
            storage_dir,
            cart_key,
            catalog_ttl,
        })
    }
}

fn catalog_source_from_env() -> Result<CatalogSource, ConfigError> {
    let url = get_optional_env("CARTWHEEL_CATALOG_URL");
    let file = get_optional_env("CARTWHEEL_CATALOG_FILE");

    match (url, file) {
        (Some(_), Some(_)) => Err(ConfigError::ConflictingEnvVars(
            "CARTWHEEL_CATALOG_URL".to_string(),
            "CARTWHEEL_CATALOG_FILE".to_string(),
        )),
        (Some(url), None) => {
            let url = Url::parse(&url).map_err(|e| {
                ConfigError::InvalidEnvVar("CARTWHEEL_CATALOG_URL".to_string(), e.to_string())
            })?;
            Ok(CatalogSource::Url(url))
        }
        (None, Some(file)) => Ok(CatalogSource::File(PathBuf::from(file))),
        (None, None) => Err(ConfigError::MissingEnvVar(
            "CARTWHEEL_CATALOG_URL or CARTWHEEL_CATALOG_FILE".to_string(),
        )),
    }
}

fn parse_ttl(raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
        ConfigError::InvalidEnvVar("CARTWHEEL_CATALOG_TTL_SECS".to_string(), e.to_string())
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl_valid() {
        assert_eq!(parse_ttl("300").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_ttl("0").unwrap(), Duration::from_secs(0));
    }

    #[test]
    fn test_parse_ttl_invalid() {
        assert!(matches!(
            parse_ttl("five minutes"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(matches!(
            parse_ttl("-1"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("CARTWHEEL_CATALOG_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: CARTWHEEL_CATALOG_URL"
        );

        let err = ConfigError::ConflictingEnvVars("A".to_string(), "B".to_string());
        assert_eq!(
            err.to_string(),
            "Conflicting environment variables: set A or B, not both"
        );
    }
}
