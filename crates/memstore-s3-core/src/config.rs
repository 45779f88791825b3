//! Core configuration.
//!
//! Provides [`S3Config`] for tuning the in-memory S3 core. Values can be
//! loaded from environment variables so a process host can override the
//! S3 limits without code changes.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Five mebibytes, the S3 minimum size of every multipart part but the last.
pub const DEFAULT_MIN_PART_SIZE: u64 = 5 * 1024 * 1024;

/// Highest part number S3 accepts.
pub const DEFAULT_MAX_PART_NUMBER: u32 = 10_000;

/// Default and maximum page size for listings.
pub const DEFAULT_MAX_KEYS: u32 = 1000;

/// S3 core configuration.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::config::S3Config;
///
/// let config = S3Config::default();
/// assert_eq!(config.min_part_size, 5 * 1024 * 1024);
/// assert_eq!(config.max_keys, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    /// Minimum size of every part except the last when completing an upload.
    #[builder(default = DEFAULT_MIN_PART_SIZE)]
    pub min_part_size: u64,

    /// Highest accepted part number (inclusive).
    #[builder(default = DEFAULT_MAX_PART_NUMBER)]
    pub max_part_number: u32,

    /// Default page size for listings, also the cap on client-requested sizes.
    #[builder(default = DEFAULT_MAX_KEYS)]
    pub max_keys: u32,

    /// Whether bucket names are checked against the S3 naming rules.
    #[builder(default = true)]
    pub validate_bucket_names: bool,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            min_part_size: DEFAULT_MIN_PART_SIZE,
            max_part_number: DEFAULT_MAX_PART_NUMBER,
            max_keys: DEFAULT_MAX_KEYS,
            validate_bucket_names: true,
        }
    }
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_MIN_PART_SIZE` | `5242880` |
    /// | `S3_MAX_PART_NUMBER` | `10000` |
    /// | `S3_MAX_KEYS` | `1000` |
    /// | `S3_VALIDATE_BUCKET_NAMES` | `true` |
    ///
    /// Unparseable numbers are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("S3_MIN_PART_SIZE") {
            if let Ok(n) = v.parse::<u64>() {
                config.min_part_size = n;
            }
        }
        if let Ok(v) = std::env::var("S3_MAX_PART_NUMBER") {
            if let Ok(n) = v.parse::<u32>() {
                config.max_part_number = n;
            }
        }
        if let Ok(v) = std::env::var("S3_MAX_KEYS") {
            if let Ok(n) = v.parse::<u32>() {
                config.max_keys = n;
            }
        }
        if let Ok(v) = std::env::var("S3_VALIDATE_BUCKET_NAMES") {
            config.validate_bucket_names = parse_bool(&v);
        }

        config
    }

    /// Clamp a client-requested page size to the configured maximum.
    #[must_use]
    pub fn effective_max_keys(&self, requested: Option<u32>) -> u32 {
        requested.map_or(self.max_keys, |n| n.min(self.max_keys))
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
