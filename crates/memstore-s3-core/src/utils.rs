//! Shared utilities for the S3 core.

use chrono::{DateTime, SubsecRound, Utc};

/// Generate a random upload ID for multipart uploads.
///
/// Produces a 64-character lowercase hex string.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::utils::generate_upload_id;
///
/// let id = generate_upload_id();
/// assert_eq!(id.len(), 64);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_upload_id() -> String {
    let buf: [u8; 32] = rand::random();
    hex::encode(buf)
}

/// Current time truncated to millisecond precision, the resolution S3
/// reports timestamps with.
#[must_use]
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
