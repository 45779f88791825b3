//! Validation for S3 requests.
//!
//! Bucket names follow the
//! [Amazon S3 naming rules](https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html);
//! keys, part numbers, part lists and `Content-MD5` headers are checked
//! before anything is written.

use std::net::Ipv4Addr;

use base64::Engine;
use memstore_s3_model::types::CompletedPart;

use crate::checksums::Md5Digest;
use crate::error::S3ServiceError;

/// Maximum object key length in bytes.
const MAX_KEY_BYTES: usize = 1024;

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length.
const MAX_BUCKET_NAME_LEN: usize = 63;

fn invalid_bucket_name(name: &str, reason: &str) -> S3ServiceError {
    S3ServiceError::InvalidBucketName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Validate an S3 bucket name.
///
/// Rules:
/// - 3-63 characters long
/// - Only lowercase letters, numbers, hyphens, and dots
/// - Must start and end with a letter or number
/// - No consecutive dots (`..`)
/// - Not formatted as an IPv4 address (e.g. `192.168.0.1`)
/// - Must not start with `xn--` or end with `-s3alias`
///
/// # Examples
///
/// ```
/// use memstore_s3_core::validation::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-valid-bucket").is_ok());
/// assert!(validate_bucket_name("AB").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> Result<(), S3ServiceError> {
    let len = name.len();

    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(S3ServiceError::InvalidBucketName {
            name: name.to_owned(),
            reason: format!(
                "Bucket name must be between {MIN_BUCKET_NAME_LEN} and {MAX_BUCKET_NAME_LEN} characters long"
            ),
        });
    }

    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
    {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must only contain lowercase letters, numbers, hyphens, and dots",
        ));
    }

    let bytes = name.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !edge_ok(bytes[0]) || !edge_ok(bytes[len - 1]) {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must start and end with a letter or number",
        ));
    }

    if name.contains("..") {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must not contain consecutive dots",
        ));
    }

    if name.parse::<Ipv4Addr>().is_ok() {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must not be formatted as an IP address",
        ));
    }

    if name.starts_with("xn--") {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must not start with 'xn--'",
        ));
    }

    if name.ends_with("-s3alias") {
        return Err(invalid_bucket_name(
            name,
            "Bucket name must not end with '-s3alias'",
        ));
    }

    Ok(())
}

/// Validate an S3 object key: 1-1024 bytes of UTF-8.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::validation::validate_object_key;
///
/// assert!(validate_object_key("photos/2024/image.jpg").is_ok());
/// assert!(validate_object_key("").is_err());
/// ```
pub fn validate_object_key(key: &str) -> Result<(), S3ServiceError> {
    if key.is_empty() {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be empty".to_owned(),
        });
    }

    if key.len() > MAX_KEY_BYTES {
        return Err(S3ServiceError::KeyTooLong);
    }

    Ok(())
}

/// Validate a part number against `[1, max]`.
pub fn validate_part_number(part_number: u32, max: u32) -> Result<(), S3ServiceError> {
    if part_number == 0 || part_number > max {
        return Err(S3ServiceError::InvalidPartNumber { part_number, max });
    }
    Ok(())
}

/// Validate the part list of a `CompleteMultipartUpload` request: it must be
/// non-empty and strictly increasing by part number.
pub fn validate_part_list(parts: &[CompletedPart]) -> Result<(), S3ServiceError> {
    if parts.is_empty() {
        return Err(S3ServiceError::MalformedRequest {
            message: "You must specify at least one part".to_owned(),
        });
    }

    if let Some(pair) = parts
        .windows(2)
        .find(|w| w[1].part_number <= w[0].part_number)
    {
        return Err(S3ServiceError::MalformedRequest {
            message: format!(
                "The list of parts was not in ascending order: {} follows {}",
                pair[1].part_number, pair[0].part_number
            ),
        });
    }

    Ok(())
}

/// Validate the `Content-MD5` header against the body's raw digest.
///
/// An absent header always passes.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidDigest`] if the header value is not
/// Base64 of a 16-byte digest, or [`S3ServiceError::BadDigest`] if it does
/// not match.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::checksums::md5_digest;
/// use memstore_s3_core::validation::validate_content_md5;
///
/// assert!(validate_content_md5(None, &md5_digest(b"hello")).is_ok());
/// ```
pub fn validate_content_md5(
    content_md5: Option<&str>,
    actual: &Md5Digest,
) -> Result<(), S3ServiceError> {
    let Some(expected_b64) = content_md5 else {
        return Ok(());
    };

    let expected_bytes = base64::engine::general_purpose::STANDARD
        .decode(expected_b64.trim())
        .map_err(|_| S3ServiceError::InvalidDigest)?;

    if expected_bytes.len() != actual.len() {
        return Err(S3ServiceError::InvalidDigest);
    }

    if expected_bytes.as_slice() != actual.as_slice() {
        return Err(S3ServiceError::BadDigest);
    }

    Ok(())
}
