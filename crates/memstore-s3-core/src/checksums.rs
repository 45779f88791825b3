//! MD5 digests and ETag formatting.
//!
//! A single-put object's ETag is the hex MD5 of its bytes. A multipart
//! object's ETag is the hex MD5 of the concatenated *raw* 16-byte part
//! digests, suffixed with `-<part count>`. ETags are stored unquoted and
//! quoted only at the output boundary.

use md5::{Digest, Md5};

/// A raw 16-byte MD5 digest.
pub type Md5Digest = [u8; 16];

/// Compute the raw MD5 digest of `data`.
#[must_use]
pub fn md5_digest(data: &[u8]) -> Md5Digest {
    Md5::digest(data).into()
}

/// Compute the hex-encoded MD5 digest of `data`.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::checksums::compute_md5;
///
/// let digest = compute_md5(b"hello");
/// assert_eq!(digest, "5d41402abc4b2a76b9719d911017c592");
/// ```
#[must_use]
pub fn compute_md5(data: &[u8]) -> String {
    hex::encode(md5_digest(data))
}

/// Compute a composite ETag (unquoted) from the raw digests of the parts, in
/// completion order.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::checksums::{compute_multipart_etag, md5_digest};
///
/// let etag = compute_multipart_etag(&[md5_digest(b"a"), md5_digest(b"b")]);
/// assert!(etag.ends_with("-2"));
/// ```
#[must_use]
pub fn compute_multipart_etag(part_digests: &[Md5Digest]) -> String {
    let mut hasher = Md5::new();
    for digest in part_digests {
        hasher.update(digest);
    }
    format!("{}-{}", hex::encode(hasher.finalize()), part_digests.len())
}

/// Wrap an unquoted ETag in double quotes for output.
#[must_use]
pub fn quote_etag(etag: &str) -> String {
    format!("\"{etag}\"")
}

/// Strip one pair of surrounding double quotes, if present.
///
/// Clients send part ETags in `CompleteMultipartUpload` either way; stored
/// ETags never carry quotes.
#[must_use]
pub fn normalize_etag(etag: &str) -> &str {
    let trimmed = etag.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
}
