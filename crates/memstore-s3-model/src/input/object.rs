//! Object operation inputs.

use std::collections::HashMap;

use crate::request::StreamingBlob;

/// S3 PutObjectInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP payload body.
    pub body: StreamingBlob,
    /// HTTP header: `Content-MD5`, base64 of the raw digest.
    pub content_md5: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-*`, keyed without the prefix.
    pub metadata: HashMap<String, String>,
}

/// S3 GetObjectInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP header: `Range`.
    pub range: Option<String>,
}

/// S3 HeadObjectInput.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP header: `Range`.
    pub range: Option<String>,
}

/// S3 DeleteObjectInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
}
