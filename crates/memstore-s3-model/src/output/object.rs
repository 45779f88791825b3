//! Object operation outputs.

use std::collections::HashMap;

use crate::request::StreamingBlob;

/// S3 PutObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// HTTP header: `ETag` (quoted).
    pub e_tag: String,
    /// Stored size in bytes.
    pub size: u64,
}

/// S3 GetObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectOutput {
    /// HTTP header: `Accept-Ranges`, present on partial responses.
    pub accept_ranges: Option<String>,
    /// HTTP payload body (the requested span only).
    pub body: StreamingBlob,
    /// HTTP header: `Content-Length`.
    pub content_length: u64,
    /// HTTP header: `Content-Range`, present on partial responses.
    pub content_range: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `ETag` (quoted).
    pub e_tag: String,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// HTTP prefix headers: `x-amz-meta-*`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<u32>,
    /// Full object size, independent of the range.
    pub size: u64,
}

impl GetObjectOutput {
    /// Whether this response serves a byte range (HTTP 206).
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.content_range.is_some()
    }
}

/// S3 HeadObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectOutput {
    /// HTTP header: `Accept-Ranges`, present on partial responses.
    pub accept_ranges: Option<String>,
    /// HTTP header: `Content-Length`.
    pub content_length: u64,
    /// HTTP header: `Content-Range`, present on partial responses.
    pub content_range: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `ETag` (quoted).
    pub e_tag: String,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// HTTP prefix headers: `x-amz-meta-*`.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<u32>,
    /// Full object size, independent of the range.
    pub size: u64,
}

/// S3 DeleteObjectOutput.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteObjectOutput;
