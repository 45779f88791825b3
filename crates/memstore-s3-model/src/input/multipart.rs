//! Multipart upload operation inputs.

use std::collections::HashMap;

use crate::request::StreamingBlob;
use crate::types::CompletedPart;

/// S3 CreateMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP header: `Content-Type`, applied to the completed object.
    pub content_type: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-*`, applied to the completed object.
    pub metadata: HashMap<String, String>,
}

/// S3 UploadPartInput.
#[derive(Debug, Clone, Default)]
pub struct UploadPartInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
    /// HTTP query: `partNumber`.
    pub part_number: u32,
    /// HTTP payload body.
    pub body: StreamingBlob,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
}

/// S3 CompleteMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
    /// HTTP payload body, already parsed from the `CompleteMultipartUpload`
    /// document.
    pub parts: Vec<CompletedPart>,
}

/// S3 AbortMultipartUploadInput.
#[derive(Debug, Clone, Default)]
pub struct AbortMultipartUploadInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}
