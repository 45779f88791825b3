//! Multipart upload operation outputs.

/// S3 CreateMultipartUploadOutput.
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadOutput {
    /// Bucket name.
    pub bucket: String,
    /// Object key.
    pub key: String,
    /// The generated upload id.
    pub upload_id: String,
}

/// S3 UploadPartOutput.
#[derive(Debug, Clone, Default)]
pub struct UploadPartOutput {
    /// HTTP header: `ETag` (quoted).
    pub e_tag: String,
}

/// S3 CompleteMultipartUploadOutput.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadOutput {
    /// Bucket name.
    pub bucket: String,
    /// Composite entity tag (quoted), `"<hex>-<N>"`.
    pub e_tag: String,
    /// Object key.
    pub key: String,
    /// Location of the assembled object.
    pub location: String,
    /// Size of the assembled object.
    pub size: u64,
}

/// S3 AbortMultipartUploadOutput.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortMultipartUploadOutput;
