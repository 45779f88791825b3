//! Bucket operation inputs.

/// S3 CreateBucketInput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInput {
    /// HTTP label (URI path).
    pub bucket: String,
}

/// S3 DeleteBucketInput.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketInput {
    /// HTTP label (URI path).
    pub bucket: String,
}

/// S3 HeadBucketInput.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketInput {
    /// HTTP label (URI path).
    pub bucket: String,
}

/// S3 ListBucketsInput.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBucketsInput;
