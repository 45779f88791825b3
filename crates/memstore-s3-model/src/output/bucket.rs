//! Bucket operation outputs.

use crate::types::{Bucket, Owner};

/// S3 CreateBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// HTTP header: `Location`.
    pub location: String,
}

/// S3 DeleteBucketOutput.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteBucketOutput;

/// S3 HeadBucketOutput.
#[derive(Debug, Clone)]
pub struct HeadBucketOutput {
    /// The bucket owner.
    pub owner: Owner,
    /// When the bucket was created.
    pub creation_date: chrono::DateTime<chrono::Utc>,
}

/// S3 ListBucketsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    /// Buckets owned by the caller, sorted by name.
    pub buckets: Vec<Bucket>,
    /// The caller.
    pub owner: Owner,
}
