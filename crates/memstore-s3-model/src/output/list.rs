//! Listing operation outputs.

use crate::types::{CommonPrefix, MultipartUploadSummary, Object, Owner, Part};

/// S3 ListObjectsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsOutput {
    /// Rolled-up prefixes, in key order.
    pub common_prefixes: Vec<CommonPrefix>,
    /// Content entries, in key order.
    pub contents: Vec<Object>,
    /// Echo of the request delimiter.
    pub delimiter: Option<String>,
    /// Whether more entries follow.
    pub is_truncated: bool,
    /// Echo of the request marker.
    pub marker: Option<String>,
    /// Effective page size.
    pub max_keys: u32,
    /// Bucket name.
    pub name: String,
    /// Where the next page starts, when truncated.
    pub next_marker: Option<String>,
    /// Echo of the request prefix.
    pub prefix: Option<String>,
}

/// S3 ListMultipartUploadsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsOutput {
    /// Bucket name.
    pub bucket: String,
    /// Whether more uploads follow.
    pub is_truncated: bool,
    /// Echo of the request key marker.
    pub key_marker: Option<String>,
    /// Effective page size.
    pub max_uploads: u32,
    /// Key marker for the next page, when truncated.
    pub next_key_marker: Option<String>,
    /// Upload-id marker for the next page, when truncated.
    pub next_upload_id_marker: Option<String>,
    /// Echo of the request prefix.
    pub prefix: Option<String>,
    /// Echo of the request upload-id marker.
    pub upload_id_marker: Option<String>,
    /// In-progress uploads.
    pub uploads: Vec<MultipartUploadSummary>,
}

/// S3 ListPartsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListPartsOutput {
    /// Bucket name.
    pub bucket: String,
    /// Identity that initiated the upload.
    pub initiator: Owner,
    /// Whether more parts follow.
    pub is_truncated: bool,
    /// Object key the upload targets.
    pub key: String,
    /// Effective page size.
    pub max_parts: u32,
    /// Part-number marker for the next page, when truncated.
    pub next_part_number_marker: Option<u32>,
    /// Upload owner.
    pub owner: Owner,
    /// Echo of the request part-number marker.
    pub part_number_marker: Option<u32>,
    /// Uploaded parts in ascending part-number order.
    pub parts: Vec<Part>,
    /// Always `STANDARD`.
    pub storage_class: String,
    /// Upload id.
    pub upload_id: String,
}
