//! Listing operation inputs.

/// S3 ListObjectsInput.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP query: `delimiter`.
    pub delimiter: Option<String>,
    /// HTTP query: `marker`.
    pub marker: Option<String>,
    /// HTTP query: `max-keys`.
    pub max_keys: Option<u32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
}

/// S3 ListMultipartUploadsInput.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP query: `key-marker`.
    pub key_marker: Option<String>,
    /// HTTP query: `max-uploads`.
    pub max_uploads: Option<u32>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
    /// HTTP query: `upload-id-marker`.
    pub upload_id_marker: Option<String>,
}

/// S3 ListPartsInput.
#[derive(Debug, Clone, Default)]
pub struct ListPartsInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP query: `max-parts`.
    pub max_parts: Option<u32>,
    /// HTTP query: `part-number-marker`.
    pub part_number_marker: Option<u32>,
    /// HTTP query: `uploadId`.
    pub upload_id: String,
}
