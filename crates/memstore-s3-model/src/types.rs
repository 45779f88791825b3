//! Shared S3 data shapes returned inside operation outputs.

use serde::{Deserialize, Serialize};

/// S3 StorageClass enum.
///
/// The in-memory core only ever reports `STANDARD`, but the enum keeps the
/// wire spelling in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
}

impl StorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
        }
    }
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// S3 Owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    /// Canonical id (the access key).
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name.
    pub display_name: String,
}

/// S3 Bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    /// Bucket name.
    pub name: String,
    /// Creation timestamp.
    pub creation_date: chrono::DateTime<chrono::Utc>,
}

/// S3 Object, as returned in a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Object {
    /// Object key.
    pub key: String,
    /// Last modification timestamp.
    pub last_modified: chrono::DateTime<chrono::Utc>,
    /// Quoted entity tag.
    #[serde(rename = "ETag")]
    pub e_tag: String,
    /// Size in bytes.
    pub size: u64,
    /// Owning identity.
    pub owner: Owner,
    /// Storage class, always `STANDARD`.
    pub storage_class: StorageClass,
}

/// S3 CommonPrefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonPrefix {
    /// The rolled-up prefix, delimiter included.
    pub prefix: String,
}

/// S3 Part, as returned by ListParts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Part {
    /// Part number.
    pub part_number: u32,
    /// Last modification timestamp.
    pub last_modified: chrono::DateTime<chrono::Utc>,
    /// Unquoted hex digest.
    #[serde(rename = "ETag")]
    pub e_tag: String,
    /// Size in bytes.
    pub size: u64,
}

/// S3 CompletedPart, one entry of a CompleteMultipartUpload request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompletedPart {
    /// Part number.
    pub part_number: u32,
    /// Entity tag as sent by the client, quoted or not.
    #[serde(rename = "ETag")]
    pub e_tag: String,
}

impl CompletedPart {
    /// Create a completed-part reference.
    #[must_use]
    pub fn new(part_number: u32, e_tag: impl Into<String>) -> Self {
        Self {
            part_number,
            e_tag: e_tag.into(),
        }
    }
}

/// S3 MultipartUpload, as returned by ListMultipartUploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultipartUploadSummary {
    /// Object key.
    pub key: String,
    /// Upload id.
    pub upload_id: String,
    /// Identity that initiated the upload.
    pub initiator: Owner,
    /// Owning identity.
    pub owner: Owner,
    /// Storage class, always `STANDARD`.
    pub storage_class: StorageClass,
    /// Initiation timestamp.
    pub initiated: chrono::DateTime<chrono::Utc>,
}
