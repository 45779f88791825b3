//! Object records and ownership.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use memstore_s3_model::Identity;
use memstore_s3_model::types;

use crate::checksums::quote_etag;
use crate::storage::ContentRef;

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

/// The owner of a bucket, object or upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner {
    /// The canonical id of the owner (the caller's access key).
    pub id: String,
    /// The display name of the owner.
    pub display_name: String,
}

impl Owner {
    /// Create an owner whose display name equals its id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
        }
    }

    /// The owner corresponding to an authenticated caller.
    #[must_use]
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            id: identity.access_key.clone(),
            display_name: identity
                .display_name
                .clone()
                .unwrap_or_else(|| identity.access_key.clone()),
        }
    }

    /// Whether `self` and `other` are the same account.
    #[must_use]
    pub fn same_account(&self, other: &Owner) -> bool {
        self.id == other.id
    }

    /// Wire representation.
    #[must_use]
    pub fn to_model(&self) -> types::Owner {
        types::Owner {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name, self.id)
    }
}

// ---------------------------------------------------------------------------
// ObjectMetadata
// ---------------------------------------------------------------------------

/// Caller-supplied metadata stored with an object and echoed on GET/HEAD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// The MIME type of the object.
    pub content_type: Option<String>,
    /// User-defined metadata (`x-amz-meta-*`), keyed without the prefix.
    pub user_metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    /// Metadata from a `Content-Type` header and `x-amz-meta-*` headers.
    #[must_use]
    pub fn new(content_type: Option<String>, user_metadata: HashMap<String, String>) -> Self {
        Self {
            content_type,
            user_metadata,
        }
    }
}

// ---------------------------------------------------------------------------
// S3Object
// ---------------------------------------------------------------------------

/// A stored object.
///
/// Records are immutable once installed and shared behind an `Arc`; an
/// overwrite installs a new record and releases the old record's blobs.
#[derive(Debug, Clone)]
pub struct S3Object {
    /// The object key.
    pub key: String,
    /// Logical size in bytes.
    pub size: u64,
    /// Unquoted ETag: hex MD5, or `<hex>-<N>` for multipart objects.
    pub etag: String,
    /// Where the bytes live.
    pub content: ContentRef,
    /// When the object was installed.
    pub last_modified: DateTime<Utc>,
    /// Who wrote the object.
    pub owner: Owner,
    /// Number of parts for objects assembled from a multipart upload.
    pub parts_count: Option<u32>,
    /// Content type and user metadata.
    pub metadata: ObjectMetadata,
}

impl S3Object {
    /// The listing entry for this object.
    #[must_use]
    pub fn to_model(&self) -> types::Object {
        types::Object {
            key: self.key.clone(),
            last_modified: self.last_modified,
            e_tag: quote_etag(&self.etag),
            size: self.size,
            owner: self.owner.to_model(),
            storage_class: types::StorageClass::Standard,
        }
    }
}
