//! Multipart upload state management.
//!
//! A [`MultipartUpload`] moves `Initiated -> Completed` or
//! `Initiated -> Aborted`; both terminal states are one-way. The status and
//! the staged parts sit behind one mutex so a part upload racing a
//! completion or abort either lands before the transition or observes it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use memstore_s3_model::types::{self, CompletedPart};
use parking_lot::Mutex;

use crate::checksums::{Md5Digest, compute_multipart_etag, normalize_etag};
use crate::error::S3ServiceError;
use crate::storage::ContentRef;
use crate::validation::validate_part_list;

use super::object::{ObjectMetadata, Owner};

/// Lifecycle state of a multipart upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// Accepting parts.
    Initiated,
    /// Assembled into an object.
    Completed,
    /// Abandoned; all parts released.
    Aborted,
}

/// A single staged part.
#[derive(Debug, Clone)]
pub struct UploadPart {
    /// The part number (1-based).
    pub part_number: u32,
    /// Unquoted hex MD5 of the part bytes.
    pub etag: String,
    /// Raw MD5 digest, kept for the composite ETag.
    pub md5: Md5Digest,
    /// Size of this part in bytes.
    pub size: u64,
    /// When this part was uploaded.
    pub last_modified: DateTime<Utc>,
    /// Where the bytes live.
    pub content: ContentRef,
}

impl UploadPart {
    /// The ListParts entry for this part. The ETag is reported unquoted.
    #[must_use]
    pub fn to_model(&self) -> types::Part {
        types::Part {
            part_number: self.part_number,
            last_modified: self.last_modified,
            e_tag: self.etag.clone(),
            size: self.size,
        }
    }
}

/// One page of `ListParts`.
#[derive(Debug, Clone, Default)]
pub struct PartListing {
    /// Parts in ascending part-number order.
    pub parts: Vec<UploadPart>,
    /// Whether more parts follow.
    pub is_truncated: bool,
    /// The last part number returned, when truncated.
    pub next_part_number_marker: Option<u32>,
}

/// What a successful completion produced.
#[derive(Debug)]
pub struct AssembledObject {
    /// The referenced parts' segments, in completion order.
    pub content: ContentRef,
    /// Composite ETag (unquoted), `<hex>-<N>`.
    pub etag: String,
    /// Total size.
    pub size: u64,
    /// Number of parts assembled.
    pub parts_count: u32,
    /// Staged parts the completion did not reference.
    pub unreferenced: Vec<ContentRef>,
}

#[derive(Debug)]
struct UploadInner {
    status: UploadStatus,
    parts: BTreeMap<u32, UploadPart>,
}

/// A multipart upload.
#[derive(Debug)]
pub struct MultipartUpload {
    /// Unique identifier for this upload.
    pub upload_id: String,
    /// The object key that this upload will create.
    pub key: String,
    /// When the upload was initiated.
    pub initiated: DateTime<Utc>,
    /// The owner who initiated the upload.
    pub owner: Owner,
    /// Metadata applied to the completed object.
    pub metadata: ObjectMetadata,
    inner: Mutex<UploadInner>,
}

impl MultipartUpload {
    /// Create a new upload in the `Initiated` state.
    #[must_use]
    pub fn new(upload_id: String, key: String, owner: Owner, initiated: DateTime<Utc>) -> Self {
        Self {
            upload_id,
            key,
            initiated,
            owner,
            metadata: ObjectMetadata::default(),
            inner: Mutex::new(UploadInner {
                status: UploadStatus::Initiated,
                parts: BTreeMap::new(),
            }),
        }
    }

    /// Attach the metadata the completed object will carry.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ObjectMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> UploadStatus {
        self.inner.lock().status
    }

    /// Number of staged parts.
    #[must_use]
    pub fn parts_count(&self) -> usize {
        self.inner.lock().parts.len()
    }

    fn no_such_upload(&self) -> S3ServiceError {
        S3ServiceError::NoSuchUpload {
            upload_id: self.upload_id.clone(),
        }
    }

    /// Install a part, replacing any part with the same number.
    ///
    /// Returns the replaced part so its blob can be released. If the upload
    /// is no longer `Initiated` the part is handed back in `Err` so the
    /// caller can release the blob it just wrote.
    pub fn install_part(&self, part: UploadPart) -> Result<Option<UploadPart>, UploadPart> {
        let mut inner = self.inner.lock();
        if inner.status != UploadStatus::Initiated {
            return Err(part);
        }
        Ok(inner.parts.insert(part.part_number, part))
    }

    /// List parts strictly after `part_number_marker`.
    ///
    /// `max_parts == 0` yields an empty, non-truncated page.
    #[must_use]
    pub fn list_parts(&self, part_number_marker: u32, max_parts: usize) -> PartListing {
        let mut listing = PartListing::default();
        if max_parts == 0 {
            return listing;
        }

        let inner = self.inner.lock();
        let mut remaining = inner
            .parts
            .range(part_number_marker.saturating_add(1)..)
            .map(|(_, p)| p);

        listing.parts = remaining.by_ref().take(max_parts).cloned().collect();
        if remaining.next().is_some() {
            listing.is_truncated = true;
            listing.next_part_number_marker = listing.parts.last().map(|p| p.part_number);
        }
        listing
    }

    /// Validate `requested` against the staged parts and, on success, move
    /// to `Completed`.
    ///
    /// On any error the upload is left untouched: still `Initiated`, every
    /// part still staged.
    pub fn complete(
        &self,
        requested: &[CompletedPart],
        min_part_size: u64,
    ) -> Result<AssembledObject, S3ServiceError> {
        let mut inner = self.inner.lock();
        if inner.status != UploadStatus::Initiated {
            return Err(self.no_such_upload());
        }
        validate_part_list(requested)?;

        let last_index = requested.len() - 1;
        for (index, wanted) in requested.iter().enumerate() {
            let part = inner
                .parts
                .get(&wanted.part_number)
                .filter(|p| p.etag == normalize_etag(&wanted.e_tag))
                .ok_or(S3ServiceError::InvalidPart {
                    part_number: wanted.part_number,
                })?;
            if index < last_index && part.size < min_part_size {
                return Err(S3ServiceError::EntityTooSmall {
                    part_number: wanted.part_number,
                });
            }
        }

        inner.status = UploadStatus::Completed;
        let mut staged = std::mem::take(&mut inner.parts);
        drop(inner);

        let mut segments = Vec::with_capacity(requested.len());
        let mut digests = Vec::with_capacity(requested.len());
        let mut size = 0u64;
        for wanted in requested {
            if let Some(part) = staged.remove(&wanted.part_number) {
                size += part.size;
                digests.push(part.md5);
                segments.extend_from_slice(part.content.segments());
            }
        }

        Ok(AssembledObject {
            content: ContentRef::from_segments(segments),
            etag: compute_multipart_etag(&digests),
            size,
            parts_count: u32::try_from(requested.len()).unwrap_or(u32::MAX),
            unreferenced: staged.into_values().map(|p| p.content).collect(),
        })
    }

    /// Move to `Aborted`, returning the staged parts' content for release.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchUpload`] if the upload is already
    /// terminal.
    pub fn abort(&self) -> Result<Vec<ContentRef>, S3ServiceError> {
        let mut inner = self.inner.lock();
        if inner.status != UploadStatus::Initiated {
            return Err(self.no_such_upload());
        }
        inner.status = UploadStatus::Aborted;
        Ok(std::mem::take(&mut inner.parts)
            .into_values()
            .map(|p| p.content)
            .collect())
    }

    /// The ListMultipartUploads entry for this upload.
    #[must_use]
    pub fn to_model(&self) -> types::MultipartUploadSummary {
        types::MultipartUploadSummary {
            key: self.key.clone(),
            upload_id: self.upload_id.clone(),
            initiator: self.owner.to_model(),
            owner: self.owner.to_model(),
            storage_class: types::StorageClass::Standard,
            initiated: self.initiated,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
