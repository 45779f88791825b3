//! Blob storage for S3 object and part payloads.
//!
//! The [`BlobStore`] trait is the seam between metadata and bytes: it knows
//! nothing about buckets, keys or uploads, only opaque [`BlobKey`]s. The
//! default [`InMemoryBlobStore`] keeps payloads as reference-counted
//! [`Bytes`] in a [`DashMap`], so fetching is a cheap clone.
//!
//! Metadata records hold a [`ContentRef`]: the ordered list of blob segments
//! that make up an object's logical byte stream. A singly-put object has one
//! segment. An object assembled from a multipart upload references the
//! uploaded parts' blobs directly, so completion never copies part bytes.

use std::fmt;

use bytes::{Bytes, BytesMut};
use dashmap::DashMap;
use tracing::trace;
use uuid::Uuid;

/// Opaque identifier of a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobKey(Uuid);

impl BlobKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// ---------------------------------------------------------------------------
// BlobStore
// ---------------------------------------------------------------------------

/// Raw payload storage keyed by [`BlobKey`].
///
/// Implementations must be safe to call concurrently and must never block on
/// I/O while a caller holds a metadata lock; the core only calls `put` and
/// `get` outside locks, but `delete` may run under a bucket lock.
pub trait BlobStore: Send + Sync + fmt::Debug {
    /// Store `data` under a fresh key.
    fn put(&self, data: Bytes) -> BlobKey;

    /// Fetch a blob. `None` if the key was never stored or has been deleted.
    fn get(&self, key: &BlobKey) -> Option<Bytes>;

    /// Release a blob. No-op if absent.
    fn delete(&self, key: &BlobKey);

    /// Number of live blobs.
    fn len(&self) -> usize;

    /// Whether no blobs are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes held by live blobs.
    fn total_bytes(&self) -> u64;

    /// Drop every blob.
    fn reset(&self);
}

/// The default [`BlobStore`]: everything lives in process memory.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: DashMap<BlobKey, Bytes>,
}

impl fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("blob_count", &self.blobs.len())
            .finish()
    }
}

impl InMemoryBlobStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn put(&self, data: Bytes) -> BlobKey {
        let key = BlobKey::new_v4();
        trace!(blob = %key, size = data.len(), "stored blob");
        self.blobs.insert(key, data);
        key
    }

    fn get(&self, key: &BlobKey) -> Option<Bytes> {
        self.blobs.get(key).map(|entry| entry.value().clone())
    }

    fn delete(&self, key: &BlobKey) {
        if self.blobs.remove(key).is_some() {
            trace!(blob = %key, "deleted blob");
        }
    }

    fn len(&self) -> usize {
        self.blobs.len()
    }

    fn total_bytes(&self) -> u64 {
        self.blobs.iter().map(|entry| entry.value().len() as u64).sum()
    }

    fn reset(&self) {
        trace!(blob_count = self.blobs.len(), "resetting blob store");
        self.blobs.clear();
    }
}

// ---------------------------------------------------------------------------
// ContentRef
// ---------------------------------------------------------------------------

/// One contiguous piece of an object's byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobSegment {
    /// Where the bytes live.
    pub key: BlobKey,
    /// Length of the blob.
    pub len: u64,
}

/// Ownership handle for the bytes behind an object or a multipart part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRef {
    segments: Vec<BlobSegment>,
}

impl ContentRef {
    /// A content reference backed by a single blob.
    #[must_use]
    pub fn single(key: BlobKey, len: u64) -> Self {
        Self {
            segments: vec![BlobSegment { key, len }],
        }
    }

    /// A content reference over several blobs, concatenated in order.
    #[must_use]
    pub fn from_segments(segments: Vec<BlobSegment>) -> Self {
        Self { segments }
    }

    /// Store `data` as a new blob and reference it.
    pub fn store(store: &dyn BlobStore, data: Bytes) -> Self {
        let len = data.len() as u64;
        Self::single(store.put(data), len)
    }

    /// The segments, in stream order.
    #[must_use]
    pub fn segments(&self) -> &[BlobSegment] {
        &self.segments
    }

    /// Logical length of the byte stream.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| s.len).sum()
    }

    /// Whether the byte stream is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch every segment's bytes. Cheap: only reference counts change.
    ///
    /// Call this while the owning record is pinned (under the bucket read
    /// lock) so a concurrent overwrite cannot release the blobs first.
    /// Returns `None` if any blob is missing.
    #[must_use]
    pub fn snapshot(&self, store: &dyn BlobStore) -> Option<ContentSnapshot> {
        self.segments
            .iter()
            .map(|s| store.get(&s.key))
            .collect::<Option<Vec<_>>>()
            .map(|chunks| ContentSnapshot { chunks })
    }

    /// Materialize the byte stream, or the inclusive sub-range `(start, end)`.
    #[must_use]
    pub fn read(&self, store: &dyn BlobStore, range: Option<(u64, u64)>) -> Option<Bytes> {
        self.snapshot(store).map(|snapshot| snapshot.read(range))
    }

    /// Release every segment.
    pub fn release(&self, store: &dyn BlobStore) {
        for segment in &self.segments {
            store.delete(&segment.key);
        }
    }
}

/// The fetched bytes of a [`ContentRef`], independent of the blob store.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    chunks: Vec<Bytes>,
}

impl ContentSnapshot {
    /// Total length of the snapshot.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.chunks.iter().map(|c| c.len() as u64).sum()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(Bytes::is_empty)
    }

    /// Materialize the whole stream, or the inclusive sub-range `(start, end)`
    /// clamped to the stream. A range inside one chunk is a zero-copy slice.
    #[must_use]
    pub fn read(&self, range: Option<(u64, u64)>) -> Bytes {
        let total = self.len();
        let (start, end_exclusive) = match range {
            Some((start, end)) => (start.min(total), end.saturating_add(1).min(total)),
            None => (0, total),
        };
        if start >= end_exclusive {
            return Bytes::new();
        }

        let mut pieces = Vec::new();
        let mut offset = 0u64;
        for chunk in &self.chunks {
            let chunk_len = chunk.len() as u64;
            let chunk_end = offset + chunk_len;
            if chunk_end > start && offset < end_exclusive {
                let lo = start.saturating_sub(offset);
                let hi = end_exclusive.min(chunk_end) - offset;
                // lo and hi are bounded by chunk.len(), which is a usize.
                #[allow(clippy::cast_possible_truncation)]
                pieces.push(chunk.slice(lo as usize..hi as usize));
            }
            offset = chunk_end;
            if offset >= end_exclusive {
                break;
            }
        }

        match pieces.len() {
            0 => Bytes::new(),
            1 => pieces.swap_remove(0),
            _ => {
                let mut buf = BytesMut::with_capacity(pieces.iter().map(Bytes::len).sum());
                for piece in &pieces {
                    buf.extend_from_slice(piece);
                }
                buf.freeze()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
