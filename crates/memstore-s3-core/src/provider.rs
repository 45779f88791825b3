//! The S3 storage core facade.
//!
//! [`MemStoreS3`] owns all service state (buckets, objects, multipart
//! uploads) and the blob store. Individual S3 operations are implemented in
//! the `crate::ops` submodules as inherent methods on [`MemStoreS3`].
//!
//! The facade is `Send + Sync`; wrap it in an `Arc` and call operations from
//! any number of threads.

use std::sync::Arc;

use memstore_s3_model::request::Identity;

use crate::config::S3Config;
use crate::error::S3ServiceError;
use crate::state::bucket::S3Bucket;
use crate::state::object::Owner;
use crate::state::service::S3ServiceState;
use crate::storage::{BlobStore, InMemoryBlobStore};

/// The in-memory S3 storage core.
///
/// All fields are `Arc`-wrapped for cheap cloning and shared ownership
/// across callers.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::MemStoreS3;
/// use memstore_s3_core::config::S3Config;
///
/// let provider = MemStoreS3::new(S3Config::default());
/// assert_eq!(provider.config().max_keys, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct MemStoreS3 {
    /// Bucket, object and upload metadata.
    pub(crate) state: Arc<S3ServiceState>,
    /// Object and part payloads.
    pub(crate) blobs: Arc<dyn BlobStore>,
    /// Provider configuration.
    pub(crate) config: Arc<S3Config>,
}

impl MemStoreS3 {
    /// Create a new provider backed by an [`InMemoryBlobStore`].
    #[must_use]
    pub fn new(config: S3Config) -> Self {
        Self::with_blob_store(config, Arc::new(InMemoryBlobStore::new()))
    }

    /// Create a new provider backed by the given blob store.
    #[must_use]
    pub fn with_blob_store(config: S3Config, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            state: Arc::new(S3ServiceState::new()),
            blobs,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the service state.
    #[must_use]
    pub fn state(&self) -> &S3ServiceState {
        &self.state
    }

    /// Returns a reference to the blob store.
    #[must_use]
    pub fn blob_store(&self) -> &dyn BlobStore {
        self.blobs.as_ref()
    }

    /// Returns a reference to the provider configuration.
    #[must_use]
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Drop every bucket, object, upload and blob.
    pub fn reset(&self) {
        // Callers still holding an `Arc<S3Bucket>` must see it as deleted.
        for bucket in self.state.drain() {
            if let Ok(mut contents) = bucket.write() {
                contents.deleted = true;
                contents.objects.drain();
                contents.uploads.clear();
            }
        }
        self.blobs.reset();
    }

    /// Resolve `name` to a bucket owned by the caller.
    pub(crate) fn owned_bucket(
        &self,
        name: &str,
        identity: &Identity,
    ) -> Result<Arc<S3Bucket>, S3ServiceError> {
        self.state
            .get_owned_bucket(name, &Owner::from_identity(identity))
    }
}
