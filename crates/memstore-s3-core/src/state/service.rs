//! Top-level S3 service state.
//!
//! [`S3ServiceState`] is the bucket registry. Bucket names are globally
//! unique; creation is atomic through the map's entry API. The registry
//! never holds a shard reference while a bucket lock is taken: lookups clone
//! the `Arc<S3Bucket>` out and release the shard immediately.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

use crate::error::S3ServiceError;

use super::bucket::S3Bucket;
use super::object::Owner;

/// Top-level S3 service state holding all buckets.
pub struct S3ServiceState {
    /// Bucket name to bucket mapping.
    buckets: DashMap<String, Arc<S3Bucket>>,
}

impl std::fmt::Debug for S3ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ServiceState")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl Default for S3ServiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl S3ServiceState {
    /// Create a new, empty service state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Create a new bucket.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::BucketAlreadyExists`] if the name is taken,
    /// by the caller or anyone else.
    pub fn create_bucket(
        &self,
        name: &str,
        owner: Owner,
        creation_date: DateTime<Utc>,
    ) -> Result<Arc<S3Bucket>, S3ServiceError> {
        let bucket = match self.buckets.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                return Err(S3ServiceError::BucketAlreadyExists {
                    bucket: name.to_owned(),
                });
            }
            Entry::Vacant(vacant) => {
                let bucket = Arc::new(S3Bucket::new(name.to_owned(), owner, creation_date));
                vacant.insert(Arc::clone(&bucket));
                bucket
            }
        };

        info!(bucket = %name, owner = %bucket.owner.id, "bucket created");
        Ok(bucket)
    }

    /// Delete a bucket owned by `caller`.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`S3ServiceError::AccessDenied`] if `caller` does not own it.
    /// - [`S3ServiceError::BucketNotEmpty`] if the bucket still contains
    ///   objects or in-progress multipart uploads.
    pub fn delete_bucket(&self, name: &str, caller: &Owner) -> Result<(), S3ServiceError> {
        let bucket = self.get_owned_bucket(name, caller)?;

        {
            let mut contents = bucket.write()?;
            if !contents.is_empty() {
                return Err(S3ServiceError::BucketNotEmpty {
                    bucket: name.to_owned(),
                });
            }
            contents.deleted = true;
        }

        self.buckets
            .remove_if(name, |_, current| Arc::ptr_eq(current, &bucket));

        info!(bucket = %name, "bucket deleted");
        Ok(())
    }

    /// Look up a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    pub fn get_bucket(&self, name: &str) -> Result<Arc<S3Bucket>, S3ServiceError> {
        self.buckets
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| S3ServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// Look up a bucket and check that `caller` owns it.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`S3ServiceError::AccessDenied`] if `caller` does not own it.
    pub fn get_owned_bucket(
        &self,
        name: &str,
        caller: &Owner,
    ) -> Result<Arc<S3Bucket>, S3ServiceError> {
        let bucket = self.get_bucket(name)?;
        bucket.check_owner(caller)?;
        Ok(bucket)
    }

    /// Buckets owned by `owner`, sorted by name.
    #[must_use]
    pub fn list_buckets(&self, owner: &Owner) -> Vec<Arc<S3Bucket>> {
        let mut buckets: Vec<Arc<S3Bucket>> = self
            .buckets
            .iter()
            .filter(|entry| entry.value().owner.same_account(owner))
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        buckets.sort_by(|a, b| a.name.cmp(&b.name));
        buckets
    }

    /// Check whether a bucket exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Remove every bucket, returning them so their blobs can be released.
    pub fn drain(&self) -> Vec<Arc<S3Bucket>> {
        debug!("resetting all S3 service state");
        let names: Vec<String> = self.buckets.iter().map(|e| e.key().clone()).collect();
        names
            .iter()
            .filter_map(|name| self.buckets.remove(name).map(|(_, bucket)| bucket))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
