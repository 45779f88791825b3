//! Per-bucket state.
//!
//! An [`S3Bucket`] owns its objects and in-progress multipart uploads behind
//! a single `parking_lot::RwLock`. Structural mutations (object install or
//! removal, upload creation, completion and abort, bucket deletion) take the
//! write lock; reads take the read lock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::S3ServiceError;

use super::keystore::KeyStore;
use super::multipart::MultipartUpload;
use super::object::Owner;

/// The lock-protected contents of a bucket.
#[derive(Debug, Default)]
pub struct BucketContents {
    /// Objects, ordered by key.
    pub objects: KeyStore,
    /// In-progress uploads keyed by upload id.
    pub uploads: HashMap<String, Arc<MultipartUpload>>,
    /// Set once the bucket has been deleted; late writers holding an `Arc`
    /// to the bucket must not install anything after this.
    pub deleted: bool,
}

impl BucketContents {
    /// Whether the bucket holds neither objects nor in-progress uploads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.uploads.is_empty()
    }
}

/// An S3 bucket.
#[derive(Debug)]
pub struct S3Bucket {
    /// Bucket name.
    pub name: String,
    /// Bucket owner.
    pub owner: Owner,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    contents: RwLock<BucketContents>,
}

impl S3Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(name: String, owner: Owner, creation_date: DateTime<Utc>) -> Self {
        Self {
            name,
            owner,
            creation_date,
            contents: RwLock::new(BucketContents::default()),
        }
    }

    /// Fail with `AccessDenied` unless `caller` owns this bucket.
    pub fn check_owner(&self, caller: &Owner) -> Result<(), S3ServiceError> {
        if self.owner.same_account(caller) {
            Ok(())
        } else {
            Err(S3ServiceError::AccessDenied)
        }
    }

    fn no_such_bucket(&self) -> S3ServiceError {
        S3ServiceError::NoSuchBucket {
            bucket: self.name.clone(),
        }
    }

    /// Take the read lock.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if the bucket was deleted
    /// after the caller looked it up.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, BucketContents>, S3ServiceError> {
        let guard = self.contents.read();
        if guard.deleted {
            return Err(self.no_such_bucket());
        }
        Ok(guard)
    }

    /// Take the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if the bucket was deleted
    /// after the caller looked it up.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, BucketContents>, S3ServiceError> {
        let guard = self.contents.write();
        if guard.deleted {
            return Err(self.no_such_bucket());
        }
        Ok(guard)
    }
}
