//! Bucket operation handlers.
//!
//! Implements `create_bucket`, `delete_bucket`, `head_bucket` and
//! `list_buckets`.

use memstore_s3_model::S3Request;
use memstore_s3_model::input::{
    CreateBucketInput, DeleteBucketInput, HeadBucketInput, ListBucketsInput,
};
use memstore_s3_model::output::{
    CreateBucketOutput, DeleteBucketOutput, HeadBucketOutput, ListBucketsOutput,
};
use memstore_s3_model::types::Bucket;
use tracing::debug;

use crate::error::S3Result;
use crate::provider::MemStoreS3;
use crate::state::object::Owner;
use crate::utils::now_millis;
use crate::validation::validate_bucket_name;

impl MemStoreS3 {
    /// Create a new bucket owned by the caller.
    ///
    /// # Errors
    ///
    /// - `InvalidBucketName` if name validation is enabled and fails.
    /// - `BucketAlreadyExists` if any account already holds the name.
    pub fn create_bucket(
        &self,
        req: S3Request<CreateBucketInput>,
    ) -> S3Result<CreateBucketOutput> {
        let bucket_name = req.input.bucket;

        if self.config.validate_bucket_names {
            validate_bucket_name(&bucket_name)?;
        }

        let owner = Owner::from_identity(&req.identity);
        self.state.create_bucket(&bucket_name, owner, now_millis())?;

        debug!(bucket = %bucket_name, "create_bucket completed");

        Ok(CreateBucketOutput {
            location: format!("/{bucket_name}"),
        })
    }

    /// Delete an empty bucket owned by the caller.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` if the bucket does not exist.
    /// - `AccessDenied` if the caller does not own it.
    /// - `BucketNotEmpty` if it still holds objects or in-progress uploads.
    pub fn delete_bucket(
        &self,
        req: S3Request<DeleteBucketInput>,
    ) -> S3Result<DeleteBucketOutput> {
        let bucket_name = req.input.bucket;

        self.state
            .delete_bucket(&bucket_name, &Owner::from_identity(&req.identity))?;

        debug!(bucket = %bucket_name, "delete_bucket completed");

        Ok(DeleteBucketOutput)
    }

    /// Check that a bucket exists and belongs to the caller.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` if the bucket does not exist.
    /// - `AccessDenied` if the caller does not own it.
    pub fn head_bucket(&self, req: S3Request<HeadBucketInput>) -> S3Result<HeadBucketOutput> {
        let bucket = self.owned_bucket(&req.input.bucket, &req.identity)?;

        Ok(HeadBucketOutput {
            owner: bucket.owner.to_model(),
            creation_date: bucket.creation_date,
        })
    }

    /// List the caller's buckets, sorted by name.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the operation signature uniform.
    pub fn list_buckets(&self, req: S3Request<ListBucketsInput>) -> S3Result<ListBucketsOutput> {
        let owner = Owner::from_identity(&req.identity);

        let buckets: Vec<Bucket> = self
            .state
            .list_buckets(&owner)
            .iter()
            .map(|bucket| Bucket {
                name: bucket.name.clone(),
                creation_date: bucket.creation_date,
            })
            .collect();

        debug!(owner = %owner, count = buckets.len(), "list_buckets completed");

        Ok(ListBucketsOutput {
            buckets,
            owner: owner.to_model(),
        })
    }
}
