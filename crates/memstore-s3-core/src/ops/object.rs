//! Object operation handlers.
//!
//! Implements `put_object`, `get_object`, `head_object` and `delete_object`.
//!
//! Payload bytes are hashed and written to the blob store before the bucket
//! lock is taken. Readers snapshot an object's blobs while holding the read
//! lock, so an overwrite or delete can release the old blobs as soon as the
//! new record is installed.

use std::sync::Arc;

use memstore_s3_model::S3Request;
use memstore_s3_model::input::{DeleteObjectInput, GetObjectInput, HeadObjectInput, PutObjectInput};
use memstore_s3_model::output::{
    DeleteObjectOutput, GetObjectOutput, HeadObjectOutput, PutObjectOutput,
};
use memstore_s3_model::request::StreamingBlob;
use tracing::debug;

use crate::checksums::{md5_digest, quote_etag};
use crate::error::{S3Result, S3ServiceError};
use crate::provider::MemStoreS3;
use crate::range::resolve_range;
use crate::state::bucket::S3Bucket;
use crate::state::object::{ObjectMetadata, Owner, S3Object};
use crate::storage::{ContentRef, ContentSnapshot};
use crate::utils::now_millis;
use crate::validation::{validate_content_md5, validate_object_key};

fn no_such_key(key: &str) -> S3ServiceError {
    S3ServiceError::NoSuchKey {
        key: key.to_owned(),
    }
}

impl MemStoreS3 {
    /// Store an object, replacing any existing object under the same key.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `InvalidArgument` / `KeyTooLong` for the key.
    /// - `InvalidDigest` if `Content-MD5` cannot be decoded, `BadDigest` if it
    ///   does not match the body.
    pub fn put_object(&self, req: S3Request<PutObjectInput>) -> S3Result<PutObjectOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        validate_object_key(&input.key)?;

        let data = input.body.data;
        let digest = md5_digest(&data);
        validate_content_md5(input.content_md5.as_deref(), &digest)?;

        let etag = hex::encode(digest);
        let size = data.len() as u64;
        let content = ContentRef::store(self.blob_store(), data);

        let object = S3Object {
            key: input.key.clone(),
            size,
            etag: etag.clone(),
            content: content.clone(),
            last_modified: now_millis(),
            owner: Owner::from_identity(&identity),
            parts_count: None,
            metadata: ObjectMetadata::new(input.content_type, input.metadata),
        };

        let previous = match bucket.write() {
            Ok(mut contents) => contents.objects.put(object),
            Err(e) => {
                content.release(self.blob_store());
                return Err(e);
            }
        };
        if let Some(previous) = previous {
            previous.content.release(self.blob_store());
        }

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            size,
            etag = %etag,
            "put_object completed"
        );

        Ok(PutObjectOutput {
            e_tag: quote_etag(&etag),
            size,
        })
    }

    /// Retrieve an object, or a byte range of it.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `NoSuchKey` if the key does not exist.
    /// - `InvalidRange` if the requested range cannot be satisfied.
    pub fn get_object(&self, req: S3Request<GetObjectInput>) -> S3Result<GetObjectOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let (object, snapshot) = self.pin_object(&bucket, &input.key)?;

        let resolution = resolve_range(input.range.as_deref(), object.size)?;
        let body = snapshot.read(resolution.span());
        let headers = resolution.headers();

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            content_length = headers.content_length,
            partial = resolution.partial,
            "get_object completed"
        );

        Ok(GetObjectOutput {
            accept_ranges: headers.accept_ranges.map(str::to_owned),
            body: StreamingBlob::new(body),
            content_length: headers.content_length,
            content_range: headers.content_range,
            content_type: object.metadata.content_type.clone(),
            e_tag: quote_etag(&object.etag),
            last_modified: Some(object.last_modified),
            metadata: object.metadata.user_metadata.clone(),
            parts_count: object.parts_count,
            size: object.size,
        })
    }

    /// Retrieve an object's metadata. Honours `Range` like `get_object` so
    /// the reported length and `Content-Range` match what a GET would serve.
    ///
    /// # Errors
    ///
    /// Same as [`MemStoreS3::get_object`].
    pub fn head_object(&self, req: S3Request<HeadObjectInput>) -> S3Result<HeadObjectOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let object = bucket
            .read()?
            .objects
            .get(&input.key)
            .map(Arc::clone)
            .ok_or_else(|| no_such_key(&input.key))?;

        let resolution = resolve_range(input.range.as_deref(), object.size)?;
        let headers = resolution.headers();

        Ok(HeadObjectOutput {
            accept_ranges: headers.accept_ranges.map(str::to_owned),
            content_length: headers.content_length,
            content_range: headers.content_range,
            content_type: object.metadata.content_type.clone(),
            e_tag: quote_etag(&object.etag),
            last_modified: Some(object.last_modified),
            metadata: object.metadata.user_metadata.clone(),
            parts_count: object.parts_count,
            size: object.size,
        })
    }

    /// Delete an object. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// `NoSuchBucket` / `AccessDenied` for the bucket.
    pub fn delete_object(&self, req: S3Request<DeleteObjectInput>) -> S3Result<DeleteObjectOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let removed = bucket.write()?.objects.delete(&input.key);
        if let Some(removed) = &removed {
            removed.content.release(self.blob_store());
        }

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            existed = removed.is_some(),
            "delete_object completed"
        );

        Ok(DeleteObjectOutput)
    }

    /// Look up `key` and fetch its blobs under the bucket read lock.
    fn pin_object(
        &self,
        bucket: &S3Bucket,
        key: &str,
    ) -> S3Result<(Arc<S3Object>, ContentSnapshot)> {
        let contents = bucket.read()?;
        let object = contents
            .objects
            .get(key)
            .map(Arc::clone)
            .ok_or_else(|| no_such_key(key))?;
        let snapshot = object
            .content
            .snapshot(self.blob_store())
            .ok_or_else(|| no_such_key(key))?;
        Ok((object, snapshot))
    }
}
