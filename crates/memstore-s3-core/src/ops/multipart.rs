//! Multipart upload operation handlers.
//!
//! Implements `create_multipart_upload`, `upload_part`,
//! `complete_multipart_upload`, `abort_multipart_upload`, `list_parts`, and
//! `list_multipart_uploads`.
//!
//! Part bytes are hashed and stored before any lock is taken; the part
//! record is installed under the upload's mutex. Completion and abort take
//! the bucket write lock so the object install and the upload removal are
//! observed together.

use std::sync::Arc;

use memstore_s3_model::S3Request;
use memstore_s3_model::input::{
    AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
    ListMultipartUploadsInput, ListPartsInput, UploadPartInput,
};
use memstore_s3_model::output::{
    AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CreateMultipartUploadOutput,
    ListMultipartUploadsOutput, ListPartsOutput, UploadPartOutput,
};
use memstore_s3_model::types::StorageClass;
use tracing::debug;

use crate::checksums::{md5_digest, quote_etag};
use crate::error::{S3Result, S3ServiceError};
use crate::provider::MemStoreS3;
use crate::state::bucket::BucketContents;
use crate::state::multipart::{MultipartUpload, UploadPart};
use crate::state::object::{ObjectMetadata, Owner, S3Object};
use crate::storage::ContentRef;
use crate::utils::{generate_upload_id, now_millis};
use crate::validation::{validate_content_md5, validate_object_key, validate_part_number};

/// Find an in-progress upload by id. An upload bound to a different key is
/// treated as unknown.
fn find_upload(
    contents: &BucketContents,
    upload_id: &str,
    key: &str,
) -> S3Result<Arc<MultipartUpload>> {
    contents
        .uploads
        .get(upload_id)
        .filter(|upload| upload.key == key)
        .map(Arc::clone)
        .ok_or_else(|| no_such_upload(upload_id))
}

fn no_such_upload(upload_id: &str) -> S3ServiceError {
    S3ServiceError::NoSuchUpload {
        upload_id: upload_id.to_owned(),
    }
}

fn to_usize(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

impl MemStoreS3 {
    /// Start a multipart upload.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `InvalidArgument` / `KeyTooLong` for the key.
    pub fn create_multipart_upload(
        &self,
        req: S3Request<CreateMultipartUploadInput>,
    ) -> S3Result<CreateMultipartUploadOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        validate_object_key(&input.key)?;

        let upload_id = generate_upload_id();
        let upload = MultipartUpload::new(
            upload_id.clone(),
            input.key.clone(),
            Owner::from_identity(&identity),
            now_millis(),
        )
        .with_metadata(ObjectMetadata::new(input.content_type, input.metadata));
        bucket
            .write()?
            .uploads
            .insert(upload_id.clone(), Arc::new(upload));

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            upload_id = %upload_id,
            "create_multipart_upload completed"
        );

        Ok(CreateMultipartUploadOutput {
            bucket: input.bucket,
            key: input.key,
            upload_id,
        })
    }

    /// Upload one part, replacing any earlier part with the same number.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the part number is outside `[1, max_part_number]`.
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `NoSuchUpload` if the upload is unknown, bound to another key, or
    ///   completed or aborted (including while this part was being stored).
    /// - `InvalidDigest` / `BadDigest` for a mismatched `Content-MD5`.
    pub fn upload_part(&self, req: S3Request<UploadPartInput>) -> S3Result<UploadPartOutput> {
        let S3Request { input, identity } = req;

        validate_part_number(input.part_number, self.config.max_part_number)?;
        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let upload = find_upload(&*bucket.read()?, &input.upload_id, &input.key)?;

        let data = input.body.data;
        let digest = md5_digest(&data);
        validate_content_md5(input.content_md5.as_deref(), &digest)?;

        let etag = hex::encode(digest);
        let size = data.len() as u64;
        let part = UploadPart {
            part_number: input.part_number,
            etag: etag.clone(),
            md5: digest,
            size,
            last_modified: now_millis(),
            content: ContentRef::store(self.blob_store(), data),
        };

        match upload.install_part(part) {
            Ok(Some(replaced)) => replaced.content.release(self.blob_store()),
            Ok(None) => {}
            Err(rejected) => {
                rejected.content.release(self.blob_store());
                return Err(no_such_upload(&input.upload_id));
            }
        }

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            upload_id = %input.upload_id,
            part_number = input.part_number,
            size,
            "upload_part completed"
        );

        Ok(UploadPartOutput {
            e_tag: quote_etag(&etag),
        })
    }

    /// Assemble the listed parts into an object.
    ///
    /// The new object references the parts' blobs directly; staged parts not
    /// named in the list are released.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `NoSuchUpload` if the upload is unknown, bound to another key, or
    ///   already terminal.
    /// - `MalformedXML` if the part list is empty or not strictly ascending.
    /// - `InvalidPart` if a part is missing or its ETag does not match.
    /// - `EntityTooSmall` if a part other than the last is below the minimum
    ///   part size.
    pub fn complete_multipart_upload(
        &self,
        req: S3Request<CompleteMultipartUploadInput>,
    ) -> S3Result<CompleteMultipartUploadOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;

        let (assembled, previous) = {
            let mut contents = bucket.write()?;
            let upload = find_upload(&contents, &input.upload_id, &input.key)?;
            let assembled = upload.complete(&input.parts, self.config.min_part_size)?;
            contents.uploads.remove(&input.upload_id);

            let previous = contents.objects.put(S3Object {
                key: input.key.clone(),
                size: assembled.size,
                etag: assembled.etag.clone(),
                content: assembled.content.clone(),
                last_modified: now_millis(),
                owner: upload.owner.clone(),
                parts_count: Some(assembled.parts_count),
                metadata: upload.metadata.clone(),
            });
            (assembled, previous)
        };

        if let Some(previous) = previous {
            previous.content.release(self.blob_store());
        }
        for unreferenced in &assembled.unreferenced {
            unreferenced.release(self.blob_store());
        }

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            upload_id = %input.upload_id,
            parts = assembled.parts_count,
            size = assembled.size,
            etag = %assembled.etag,
            "complete_multipart_upload completed"
        );

        Ok(CompleteMultipartUploadOutput {
            location: format!("/{}/{}", input.bucket, input.key),
            bucket: input.bucket,
            e_tag: quote_etag(&assembled.etag),
            key: input.key,
            size: assembled.size,
        })
    }

    /// Abort an upload, releasing every staged part.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `NoSuchUpload` if the upload is unknown, bound to another key, or
    ///   already terminal.
    pub fn abort_multipart_upload(
        &self,
        req: S3Request<AbortMultipartUploadInput>,
    ) -> S3Result<AbortMultipartUploadOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;

        let released = {
            let mut contents = bucket.write()?;
            let upload = find_upload(&contents, &input.upload_id, &input.key)?;
            let released = upload.abort()?;
            contents.uploads.remove(&input.upload_id);
            released
        };
        for content in &released {
            content.release(self.blob_store());
        }

        debug!(
            bucket = %input.bucket,
            key = %input.key,
            upload_id = %input.upload_id,
            released_parts = released.len(),
            "abort_multipart_upload completed"
        );

        Ok(AbortMultipartUploadOutput)
    }

    /// List the parts of an in-progress upload, in ascending part number
    /// order, strictly after `part_number_marker`. Part ETags are unquoted.
    ///
    /// # Errors
    ///
    /// - `NoSuchBucket` / `AccessDenied` for the bucket.
    /// - `NoSuchUpload` if the upload is unknown, bound to another key, or
    ///   already terminal.
    pub fn list_parts(&self, req: S3Request<ListPartsInput>) -> S3Result<ListPartsOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let upload = find_upload(&*bucket.read()?, &input.upload_id, &input.key)?;

        let max_parts = self.config.effective_max_keys(input.max_parts);
        let listing = upload.list_parts(input.part_number_marker.unwrap_or(0), to_usize(max_parts));

        debug!(
            bucket = %input.bucket,
            upload_id = %input.upload_id,
            count = listing.parts.len(),
            is_truncated = listing.is_truncated,
            "list_parts completed"
        );

        Ok(ListPartsOutput {
            bucket: input.bucket,
            initiator: upload.owner.to_model(),
            is_truncated: listing.is_truncated,
            key: input.key,
            max_parts,
            next_part_number_marker: listing.next_part_number_marker,
            owner: upload.owner.to_model(),
            part_number_marker: input.part_number_marker,
            parts: listing.parts.iter().map(UploadPart::to_model).collect(),
            storage_class: StorageClass::Standard.as_str().to_owned(),
            upload_id: input.upload_id,
        })
    }

    /// List a bucket's in-progress uploads, sorted by key, then initiation
    /// time, then upload id.
    ///
    /// With only `key_marker`, listing resumes after every upload for that
    /// key. With `upload_id_marker` as well, it resumes after that upload
    /// within the key; if no such upload remains, it resumes with the key's
    /// uploads whose ids sort after the marker.
    ///
    /// # Errors
    ///
    /// `NoSuchBucket` / `AccessDenied` for the bucket.
    pub fn list_multipart_uploads(
        &self,
        req: S3Request<ListMultipartUploadsInput>,
    ) -> S3Result<ListMultipartUploadsOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;
        let prefix = input.prefix.as_deref().unwrap_or("");

        let mut uploads: Vec<Arc<MultipartUpload>> = bucket
            .read()?
            .uploads
            .values()
            .filter(|upload| upload.key.starts_with(prefix))
            .map(Arc::clone)
            .collect();
        uploads.sort_by(|a, b| {
            a.key
                .cmp(&b.key)
                .then(a.initiated.cmp(&b.initiated))
                .then_with(|| a.upload_id.cmp(&b.upload_id))
        });

        let remaining: Vec<Arc<MultipartUpload>> =
            match (input.key_marker.as_deref(), input.upload_id_marker.as_deref()) {
                (None, _) => uploads,
                (Some(key_marker), None) => {
                    let past_key = uploads.partition_point(|u| u.key.as_str() <= key_marker);
                    uploads.split_off(past_key)
                }
                (Some(key_marker), Some(id_marker)) => {
                    match uploads
                        .iter()
                        .position(|u| u.key == key_marker && u.upload_id == id_marker)
                    {
                        Some(index) => uploads.split_off(index + 1),
                        None => uploads
                            .into_iter()
                            .filter(|u| {
                                u.key.as_str() > key_marker
                                    || (u.key == key_marker && u.upload_id.as_str() > id_marker)
                            })
                            .collect(),
                    }
                }
            };

        let max_uploads = self.config.effective_max_keys(input.max_uploads);
        let page = &remaining[..remaining.len().min(to_usize(max_uploads))];
        let is_truncated = !page.is_empty() && page.len() < remaining.len();
        let (next_key_marker, next_upload_id_marker) = match page.last() {
            Some(last) if is_truncated => (Some(last.key.clone()), Some(last.upload_id.clone())),
            _ => (None, None),
        };

        debug!(
            bucket = %input.bucket,
            count = page.len(),
            is_truncated,
            "list_multipart_uploads completed"
        );

        Ok(ListMultipartUploadsOutput {
            uploads: page.iter().map(|upload| upload.to_model()).collect(),
            bucket: input.bucket,
            is_truncated,
            key_marker: input.key_marker,
            max_uploads,
            next_key_marker,
            next_upload_id_marker,
            prefix: input.prefix,
            upload_id_marker: input.upload_id_marker,
        })
    }
}
