//! List operation handlers.
//!
//! Implements `list_objects` (v1, marker-based pagination).

use memstore_s3_model::S3Request;
use memstore_s3_model::input::ListObjectsInput;
use memstore_s3_model::output::ListObjectsOutput;
use memstore_s3_model::types::{CommonPrefix, Object};
use tracing::debug;

use crate::error::S3Result;
use crate::provider::MemStoreS3;

impl MemStoreS3 {
    /// List one page of a bucket's objects.
    ///
    /// `max_keys` defaults to, and is capped at, the configured maximum.
    /// The request's prefix, marker and delimiter are echoed back.
    ///
    /// # Errors
    ///
    /// `NoSuchBucket` / `AccessDenied` for the bucket.
    pub fn list_objects(&self, req: S3Request<ListObjectsInput>) -> S3Result<ListObjectsOutput> {
        let S3Request { input, identity } = req;

        let bucket = self.owned_bucket(&input.bucket, &identity)?;

        let prefix = input.prefix.as_deref().unwrap_or("");
        let delimiter = input.delimiter.as_deref().unwrap_or("");
        let marker = input.marker.as_deref().unwrap_or("");
        let max_keys = self.config.effective_max_keys(input.max_keys);
        let max_keys_usize = usize::try_from(max_keys).unwrap_or(usize::MAX);

        let result = bucket
            .read()?
            .objects
            .list_objects(prefix, marker, delimiter, max_keys_usize);

        let contents: Vec<Object> = result.objects.iter().map(|o| o.to_model()).collect();
        let common_prefixes: Vec<CommonPrefix> = result
            .common_prefixes
            .into_iter()
            .map(|prefix| CommonPrefix { prefix })
            .collect();

        debug!(
            bucket = %input.bucket,
            prefix = %prefix,
            count = contents.len(),
            common_prefixes = common_prefixes.len(),
            is_truncated = result.is_truncated,
            "list_objects completed"
        );

        Ok(ListObjectsOutput {
            common_prefixes,
            contents,
            delimiter: input.delimiter,
            is_truncated: result.is_truncated,
            marker: input.marker,
            max_keys,
            name: input.bucket,
            next_marker: result.next_marker,
            prefix: input.prefix,
        })
    }
}
