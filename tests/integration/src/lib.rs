//! End-to-end scenarios for the MemStore S3 core.
//!
//! Each `test_*` module drives a [`MemStoreS3`] through its public operation
//! methods the way a routing adapter would, with a resolved caller
//! [`Identity`] on every request.
//!
//! Set `RUST_LOG=memstore_s3_core=debug` to see the core's operation log.

use std::sync::Once;

use bytes::Bytes;
use memstore_s3_core::{MemStoreS3, S3Config, S3Result};
use memstore_s3_model::input::{
    AbortMultipartUploadInput, CreateBucketInput, DeleteBucketInput, DeleteObjectInput,
    GetObjectInput, ListMultipartUploadsInput, ListObjectsInput, PutObjectInput,
};
use memstore_s3_model::output::{GetObjectOutput, PutObjectOutput};
use memstore_s3_model::{Identity, S3Request, StreamingBlob};

static INIT: Once = Once::new();

/// Access key used by tests that do not care about ownership.
pub const TEST_ACCESS_KEY: &str = "test";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Create a core with the default configuration.
#[must_use]
pub fn s3_service() -> MemStoreS3 {
    s3_service_with(S3Config::default())
}

/// Create a core with the given configuration.
#[must_use]
pub fn s3_service_with(config: S3Config) -> MemStoreS3 {
    init_tracing();
    MemStoreS3::new(config)
}

/// The default test caller.
#[must_use]
pub fn identity() -> Identity {
    Identity::new(TEST_ACCESS_KEY)
}

/// Wrap `input` in a request from the default test caller.
#[must_use]
pub fn request<T>(input: T) -> S3Request<T> {
    S3Request::new(identity(), input)
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket owned by the default caller and return its name.
pub fn create_test_bucket(s3: &MemStoreS3, prefix: &str) -> String {
    let name = test_bucket_name(prefix);
    s3.create_bucket(request(CreateBucketInput {
        bucket: name.clone(),
    }))
    .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    name
}

/// Store `data` under `key`, panicking on failure.
pub fn put_bytes(
    s3: &MemStoreS3,
    bucket: &str,
    key: &str,
    data: impl Into<Bytes>,
) -> PutObjectOutput {
    s3.put_object(request(PutObjectInput {
        bucket: bucket.to_owned(),
        key: key.to_owned(),
        body: StreamingBlob::new(data),
        content_md5: None,
        ..Default::default()
    }))
    .unwrap_or_else(|e| panic!("failed to put {bucket}/{key}: {e}"))
}

/// Fetch `key`, optionally with a `Range` header.
pub fn get_range(
    s3: &MemStoreS3,
    bucket: &str,
    key: &str,
    range: Option<&str>,
) -> S3Result<GetObjectOutput> {
    s3.get_object(request(GetObjectInput {
        bucket: bucket.to_owned(),
        key: key.to_owned(),
        range: range.map(ToOwned::to_owned),
    }))
}

/// Delete all objects and in-progress uploads in a bucket, then the bucket.
pub fn cleanup_bucket(s3: &MemStoreS3, bucket: &str) {
    let mut marker = None;
    loop {
        let Ok(page) = s3.list_objects(request(ListObjectsInput {
            bucket: bucket.to_owned(),
            marker: marker.take(),
            ..Default::default()
        })) else {
            return; // Bucket may not exist.
        };

        for object in &page.contents {
            let _ = s3.delete_object(request(DeleteObjectInput {
                bucket: bucket.to_owned(),
                key: object.key.clone(),
            }));
        }

        if page.is_truncated {
            marker = page.next_marker;
        } else {
            break;
        }
    }

    if let Ok(uploads) = s3.list_multipart_uploads(request(ListMultipartUploadsInput {
        bucket: bucket.to_owned(),
        ..Default::default()
    })) {
        for upload in uploads.uploads {
            let _ = s3.abort_multipart_upload(request(AbortMultipartUploadInput {
                bucket: bucket.to_owned(),
                key: upload.key,
                upload_id: upload.upload_id,
            }));
        }
    }

    let _ = s3.delete_bucket(request(DeleteBucketInput {
        bucket: bucket.to_owned(),
    }));
}

mod test_bucket;
mod test_error;
mod test_list;
mod test_object;
