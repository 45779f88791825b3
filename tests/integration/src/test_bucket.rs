//! Bucket lifecycle scenarios.

#[cfg(test)]
mod tests {
    use memstore_s3_core::S3ServiceError;
    use memstore_s3_model::input::{
        CreateBucketInput, CreateMultipartUploadInput, DeleteBucketInput, HeadBucketInput,
        ListBucketsInput,
    };
    use memstore_s3_model::{Identity, S3Request};

    use crate::{
        cleanup_bucket, create_test_bucket, put_bytes, request, s3_service, test_bucket_name,
    };

    #[test]
    fn test_should_create_and_delete_bucket() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "lifecycle");

        s3.head_bucket(request(HeadBucketInput {
            bucket: bucket.clone(),
        }))
        .expect("head_bucket");

        s3.delete_bucket(request(DeleteBucketInput {
            bucket: bucket.clone(),
        }))
        .expect("delete_bucket");

        let result = s3.head_bucket(request(HeadBucketInput { bucket }));
        assert!(matches!(result, Err(S3ServiceError::NoSuchBucket { .. })));
    }

    #[test]
    fn test_should_reject_duplicate_bucket_from_any_account() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "dup");

        let again = s3.create_bucket(request(CreateBucketInput {
            bucket: bucket.clone(),
        }));
        assert!(matches!(
            again,
            Err(S3ServiceError::BucketAlreadyExists { .. })
        ));

        let other = s3.create_bucket(S3Request::new(
            Identity::new("another-account"),
            CreateBucketInput {
                bucket: bucket.clone(),
            },
        ));
        assert!(matches!(
            other,
            Err(S3ServiceError::BucketAlreadyExists { .. })
        ));

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_refuse_to_delete_non_empty_bucket() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "nonempty");
        put_bytes(&s3, &bucket, "file.txt", "data");

        let result = s3.delete_bucket(request(DeleteBucketInput {
            bucket: bucket.clone(),
        }));
        assert!(matches!(result, Err(S3ServiceError::BucketNotEmpty { .. })));

        cleanup_bucket(&s3, &bucket);
        assert!(!s3.state().bucket_exists(&bucket));
    }

    #[test]
    fn test_should_refuse_to_delete_bucket_with_pending_upload() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "pending");
        s3.create_multipart_upload(request(CreateMultipartUploadInput {
            bucket: bucket.clone(),
            key: "big.bin".to_owned(),
            ..Default::default()
        }))
        .expect("create_multipart_upload");

        let result = s3.delete_bucket(request(DeleteBucketInput {
            bucket: bucket.clone(),
        }));
        assert!(matches!(result, Err(S3ServiceError::BucketNotEmpty { .. })));

        cleanup_bucket(&s3, &bucket);
        assert!(!s3.state().bucket_exists(&bucket));
    }

    #[test]
    fn test_should_deny_deleting_another_accounts_bucket() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "owned");

        let result = s3.delete_bucket(S3Request::new(
            Identity::new("intruder"),
            DeleteBucketInput {
                bucket: bucket.clone(),
            },
        ));
        assert_eq!(result.err(), Some(S3ServiceError::AccessDenied));
        assert!(s3.state().bucket_exists(&bucket));

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_list_callers_buckets_sorted() {
        let s3 = s3_service();
        let second = create_test_bucket(&s3, "zz");
        let first = create_test_bucket(&s3, "aa");
        s3.create_bucket(S3Request::new(
            Identity::new("someone-else"),
            CreateBucketInput {
                bucket: test_bucket_name("theirs"),
            },
        ))
        .expect("create foreign bucket");

        let listed = s3.list_buckets(request(ListBucketsInput)).expect("list_buckets");
        let names: Vec<&str> = listed.buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec![first.as_str(), second.as_str()]);
        assert_eq!(listed.owner.id, crate::TEST_ACCESS_KEY);
    }

    #[test]
    fn test_should_reject_invalid_bucket_names() {
        let s3 = s3_service();
        for name in ["ab", "UPPER", "bad..dots", "192.168.1.1", "-leading", "xn--punycode"] {
            let result = s3.create_bucket(request(CreateBucketInput {
                bucket: name.to_owned(),
            }));
            assert!(
                matches!(result, Err(S3ServiceError::InvalidBucketName { .. })),
                "{name} should be rejected"
            );
        }
    }
}
