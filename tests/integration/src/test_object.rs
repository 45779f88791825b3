//! Object CRUD and byte-range scenarios.

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use memstore_s3_core::S3ServiceError;
    use memstore_s3_core::checksums::{compute_md5, md5_digest};
    use memstore_s3_model::input::{DeleteObjectInput, HeadObjectInput, PutObjectInput};
    use memstore_s3_model::{Identity, S3Request, StreamingBlob};

    use crate::{cleanup_bucket, create_test_bucket, get_range, put_bytes, request, s3_service};

    /// A 200-byte object whose byte `i` has value `i`.
    fn counting_bytes() -> Vec<u8> {
        (0..200u8).collect()
    }

    #[test]
    fn test_should_put_and_get_object() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "putget");

        let put = put_bytes(&s3, &bucket, "hello.txt", "Hello, World!");
        assert_eq!(put.e_tag, format!("\"{}\"", compute_md5(b"Hello, World!")));

        let got = get_range(&s3, &bucket, "hello.txt", None).expect("get_object");
        assert_eq!(got.body.data.as_ref(), b"Hello, World!");
        assert_eq!(got.e_tag, put.e_tag);
        assert_eq!(got.content_length, 13);
        assert!(got.content_range.is_none());
        assert!(got.last_modified.is_some());

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_overwrite_object() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "overwrite");

        put_bytes(&s3, &bucket, "k", "version one");
        let second = put_bytes(&s3, &bucket, "k", "v2");

        let got = get_range(&s3, &bucket, "k", None).expect("get_object");
        assert_eq!(got.body.data.as_ref(), b"v2");
        assert_eq!(got.e_tag, second.e_tag);
        assert_eq!(s3.blob_store().len(), 1);

        cleanup_bucket(&s3, &bucket);
        assert!(s3.blob_store().is_empty());
    }

    #[test]
    fn test_should_serve_ranges_of_regular_object() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "ranges");
        let data = counting_bytes();
        put_bytes(&s3, &bucket, "counting", data.clone());

        let cases: [(&str, usize, usize); 5] = [
            ("bytes=10-99", 10, 99),
            ("bytes=-10", 190, 199),
            ("bytes=190-", 190, 199),
            ("bytes=150-300", 150, 199),
            ("bytes=-500", 0, 199),
        ];
        for (header, start, end) in cases {
            let got = get_range(&s3, &bucket, "counting", Some(header))
                .unwrap_or_else(|e| panic!("{header}: {e}"));
            assert_eq!(got.body.data.as_ref(), &data[start..=end], "{header}");
            assert_eq!(got.content_length, (end - start + 1) as u64, "{header}");
            assert_eq!(
                got.content_range,
                Some(format!("bytes {start}-{end}/200")),
                "{header}"
            );
            assert_eq!(got.accept_ranges.as_deref(), Some("bytes"), "{header}");
            assert_eq!(got.size, 200);
        }

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_ignore_malformed_ranges() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "badrange");
        put_bytes(&s3, &bucket, "counting", counting_bytes());

        for header in ["bytes=-", "bytes=a-b", "bytes=5-2", "bytes=0-1,5-6", "items=0-1"] {
            let got = get_range(&s3, &bucket, "counting", Some(header))
                .unwrap_or_else(|e| panic!("{header}: {e}"));
            assert_eq!(got.content_length, 200, "{header}");
            assert!(got.content_range.is_none(), "{header}");
            assert!(got.accept_ranges.is_none(), "{header}");
        }

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_reject_unsatisfiable_ranges() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "unsat");
        put_bytes(&s3, &bucket, "counting", counting_bytes());

        for header in ["bytes=200-", "bytes=200-300", "bytes=-0"] {
            assert_eq!(
                get_range(&s3, &bucket, "counting", Some(header)).err(),
                Some(S3ServiceError::InvalidRange),
                "{header}"
            );
        }

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_head_object() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "head");
        let put = put_bytes(&s3, &bucket, "counting", counting_bytes());

        let head = s3
            .head_object(request(HeadObjectInput {
                bucket: bucket.clone(),
                key: "counting".to_owned(),
                range: None,
            }))
            .expect("head_object");
        assert_eq!(head.content_length, 200);
        assert_eq!(head.e_tag, put.e_tag);
        assert!(head.parts_count.is_none());

        let missing = s3.head_object(request(HeadObjectInput {
            bucket: bucket.clone(),
            key: "missing".to_owned(),
            range: None,
        }));
        assert!(matches!(missing, Err(S3ServiceError::NoSuchKey { .. })));

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_delete_object_and_tolerate_missing_key() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "delete");
        put_bytes(&s3, &bucket, "doomed", "bytes");

        for _ in 0..2 {
            s3.delete_object(request(DeleteObjectInput {
                bucket: bucket.clone(),
                key: "doomed".to_owned(),
            }))
            .expect("delete_object");
        }
        assert!(matches!(
            get_range(&s3, &bucket, "doomed", None),
            Err(S3ServiceError::NoSuchKey { .. })
        ));
        assert!(s3.blob_store().is_empty());

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_verify_content_md5() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "md5");
        let put = |md5: String| {
            s3.put_object(request(PutObjectInput {
                bucket: bucket.clone(),
                key: "checked".to_owned(),
                body: StreamingBlob::new("payload"),
                content_md5: Some(md5),
                ..Default::default()
            }))
        };

        assert!(put(BASE64.encode(md5_digest(b"payload"))).is_ok());
        assert_eq!(
            put(BASE64.encode(md5_digest(b"tampered"))).err(),
            Some(S3ServiceError::BadDigest)
        );
        assert_eq!(
            put("not base64!".to_owned()).err(),
            Some(S3ServiceError::InvalidDigest)
        );

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_keep_objects_private_to_bucket_owner() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "private");
        put_bytes(&s3, &bucket, "secret", "classified");

        let result = s3.get_object(S3Request::new(
            Identity::new("intruder"),
            memstore_s3_model::input::GetObjectInput {
                bucket: bucket.clone(),
                key: "secret".to_owned(),
                range: None,
            },
        ));
        assert_eq!(result.err(), Some(S3ServiceError::AccessDenied));

        cleanup_bucket(&s3, &bucket);
    }
}
