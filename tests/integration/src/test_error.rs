//! Error mapping scenarios: what the routing adapter gets back.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use memstore_s3_core::S3ServiceError;
    use memstore_s3_model::input::{
        CompleteMultipartUploadInput, CreateMultipartUploadInput, PutObjectInput, UploadPartInput,
    };
    use memstore_s3_model::{S3Error, S3ErrorCode, StreamingBlob};

    use crate::{
        cleanup_bucket, create_test_bucket, get_range, request, s3_service, test_bucket_name,
    };

    fn into_wire(err: S3ServiceError) -> S3Error {
        S3Error::from(err)
    }

    #[test]
    fn test_should_return_no_such_bucket_on_put() {
        let s3 = s3_service();
        let bucket = test_bucket_name("ghost");

        let err = s3
            .put_object(request(PutObjectInput {
                bucket: bucket.clone(),
                key: "file.txt".to_owned(),
                body: StreamingBlob::new("data"),
                content_md5: None,
                ..Default::default()
            }))
            .expect_err("put to nonexistent bucket should fail");

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let wire = into_wire(err);
        assert_eq!(wire.code, S3ErrorCode::NoSuchBucket);
        assert_eq!(wire.resource.as_deref(), Some(bucket.as_str()));
        assert!(s3.blob_store().is_empty());
    }

    #[test]
    fn test_should_return_no_such_key_on_get() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "nokey");

        let err = get_range(&s3, &bucket, "nonexistent.txt", None)
            .expect_err("get nonexistent key should fail");
        let wire = into_wire(err);
        assert_eq!(wire.code, S3ErrorCode::NoSuchKey);
        assert_eq!(wire.status_code, StatusCode::NOT_FOUND);
        assert_eq!(wire.resource.as_deref(), Some("nonexistent.txt"));

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_map_invalid_range_to_416() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "range416");
        crate::put_bytes(&s3, &bucket, "small", "tiny");

        let err = get_range(&s3, &bucket, "small", Some("bytes=100-"))
            .expect_err("unsatisfiable range should fail");
        assert_eq!(err.code(), S3ErrorCode::InvalidRange);
        assert_eq!(err.status_code(), StatusCode::RANGE_NOT_SATISFIABLE);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_map_malformed_part_list_to_malformed_xml() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "malformed");
        let upload_id = s3
            .create_multipart_upload(request(CreateMultipartUploadInput {
                bucket: bucket.clone(),
                key: "k".to_owned(),
                ..Default::default()
            }))
            .expect("create_multipart_upload")
            .upload_id;

        let err = s3
            .complete_multipart_upload(request(CompleteMultipartUploadInput {
                bucket: bucket.clone(),
                key: "k".to_owned(),
                upload_id,
                parts: Vec::new(),
            }))
            .expect_err("empty part list should fail");
        assert_eq!(err.code(), S3ErrorCode::MalformedXML);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_map_bad_part_number_to_invalid_argument() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "partnum");
        let upload_id = s3
            .create_multipart_upload(request(CreateMultipartUploadInput {
                bucket: bucket.clone(),
                key: "k".to_owned(),
                ..Default::default()
            }))
            .expect("create_multipart_upload")
            .upload_id;

        let err = s3
            .upload_part(request(UploadPartInput {
                bucket: bucket.clone(),
                key: "k".to_owned(),
                upload_id,
                part_number: 10_001,
                body: StreamingBlob::new("x"),
                content_md5: None,
            }))
            .expect_err("part number above the limit should fail");
        assert_eq!(err.code(), S3ErrorCode::InvalidArgument);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_map_unknown_upload_to_404() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "noupload");

        let err = s3
            .upload_part(request(UploadPartInput {
                bucket: bucket.clone(),
                key: "k".to_owned(),
                upload_id: "does-not-exist".to_owned(),
                part_number: 1,
                body: StreamingBlob::new("x"),
                content_md5: None,
            }))
            .expect_err("unknown upload should fail");
        let wire = into_wire(err);
        assert_eq!(wire.code, S3ErrorCode::NoSuchUpload);
        assert_eq!(wire.status_code, StatusCode::NOT_FOUND);
        assert!(s3.blob_store().is_empty());

        cleanup_bucket(&s3, &bucket);
    }
}
