//! ListObjects scenarios.

#[cfg(test)]
mod tests {
    use memstore_s3_core::{MemStoreS3, S3Config};
    use memstore_s3_model::input::ListObjectsInput;
    use memstore_s3_model::output::ListObjectsOutput;

    use crate::{cleanup_bucket, create_test_bucket, put_bytes, request, s3_service, s3_service_with};

    fn list(s3: &MemStoreS3, input: ListObjectsInput) -> ListObjectsOutput {
        s3.list_objects(request(input)).expect("list_objects")
    }

    fn keys(output: &ListObjectsOutput) -> Vec<&str> {
        output.contents.iter().map(|o| o.key.as_str()).collect()
    }

    fn prefixes(output: &ListObjectsOutput) -> Vec<&str> {
        output
            .common_prefixes
            .iter()
            .map(|p| p.prefix.as_str())
            .collect()
    }

    #[test]
    fn test_should_list_keys_in_byte_order() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "order");
        for key in ["b", "a", "B", "a/b", "_"] {
            put_bytes(&s3, &bucket, key, "x");
        }

        let output = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                ..Default::default()
            },
        );
        assert_eq!(keys(&output), vec!["B", "_", "a", "a/b", "b"]);
        assert!(!output.is_truncated);
        assert_eq!(output.max_keys, 1000);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_roll_up_common_prefixes() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "delim");
        for key in [
            "photos/2024/jan.jpg",
            "photos/2024/feb.jpg",
            "photos/2025/mar.jpg",
            "photos/index.html",
            "readme.md",
        ] {
            put_bytes(&s3, &bucket, key, "x");
        }

        let top = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(keys(&top), vec!["readme.md"]);
        assert_eq!(prefixes(&top), vec!["photos/"]);

        let photos = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                prefix: Some("photos/".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(keys(&photos), vec!["photos/index.html"]);
        assert_eq!(prefixes(&photos), vec!["photos/2024/", "photos/2025/"]);
        assert_eq!(photos.prefix.as_deref(), Some("photos/"));
        assert_eq!(photos.delimiter.as_deref(), Some("/"));

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_paginate_through_all_entries() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "pages");
        for i in 0..7 {
            put_bytes(&s3, &bucket, &format!("dir{i}/file"), "x");
            put_bytes(&s3, &bucket, &format!("file{i}"), "x");
        }

        let mut marker = None;
        let mut seen_keys = Vec::new();
        let mut seen_prefixes = Vec::new();
        let mut pages = 0;
        loop {
            let page = list(
                &s3,
                ListObjectsInput {
                    bucket: bucket.clone(),
                    delimiter: Some("/".to_owned()),
                    marker: marker.take(),
                    max_keys: Some(3),
                    ..Default::default()
                },
            );
            pages += 1;
            assert!(page.contents.len() + page.common_prefixes.len() <= 3);
            seen_keys.extend(page.contents.iter().map(|o| o.key.clone()));
            seen_prefixes.extend(page.common_prefixes.iter().map(|p| p.prefix.clone()));
            if !page.is_truncated {
                assert!(page.next_marker.is_none());
                break;
            }
            marker = page.next_marker;
            assert!(marker.is_some());
        }

        assert_eq!(pages, 5);
        assert_eq!(seen_keys.len(), 7);
        assert_eq!(seen_prefixes.len(), 7);
        let mut deduped = seen_prefixes.clone();
        deduped.dedup();
        assert_eq!(deduped, seen_prefixes);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_report_common_prefix_as_next_marker() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "cpmarker");
        for key in ["a/1", "a/2", "b/1", "c"] {
            put_bytes(&s3, &bucket, key, "x");
        }

        let first = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                max_keys: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(prefixes(&first), vec!["a/"]);
        assert_eq!(first.next_marker.as_deref(), Some("a/"));

        let second = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                marker: first.next_marker.clone(),
                max_keys: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(prefixes(&second), vec!["b/"]);
        assert!(second.is_truncated);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_return_empty_page_for_zero_max_keys() {
        let s3 = s3_service();
        let bucket = create_test_bucket(&s3, "zero");
        put_bytes(&s3, &bucket, "k", "x");

        let output = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                max_keys: Some(0),
                ..Default::default()
            },
        );
        assert!(output.contents.is_empty());
        assert!(!output.is_truncated);

        cleanup_bucket(&s3, &bucket);
    }

    #[test]
    fn test_should_cap_page_size_at_configured_maximum() {
        let s3 = s3_service_with(S3Config::builder().max_keys(2).build());
        let bucket = create_test_bucket(&s3, "cap");
        for key in ["a", "b", "c"] {
            put_bytes(&s3, &bucket, key, "x");
        }

        let output = list(
            &s3,
            ListObjectsInput {
                bucket: bucket.clone(),
                max_keys: Some(1000),
                ..Default::default()
            },
        );
        assert_eq!(output.max_keys, 2);
        assert_eq!(keys(&output), vec!["a", "b"]);
        assert!(output.is_truncated);

        cleanup_bucket(&s3, &bucket);
    }
}
