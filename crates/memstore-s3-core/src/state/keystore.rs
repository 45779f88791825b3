//! Ordered object index and the listing engine.
//!
//! [`KeyStore`] keeps objects in a `BTreeMap` so keys are always sorted by
//! UTF-8 byte order, which is what `ListObjects` pagination depends on.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use super::object::S3Object;

/// Result of a `ListObjects` operation.
#[derive(Debug, Clone, Default)]
pub struct ListResult {
    /// The objects that match the listing criteria, in key order.
    pub objects: Vec<Arc<S3Object>>,
    /// Common prefixes when a delimiter is used, in key order.
    pub common_prefixes: Vec<String>,
    /// Whether more entries are available.
    pub is_truncated: bool,
    /// The last entry returned (key or common prefix) when truncated.
    pub next_marker: Option<String>,
}

/// Key store. Each key maps to exactly one object record.
#[derive(Debug, Default)]
pub struct KeyStore {
    /// Sorted map of object key to object.
    objects: BTreeMap<String, Arc<S3Object>>,
}

impl KeyStore {
    /// Insert or replace an object. Returns the previous object if any.
    pub fn put(&mut self, object: S3Object) -> Option<Arc<S3Object>> {
        self.objects.insert(object.key.clone(), Arc::new(object))
    }

    /// Get an object by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<S3Object>> {
        self.objects.get(key)
    }

    /// Remove an object by key. Returns the removed object if any.
    pub fn delete(&mut self, key: &str) -> Option<Arc<S3Object>> {
        self.objects.remove(key)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object, returning them so their blobs can be released.
    pub fn drain(&mut self) -> Vec<Arc<S3Object>> {
        std::mem::take(&mut self.objects).into_values().collect()
    }

    /// List one page of objects.
    ///
    /// Keys strictly after `marker` that start with `prefix` are visited in
    /// order. With a non-empty `delimiter`, a key whose remainder after the
    /// prefix contains the delimiter rolls up into the common prefix
    /// `prefix + remainder-through-first-delimiter`. Every object and every
    /// distinct common prefix takes one of the `max_keys` slots; a common
    /// prefix equal to `marker` was returned on an earlier page and is
    /// skipped.
    #[must_use]
    pub fn list_objects(
        &self,
        prefix: &str,
        marker: &str,
        delimiter: &str,
        max_keys: usize,
    ) -> ListResult {
        if max_keys == 0 {
            return ListResult::default();
        }

        // Every key carrying `prefix` sorts at or after `prefix`, so start
        // from whichever of the two bounds is later.
        let lower = if !marker.is_empty() && marker >= prefix {
            Bound::Excluded(marker)
        } else {
            Bound::Included(prefix)
        };

        let mut result = ListResult::default();
        let mut last_emitted: Option<String> = None;
        let mut count = 0usize;

        for (key, object) in self
            .objects
            .range::<str, _>((lower, Bound::Unbounded))
        {
            if !key.starts_with(prefix) {
                break;
            }

            let common_prefix = (!delimiter.is_empty())
                .then(|| {
                    key[prefix.len()..]
                        .find(delimiter)
                        .map(|pos| &key[..prefix.len() + pos + delimiter.len()])
                })
                .flatten();

            if let Some(cp) = common_prefix {
                if cp == marker || result.common_prefixes.last().is_some_and(|last| last == cp) {
                    continue;
                }
                if count >= max_keys {
                    result.is_truncated = true;
                    break;
                }
                result.common_prefixes.push(cp.to_owned());
                last_emitted = Some(cp.to_owned());
            } else {
                if count >= max_keys {
                    result.is_truncated = true;
                    break;
                }
                result.objects.push(Arc::clone(object));
                last_emitted = Some(key.clone());
            }
            count += 1;
        }

        if result.is_truncated {
            result.next_marker = last_emitted;
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
