//! S3 operation handlers.
//!
//! This module contains the implementations of all S3 operations, organized
//! into submodules by category. Each submodule adds public methods to
//! [`crate::provider::MemStoreS3`]; every method takes an
//! [`memstore_s3_model::S3Request`] carrying the resolved caller identity
//! and returns an [`crate::error::S3Result`].

mod bucket;
mod list;
mod multipart;
mod object;
