//! S3 service state management.
//!
//! This module provides the in-memory metadata for the S3 core:
//!
//! - [`S3ServiceState`] -- the bucket registry
//! - [`S3Bucket`] / [`BucketContents`] -- per-bucket objects and uploads
//! - [`KeyStore`] -- the ordered key index and listing engine
//! - [`S3Object`] / [`Owner`] -- object records and ownership
//! - [`MultipartUpload`] / [`UploadPart`] -- multipart upload tracking
//!
//! # Thread Safety
//!
//! All types are `Send + Sync`. Concurrent access is handled via:
//!
//! - `DashMap` for the bucket registry
//! - `parking_lot::RwLock` per bucket for objects and the upload table
//! - `parking_lot::Mutex` per upload for its status and staged parts

pub(crate) mod bucket;
pub(crate) mod keystore;
pub(crate) mod multipart;
pub(crate) mod object;
pub(crate) mod service;

pub use bucket::{BucketContents, S3Bucket};
pub use keystore::{KeyStore, ListResult};
pub use multipart::{AssembledObject, MultipartUpload, PartListing, UploadPart, UploadStatus};
pub use object::{Owner, S3Object};
pub use service::S3ServiceState;
