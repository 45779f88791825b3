//! In-memory S3 storage core for MemStore.
//!
//! This crate holds the storage semantics of an S3-compatible service:
//! buckets, objects, `ListObjects` pagination, multipart uploads with
//! composite ETags, and HTTP byte ranges. It speaks in typed requests and
//! responses from `memstore-s3-model`; HTTP routing, XML and request
//! signing live in the process that embeds it.
//!
//! # Architecture
//!
//! ```text
//! Routing adapter (HTTP, XML, auth)
//!        |
//!        v
//! MemStoreS3 (one method per S3 operation)
//!        |
//!        v
//!   S3ServiceState (bucket registry, per-bucket locks)
//!        |
//!        v
//!   BlobStore (payload bytes, shared by reference)
//! ```

pub mod checksums;
pub mod config;
pub mod error;
mod ops;
pub mod provider;
pub mod range;
pub mod state;
pub mod storage;
pub mod utils;
pub mod validation;

pub use config::S3Config;
pub use error::{S3Result, S3ServiceError};
pub use provider::MemStoreS3;
