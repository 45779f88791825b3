//! Request and response shapes for the MemStore S3 core.
//!
//! The routing adapter builds an [`S3Request`] around one of the `*Input`
//! types, hands it to the core, and serializes the matching `*Output` (or an
//! [`S3Error`]) to the wire.

pub mod error;
pub mod input;
pub mod output;
pub mod request;
pub mod types;

pub use error::{S3Error, S3ErrorCode};
pub use request::{Identity, S3Request, StreamingBlob};
