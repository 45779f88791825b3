//! S3-specific error types.
//!
//! Defines [`S3ServiceError`], the closed set of failures the core can
//! produce. Each variant maps to a wire [`S3ErrorCode`] (and through it an
//! HTTP status) via [`S3ServiceError::code`], and converts into the model's
//! [`S3Error`] for the response collaborator.
//!
//! # Usage
//!
//! ```
//! use memstore_s3_core::error::S3ServiceError;
//! use memstore_s3_model::{S3Error, S3ErrorCode};
//!
//! let err = S3ServiceError::NoSuchBucket {
//!     bucket: "my-bucket".to_owned(),
//! };
//! let s3_err: S3Error = err.into();
//! assert_eq!(s3_err.code, S3ErrorCode::NoSuchBucket);
//! ```

use memstore_s3_model::{S3Error, S3ErrorCode};

/// S3 service error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum S3ServiceError {
    // -----------------------------------------------------------------------
    // Bucket errors
    // -----------------------------------------------------------------------
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The requested bucket name is not available.
    #[error("The requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The bucket still holds objects or in-progress uploads.
    #[error("The bucket you tried to delete is not empty: {bucket}")]
    BucketNotEmpty {
        /// The bucket name that is not empty.
        bucket: String,
    },

    // -----------------------------------------------------------------------
    // Object / key errors
    // -----------------------------------------------------------------------
    /// The specified key does not exist.
    #[error("The specified key does not exist: {key}")]
    NoSuchKey {
        /// The key that was not found.
        key: String,
    },

    // -----------------------------------------------------------------------
    // Multipart upload errors
    // -----------------------------------------------------------------------
    /// The specified multipart upload does not exist or is no longer active.
    #[error("The specified upload does not exist: {upload_id}")]
    NoSuchUpload {
        /// The upload ID that was not found.
        upload_id: String,
    },

    /// A listed part was never uploaded, or its ETag does not match.
    #[error("One or more of the specified parts could not be found: part {part_number}")]
    InvalidPart {
        /// The offending part number.
        part_number: u32,
    },

    /// The part number is outside the accepted range.
    #[error("Part number must be an integer between 1 and {max}, inclusive: {part_number}")]
    InvalidPartNumber {
        /// The rejected part number.
        part_number: u32,
        /// The configured maximum.
        max: u32,
    },

    /// A non-final part is smaller than the minimum allowed size.
    #[error("Your proposed upload is smaller than the minimum allowed object size: part {part_number}")]
    EntityTooSmall {
        /// The undersized part number.
        part_number: u32,
    },

    // -----------------------------------------------------------------------
    // Validation errors
    // -----------------------------------------------------------------------
    /// The specified bucket name is not valid.
    #[error("Invalid bucket name: {name}: {reason}")]
    InvalidBucketName {
        /// The invalid bucket name.
        name: String,
        /// The reason for the error.
        reason: String,
    },

    /// An argument provided is invalid.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// The requested range is not satisfiable.
    #[error("The requested range is not satisfiable")]
    InvalidRange,

    /// The request body is structurally invalid (empty or misordered part list).
    #[error("The XML you provided was not well-formed: {message}")]
    MalformedRequest {
        /// What was wrong with the request.
        message: String,
    },

    // -----------------------------------------------------------------------
    // Authorization errors
    // -----------------------------------------------------------------------
    /// The caller does not own the bucket.
    #[error("Access Denied")]
    AccessDenied,

    // -----------------------------------------------------------------------
    // Digest / content errors
    // -----------------------------------------------------------------------
    /// The Content-MD5 you specified is invalid.
    #[error("The Content-MD5 you specified is not valid")]
    InvalidDigest,

    /// The Content-MD5 you specified did not match what we received.
    #[error("The Content-MD5 you specified did not match what we received")]
    BadDigest,

    /// The key is too long.
    #[error("Your key is too long")]
    KeyTooLong,
}

impl S3ServiceError {
    /// The wire error code for this error.
    #[must_use]
    pub fn code(&self) -> S3ErrorCode {
        match self {
            Self::NoSuchBucket { .. } => S3ErrorCode::NoSuchBucket,
            Self::BucketAlreadyExists { .. } => S3ErrorCode::BucketAlreadyExists,
            Self::BucketNotEmpty { .. } => S3ErrorCode::BucketNotEmpty,
            Self::NoSuchKey { .. } => S3ErrorCode::NoSuchKey,
            Self::NoSuchUpload { .. } => S3ErrorCode::NoSuchUpload,
            Self::InvalidPart { .. } => S3ErrorCode::InvalidPart,
            Self::InvalidPartNumber { .. } | Self::InvalidArgument { .. } => {
                S3ErrorCode::InvalidArgument
            }
            Self::EntityTooSmall { .. } => S3ErrorCode::EntityTooSmall,
            Self::InvalidBucketName { .. } => S3ErrorCode::InvalidBucketName,
            Self::InvalidRange => S3ErrorCode::InvalidRange,
            Self::MalformedRequest { .. } => S3ErrorCode::MalformedXML,
            Self::AccessDenied => S3ErrorCode::AccessDenied,
            Self::InvalidDigest => S3ErrorCode::InvalidDigest,
            Self::BadDigest => S3ErrorCode::BadDigest,
            Self::KeyTooLong => S3ErrorCode::KeyTooLongError,
        }
    }

    /// The HTTP status the response collaborator should use.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        self.code().default_status_code()
    }

    /// The resource the error refers to, when it names one.
    fn resource(&self) -> Option<&str> {
        match self {
            Self::NoSuchBucket { bucket }
            | Self::BucketAlreadyExists { bucket }
            | Self::BucketNotEmpty { bucket } => Some(bucket),
            Self::InvalidBucketName { name, .. } => Some(name),
            Self::NoSuchKey { key } => Some(key),
            Self::NoSuchUpload { upload_id } => Some(upload_id),
            _ => None,
        }
    }

    /// Convert this error into the model's [`S3Error`].
    #[must_use]
    pub fn into_s3_error(self) -> S3Error {
        S3Error::from(self)
    }
}

impl From<S3ServiceError> for S3Error {
    fn from(err: S3ServiceError) -> Self {
        let s3_err = S3Error::with_message(err.code(), err.to_string());
        match err.resource() {
            Some(resource) => s3_err.with_resource(resource),
            None => s3_err,
        }
    }
}

/// Convenience result type for S3 service operations.
pub type S3Result<T> = Result<T, S3ServiceError>;
