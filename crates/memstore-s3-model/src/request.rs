//! Request envelope handed to the core by the routing adapter.

/// A wrapper around `bytes::Bytes` for request and response bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingBlob {
    /// The underlying bytes data.
    pub data: bytes::Bytes,
}

impl StreamingBlob {
    /// Create a new `StreamingBlob` from bytes.
    #[must_use]
    pub fn new(data: impl Into<bytes::Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<bytes::Bytes> for StreamingBlob {
    fn from(data: bytes::Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&[u8]> for StreamingBlob {
    fn from(data: &[u8]) -> Self {
        Self {
            data: bytes::Bytes::copy_from_slice(data),
        }
    }
}

/// An already-authenticated caller.
///
/// The authentication collaborator resolves the request signature to an
/// access key (or account id); the core only ever sees this resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// The access key or canonical account id of the caller.
    pub access_key: String,
    /// Display name reported back in listings.
    pub display_name: Option<String>,
}

impl Identity {
    /// Create an identity whose display name equals its access key.
    #[must_use]
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            display_name: None,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// An S3 request wrapping an input type with the caller identity.
#[derive(Debug, Clone)]
pub struct S3Request<T> {
    /// The input payload.
    pub input: T,
    /// The resolved caller.
    pub identity: Identity,
}

impl<T> S3Request<T> {
    /// Create a new request on behalf of `identity`.
    #[must_use]
    pub fn new(identity: Identity, input: T) -> Self {
        Self { input, identity }
    }

    /// Map the input type to a different type.
    pub fn map_input<U>(self, f: impl FnOnce(T) -> U) -> S3Request<U> {
        S3Request {
            input: f(self.input),
            identity: self.identity,
        }
    }
}
