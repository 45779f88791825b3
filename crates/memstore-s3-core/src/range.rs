//! HTTP `Range` resolution against an object's logical length.
//!
//! Only a single `bytes=` range is honoured. Anything else (another unit, a
//! multi-range list, garbage) resolves to the full object without a
//! `Content-Range` header, the way S3 ignores ranges it cannot parse.
//!
//! | Header | Result on an object of length `L` |
//! |--------|-----------------------------------|
//! | `bytes=a-b` | `a..=min(b, L-1)`; `InvalidRange` if `a >= L` |
//! | `bytes=a-` | `a..=L-1`; `InvalidRange` if `a >= L` |
//! | `bytes=-n` | last `n` bytes (all of them if `n >= L`); `InvalidRange` if `n == 0` |

use crate::error::S3ServiceError;

/// A parsed single byte-range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteRange {
    /// `bytes=<start>-<end>`.
    Bounded { start: u64, end: u64 },
    /// `bytes=<start>-`.
    From { start: u64 },
    /// `bytes=-<len>`.
    Suffix { len: u64 },
}

/// Parse a `Range` header value. `None` for anything that is not a single,
/// well-formed `bytes=` range.
fn parse(header: &str) -> Option<ByteRange> {
    let spec = header.trim().strip_prefix("bytes=")?;
    if spec.contains(',') {
        return None;
    }
    let (first, last) = spec.split_once('-')?;
    let first = first.trim();
    let last = last.trim();
    let parse_num = |s: &str| -> Option<u64> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    };

    match (first.is_empty(), last.is_empty()) {
        (true, true) => None,
        (true, false) => parse_num(last).map(|len| ByteRange::Suffix { len }),
        (false, true) => parse_num(first).map(|start| ByteRange::From { start }),
        (false, false) => {
            let start = parse_num(first)?;
            let end = parse_num(last)?;
            (start <= end).then_some(ByteRange::Bounded { start, end })
        }
    }
}

/// The span of an object to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeResolution {
    /// First byte served (inclusive).
    pub start: u64,
    /// Last byte served (inclusive). Meaningless when `total == 0`.
    pub end: u64,
    /// Logical length of the object.
    pub total: u64,
    /// Whether a sub-range is being served (HTTP 206).
    pub partial: bool,
}

/// Response headers derived from a [`RangeResolution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeHeaders {
    /// `Content-Length` of the served span.
    pub content_length: u64,
    /// `Content-Range`, only on partial responses.
    pub content_range: Option<String>,
    /// `Accept-Ranges`, only on partial responses.
    pub accept_ranges: Option<&'static str>,
}

impl RangeResolution {
    /// Serve the whole object.
    #[must_use]
    pub fn full(total: u64) -> Self {
        Self {
            start: 0,
            end: total.saturating_sub(1),
            total,
            partial: false,
        }
    }

    /// Number of bytes served.
    #[must_use]
    pub fn content_length(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// The inclusive span to read, or `None` for the whole (possibly empty)
    /// object.
    #[must_use]
    pub fn span(&self) -> Option<(u64, u64)> {
        self.partial.then_some((self.start, self.end))
    }

    /// Response headers for this resolution.
    #[must_use]
    pub fn headers(&self) -> RangeHeaders {
        if self.partial {
            RangeHeaders {
                content_length: self.content_length(),
                content_range: Some(format!(
                    "bytes {}-{}/{}",
                    self.start, self.end, self.total
                )),
                accept_ranges: Some("bytes"),
            }
        } else {
            RangeHeaders {
                content_length: self.content_length(),
                content_range: None,
                accept_ranges: None,
            }
        }
    }
}

/// Resolve an optional `Range` header against an object of length `total`.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidRange`] when a well-formed range cannot
/// be satisfied: its start lies at or beyond the end of the object, or it
/// asks for a zero-length suffix.
///
/// # Examples
///
/// ```
/// use memstore_s3_core::range::resolve_range;
///
/// let r = resolve_range(Some("bytes=10-99"), 200).unwrap();
/// assert_eq!((r.start, r.end), (10, 99));
/// assert_eq!(r.headers().content_range.as_deref(), Some("bytes 10-99/200"));
///
/// let full = resolve_range(Some("bytes=-"), 200).unwrap();
/// assert!(!full.partial);
/// ```
pub fn resolve_range(header: Option<&str>, total: u64) -> Result<RangeResolution, S3ServiceError> {
    let Some(range) = header.and_then(parse) else {
        return Ok(RangeResolution::full(total));
    };

    let (start, end) = match range {
        ByteRange::Bounded { start, end } => {
            if start >= total {
                return Err(S3ServiceError::InvalidRange);
            }
            (start, end.min(total - 1))
        }
        ByteRange::From { start } => {
            if start >= total {
                return Err(S3ServiceError::InvalidRange);
            }
            (start, total - 1)
        }
        ByteRange::Suffix { len } => {
            if len == 0 {
                return Err(S3ServiceError::InvalidRange);
            }
            if total == 0 {
                return Ok(RangeResolution::full(0));
            }
            (total - len.min(total), total - 1)
        }
    };

    Ok(RangeResolution {
        start,
        end,
        total,
        partial: true,
    })
}
