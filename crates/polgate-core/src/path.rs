//! Request target decomposition (`/<version>/<account>/<container>/<object>`).
//!
//! The path is percent-decoded once and then split, so an encoded `%2F`
//! separates segments exactly like a literal `/`. Splitting follows the
//! proxy's rules: the path must be absolute, the version segment must be
//! present, and everything after the container folds into the object name
//! (so objects may contain `/`).

use std::borrow::Cow;

use http::Method;
use percent_encoding::percent_decode_str;

/// Path segments borrowed from the split input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegments<'a> {
    pub version: &'a str,
    pub account: Option<&'a str>,
    pub container: Option<&'a str>,
    pub object: Option<&'a str>,
}

/// Split a request path into at most four segments.
///
/// Returns `None` for paths the proxy itself would refuse to route.
pub fn split_path(path: &str) -> Option<PathSegments<'_>> {
    let mut segs = path.splitn(5, '/');

    // Leading segment is whatever precedes the first '/'; it must be empty.
    if !segs.next()?.is_empty() {
        return None;
    }
    let version = segs.next().filter(|v| !v.is_empty())?;

    Some(PathSegments {
        version,
        account: segs.next(),
        container: segs.next(),
        object: segs.next(),
    })
}

/// Why a request skips constraint checking entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passthrough {
    /// Method is not an object write.
    Method,
    /// Path could not be split.
    MalformedPath,
    /// Path does not address an object (missing or empty segment).
    NotObject,
}

impl Passthrough {
    pub fn as_str(self) -> &'static str {
        match self {
            Passthrough::Method => "method",
            Passthrough::MalformedPath => "malformed_path",
            Passthrough::NotObject => "not_object",
        }
    }
}

/// Decoded target of an object write.
///
/// Account, container and object are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub version: String,
    pub account: String,
    pub container: String,
    pub object: String,
}

impl RequestDescriptor {
    /// Decompose `path` into an object target. Method filtering is the
    /// caller's concern; the method is only recorded here.
    pub fn parse(method: &Method, path: &str) -> Result<Self, Passthrough> {
        let decoded = unquote(path);
        let segs = split_path(&decoded).ok_or(Passthrough::MalformedPath)?;

        let account = non_empty(segs.account)?;
        let container = non_empty(segs.container)?;
        let object = non_empty(segs.object)?;

        Ok(Self {
            method: method.clone(),
            version: segs.version.to_string(),
            account: account.to_string(),
            container: container.to_string(),
            object: object.to_string(),
        })
    }
}

fn non_empty(seg: Option<&str>) -> Result<&str, Passthrough> {
    seg.filter(|s| !s.is_empty()).ok_or(Passthrough::NotObject)
}

/// Percent-decode a request path.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so such writes
/// are still validated. Each replaced byte grows by two, which can only make
/// byte-length limits stricter.
pub fn unquote(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}
