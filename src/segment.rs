//! Path-segment utilities shared by registration and lookup.
//!
//! # Pattern grammar
//!
//! - Segments are separated by `/`; empty segments (leading, trailing or
//!   doubled separators) are dropped, so `"users/:id"`, `"/users/:id"` and
//!   `"//users//:id"` describe the same route.
//! - A segment the active [`ParamRecognizer`] accepts is a named parameter.
//!   The default, [`ColonParams`], accepts segments starting with `:`.
//! - A pattern ending in `/` or `...` is a prefix pattern. The `...` marker is
//!   removed before splitting.
//!
//! Path segments are compared byte for byte. Only the HTTP method is
//! case-normalized (see [`normalize_method`]).

use std::borrow::Cow;

/// Marker that turns a pattern into a prefix pattern, in addition to a
/// trailing `/`.
pub const ELLIPSIS: &str = "...";

/// A route pattern split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    /// Non-empty `/`-delimited segments, in order.
    pub segments: Vec<&'a str>,
    /// Whether the pattern also matches any path extending past `segments`.
    pub prefix: bool,
}

impl<'a> Pattern<'a> {
    /// Parse a registration pattern.
    ///
    /// ```
    /// use route_trie::segment::Pattern;
    ///
    /// let p = Pattern::parse("/static/...");
    /// assert_eq!(p.segments, vec!["static"]);
    /// assert!(p.prefix);
    ///
    /// let p = Pattern::parse("/users/:id");
    /// assert_eq!(p.segments, vec!["users", ":id"]);
    /// assert!(!p.prefix);
    /// ```
    pub fn parse(pattern: &'a str) -> Self {
        let (body, ellipsis) = match pattern.strip_suffix(ELLIPSIS) {
            Some(body) => (body, true),
            None => (pattern, false),
        };

        Self {
            segments: split_path(body).collect(),
            prefix: ellipsis || pattern.ends_with('/'),
        }
    }

    /// True when the pattern has no segments and therefore cannot be registered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Split a path into its non-empty segments.
///
/// ```
/// use route_trie::segment::split_path;
///
/// assert_eq!(split_path("/users/123").collect::<Vec<_>>(), vec!["users", "123"]);
/// assert_eq!(split_path("//a///b/").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(split_path("/").count(), 0);
/// ```
pub fn split_path(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split('/').filter(|s| !s.is_empty())
}

/// Canonical (ASCII uppercase) form of an HTTP method.
///
/// Borrows when the method is already uppercase, which is the common case
/// for methods coming out of an HTTP parser.
pub fn normalize_method(method: &str) -> Cow<'_, str> {
    if method.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(method.to_ascii_uppercase())
    } else {
        Cow::Borrowed(method)
    }
}

/// Whether `method` is a valid RFC 9110 token (`1*tchar`).
pub fn is_method_token(method: &str) -> bool {
    !method.is_empty()
        && method.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

/// Decides which pattern segments are parameters and what they are called.
///
/// The returned name becomes the key in the [`RouteParams`](crate::RouteParams)
/// produced by a lookup. A recognizer is consulted only while routes are
/// added, never on the lookup path.
///
/// Any `Fn(&str) -> Option<String>` closure that is `Send + Sync` is a
/// recognizer:
///
/// ```
/// use route_trie::RouteTrie;
///
/// // `{id}` style placeholders instead of `:id`.
/// let mut trie = RouteTrie::with_recognizer(|seg: &str| {
///     seg.strip_prefix('{')
///         .and_then(|s| s.strip_suffix('}'))
///         .map(str::to_string)
/// });
/// trie.add("GET", "/users/{id}", 1);
///
/// let m = trie.lookup("GET", "/users/7").unwrap();
/// assert_eq!(m.params.get("id"), Some(&"7".to_string()));
/// ```
pub trait ParamRecognizer: Send + Sync {
    /// Return the parameter name if `segment` is a parameter.
    fn param_name(&self, segment: &str) -> Option<String>;
}

impl<F> ParamRecognizer for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn param_name(&self, segment: &str) -> Option<String> {
        self(segment)
    }
}

/// Default recognizer: `:name` segments are parameters.
///
/// All leading colons are stripped, so `::id` names the parameter `id` and a
/// bare `:` names it `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColonParams;

impl ParamRecognizer for ColonParams {
    fn param_name(&self, segment: &str) -> Option<String> {
        segment
            .starts_with(':')
            .then(|| segment.trim_start_matches(':').to_string())
    }
}
