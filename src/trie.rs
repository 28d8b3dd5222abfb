//! The route trie.
//!
//! # Matching rules
//!
//! A lookup walks the request path one segment at a time, without
//! backtracking:
//!
//! 1. At each node, a literal edge for `(method, segment)` is taken before
//!    the parameter edge.
//! 2. Every node passed on the way down that was registered as a prefix and
//!    holds a value for the method becomes the current fallback. Deeper ones
//!    replace shallower ones.
//! 3. If the whole path is consumed and the final node holds a value for the
//!    method, that is an exact match. Otherwise the fallback, if any, is a
//!    prefix match. Otherwise nothing matches.
//!
//! Work per lookup is linear in the number of path segments and independent
//! of how many routes are registered.
//!
//! # Sharing
//!
//! [`RouteTrie::lookup`] takes `&self` and never mutates, so a fully built
//! trie can sit behind an `Arc` and serve any number of threads or tasks
//! without locking. Registering routes while lookups are running requires an
//! external lock (e.g. `RwLock<RouteTrie<T>>`); the trie does not
//! synchronize internally.

use crate::error::RouteError;
use crate::node::Node;
use crate::params::RouteParams;
use crate::segment::{
    is_method_token, normalize_method, split_path, ColonParams, ParamRecognizer, Pattern,
};
use crate::{debug_log, trace_log, warn_log};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TRIE_ID: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// Match result
// ============================================================================

/// How a lookup matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The path ended on a node holding a value for the method.
    Exact,
    /// The path ran past a prefix route registered for the method.
    Prefix,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, T> {
    /// The registered value.
    pub value: &'a T,
    /// Parameters bound along the matched part of the path.
    pub params: RouteParams,
    /// Whether the value came from an exact or a prefix route.
    pub kind: MatchKind,
}

impl<'a, T> RouteMatch<'a, T> {
    /// True when the value came from a prefix route.
    pub fn is_prefix(&self) -> bool {
        self.kind == MatchKind::Prefix
    }
}

// ============================================================================
// RouteTrie
// ============================================================================

/// Maps (HTTP method, path pattern) pairs to values of type `T`.
///
/// # Example
///
/// ```
/// use route_trie::{MatchKind, RouteTrie};
///
/// let mut routes = RouteTrie::new();
/// routes.add("GET", "/users/:id", "show_user");
/// routes.add("GET", "/users/me", "show_self");
/// routes.add("GET", "/assets/", "serve_asset");
///
/// let m = routes.lookup("get", "/users/42").unwrap();
/// assert_eq!(*m.value, "show_user");
/// assert_eq!(m.params.get("id"), Some(&"42".to_string()));
///
/// // Literal segments win over parameters at the same depth.
/// assert_eq!(*routes.lookup("GET", "/users/me").unwrap().value, "show_self");
///
/// let m = routes.lookup("GET", "/assets/css/site.css").unwrap();
/// assert_eq!(*m.value, "serve_asset");
/// assert_eq!(m.kind, MatchKind::Prefix);
///
/// assert!(routes.lookup("POST", "/users/42").is_none());
/// ```
pub struct RouteTrie<T> {
    root: Node<T>,
    recognizer: Box<dyn ParamRecognizer>,
    id: u64,
    len: usize,
    generation: u64,
}

impl<T> RouteTrie<T> {
    /// Create an empty trie that recognizes `:name` parameters.
    pub fn new() -> Self {
        Self::with_recognizer(ColonParams)
    }

    /// Create an empty trie with a custom parameter recognizer.
    pub fn with_recognizer<R>(recognizer: R) -> Self
    where
        R: ParamRecognizer + 'static,
    {
        Self {
            root: Node::default(),
            recognizer: Box::new(recognizer),
            id: NEXT_TRIE_ID.fetch_add(1, Ordering::Relaxed),
            len: 0,
            generation: 0,
        }
    }

    /// Replace the parameter recognizer.
    ///
    /// Only routes added afterwards are affected; existing nodes keep the
    /// parameter edges they were built with.
    pub fn set_recognizer<R>(&mut self, recognizer: R)
    where
        R: ParamRecognizer + 'static,
    {
        self.recognizer = Box::new(recognizer);
    }

    /// Builder-style [`add`](Self::add).
    ///
    /// ```
    /// use route_trie::RouteTrie;
    ///
    /// let routes = RouteTrie::new()
    ///     .route("GET", "/", 0)
    ///     .route("GET", "/health", 1)
    ///     .route("POST", "/jobs/:id/cancel", 2);
    ///
    /// // "/" has no segments and is never registered.
    /// assert_eq!(routes.len(), 2);
    /// ```
    pub fn route(mut self, method: &str, pattern: &str, value: T) -> Self {
        self.add(method, pattern, value);
        self
    }

    /// Register `value` for `method` and `pattern`.
    ///
    /// - `method` is matched case-insensitively.
    /// - Segments accepted by the recognizer (`:name` by default) bind the
    ///   corresponding request segment under `name`.
    /// - A pattern ending in `/` or `...` is a prefix route: it also matches
    ///   any longer path, unless a more specific route matches exactly.
    ///
    /// Registering the same method and pattern again replaces the value.
    /// A pattern without segments (`""`, `"/"`, `"..."`) is ignored; use
    /// [`try_add`](Self::try_add) to have that reported instead.
    pub fn add(&mut self, method: &str, pattern: &str, value: T) {
        let parsed = Pattern::parse(pattern);
        if parsed.is_empty() {
            warn_log!("Ignoring route {} '{}': pattern has no segments", method, pattern);
            return;
        }
        self.insert(method, pattern, &parsed, value);
    }

    /// Like [`add`](Self::add), but rejects a pattern without segments and a
    /// method that is not a valid HTTP token.
    ///
    /// ```
    /// use route_trie::{RouteError, RouteTrie};
    ///
    /// let mut routes = RouteTrie::new();
    /// assert!(routes.try_add("GET", "/ok", ()).is_ok());
    /// assert_eq!(
    ///     routes.try_add("", "/ok", ()),
    ///     Err(RouteError::InvalidMethod { method: String::new() })
    /// );
    /// ```
    pub fn try_add(&mut self, method: &str, pattern: &str, value: T) -> Result<(), RouteError> {
        if !is_method_token(method) {
            return Err(RouteError::InvalidMethod {
                method: method.to_string(),
            });
        }

        let parsed = Pattern::parse(pattern);
        if parsed.is_empty() {
            return Err(RouteError::EmptyPattern {
                pattern: pattern.to_string(),
            });
        }

        self.insert(method, pattern, &parsed, value);
        Ok(())
    }

    fn insert(&mut self, method: &str, _pattern: &str, parsed: &Pattern<'_>, value: T) {
        let method = normalize_method(method);

        let mut curr = &mut self.root;
        for seg in &parsed.segments {
            curr = match self.recognizer.param_name(seg) {
                Some(name) => {
                    let child = curr.param_child_mut();
                    child.param_names.push(name);
                    child
                }
                None => curr.literal_child_mut(&method, seg),
            };
        }

        if curr.set_value(&method, value) {
            self.len += 1;
        }
        curr.prefix = parsed.prefix;
        self.generation += 1;

        debug_log!(
            "Registered {} '{}' ({} segments, prefix: {})",
            method,
            _pattern,
            parsed.segments.len(),
            parsed.prefix
        );
    }

    /// Find the value registered for `method` and `path`.
    ///
    /// `path` must already be percent-decoded and stripped of any query
    /// string. Returns `None` when nothing matches, including for paths
    /// without segments.
    ///
    /// An exact match always wins over a prefix match. On a prefix match,
    /// only the parameters bound before reaching the prefix route are
    /// returned.
    pub fn lookup(&self, method: &str, path: &str) -> Option<RouteMatch<'_, T>> {
        let method = normalize_method(method);

        let mut bound: Vec<(&str, &str)> = Vec::new();
        // (value, number of bindings made before the prefix node)
        let mut fallback: Option<(&T, usize)> = None;
        let mut consumed_all = true;
        let mut any_segment = false;

        let mut curr = &self.root;
        for seg in split_path(path) {
            any_segment = true;

            if curr.prefix {
                if let Some(value) = curr.value(&method) {
                    fallback = Some((value, bound.len()));
                }
            }

            if let Some(next) = curr.literal_child(&method, seg) {
                curr = next;
                continue;
            }

            if let Some(next) = curr.param_child() {
                bound.extend(next.param_names.iter().map(|name| (name.as_str(), seg)));
                curr = next;
                continue;
            }

            if fallback.is_none() {
                trace_log!("No route for {} '{}': stuck at segment '{}'", method, path, seg);
                return None;
            }
            consumed_all = false;
            break;
        }

        if !any_segment {
            return None;
        }

        if consumed_all {
            if let Some(value) = curr.value(&method) {
                trace_log!("Exact match for {} '{}'", method, path);
                return Some(RouteMatch {
                    value,
                    params: collect_params(&bound),
                    kind: MatchKind::Exact,
                });
            }
        }

        match fallback {
            Some((value, depth)) => {
                trace_log!("Prefix match for {} '{}'", method, path);
                Some(RouteMatch {
                    value,
                    params: collect_params(&bound[..depth]),
                    kind: MatchKind::Prefix,
                })
            }
            None => {
                trace_log!("No route for {} '{}'", method, path);
                None
            }
        }
    }

    /// Number of registered (method, route) pairs. Re-registering an
    /// existing pair does not change it.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Identifier unique to this trie within the process.
    #[cfg_attr(not(feature = "cache"), allow(dead_code))]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Counter bumped by every successful registration, including ones that
    /// overwrite. Lets caches detect that the trie changed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn collect_params(bound: &[(&str, &str)]) -> RouteParams {
    let mut params = RouteParams::new();
    for (name, value) in bound {
        params.insert((*name).to_string(), (*value).to_string());
    }
    params
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RouteTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTrie")
            .field("len", &self.len)
            .field("generation", &self.generation)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
