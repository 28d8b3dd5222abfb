//! Registration errors.
//!
//! Lookups never fail with an error: a path either matches or it does not.
//! [`RouteTrie::add`](crate::RouteTrie::add) is equally forgiving and drops
//! patterns it cannot register. Callers that would rather hear about such
//! mistakes at startup use [`RouteTrie::try_add`](crate::RouteTrie::try_add),
//! which reports them as a [`RouteError`].
//!
//! # Examples
//!
//! ```
//! use route_trie::{RouteError, RouteTrie};
//!
//! let mut trie = RouteTrie::new();
//! let err = trie.try_add("GET", "///", ()).unwrap_err();
//! assert!(matches!(err, RouteError::EmptyPattern { .. }));
//! assert_eq!(err.to_string(), "Pattern has no path segments: ///");
//! ```

use std::fmt;

/// Reasons [`RouteTrie::try_add`](crate::RouteTrie::try_add) refuses a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The pattern has no segments once separators and the prefix marker
    /// are removed (`""`, `"/"`, `"..."`).
    EmptyPattern { pattern: String },

    /// The method is empty or contains characters outside the HTTP token set.
    InvalidMethod { method: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::EmptyPattern { pattern } => {
                write!(f, "Pattern has no path segments: {}", pattern)
            }
            RouteError::InvalidMethod { method } => {
                write!(f, "Invalid HTTP method: {:?}", method)
            }
        }
    }
}

impl std::error::Error for RouteError {}
