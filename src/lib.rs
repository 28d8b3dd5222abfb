//! # route-trie
//!
//! A segment trie that answers one question for an HTTP server: given a
//! request method and path, which registered value applies, and what did the
//! path's parameter segments hold?
//!
//! The crate does no I/O. It is meant to sit inside a larger server that owns
//! the socket, parses requests, and calls whatever the returned value stands
//! for (usually a handler).
//!
//! ## Patterns
//!
//! | Pattern            | Matches                                         |
//! |--------------------|-------------------------------------------------|
//! | `/users`           | `/users` only                                   |
//! | `/users/:id`       | `/users/42`, binding `id = "42"`                |
//! | `/assets/`         | `/assets`, `/assets/app.js`, `/assets/a/b/c`    |
//! | `/assets...`       | same as `/assets/`                              |
//!
//! Methods are case-insensitive; path segments are not. When several routes
//! could apply, an exact match beats a prefix match, and at any depth a
//! literal segment beats a parameter.
//!
//! ## Example
//!
//! ```
//! use route_trie::RouteTrie;
//!
//! type Handler = fn(&route_trie::RouteParams) -> String;
//!
//! let mut routes: RouteTrie<Handler> = RouteTrie::new();
//! routes.add("GET", "/hello/:name", |p| format!("Hello, {}!", p.get("name").unwrap()));
//!
//! let m = routes.lookup("GET", "/hello/Mario").expect("route is registered");
//! assert_eq!((m.value)(&m.params), "Hello, Mario!");
//! ```
//!
//! ## Features
//!
//! - `log` (default) / `tracing`: logging backend, see [`logging`].
//! - `cache` (default): [`cache::LookupCache`], an LRU memo of lookups.
//! - `http`: `RouteTrie::lookup_request` for `http::Request`.
//!
//! ## Concurrency
//!
//! Build the trie first, then share it (`Arc<RouteTrie<T>>`) with request
//! handlers. Lookups are `&self` and lock-free. Adding routes while lookups
//! run needs an external `RwLock`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod logging;
mod node;
pub mod params;
pub mod segment;
pub mod trie;

#[cfg(feature = "cache")]
#[cfg_attr(docsrs, doc(cfg(feature = "cache")))]
pub mod cache;

#[cfg(feature = "http")]
mod request;

pub use error::RouteError;
pub use params::RouteParams;
pub use segment::{ColonParams, ParamRecognizer};
pub use trie::{MatchKind, RouteMatch, RouteTrie};
