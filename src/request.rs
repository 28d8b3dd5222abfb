//! Lookup from an [`http::Request`].
//!
//! Available with the `http` feature. The request URI's path is used as-is:
//! the query string is never part of it, and percent-escapes are not
//! decoded, so `/files/a%2Fb` is a single segment `a%2Fb`.

use crate::trie::{RouteMatch, RouteTrie};

impl<T> RouteTrie<T> {
    /// Look up the route for `req`'s method and URI path.
    ///
    /// ```
    /// use route_trie::RouteTrie;
    ///
    /// let routes = RouteTrie::new().route("GET", "/ping/:pong", "ping");
    ///
    /// let req = http::Request::get("http://localhost/ping/mario?verbose=1")
    ///     .body(())
    ///     .unwrap();
    /// let m = routes.lookup_request(&req).unwrap();
    /// assert_eq!(*m.value, "ping");
    /// assert_eq!(m.params.get("pong"), Some(&"mario".to_string()));
    /// ```
    pub fn lookup_request<B>(&self, req: &http::Request<B>) -> Option<RouteMatch<'_, T>> {
        self.lookup(req.method().as_str(), req.uri().path())
    }
}
