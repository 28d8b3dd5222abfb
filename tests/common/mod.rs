//! Test utilities shared by the integration test crates.

#![allow(dead_code)]

use route_trie::*;

/// Route `env_logger` output through the test harness. Safe to call from
/// every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that route parameters contain expected key-value pair
pub fn assert_param_equals(params: &RouteParams, key: &str, expected: &str) {
    let value = params.get(key);
    assert!(
        value.is_some(),
        "Parameter '{}' not found in RouteParams",
        key
    );
    assert_eq!(
        value.unwrap(),
        expected,
        "Parameter '{}' has wrong value",
        key
    );
}

/// Assert that route parameters do NOT contain a key
pub fn assert_param_not_present(params: &RouteParams, key: &str) {
    assert!(
        params.get(key).is_none(),
        "Parameter '{}' should not be present",
        key
    );
}

/// Create RouteParams with multiple key-value pairs
pub fn params_with_multiple(pairs: Vec<(&str, &str)>) -> RouteParams {
    let mut params = RouteParams::new();
    for (key, value) in pairs {
        params.insert(key.to_string(), value.to_string());
    }
    params
}

/// Build a trie from `(method, pattern, value)` triples.
pub fn trie_of(routes: &[(&str, &str, &'static str)]) -> RouteTrie<&'static str> {
    let mut trie = RouteTrie::new();
    for (method, pattern, value) in routes {
        trie.add(method, pattern, *value);
    }
    trie
}

/// Value found for `method` and `path`, if any.
pub fn found(trie: &RouteTrie<&'static str>, method: &str, path: &str) -> Option<&'static str> {
    trie.lookup(method, path).map(|m| *m.value)
}
