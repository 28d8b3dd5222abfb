//! Literal, parameter and method matching.

use crate::common::{found, trie_of};
use route_trie::{MatchKind, RouteTrie};

#[test]
fn test_round_trip_literal_routes() {
    let trie = trie_of(&[
        ("GET", "/one", "one"),
        ("GET", "/two", "two"),
        ("GET", "/parent/child/one", "nested1"),
        ("GET", "/parent/child/two", "nested2"),
    ]);

    for (path, want) in [
        ("/one", "one"),
        ("/two", "two"),
        ("/parent/child/one", "nested1"),
        ("/parent/child/two", "nested2"),
    ] {
        let m = trie.lookup("GET", path).unwrap();
        assert_eq!(*m.value, want, "{path}");
        assert!(m.params.is_empty());
        assert_eq!(m.kind, MatchKind::Exact);
    }
}

#[test]
fn test_method_case_insensitive() {
    let trie = trie_of(&[
        ("GET", "/x", "x"),
        ("get", "/lower", "lower"),
        ("Get", "/mixed", "mixed"),
    ]);

    for method in ["GET", "get", "Get", "gEt"] {
        assert_eq!(found(&trie, method, "/x"), Some("x"));
        assert_eq!(found(&trie, method, "/lower"), Some("lower"));
        assert_eq!(found(&trie, method, "/mixed"), Some("mixed"));
    }
}

#[test]
fn test_method_isolation() {
    let trie = trie_of(&[
        ("GET", "/method1", "method1"),
        ("DELETE", "/method2", "method2"),
    ]);

    assert_eq!(found(&trie, "POST", "/method1"), None);
    assert_eq!(found(&trie, "PUT", "/method1"), None);
    assert_eq!(found(&trie, "GET", "/method2"), None);
    assert_eq!(found(&trie, "DELETE", "/method2"), Some("method2"));
}

#[test]
fn test_same_path_different_methods() {
    let trie = trie_of(&[
        ("GET", "/items/:id", "show"),
        ("PUT", "/items/:id", "update"),
        ("DELETE", "/items/:id", "destroy"),
    ]);

    assert_eq!(found(&trie, "GET", "/items/1"), Some("show"));
    assert_eq!(found(&trie, "PUT", "/items/1"), Some("update"));
    assert_eq!(found(&trie, "DELETE", "/items/1"), Some("destroy"));
    assert_eq!(found(&trie, "PATCH", "/items/1"), None);
}

#[test]
fn test_segments_are_case_sensitive() {
    let trie = trie_of(&[("GET", "/About", "about")]);
    assert_eq!(found(&trie, "GET", "/About"), Some("about"));
    assert_eq!(found(&trie, "GET", "/about"), None);
}

#[test]
fn test_no_match_beyond_registered_depth() {
    let trie = trie_of(&[("GET", "/a/b", "ab"), ("POST", "/not/enough/items", "items")]);

    assert_eq!(found(&trie, "GET", "/a/b/c"), None);
    assert_eq!(found(&trie, "POST", "/not/enough"), None);
    assert_eq!(found(&trie, "GET", "/a"), None);
}

#[test]
fn test_literal_beats_param() {
    let trie = trie_of(&[("GET", "/users/:id", "param"), ("GET", "/users/me", "literal")]);

    let m = trie.lookup("GET", "/users/me").unwrap();
    assert_eq!(*m.value, "literal");
    assert!(m.params.is_empty());

    let m = trie.lookup("GET", "/users/42").unwrap();
    assert_eq!(*m.value, "param");
}

#[test]
fn test_literal_for_other_method_does_not_shadow_param() {
    // Literal edges are keyed by method, so a POST literal leaves GET
    // traffic on the parameter edge.
    let trie = trie_of(&[("GET", "/users/:id", "get_user"), ("POST", "/users/me", "post_me")]);

    let m = trie.lookup("GET", "/users/me").unwrap();
    assert_eq!(*m.value, "get_user");
    assert_eq!(m.params.get("id"), Some(&"me".to_string()));
}

#[test]
fn test_intermediate_nodes_hold_no_value() {
    let trie = trie_of(&[("GET", "/a/b/c", "abc")]);
    assert_eq!(found(&trie, "GET", "/a"), None);
    assert_eq!(found(&trie, "GET", "/a/b"), None);
}

#[test]
fn test_empty_trie() {
    let trie: RouteTrie<()> = RouteTrie::new();
    assert!(trie.is_empty());
    assert!(trie.lookup("GET", "/anything").is_none());
    assert!(trie.lookup("GET", "").is_none());
}
