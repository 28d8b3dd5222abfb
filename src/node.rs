//! Trie node.
//!
//! A node stands for one path segment. Its outgoing edges are keyed by the
//! pair (method, literal segment), stored as a method map of segment maps
//! so a lookup can probe both levels with borrowed `&str` keys. All
//! parameter segments share one reserved edge, `param`.

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// method -> literal segment -> child
    literals: HashMap<String, HashMap<String, Node<T>>>,
    /// The single parameter child, shared by every method.
    param: Option<Box<Node<T>>>,
    /// Names bound to the segment that leads into this node through a
    /// parameter edge. Grows as methods register the same shape under
    /// different names; never shrinks.
    pub(crate) param_names: Vec<String>,
    /// Values of routes terminating here, by normalized method.
    values: HashMap<String, T>,
    /// Set by the last registration that terminated here.
    pub(crate) prefix: bool,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            param: None,
            param_names: Vec::new(),
            values: HashMap::new(),
            prefix: false,
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn literal_child(&self, method: &str, segment: &str) -> Option<&Node<T>> {
        self.literals.get(method)?.get(segment)
    }

    pub(crate) fn literal_child_mut(&mut self, method: &str, segment: &str) -> &mut Node<T> {
        self.literals
            .entry(method.to_string())
            .or_default()
            .entry(segment.to_string())
            .or_default()
    }

    pub(crate) fn param_child(&self) -> Option<&Node<T>> {
        self.param.as_deref()
    }

    pub(crate) fn param_child_mut(&mut self) -> &mut Node<T> {
        self.param.get_or_insert_with(Box::default)
    }

    pub(crate) fn value(&self, method: &str) -> Option<&T> {
        self.values.get(method)
    }

    /// Store `value` for `method`, returning true if the slot was empty.
    pub(crate) fn set_value(&mut self, method: &str, value: T) -> bool {
        self.values.insert(method.to_string(), value).is_none()
    }
}
