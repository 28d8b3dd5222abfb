//! Unit tests module
//!
//! Each file exercises one part of the public API through `RouteTrie`.

mod matching; // literal, parameter and method matching
