//! Logging shim.
//!
//! The trie logs through three macros that forward to either the
//! [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! crate, selected by feature flag. Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros expand to nothing, so a
//! dependency-free build stays silent.
//!
//! Registration is logged at `debug`, per-segment lookup decisions at
//! `trace`, and registrations that are accepted but look like mistakes
//! (a zero-segment pattern passed to [`RouteTrie::add`](crate::RouteTrie::add))
//! at `warn`.
//!
//! ```ignore
//! use route_trie::{debug_log, trace_log};
//!
//! debug_log!("Registered {} {}", method, pattern);
//! trace_log!("Segment '{}' bound to parameter child", seg);
//! ```

/// Emit a **trace**-level log message.
///
/// Dispatches to `log::trace!` or `tracing::trace!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
///
/// Dispatches to `log::debug!` or `tracing::debug!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
///
/// Dispatches to `log::warn!` or `tracing::warn!` depending on the
/// enabled feature flag. Used for registrations the trie accepts but
/// drops, so they show up without enabling debug output.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
