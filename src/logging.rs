//! Logging macros.
//!
//! The engine logs through these macros so the backend is a feature choice:
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Enable at most one. With neither, the macros expand to nothing.
//!
//! Levels used by the crate:
//!
//! - `trace_log!`: per-node decisions while walking the tree, cache hits.
//! - `debug_log!`: route table summaries, guard denials, navigation.
//! - `info_log!`: configuration loaded, roles or auth state changed.
//! - `warn_log!`: ignored user role names, suspicious bindings.
//! - `error_log!`: configuration rejected.
//!
//! ```ignore
//! use teamflow_nav::{debug_log, warn_log};
//!
//! debug_log!("Built route table with {} bindings", table.len());
//! warn_log!("Ignoring unknown role '{}'", name);
//! ```

/// Emit a trace-level message through the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a debug-level message through the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an info-level message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a warn-level message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an error-level message.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
