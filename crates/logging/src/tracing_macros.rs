//! crates/logging/src/tracing_macros.rs
//! Convenience macros for bdelta subsystem tracing.
//!
//! These macros wrap the standard tracing macros with fixed targets so the
//! subscriber filter can address each subsystem independently. Crates using
//! them must depend on `tracing` directly.

/// Emit a sequence-alignment trace.
///
/// # Example
/// ```ignore
/// trace_align!("middle snake at ({}, {})", x, y);
/// ```
#[macro_export]
macro_rules! trace_align {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "bdelta::align", $($arg)*);
    };
}

/// Emit a patch-building trace.
///
/// # Example
/// ```ignore
/// trace_build!("built patch with {} operations", count);
/// ```
#[macro_export]
macro_rules! trace_build {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "bdelta::build", $($arg)*);
    };
}

/// Emit a patch-application trace.
///
/// # Example
/// ```ignore
/// trace_apply!("replaying {} operations", count);
/// ```
#[macro_export]
macro_rules! trace_apply {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "bdelta::apply", $($arg)*);
    };
}

/// Emit a serialization trace.
///
/// # Example
/// ```ignore
/// trace_codec!("encoded {} bytes", len);
/// ```
#[macro_export]
macro_rules! trace_codec {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "bdelta::codec", $($arg)*);
    };
}

/// Emit an I/O operation trace.
///
/// # Example
/// ```ignore
/// trace_io!("read {} bytes from {}", count, path.display());
/// ```
#[macro_export]
macro_rules! trace_io {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "bdelta::io", $($arg)*);
    };
}

/// Emit a user-facing summary at `info` level.
///
/// # Example
/// ```ignore
/// trace_stats!("{} operations, {} bytes inserted", ops, bytes);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "bdelta::stats", $($arg)*);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_subscriber() {
        crate::trace_align!("align {}", 1);
        crate::trace_build!("build {}", 2);
        crate::trace_apply!("apply {}", 3);
        crate::trace_codec!("codec {}", 4);
        crate::trace_io!("io {}", 5);
        crate::trace_stats!("stats {}", 6);
    }
}
