//! Logging facilities for Vitrine.
//!
//! Vitrine uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The `gallery` binary does this for you, honoring `RUST_LOG`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "vitrine_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "vitrine_core::signal";
    /// Model/adapter layer target.
    pub const MODEL: &str = "vitrine::model";
    /// Widget layer target.
    pub const WIDGET: &str = "vitrine::widget";
    /// Gallery screens target.
    pub const GALLERY: &str = "vitrine_gallery";
}

/// Wrappers around the `tracing` macros with a consistent target name.
#[macro_export]
macro_rules! vitrine_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "vitrine_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! vitrine_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "vitrine_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! vitrine_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "vitrine_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! vitrine_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "vitrine_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! vitrine_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "vitrine_core", $($arg)*)
    };
}
