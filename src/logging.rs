/// Conditional logging for development builds
///
/// The `debug_log!` macro forwards to `log::debug!` and is compiled out of
/// production (release) builds by default.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Nothing is printed unless the host program installs a logger
/// (for example `env_logger::init()`).
///
/// # Examples
///
/// ```rust
/// use subway_graph::logging::debug_log;
///
/// let line_id = 7;
/// debug_log!("segment added to line {line_id}");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg)+);
        }
    };
}

pub use crate::debug_log;
