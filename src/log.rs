//! Diagnostic events. They are forwarded to `tracing` when the `tracing` feature is
//! enabled and compile to nothing otherwise.

macro_rules! trace_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    }};
}

macro_rules! debug_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    }};
}
