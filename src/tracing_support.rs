//! Tracing support for graph mutations.
//!
//! With the `tracing` feature enabled, the event macros here forward to the
//! `tracing` crate and [`init_tracing`] installs a `fmt` subscriber.  With the
//! feature disabled, the macros expand to nothing and [`init_tracing`] is a
//! no-op, so callers never need their own `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a global `fmt` subscriber, once per process.  `verbose`
    /// lowers the level filter from `INFO` to `TRACE`, which makes the
    /// per-operation events emitted by [`Graph`](crate::Graph) visible.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::TRACE } else { Level::INFO };
            // Another subscriber may already be installed by the host
            // application; keep that one.
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use {debug_event, trace_event};
