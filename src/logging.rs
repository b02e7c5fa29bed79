//! Logging macros that forward to `tracing` when the `logging` feature is
//! enabled and expand to nothing otherwise.

// Not every level is used by every module. Squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(tracing::trace!($($tt)*)) }
}
