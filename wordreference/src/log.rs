//! Logging macros that compile to nothing unless the `log` feature is enabled.

#[cfg(feature = "log")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "log"))]
macro_rules! disabled {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "log"))]
pub(crate) use {disabled as debug, disabled as trace, disabled as warn};
