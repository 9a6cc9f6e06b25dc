#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for the generator.
//!
//! Diagnostics go through `tracing`. Binaries call [`init`] once; libraries only emit
//! events, so a build script embedding the pipeline can install its own subscriber.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than once, or
/// after another subscriber was installed, is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Emits a debug event with a module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::debug!("[{}] {}", module, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("debug");
        init("not a valid filter ===");
        trace("TEST", "still logging after a second init");
    }
}
