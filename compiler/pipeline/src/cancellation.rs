//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag
///
/// Clones observe the same flag. Workers check it before taking new work; work already
/// started runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self { Self::default() }

    /// Request cancellation
    pub fn cancel(&self) { self.flag.store(true, Ordering::SeqCst); }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool { self.flag.load(Ordering::SeqCst) }

    /// The underlying flag, for signal handlers
    pub fn flag(&self) -> Arc<AtomicBool> { Arc::clone(&self.flag) }
}
