//! Cooperative cancellation shared between the command and the clone loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag raised once (for example on Ctrl-C) and polled between steps
///
/// Clones share the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
