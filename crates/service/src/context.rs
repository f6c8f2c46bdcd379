use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::ServiceError;

/// Caller-owned cancellation signal handed to every catalog operation.
///
/// Clones share the same flag. Operations only look at it before doing any
/// work; once the synchronous computation has started it runs to completion.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    cancelled: Arc<AtomicBool>,
}

impl CallContext {
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) { self.cancelled.store(true, Ordering::Release); }

    pub fn is_cancelled(&self) -> bool { self.cancelled.load(Ordering::Acquire) }

    /// `Err(Cancelled)` once [`CallContext::cancel`] has been called on any clone.
    pub fn check(&self) -> Result<(), ServiceError> {
        if self.is_cancelled() { Err(ServiceError::Cancelled) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_visible_through_clones() {
        let ctx = CallContext::new();
        let other = ctx.clone();
        assert!(ctx.check().is_ok());
        other.cancel();
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.check(), Err(ServiceError::Cancelled));
    }
}
