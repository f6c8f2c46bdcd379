//! Transport-neutral execution of catalog calls.

use std::time::Instant;

use service::{CallContext, ServiceError};
use tracing::{info, warn};

use crate::state::{AppState, Catalog};

/// Cancels the call's context if the caller is dropped before the engine finishes.
struct CancelOnDrop(CallContext);

impl Drop for CancelOnDrop {
    fn drop(&mut self) { self.0.cancel(); }
}

/// Run one engine call off the async workers and record its outcome under `method`.
///
/// `items` counts the entries of a successful response for the size histogram.
pub async fn dispatch<T, F>(
    state: &AppState,
    method: &'static str,
    items: fn(&T) -> usize,
    call: F,
) -> Result<T, ServiceError>
where
    T: Send + 'static,
    F: FnOnce(&Catalog, &CallContext) -> Result<T, ServiceError> + Send + 'static,
{
    let started = Instant::now();
    let ctx = CallContext::new();
    let guard = CancelOnDrop(ctx.clone());
    let catalog = state.catalog.clone();

    let result = tokio::task::spawn_blocking(move || call(catalog.as_ref(), &ctx))
        .await
        .unwrap_or_else(|e| Err(ServiceError::Internal(format!("catalog task failed: {e}"))));
    drop(guard);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(resp) => {
            let n = items(resp);
            state.metrics.observe(method, "OK", Some(n));
            info!(method, items = n, elapsed_ms, "catalog call completed");
        }
        Err(e) => record_failure(state, method, e),
    }
    result
}

/// Count and log a call that failed before reaching the engine.
pub fn record_failure(state: &AppState, method: &'static str, e: &ServiceError) {
    state.metrics.observe(method, e.code_name(), None);
    warn!(method, code = e.code_name(), error = %e, "catalog call failed");
}
