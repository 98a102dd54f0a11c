//! # Async Tasks
//!
//! Task spawning for provider calls. Each function reads what it needs from the
//! state with a short lock, spawns a tokio task, and reports back through the
//! event channel; none of them writes results into the state directly.

pub mod conversion;
pub mod historical;
pub mod rates;

use std::future::Future;
use tokio::spawn;

/// Run a provider call on its own task and await it.
///
/// A panic inside the service surfaces as an `Err`, so the caller still sends
/// its result event and the handlers that release `is_loading` always run.
pub(crate) async fn guarded<T, F>(call: F) -> Result<T, String>
where
    F: Future<Output = Result<T, String>> + Send + 'static,
    T: Send + 'static,
{
    match spawn(call).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Rate service task aborted");
            Err(format!("Rate service task failed: {}", e))
        }
    }
}
