/// Global Tokio runtime for async HTTP operations
///
/// eframe drives the UI from its own event loop, but reqwest and the debounce
/// timers need a tokio context. The binary enters this runtime before starting
/// eframe so `tokio::spawn` works from the UI thread; results come back to the
/// UI through the app's event channel.
///
/// Usage:
/// ```rust,no_run
/// use dashboard::utils::runtime::TOKIO_RT;
///
/// let _enter = TOKIO_RT.enter();
/// tokio::spawn(async move {
///     // fetch, then send an AppEvent back
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> =
    Lazy::new(|| Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations"));
