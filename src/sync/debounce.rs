use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

/// Generation-counted debouncer for search input. Each keystroke calls
/// `mark`, then awaits `settle`; only the newest marker survives the
/// window, so rapid input yields at most one re-query, with the last value.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_millis(window_ms: u64) -> Self {
        Self::new(Duration::from_millis(window_ms))
    }

    pub fn mark(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Waits out the window; true iff no newer mark arrived meanwhile.
    pub async fn settle(&self, marker: u64) -> bool {
        sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == marker
    }
}
