use std::sync::atomic::{AtomicU32, Ordering};

/// Counts backend API requests issued while resolving one page or search
/// query. Cache hits do not count.
#[derive(Debug, Default)]
pub struct RequestMeter(AtomicU32);

impl RequestMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}
