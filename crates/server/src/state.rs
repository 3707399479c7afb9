//! Application state for the development backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    analyses: Arc<AtomicU64>,
}

impl AppState {
    /// Create fresh state at server start.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            analyses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Record one completed analysis.
    pub fn record_analysis(&self) {
        self.analyses.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of analyses served since start.
    pub fn analyses_served(&self) -> u64 {
        self.analyses.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_counter() {
        let state = AppState::new();
        assert_eq!(state.analyses_served(), 0);

        state.record_analysis();
        state.record_analysis();

        assert_eq!(state.analyses_served(), 2);
    }

    #[test]
    fn test_counter_shared_across_clones() {
        let state = AppState::new();
        let clone = state.clone();

        clone.record_analysis();

        assert_eq!(state.analyses_served(), 1);
    }
}
