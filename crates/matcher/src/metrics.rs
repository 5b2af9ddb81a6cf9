use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Observer for matcher build and query latency.
pub trait MatchMetrics: Send + Sync {
    /// Called once per successful build.
    fn record_build(&self, latency: Duration, entries: usize, vocabulary: usize);
    /// Called once per answered question.
    fn record_query(&self, latency: Duration, matched: bool);
}

/// Install or clear the global matcher metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
