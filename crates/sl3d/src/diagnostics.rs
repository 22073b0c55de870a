//! Process-wide diagnostic sink for windowing library errors
//!
//! GLFW reports internal failures through a single, process-global error
//! callback. The backend hands an [`ErrorSink`] to the platform during
//! library initialization; the platform installs it as that callback and
//! removes it again on terminate, so a sink only hears errors raised while
//! its backend is alive.
//!
//! Reporting only forwards the description to the log. It never panics and
//! never changes control flow: the call that failed still returns its own
//! failure value, which is what construction acts on.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const LOG_TARGET: &str = "sl3d::platform";

/// Forwards windowing library errors to the diagnostic log
///
/// Cloning is cheap and clones share the report counter, so the copy moved
/// into the library callback and the copy kept by the backend agree.
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    reported: Arc<AtomicU64>,
}

impl ErrorSink {
    /// Create a sink with no reports recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward one library error to the diagnostic stream
    pub fn report(&self, code: i32, description: &str) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        log::error!(target: LOG_TARGET, "Error {code}: {description}");
    }

    /// Number of errors forwarded through this sink and its clones
    pub fn reported(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_across_clones() {
        let sink = ErrorSink::new();
        let installed = sink.clone();

        installed.report(0x0001_0001, "The GLFW library is not initialized");
        installed.report(0x0001_0006, "Requested client API version 9.9");

        assert_eq!(sink.reported(), 2);
        assert_eq!(installed.reported(), 2);
    }

    #[test]
    fn test_report_accepts_empty_description() {
        let sink = ErrorSink::new();
        sink.report(0, "");
        assert_eq!(sink.reported(), 1);
    }
}
