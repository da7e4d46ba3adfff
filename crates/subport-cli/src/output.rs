//! Small formatting helpers for run reporting.

use std::time::Duration;

/// Format an elapsed duration as `Nms` below one second, `N.NNs` otherwise.
pub fn format_elapsed(elapsed: Duration) -> String {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}
