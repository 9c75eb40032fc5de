//! Prometheus metrics for core components.
//!
//! The server registers these alongside its HTTP metrics.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts};

/// Printer invocations by result ("success", "failure").
pub static PRINTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("dms_storage_prints_total", "Total printer invocations"),
        &["result"],
    )
    .unwrap()
});

/// Time spent waiting on the printer.
pub static PRINT_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "dms_storage_print_duration_seconds",
            "Duration of printer invocations",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
    )
    .unwrap()
});

/// All core metrics, for registration in the server registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![Box::new(PRINTS_TOTAL.clone()), Box::new(PRINT_DURATION.clone())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        PRINTS_TOTAL.with_label_values(&["success"]).inc();
        PRINT_DURATION.observe(0.3);

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"dms_storage_prints_total".to_string()));
        assert!(names.contains(&"dms_storage_print_duration_seconds".to_string()));
    }
}
