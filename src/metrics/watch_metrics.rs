//! Wait metrics tracking using OpenTelemetry.

use crate::core::WaitOutcome;
use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Metrics collector for dependency waits.
///
/// Every measurement carries a `property` attribute naming the watched
/// dependency.
///
/// # Examples
///
/// ```rust,no_run
/// use dependency_ready::metrics::WatchMetrics;
/// use opentelemetry::global;
///
/// let meter = global::meter("dependency-ready");
/// let metrics = WatchMetrics::new(meter);
///
/// metrics.record_wait_started("dataLayer");
/// ```
#[derive(Clone)]
pub struct WatchMetrics {
    waits_started: Counter<u64>,
    waits_ready: Counter<u64>,
    waits_timed_out: Counter<u64>,
    checks: Counter<u64>,
    wait_duration: Histogram<f64>,
}

impl WatchMetrics {
    /// Create a new metrics collector with the provided meter.
    pub fn new(meter: Meter) -> Self {
        let waits_started = meter
            .u64_counter("dependency_ready.wait.started")
            .with_description("Number of waits started")
            .build();

        let waits_ready = meter
            .u64_counter("dependency_ready.wait.ready")
            .with_description("Number of waits that observed the dependency")
            .build();

        let waits_timed_out = meter
            .u64_counter("dependency_ready.wait.timeouts")
            .with_description("Number of waits that gave up at the deadline")
            .build();

        let checks = meter
            .u64_counter("dependency_ready.checks")
            .with_description("Number of readiness checks performed by waits")
            .build();

        let wait_duration = meter
            .f64_histogram("dependency_ready.wait.duration")
            .with_description("Duration of completed waits in seconds")
            .with_unit("s")
            .build();

        Self {
            waits_started,
            waits_ready,
            waits_timed_out,
            checks,
            wait_duration,
        }
    }

    /// Record that a wait for `property` started.
    pub fn record_wait_started(&self, property: &str) {
        self.waits_started.add(1, &attributes(property));
    }

    /// Record the outcome of a finished wait for `property`.
    pub fn record_outcome(&self, property: &str, outcome: &WaitOutcome) {
        let attrs = attributes(property);
        if outcome.is_ready() {
            self.waits_ready.add(1, &attrs);
        } else {
            self.waits_timed_out.add(1, &attrs);
        }
        self.checks.add(u64::from(outcome.checks()), &attrs);
        self.wait_duration
            .record(outcome.elapsed().as_secs_f64(), &attrs);
    }
}

fn attributes(property: &str) -> [KeyValue; 1] {
    [KeyValue::new("property", property.to_string())]
}
