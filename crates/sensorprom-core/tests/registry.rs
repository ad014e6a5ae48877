#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use sensorprom_core::metrics::{encode_text, CounterVec, MetricKind, Registry};
use sensorprom_core::random::{RandomSource, SeededRandom};
use sensorprom_core::SensorPromError;

#[test]
fn duplicate_name_leaves_registry_unchanged() {
    let registry = Registry::new();
    let first = registry.register_counter_vec("jobs_total", "jobs", &["kind"]).unwrap();
    first.inc(&["a"]).unwrap();

    let err = registry.register_gauge("jobs_total", "shadow").err().unwrap();
    assert_eq!(err, SensorPromError::DuplicateName("jobs_total".into()));

    let again = Arc::new(CounterVec::new("jobs_total", "jobs", &["kind"]).unwrap());
    assert!(registry.register(again).is_err());

    assert_eq!(registry.len(), 1);
    let families: Vec<_> = registry.collect().collect();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].kind, MetricKind::Counter);
    assert_eq!(families[0].help, "jobs");
    assert_eq!(families[0].samples.len(), 1);
}

#[test]
fn collect_is_ordered_by_name() {
    let registry = Registry::new();
    registry.register_gauge("zeta", "z").unwrap();
    registry.register_histogram_vec("alpha_seconds", "a", &[]).unwrap();
    registry.register_counter_vec("mid_total", "m", &[]).unwrap();

    assert_eq!(registry.names(), vec!["alpha_seconds", "mid_total", "zeta"]);
    let kinds: Vec<_> = registry.collect().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![MetricKind::Histogram, MetricKind::Counter, MetricKind::Gauge]);
}

#[test]
fn one_type_line_per_metric() {
    let registry = Registry::new();
    let requests = registry
        .register_counter_vec(
            "http_requests_total",
            "Total number of HTTP requests",
            &["endpoint", "method", "status"],
        )
        .unwrap();
    let temp = registry
        .register_gauge("sensor_temperature_celsius", "Current temperature in Celsius")
        .unwrap();
    let duration = registry
        .register_histogram_vec(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
            &["endpoint"],
        )
        .unwrap();

    let calls = [
        ("/", "GET", "200"),
        ("/api/data", "GET", "500"),
        ("/api/data", "POST", "200"),
    ];
    for (ep, method, status) in calls {
        requests.inc(&[ep, method, status]).unwrap();
        duration.observe(&[ep], 0.02).unwrap();
    }
    temp.set(21.5);

    let text = encode_text(registry.collect());
    for name in registry.names() {
        let needle = format!("# TYPE {name} ");
        let type_lines = text.lines().filter(|l| l.starts_with(&needle)).count();
        assert_eq!(type_lines, 1, "{name}");
    }

    let expected = [
        "# HELP http_requests_total Total number of HTTP requests\n",
        "# TYPE http_requests_total counter\n",
        "http_requests_total{endpoint=\"/api/data\",method=\"GET\",status=\"500\"} 1\n",
        "# TYPE sensor_temperature_celsius gauge\nsensor_temperature_celsius 21.5\n",
        "http_request_duration_seconds_bucket{endpoint=\"/\",le=\"0.01\"} 0\n",
        "http_request_duration_seconds_bucket{endpoint=\"/\",le=\"0.025\"} 1\n",
        "http_request_duration_seconds_bucket{endpoint=\"/api/data\",le=\"+Inf\"} 2\n",
        "http_request_duration_seconds_sum{endpoint=\"/\"} 0.02\n",
        "http_request_duration_seconds_count{endpoint=\"/api/data\"} 2\n",
    ];
    for line in expected {
        assert!(text.contains(line), "missing {line:?}");
    }
}

#[test]
fn help_text_is_escaped() {
    let registry = Registry::new();
    registry.register_gauge("g", "line one\nback\\slash").unwrap();
    let text = encode_text(registry.collect());
    assert!(text.starts_with("# HELP g line one\\nback\\\\slash\n"));
}

#[test]
fn seeded_random_is_deterministic_and_bounded() {
    let a = SeededRandom::from_seed(7);
    let b = SeededRandom::from_seed(7);
    for _ in 0..1_000 {
        let x = a.next_unit();
        assert_eq!(x, b.next_unit());
        assert!((0.0..1.0).contains(&x));
        let v = a.uniform(-5.0, 5.0);
        b.uniform(-5.0, 5.0);
        assert!((-5.0..5.0).contains(&v));
        assert!(a.below_millis(100).as_millis() < 100);
        b.below_millis(100);
    }
    assert!(a.below_millis(0).is_zero());
}
