#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use sensorprom_core::metrics::{
    Collector, CounterVec, Gauge, HistogramVec, SampleValue, DEFAULT_BUCKETS,
};
use sensorprom_core::SensorPromError;

#[test]
fn concurrent_increments_are_not_lost() {
    let counter = Arc::new(CounterVec::new("hits_total", "hits", &["endpoint"]).unwrap());

    thread::scope(|s| {
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            s.spawn(move || {
                for _ in 0..1_000 {
                    counter.inc(&["/"]).unwrap();
                }
            });
        }
    });

    assert_eq!(counter.get(&["/"]), Some(8_000));
    assert_eq!(counter.series_len(), 1);
}

#[test]
fn counter_rejects_wrong_arity() {
    let counter =
        CounterVec::new("req_total", "requests", &["endpoint", "method", "status"]).unwrap();

    let err = counter.inc(&["/", "GET"]).expect_err("two values for three labels");
    assert_eq!(
        err,
        SensorPromError::LabelArity {
            metric: "req_total".into(),
            expected: 3,
            got: 2,
        }
    );
    assert_eq!(err.client_code().as_str(), "INVALID_METRIC");
    assert_eq!(counter.series_len(), 0);
}

#[test]
fn counter_series_are_created_lazily() {
    let counter = CounterVec::new("req_total", "requests", &["status"]).unwrap();
    assert_eq!(counter.get(&["200"]), None);

    counter.inc(&["200"]).unwrap();
    counter.inc_by(&["500"], 3).unwrap();

    assert_eq!(counter.get(&["200"]), Some(1));
    assert_eq!(counter.get(&["500"]), Some(3));
}

#[test]
fn gauge_returns_exactly_what_was_set() {
    let gauge = Gauge::new("temp_celsius", "temperature").unwrap();
    assert_eq!(gauge.get(), 0.0);

    for v in [21.3371, -4.5, 0.1 + 0.2, f64::MAX] {
        gauge.set(v);
        assert_eq!(gauge.get().to_bits(), v.to_bits());
    }

    gauge.set(f64::NAN);
    assert!(gauge.get().is_nan());
}

#[test]
fn histogram_observation_updates_matching_buckets() {
    let hist = HistogramVec::new("latency_seconds", "latency", &["endpoint"]).unwrap();
    assert_eq!(hist.bounds(), &DEFAULT_BUCKETS[..]);

    hist.observe(&["/"], 0.03).unwrap();
    let snap = hist.snapshot(&["/"]).unwrap();
    assert_eq!(snap.count, 1);
    assert!((snap.sum - 0.03).abs() < 1e-12);
    for (le, count) in &snap.buckets {
        let expected = if *le >= 0.03 { 1 } else { 0 };
        assert_eq!(*count, expected, "bucket le={le}");
    }

    // Boundary values land in their own bucket.
    hist.observe(&["/"], 0.05).unwrap();
    let snap = hist.snapshot(&["/"]).unwrap();
    assert_eq!(snap.count, 2);
    assert_eq!(snap.buckets[2], (0.025, 0));
    assert_eq!(snap.buckets[3], (0.05, 2));
    assert_eq!(snap.buckets.last().unwrap().1, 2);
}

#[test]
fn concurrent_observations_are_never_torn() {
    const WRITERS: u64 = 4;
    const PER_WRITER: u64 = 20_000;

    let hist = Arc::new(HistogramVec::new("latency_seconds", "latency", &["endpoint"]).unwrap());
    hist.observe(&["/"], 1.0).unwrap();

    thread::scope(|s| {
        for _ in 0..WRITERS {
            let hist = Arc::clone(&hist);
            s.spawn(move || {
                for _ in 0..PER_WRITER {
                    hist.observe(&["/"], 1.0).unwrap();
                }
            });
        }

        let hist = Arc::clone(&hist);
        s.spawn(move || {
            for _ in 0..2_000 {
                let family = hist.collect();
                let SampleValue::Histogram(snap) = &family.samples[0].value else {
                    panic!("histogram family carries histogram samples");
                };
                let inf = snap.buckets.last().unwrap().1;
                assert_eq!(inf, snap.count);
                assert_eq!(snap.sum, snap.count as f64);
            }
        });
    });

    let snap = hist.snapshot(&["/"]).unwrap();
    assert_eq!(snap.count, WRITERS * PER_WRITER + 1);
    assert_eq!(snap.sum, snap.count as f64);
    assert_eq!(snap.buckets.last().unwrap().1, snap.count);
}

#[test]
fn histogram_accepts_negative_and_nan() {
    let hist = HistogramVec::new("weird_seconds", "weird", &[]).unwrap();

    hist.observe(&[], -1.0).unwrap();
    let snap = hist.snapshot(&[]).unwrap();
    assert!(snap.buckets.iter().all(|(_, c)| *c == 1));

    hist.observe(&[], f64::NAN).unwrap();
    let snap = hist.snapshot(&[]).unwrap();
    assert_eq!(snap.count, 2);
    assert_eq!(snap.buckets.last().unwrap().1, 2);
    assert_eq!(snap.buckets[0].1, 1);
}

#[test]
fn histogram_custom_buckets() {
    let hist = HistogramVec::with_buckets("h", "h", &[], vec![1.0, 2.0]).unwrap();
    assert_eq!(hist.bounds(), &[1.0, 2.0, f64::INFINITY]);

    let err = HistogramVec::with_buckets("h", "h", &[], vec![2.0, 1.0]).err().unwrap();
    assert!(matches!(err, SensorPromError::InvalidBuckets(_)));

    let err = HistogramVec::with_buckets("h", "h", &[], vec![1.0, f64::NAN]).err().unwrap();
    assert!(matches!(err, SensorPromError::InvalidBuckets(_)));
}

#[test]
fn invalid_names_are_rejected() {
    let invalid = |r: Result<_, SensorPromError>| matches!(r, Err(SensorPromError::InvalidName(_)));

    assert!(invalid(CounterVec::new("1abc", "x", &[]).map(|_| ())));
    assert!(invalid(CounterVec::new("ok", "x", &["__reserved"]).map(|_| ())));
    assert!(invalid(CounterVec::new("ok", "x", &["a", "a"]).map(|_| ())));
    assert!(invalid(HistogramVec::new("ok", "x", &["le"]).map(|_| ())));
    assert!(CounterVec::new("ns:sub_total", "x", &["le"]).is_ok());
}

#[test]
fn collect_sorts_series_and_label_pairs() {
    let counter = CounterVec::new("req_total", "requests", &["status", "endpoint"]).unwrap();
    counter.inc(&["500", "/b"]).unwrap();
    counter.inc(&["200", "/a"]).unwrap();

    let family = counter.collect();
    assert_eq!(family.samples.len(), 2);
    assert_eq!(
        family.samples[0].labels,
        vec![("endpoint".to_string(), "/a".to_string()), ("status".to_string(), "200".to_string())]
    );
    assert_eq!(family.samples[0].value, SampleValue::Counter(1));
}
