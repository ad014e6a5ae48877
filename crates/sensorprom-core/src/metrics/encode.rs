//! Prometheus text exposition format (version 0.0.4).

use std::fmt::Write;

use super::desc::{MetricFamily, SampleValue};

/// Content type served alongside [`encode_text`] output.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{v}")
    }
}

fn label_block(labels: &[(String, String)], extra: Option<(&str, &str)>) -> String {
    let mut parts: Vec<String> = labels
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect();
    if let Some((k, v)) = extra {
        parts.push(format!("{}=\"{}\"", k, escape_label(v)));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", parts.join(","))
    }
}

/// Render families in order: `# HELP`, `# TYPE`, then one line per series.
pub fn encode_text<I>(families: I) -> String
where
    I: IntoIterator<Item = MetricFamily>,
{
    let mut out = String::new();
    for family in families {
        let name = &family.name;
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(&family.help));
        let _ = writeln!(out, "# TYPE {} {}", name, family.kind.as_str());

        for sample in &family.samples {
            match &sample.value {
                SampleValue::Counter(v) => {
                    let _ = writeln!(out, "{}{} {}", name, label_block(&sample.labels, None), v);
                }
                SampleValue::Gauge(v) => {
                    let _ = writeln!(
                        out,
                        "{}{} {}",
                        name,
                        label_block(&sample.labels, None),
                        format_float(*v)
                    );
                }
                SampleValue::Histogram(h) => {
                    for (le, count) in &h.buckets {
                        let le = format_float(*le);
                        let _ = writeln!(
                            out,
                            "{}_bucket{} {}",
                            name,
                            label_block(&sample.labels, Some(("le", &le))),
                            count
                        );
                    }
                    let labels = label_block(&sample.labels, None);
                    let _ = writeln!(out, "{}_sum{} {}", name, labels, format_float(h.sum));
                    let _ = writeln!(out, "{}_count{} {}", name, labels, h.count);
                }
            }
        }
    }
    out
}
