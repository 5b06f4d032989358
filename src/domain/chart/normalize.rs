//! The time-series normalizer: raw samples → chartable series.

use chrono::{Local, TimeZone};

use super::{ChartPoint, ChartSeries, RawSample, WindowPolicy};

/// Normalize raw price samples into a display-ready series, labeling points
/// in the viewer's local time zone.
pub fn normalize(samples: &[RawSample], policy: WindowPolicy) -> ChartSeries {
    normalize_in(samples, policy, &Local)
}

/// [`normalize`] with an explicit time zone for the point labels.
///
/// Pure function of its inputs. Labels use 24-hour `HH:MM`; a timestamp
/// outside the representable range yields an empty label rather than a
/// skipped point, so `points` stays 1:1 with the (possibly truncated) input.
pub fn normalize_in<Tz: TimeZone>(
    samples: &[RawSample],
    policy: WindowPolicy,
    tz: &Tz,
) -> ChartSeries
where
    Tz::Offset: std::fmt::Display,
{
    let kept = match policy {
        WindowPolicy::Full => samples,
        WindowPolicy::FirstN(n) => &samples[..n.min(samples.len())],
    };

    let points: Vec<ChartPoint> = kept
        .iter()
        .map(|s| ChartPoint {
            label: time_label(s.timestamp_ms, tz),
            price: s.price,
        })
        .collect();

    let ticks = axis_ticks(&points);

    ChartSeries { points, ticks }
}

fn time_label<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Six evenly spaced Y-axis ticks spanning `[min, max]` of the point prices,
/// rounded to two decimal places. Empty when there are no points. A flat
/// series (min == max) produces six equal ticks.
fn axis_ticks(points: &[ChartPoint]) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.price);
        max = max.max(p.price);
    }

    let step = (max - min) / 5.0;
    (0..=5)
        .map(|i| round2(min + i as f64 * step))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
