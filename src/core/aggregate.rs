use super::percentile::percentile;
use super::types::{AggregatedPoint, ChartPoint};

/// Collapses the path matrix into one median/band point per time step.
///
/// The horizon is the length of the first path. Shorter paths simply stop
/// contributing once they run out, and non-finite samples are dropped. A
/// step with no usable samples is skipped rather than emitted as zeros.
pub fn aggregate(paths: &[Vec<f64>], low_p: f64, high_p: f64) -> Vec<AggregatedPoint> {
    let Some(horizon) = paths.first().map(Vec::len) else {
        return Vec::new();
    };
    if horizon == 0 {
        return Vec::new();
    }

    let low_p = low_p.clamp(0.0, 50.0);
    let high_p = high_p.clamp(50.0, 100.0);

    let ragged = paths.iter().filter(|path| path.len() != horizon).count();
    if ragged > 0 {
        log::warn!("{ragged} of {} paths differ from the {horizon}-step horizon", paths.len());
    }

    let mut points = Vec::with_capacity(horizon);
    let mut samples = Vec::with_capacity(paths.len());
    let mut dropped = 0usize;

    for step in 0..horizon {
        samples.clear();
        for value in paths.iter().filter_map(|path| path.get(step).copied()) {
            if value.is_finite() {
                samples.push(value);
            } else {
                dropped += 1;
            }
        }
        if samples.is_empty() {
            continue;
        }

        samples.sort_by(|a, b| a.total_cmp(b));
        let median = percentile(&samples, 50.0);
        points.push(AggregatedPoint {
            step,
            median,
            low_band: percentile(&samples, low_p).min(median),
            high_band: percentile(&samples, high_p).max(median),
        });
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} non-finite path values");
    }

    points
}

pub fn chart_points(points: &[AggregatedPoint]) -> Vec<ChartPoint> {
    points.iter().copied().map(ChartPoint::from).collect()
}
