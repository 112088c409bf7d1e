use super::aggregate::{aggregate, chart_points};
use super::summary::build_summary;
use super::ticks::{select_ticks, tick_labels};
use super::types::{Report, ReportOptions, SimulationOutcome};

impl ReportOptions {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=50.0).contains(&self.low_percentile) {
            return Err("--low-percentile must be between 0 and 50".to_string());
        }
        if !(50.0..=100.0).contains(&self.high_percentile) {
            return Err("--high-percentile must be between 50 and 100".to_string());
        }
        if self.low_percentile >= self.high_percentile {
            return Err("--low-percentile must be < --high-percentile".to_string());
        }
        Ok(())
    }
}

/// Builds the chart series, axis ticks and summary table for one outcome.
pub fn render_report(outcome: &SimulationOutcome, options: ReportOptions) -> Report {
    let points = aggregate(
        &outcome.paths,
        options.low_percentile,
        options.high_percentile,
    );
    let steps = points.last().map_or(0, |point| point.step + 1);
    let ticks = select_ticks(steps);

    log::debug!(
        "aggregated {} simulations into {} points, {} ticks",
        outcome.paths.len(),
        points.len(),
        ticks.len()
    );

    Report {
        low_percentile: options.low_percentile,
        high_percentile: options.high_percentile,
        simulations: outcome.paths.len(),
        steps,
        chart: chart_points(&points),
        tick_labels: tick_labels(&ticks),
        ticks,
        points,
        summary: build_summary(
            &outcome.final_stats,
            outcome.success_rate,
            outcome.simulated_cagr,
        ),
    }
}
