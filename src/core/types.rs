use serde::Serialize;

use super::format::format_band;

pub const DEFAULT_LOW_PERCENTILE: f64 = 5.0;
pub const DEFAULT_HIGH_PERCENTILE: f64 = 95.0;

/// One value per simulation per time step; rows are simulations.
pub type PathMatrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalStats {
    pub min: f64,
    pub median: f64,
    pub mean: f64,
    pub max: f64,
}

/// Canonical simulation result, independent of the wire shape it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub paths: PathMatrix,
    pub final_stats: FinalStats,
    pub success_rate: f64,
    pub simulated_cagr: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPoint {
    pub step: usize,
    pub median: f64,
    pub low_band: f64,
    pub high_band: f64,
}

/// Area-chart shape: the band travels as a `[low, high]` pair, with the
/// tooltip text for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub month: usize,
    pub median: f64,
    pub range: [f64; 2],
    pub band_label: String,
}

impl From<AggregatedPoint> for ChartPoint {
    fn from(point: AggregatedPoint) -> Self {
        Self {
            month: point.step,
            median: point.median,
            range: [point.low_band, point.high_band],
            band_label: format_band(point.low_band, point.high_band),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub label: String,
    pub display_value: String,
}

impl SummaryRow {
    pub(crate) fn new(label: &str, display_value: String) -> Self {
        Self {
            label: label.to_string(),
            display_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub low_percentile: f64,
    pub high_percentile: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            low_percentile: DEFAULT_LOW_PERCENTILE,
            high_percentile: DEFAULT_HIGH_PERCENTILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub low_percentile: f64,
    pub high_percentile: f64,
    pub simulations: usize,
    pub steps: usize,
    pub points: Vec<AggregatedPoint>,
    pub chart: Vec<ChartPoint>,
    pub ticks: Vec<usize>,
    pub tick_labels: Vec<String>,
    pub summary: Vec<SummaryRow>,
}
