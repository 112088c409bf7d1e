mod aggregate;
mod format;
mod percentile;
mod report;
mod summary;
mod ticks;
mod types;

pub use aggregate::{aggregate, chart_points};
pub use format::{format_band, format_percent, format_usd};
pub use percentile::percentile;
pub use report::render_report;
pub use summary::{
    LABEL_CAGR, LABEL_MAX, LABEL_MEAN, LABEL_MEDIAN, LABEL_MIN, LABEL_SUCCESS_RATE,
    build_summary, simulated_cagr,
};
pub use ticks::{STEPS_PER_YEAR, format_year_tick, select_ticks, tick_labels};
pub use types::{
    AggregatedPoint, ChartPoint, DEFAULT_HIGH_PERCENTILE, DEFAULT_LOW_PERCENTILE, FinalStats,
    PathMatrix, Report, ReportOptions, SimulationOutcome, SummaryRow,
};
