use super::format::{format_percent, format_usd};
use super::ticks::STEPS_PER_YEAR;
use super::types::{FinalStats, SummaryRow};

pub const LABEL_MIN: &str = "Min Final Value";
pub const LABEL_MEDIAN: &str = "Median Final Value";
pub const LABEL_MEAN: &str = "Mean Final Value";
pub const LABEL_MAX: &str = "Max Final Value";
pub const LABEL_CAGR: &str = "Simulated CAGR";
pub const LABEL_SUCCESS_RATE: &str = "Success Rate";

const CAGR_DECIMALS: usize = 2;
const SUCCESS_RATE_DECIMALS: usize = 1;

/// Table rows in fixed order: min, median, mean, max, CAGR, success rate.
///
/// The CAGR row only appears for a finite value.
pub fn build_summary(
    final_stats: &FinalStats,
    success_rate: f64,
    simulated_cagr: Option<f64>,
) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new(LABEL_MIN, format_usd(final_stats.min)),
        SummaryRow::new(LABEL_MEDIAN, format_usd(final_stats.median)),
        SummaryRow::new(LABEL_MEAN, format_usd(final_stats.mean)),
        SummaryRow::new(LABEL_MAX, format_usd(final_stats.max)),
    ];

    if let Some(cagr) = simulated_cagr.filter(|v| v.is_finite()) {
        rows.push(SummaryRow::new(LABEL_CAGR, format_percent(cagr, CAGR_DECIMALS)));
    }

    rows.push(SummaryRow::new(
        LABEL_SUCCESS_RATE,
        format_percent(success_rate, SUCCESS_RATE_DECIMALS),
    ));
    rows
}

/// Annualised growth from `initial_value` to the mean final value over a
/// monthly horizon. A negative mean is reported as a total loss (`-1.0`).
pub fn simulated_cagr(initial_value: f64, mean_final: f64, periods: u32) -> Option<f64> {
    if !initial_value.is_finite() || initial_value <= 0.0 || periods == 0 {
        return None;
    }
    if !mean_final.is_finite() {
        return None;
    }
    if mean_final < 0.0 {
        return Some(-1.0);
    }

    let years = f64::from(periods) / STEPS_PER_YEAR as f64;
    Some((mean_final / initial_value).powf(1.0 / years) - 1.0)
}
