//! Display formatting for summary tables and chart labels (en-US, USD).

const NOT_AVAILABLE: &str = "N/A";

/// Whole-dollar currency with thousands separators, e.g. `-$1,234,568`.
///
/// Unlike a browser `Intl.NumberFormat`, infinities print `N/A` rather than
/// `$∞`, and small negatives that round to zero print `$0` rather than `-$0`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    // `f64::round` rounds half away from zero, which is what the browser
    // currency formatter does; `{:.0}` would round half to even.
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Fraction rendered as a percentage, e.g. `0.932` at one decimal is `93.2%`.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    if !fraction.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Tooltip text for a percentile band.
pub fn format_band(low: f64, high: f64) -> String {
    format!("{} - {}", format_usd(low), format_usd(high))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands_and_drops_cents() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1_000.0), "$1,000");
        assert_eq!(format_usd(1_234_567.5), "$1,234,568");
        assert_eq!(format_usd(12_345_678_901.0), "$12,345,678,901");
    }

    #[test]
    fn usd_negative_and_non_finite() {
        assert_eq!(format_usd(-1_234.0), "-$1,234");
        assert_eq!(format_usd(-0.4), "$0");
        assert_eq!(format_usd(f64::NAN), "N/A");
        assert_eq!(format_usd(f64::INFINITY), "N/A");
    }

    #[test]
    fn usd_rounds_half_away_from_zero() {
        assert_eq!(format_usd(2.5), "$3");
        assert_eq!(format_usd(-2.5), "-$3");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percent(0.07, 2), "7.00%");
        assert_eq!(format_percent(0.932, 1), "93.2%");
        assert_eq!(format_percent(1.0, 1), "100.0%");
        assert_eq!(format_percent(f64::NAN, 2), "N/A");
    }

    #[test]
    fn band_tooltip() {
        assert_eq!(format_band(84.0, 156_000.0), "$84 - $156,000");
    }
}
