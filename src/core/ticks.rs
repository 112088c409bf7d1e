use std::collections::BTreeSet;

pub const STEPS_PER_YEAR: usize = 12;
const MILESTONE_YEARS: usize = 5;

/// Picks x-axis tick positions for a monthly series of `total_steps` points:
/// the start, the one-year mark, every five-year boundary, and the last step.
pub fn select_ticks(total_steps: usize) -> Vec<usize> {
    if total_steps == 0 {
        return Vec::new();
    }

    let mut ticks = BTreeSet::from([0]);

    if total_steps > STEPS_PER_YEAR {
        ticks.insert(STEPS_PER_YEAR);
    }

    let milestone = STEPS_PER_YEAR * MILESTONE_YEARS;
    ticks.extend((milestone..total_steps).step_by(milestone));

    if total_steps > 1 {
        ticks.insert(total_steps - 1);
    }

    ticks.into_iter().collect()
}

/// Whole years elapsed at `step`, e.g. `"5Y"` for month 60.
pub fn format_year_tick(step: usize) -> String {
    format!("{}Y", step / STEPS_PER_YEAR)
}

pub fn tick_labels(ticks: &[usize]) -> Vec<String> {
    ticks.iter().map(|&step| format_year_tick(step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn degenerate_horizons() {
        assert_eq!(select_ticks(0), Vec::<usize>::new());
        assert_eq!(select_ticks(1), vec![0]);
        assert_eq!(select_ticks(2), vec![0, 1]);
    }

    #[test]
    fn year_one_needs_a_step_beyond_month_twelve() {
        assert_eq!(select_ticks(12), vec![0, 11]);
        assert_eq!(select_ticks(13), vec![0, 12]);
        assert_eq!(select_ticks(14), vec![0, 12, 13]);
    }

    #[test]
    fn five_year_milestones_dedupe_with_final_index() {
        assert_eq!(select_ticks(60), vec![0, 12, 59]);
        assert_eq!(select_ticks(61), vec![0, 12, 60]);
        assert_eq!(select_ticks(62), vec![0, 12, 60, 61]);
    }

    #[test]
    fn thirty_year_horizon() {
        assert_eq!(select_ticks(360), vec![0, 12, 60, 120, 180, 240, 300, 359]);
        assert_eq!(select_ticks(361), vec![0, 12, 60, 120, 180, 240, 300, 360]);
    }

    #[test]
    fn labels_are_whole_years() {
        assert_eq!(format_year_tick(0), "0Y");
        assert_eq!(format_year_tick(11), "0Y");
        assert_eq!(format_year_tick(12), "1Y");
        assert_eq!(format_year_tick(359), "29Y");
        assert_eq!(tick_labels(&select_ticks(61)), vec!["0Y", "1Y", "5Y"]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(128))]

        #[test]
        fn prop_ticks_are_strictly_increasing_and_bounded(total in 1usize..2_000) {
            let ticks = select_ticks(total);
            prop_assert!(ticks.first() == Some(&0));
            prop_assert!(ticks.last() == Some(&(total - 1)));
            for window in ticks.windows(2) {
                prop_assert!(window[0] < window[1]);
            }
            for tick in &ticks {
                prop_assert!(*tick == 0 || *tick == 12 || tick % 60 == 0 || *tick == total - 1);
            }
        }
    }
}
