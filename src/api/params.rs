use std::str::FromStr;

use serde::Deserialize;

const MAX_PERIODS: u32 = 1_200;
const MAX_SIMULATIONS: u32 = 10_000;
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SimulationMethod {
    Normal,
    Bootstrap,
}

impl FromStr for SimulationMethod {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bootstrap" => Ok(Self::Bootstrap),
            _ => Err("method must be 'normal' or 'bootstrap'".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetWeight {
    pub ticker: String,
    pub weight: f64,
}

/// Parameters the simulation service was asked to run with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationParams {
    pub ticker: Option<String>,
    pub portfolio: Vec<AssetWeight>,
    pub initial_value: f64,
    #[serde(alias = "withdrawal")]
    pub withdrawal_rate: f64,
    pub inflation: f64,
    pub simulations: u32,
    pub periods: u32,
    /// Sampling method as sent; parsed case-insensitively by [`Self::method`].
    pub method: String,
}

impl SimulationParams {
    pub fn method(&self) -> Result<SimulationMethod, String> {
        self.method.parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_value.is_finite() || self.initial_value <= 0.0 {
            return Err("initialValue must be > 0".to_string());
        }

        if !(1..=MAX_PERIODS).contains(&self.periods) {
            return Err(format!("periods must be between 1 and {MAX_PERIODS}"));
        }

        if !(1..=MAX_SIMULATIONS).contains(&self.simulations) {
            return Err(format!("simulations must be between 1 and {MAX_SIMULATIONS}"));
        }

        if !(0.0..=1.0).contains(&self.withdrawal_rate) {
            return Err("withdrawalRate must be between 0 and 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.inflation) {
            return Err("inflation must be between 0 and 1".to_string());
        }

        self.method()?;

        let has_ticker = self.ticker.as_deref().is_some_and(|t| !t.trim().is_empty());
        if self.portfolio.is_empty() && !has_ticker {
            return Err("either portfolio or ticker must be provided".to_string());
        }

        if !self.portfolio.is_empty() {
            let mut total_weight = 0.0;
            for asset in &self.portfolio {
                if asset.ticker.trim().is_empty() {
                    return Err("each asset in portfolio must have a ticker".to_string());
                }
                if !asset.weight.is_finite() || asset.weight <= 0.0 {
                    return Err(format!("weight for {} must be > 0", asset.ticker));
                }
                total_weight += asset.weight;
            }
            if (total_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(format!(
                    "portfolio weights must sum to 1.0, got {total_weight:.3}"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> SimulationParams {
        SimulationParams {
            ticker: None,
            portfolio: vec![
                AssetWeight {
                    ticker: "VTI".to_string(),
                    weight: 0.6,
                },
                AssetWeight {
                    ticker: "BND".to_string(),
                    weight: 0.4,
                },
            ],
            initial_value: 1_000_000.0,
            withdrawal_rate: 0.04,
            inflation: 0.025,
            simulations: 1_000,
            periods: 360,
            method: "bootstrap".to_string(),
        }
    }

    #[test]
    fn sample_params_are_valid() {
        assert_eq!(sample_params().validate(), Ok(()));
    }

    #[test]
    fn parses_form_keys_case_insensitive_method_and_withdrawal_alias() {
        let params: SimulationParams = serde_json::from_str(
            r#"{
                "portfolio": [{"ticker": "SPY", "weight": 1.0}],
                "initialValue": 250000,
                "withdrawal": 0.035,
                "inflation": 0.02,
                "simulations": 500,
                "periods": 240,
                "method": "Bootstrap"
            }"#,
        )
        .expect("valid params json");

        assert_eq!(params.method(), Ok(SimulationMethod::Bootstrap));
        assert_eq!(params.withdrawal_rate, 0.035);
        assert_eq!(params.periods, 240);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults_and_fail_validation() {
        let params: SimulationParams = serde_json::from_str("{}").expect("empty object parses");
        assert!(params.method.is_empty());
        let err = params.validate().expect_err("zero initial value");
        assert!(err.contains("initialValue"));
    }

    #[test]
    fn rejects_out_of_range_horizon_and_simulation_count() {
        let mut params = sample_params();
        params.periods = 1_201;
        assert!(params.validate().expect_err("periods").contains("periods"));

        let mut params = sample_params();
        params.simulations = 0;
        assert!(params.validate().expect_err("simulations").contains("simulations"));
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        let mut params = sample_params();
        params.withdrawal_rate = 1.5;
        assert!(params.validate().expect_err("withdrawal").contains("withdrawalRate"));

        let mut params = sample_params();
        params.inflation = -0.01;
        assert!(params.validate().expect_err("inflation").contains("inflation"));
    }

    #[test]
    fn single_ticker_replaces_portfolio() {
        let mut params = sample_params();
        params.portfolio.clear();
        assert!(params.validate().is_err());

        params.ticker = Some("AAPL".to_string());
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_portfolio_entries() {
        let mut params = sample_params();
        params.portfolio[0].ticker = " ".to_string();
        assert!(params.validate().expect_err("ticker").contains("ticker"));

        let mut params = sample_params();
        params.portfolio[1].weight = 0.0;
        assert!(params.validate().expect_err("weight").contains("BND"));

        let mut params = sample_params();
        params.portfolio[1].weight = 0.5;
        assert!(params.validate().expect_err("sum").contains("sum to 1.0"));
    }

    #[test]
    fn method_is_case_insensitive() {
        for raw in ["normal", "NORMAL", "Normal"] {
            assert_eq!(SimulationMethod::from_str(raw), Ok(SimulationMethod::Normal));
        }
        for raw in ["bootstrap", "BootStrap", "BOOTSTRAP"] {
            assert_eq!(SimulationMethod::from_str(raw), Ok(SimulationMethod::Bootstrap));
        }
        assert!(SimulationMethod::from_str(" normal ").is_err());
    }

    #[test]
    fn mixed_case_method_parses_and_validates() {
        let params: SimulationParams = serde_json::from_str(
            r#"{
                "ticker": "SPY",
                "initialValue": 1000,
                "simulations": 10,
                "periods": 12,
                "method": "BootStrap"
            }"#,
        )
        .expect("mixed-case method is valid json");

        assert_eq!(params.method(), Ok(SimulationMethod::Bootstrap));
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn empty_missing_or_unknown_method_is_rejected() {
        let expected = Err("method must be 'normal' or 'bootstrap'".to_string());

        let mut params = sample_params();
        params.method = String::new();
        assert_eq!(params.validate(), expected);

        params.method = "montecarlo".to_string();
        assert_eq!(params.validate(), expected);

        let params: SimulationParams = serde_json::from_str(
            r#"{"ticker": "SPY", "initialValue": 1000, "simulations": 10, "periods": 12}"#,
        )
        .expect("method may be omitted on the wire");
        assert_eq!(params.validate(), expected);
    }
}
