//! Boundary adapter between the simulation service's response payloads and
//! the canonical [`SimulationOutcome`].
//!
//! The service has shipped two response shapes: a camelCase one carrying
//! `finalStats`, `successRate` and `simulatedCAGR`, and a snake_case one
//! carrying `final_stats` and `success_rate` with no growth rate. Both are
//! accepted; the shape is chosen by which summary keys are present.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{PayloadError, PayloadResult};
use super::params::SimulationParams;
use crate::core::{FinalStats, PathMatrix, SimulationOutcome, simulated_cagr};

type WirePaths = Vec<Option<Vec<Option<f64>>>>;

#[derive(Debug, Deserialize)]
pub struct WireStats {
    min: Option<f64>,
    median: Option<f64>,
    mean: Option<f64>,
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CamelCasePayload {
    paths: Option<WirePaths>,
    final_stats: Option<WireStats>,
    success_rate: Option<f64>,
    #[serde(rename = "simulatedCAGR", alias = "simulatedCagr")]
    simulated_cagr: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SnakeCasePayload {
    paths: Option<WirePaths>,
    final_stats: Option<WireStats>,
    success_rate: Option<f64>,
}

#[derive(Debug)]
pub enum WirePayload {
    CamelCase(CamelCasePayload),
    SnakeCase(SnakeCasePayload),
}

struct FieldNames {
    final_stats: &'static str,
    min: &'static str,
    median: &'static str,
    mean: &'static str,
    max: &'static str,
    success_rate: &'static str,
}

const CAMEL_CASE_FIELDS: FieldNames = FieldNames {
    final_stats: "finalStats",
    min: "finalStats.min",
    median: "finalStats.median",
    mean: "finalStats.mean",
    max: "finalStats.max",
    success_rate: "successRate",
};

const SNAKE_CASE_FIELDS: FieldNames = FieldNames {
    final_stats: "final_stats",
    min: "final_stats.min",
    median: "final_stats.median",
    mean: "final_stats.mean",
    max: "final_stats.max",
    success_rate: "success_rate",
};

impl WirePayload {
    pub fn from_value(value: Value) -> PayloadResult<Self> {
        let Value::Object(map) = &value else {
            return Err(PayloadError::InvalidField {
                field: "payload",
                reason: "expected a JSON object".to_string(),
            });
        };

        // The stats block decides; the scalar keys only break a tie.
        let camel = match (map.contains_key("finalStats"), map.contains_key("final_stats")) {
            (true, false) => true,
            (false, true) => false,
            _ if has_any(map, &["successRate", "simulatedCAGR", "simulatedCagr"]) => true,
            _ if map.contains_key("success_rate") => false,
            _ => {
                return Err(PayloadError::MissingField {
                    field: "finalStats",
                });
            }
        };

        if camel {
            log::debug!("decoding camelCase simulation payload");
            Ok(Self::CamelCase(serde_json::from_value(value)?))
        } else {
            log::debug!("decoding snake_case simulation payload");
            Ok(Self::SnakeCase(serde_json::from_value(value)?))
        }
    }
}

fn has_any(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| map.contains_key(*key))
}

impl TryFrom<WirePayload> for SimulationOutcome {
    type Error = PayloadError;

    fn try_from(payload: WirePayload) -> PayloadResult<Self> {
        match payload {
            WirePayload::CamelCase(p) => normalize(
                p.paths,
                p.final_stats,
                p.success_rate,
                p.simulated_cagr,
                &CAMEL_CASE_FIELDS,
            ),
            WirePayload::SnakeCase(p) => normalize(
                p.paths,
                p.final_stats,
                p.success_rate,
                None,
                &SNAKE_CASE_FIELDS,
            ),
        }
    }
}

fn normalize(
    paths: Option<WirePaths>,
    final_stats: Option<WireStats>,
    success_rate: Option<f64>,
    simulated_cagr: Option<f64>,
    names: &FieldNames,
) -> PayloadResult<SimulationOutcome> {
    let stats = final_stats.ok_or(PayloadError::MissingField {
        field: names.final_stats,
    })?;
    let final_stats = FinalStats {
        min: required(stats.min, names.min)?,
        median: required(stats.median, names.median)?,
        mean: required(stats.mean, names.mean)?,
        max: required(stats.max, names.max)?,
    };

    let success_rate = required(success_rate, names.success_rate)?;
    if !(0.0..=1.0).contains(&success_rate) {
        return Err(PayloadError::InvalidField {
            field: names.success_rate,
            reason: format!("expected a fraction between 0 and 1, got {success_rate}"),
        });
    }

    let paths = paths.unwrap_or_else(|| {
        log::warn!("simulation payload has no paths; rendering an empty chart");
        Vec::new()
    });

    Ok(SimulationOutcome {
        paths: into_path_matrix(paths),
        final_stats,
        success_rate,
        simulated_cagr,
    })
}

fn required(value: Option<f64>, field: &'static str) -> PayloadResult<f64> {
    value.ok_or(PayloadError::MissingField { field })
}

// Positions are kept so later steps stay aligned; the aggregator drops NaN.
fn into_path_matrix(paths: WirePaths) -> PathMatrix {
    paths
        .into_iter()
        .map(|path| {
            path.unwrap_or_default()
                .into_iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect()
        })
        .collect()
}

/// A render request: either a bare simulation payload, or an envelope
/// `{ "result": <payload>, "params": <parameters> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub outcome: SimulationOutcome,
    pub params: Option<SimulationParams>,
}

impl RenderRequest {
    pub fn from_json(json: &str) -> PayloadResult<Self> {
        let value = serde_json::from_str::<Value>(json)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> PayloadResult<Self> {
        let envelope = value.as_object_mut().and_then(|map| map.remove("result"));
        let (payload, params) = match envelope {
            Some(result) => {
                let params = value
                    .get_mut("params")
                    .map(Value::take)
                    .filter(|params| !params.is_null());
                (result, params)
            }
            None => (value, None),
        };

        let mut outcome = SimulationOutcome::try_from(WirePayload::from_value(payload)?)?;
        let params = params
            .map(serde_json::from_value::<SimulationParams>)
            .transpose()?;

        if let Some(params) = &params {
            params.validate().map_err(PayloadError::InvalidParams)?;
            if outcome.simulated_cagr.is_none() {
                outcome.simulated_cagr = simulated_cagr(
                    params.initial_value,
                    outcome.final_stats.mean,
                    params.periods,
                );
            }
        }

        Ok(Self { outcome, params })
    }
}
