//! Execution requests and their validation
//!
//! An [`ExecutionRequest`] is what a caller hands the engine: an algorithm
//! name, an array (JSON list or comma-separated text) and an optional target.
//! [`ExecutionRequest::validate`] turns it into a [`ValidatedInput`] or an
//! [`InputError`] that says what was wrong and what the limits are.

use super::catalog::AlgorithmKind;
use super::constants::MAX_INPUT_LEN;
use super::errors::{EngineError, InputError};
use crate::snapshot::StepSequence;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Engine limits and request handling policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest accepted array
    pub max_input_len: usize,
    /// Sort the array before a binary search instead of trusting the caller
    pub sort_binary_input: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_input_len: MAX_INPUT_LEN,
            sort_binary_input: true,
        }
    }
}

/// Array as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArrayInput {
    List(Vec<Value>),
    Text(String),
}

/// Unvalidated execution request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecutionRequest {
    pub algorithm: String,
    #[serde(default)]
    pub array: Option<ArrayInput>,
    #[serde(default)]
    pub target: Option<Value>,
}

/// Input that passed every check; the only thing emitters accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    kind: AlgorithmKind,
    array: Vec<i64>,
    target: Option<i64>,
}

impl ValidatedInput {
    /// Check already-typed input against the configured limits
    pub fn new(
        kind: AlgorithmKind,
        array: Vec<i64>,
        target: Option<i64>,
        config: &EngineConfig,
    ) -> Result<Self, InputError> {
        if array.is_empty() {
            return Err(InputError::Empty);
        }
        if array.len() > config.max_input_len {
            return Err(InputError::TooLong {
                len: array.len(),
                max: config.max_input_len,
            });
        }
        if kind.is_search() && target.is_none() {
            return Err(InputError::MissingTarget { algorithm: kind });
        }
        Ok(ValidatedInput {
            kind,
            array,
            target,
        })
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }
}

impl ExecutionRequest {
    pub fn new(algorithm: impl Into<String>, array: ArrayInput, target: Option<Value>) -> Self {
        ExecutionRequest {
            algorithm: algorithm.into(),
            array: Some(array),
            target,
        }
    }

    /// Decode a JSON request body
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        serde_json::from_str(body).map_err(|e| InputError::Malformed {
            message: e.to_string(),
        })
    }

    pub fn validate(&self, config: &EngineConfig) -> Result<ValidatedInput, InputError> {
        let mut array = match &self.array {
            None => return Err(InputError::Empty),
            Some(ArrayInput::Text(text)) => parse_csv(text)?,
            Some(ArrayInput::List(values)) => values
                .iter()
                .enumerate()
                .map(|(position, value)| {
                    integer_from_json(value).ok_or_else(|| InputError::NotAnInteger {
                        position,
                        value: value.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let kind: AlgorithmKind = self.algorithm.parse()?;

        let target = match &self.target {
            None | Some(Value::Null) => None,
            Some(value) => Some(integer_from_json(value).ok_or_else(|| {
                InputError::InvalidTarget {
                    value: value.to_string(),
                }
            })?),
        };

        if kind == AlgorithmKind::Binary && config.sort_binary_input {
            debug!("sorting input ahead of binary search");
            array.sort_unstable();
        }

        ValidatedInput::new(kind, array, target, config)
    }
}

/// Parse `"5, 2, 8"` into integers. Blank text is an empty array.
pub fn parse_csv(text: &str) -> Result<Vec<i64>, InputError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .enumerate()
        .map(|(position, part)| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| InputError::NotAnInteger {
                    position,
                    value: format!("{:?}", part.trim()),
                })
        })
        .collect()
}

/// Integers and integer strings are accepted; floats, booleans and text are not
fn integer_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Successful execution, in the shape callers serialize
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub success: bool,
    pub total_time_ms: f64,
    pub comparisons: u64,
    pub swaps: u64,
    pub step_count: usize,
    #[serde(flatten)]
    pub sequence: StepSequence,
}

impl ExecutionReport {
    pub fn new(sequence: StepSequence, total_time_ms: f64) -> Self {
        let last = sequence.last();
        ExecutionReport {
            success: true,
            total_time_ms,
            comparisons: last.comparisons,
            swaps: last.swaps,
            step_count: sequence.len(),
            sequence,
        }
    }
}

/// Validate and run a request end to end
pub fn execute_request(
    request: &ExecutionRequest,
    config: &EngineConfig,
) -> Result<ExecutionReport, EngineError> {
    let started = Instant::now();
    let input = request.validate(config)?;
    let sequence = super::run(&input)?;
    let total_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    Ok(ExecutionReport::new(sequence, total_time_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_with_spaces() {
        assert_eq!(parse_csv("5, 2,8 , 1"), Ok(vec![5, 2, 8, 1]));
        assert_eq!(parse_csv("  "), Ok(vec![]));
    }

    #[test]
    fn test_csv_reports_position() {
        let err = parse_csv("1,abc,3").unwrap_err();
        assert!(matches!(err, InputError::NotAnInteger { position: 1, .. }));
    }

    #[test]
    fn test_json_list_accepts_integer_strings() {
        let req = ExecutionRequest::from_json(r#"{"algorithm":"quick","array":[5,"2",8]}"#).unwrap();
        let input = req.validate(&EngineConfig::default()).unwrap();
        assert_eq!(input.array(), &[5, 2, 8]);
    }

    #[test]
    fn test_json_list_rejects_floats_and_bools() {
        for bad in [json!(1.5), json!(true), json!("x")] {
            let req = ExecutionRequest::new("bubble", ArrayInput::List(vec![json!(1), bad]), None);
            let err = req.validate(&EngineConfig::default()).unwrap_err();
            assert!(matches!(err, InputError::NotAnInteger { position: 1, .. }));
        }
    }

    #[test]
    fn test_binary_input_is_sorted_by_default() {
        let req = ExecutionRequest::new("binary", ArrayInput::Text("9,1,5".into()), Some(json!(5)));
        let input = req.validate(&EngineConfig::default()).unwrap();
        assert_eq!(input.array(), &[1, 5, 9]);

        let keep = EngineConfig {
            sort_binary_input: false,
            ..EngineConfig::default()
        };
        assert_eq!(req.validate(&keep).unwrap().array(), &[9, 1, 5]);
    }

    #[test]
    fn test_target_must_be_integer() {
        let req = ExecutionRequest::new("linear", ArrayInput::Text("1,2".into()), Some(json!("two")));
        assert!(matches!(
            req.validate(&EngineConfig::default()),
            Err(InputError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            ExecutionRequest::from_json("{broken"),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_report_totals_come_from_last_step() {
        let req = ExecutionRequest::new("bubble", ArrayInput::Text("3,2,1".into()), None);
        let report = execute_request(&req, &EngineConfig::default()).unwrap();
        assert_eq!(report.comparisons, 3);
        assert_eq!(report.swaps, 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["algorithm"], "bubble");
        assert_eq!(json["inputSize"], 3);
        assert_eq!(json["stepCount"], report.step_count);
    }
}
