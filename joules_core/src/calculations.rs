//! # Formula Calculations
//!
//! JSON-friendly wrapper around the registry. A calculation follows the
//! pattern:
//!
//! - [`FormulaInput`] - Which formula to run and with which arguments
//! - [`FormulaOutput`] - The value, labelled and with its units
//! - [`calculate`] - Pure function from one to the other
//!
//! ## Example
//!
//! ```rust
//! use joules_core::calculations::{calculate, FormulaInput};
//!
//! let input: FormulaInput = serde_json::from_str(r#"{
//!     "label": "Water tank",
//!     "formula": "cylinder_volume",
//!     "arguments": [6.5, 3]
//! }"#).unwrap();
//!
//! let output = calculate(&input).unwrap();
//! assert!((output.value - 398.196868842506).abs() < 1e-9);
//! assert_eq!(output.units, "length^3");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{JoulesError, JoulesResult};
use crate::formulas::registry::Formula;

/// Input for a single formula evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cooling loop",
///   "formula": "hydrostatic_pressure",
///   "arguments": [1000.0, 4.5]
/// }
/// ```
///
/// JSON integers are accepted in `arguments` and read as `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaInput {
    /// User label (e.g., "Tank T-1")
    #[serde(default)]
    pub label: String,

    /// Formula to evaluate
    pub formula: Formula,

    /// Positional arguments, in the order the formula documents them
    pub arguments: Vec<f64>,
}

impl FormulaInput {
    pub fn new(label: impl Into<String>, formula: Formula, arguments: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            formula,
            arguments: arguments.into(),
        }
    }

    /// Check the argument count against the formula.
    pub fn validate(&self) -> JoulesResult<()> {
        let expected = self.formula.arity();
        if self.arguments.len() != expected {
            return Err(JoulesError::arity_mismatch(
                self.formula.function_name(),
                expected,
                self.arguments.len(),
            ));
        }
        Ok(())
    }
}

/// Result of a formula evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cooling loop",
///   "formula": "hydrostatic_pressure",
///   "value": 44145.0,
///   "units": "Pa"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaOutput {
    pub label: String,
    pub formula: Formula,
    pub value: f64,
    pub units: String,
}

/// Evaluate a formula input.
///
/// # Returns
///
/// * `Ok(FormulaOutput)` - The computed value
/// * `Err(JoulesError)` - Wrong argument count, or the formula's own error
///   (`DivisionByZero` for `half_life` / `decay_constant`)
pub fn calculate(input: &FormulaInput) -> JoulesResult<FormulaOutput> {
    input.validate()?;

    let value = input.formula.evaluate(&input.arguments)?;

    Ok(FormulaOutput {
        label: input.label.clone(),
        formula: input.formula,
        value,
        units: input.formula.metadata().result_units.to_string(),
    })
}

/// Evaluate every input independently; one failure does not stop the rest.
pub fn calculate_batch(inputs: &[FormulaInput]) -> Vec<JoulesResult<FormulaOutput>> {
    let results: Vec<_> = inputs.iter().map(calculate).collect();
    let failures = results.iter().filter(|r| r.is_err()).count();
    if failures > 0 {
        log::debug!("Batch of {} finished with {} failure(s)", inputs.len(), failures);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank() -> FormulaInput {
        FormulaInput::new("Tank", Formula::CylinderVolume, vec![6.5, 3.0])
    }

    #[test]
    fn test_calculate() {
        let output = calculate(&tank()).unwrap();
        assert_eq!(output.label, "Tank");
        assert_eq!(output.formula, Formula::CylinderVolume);
        assert!((output.value - 398.196868842506).abs() < 1e-9);
        assert_eq!(output.units, "length^3");
    }

    #[test]
    fn test_wrong_arity() {
        let input = FormulaInput::new("Bad", Formula::TrapeziumArea, vec![1.0, 2.0]);
        assert!(input.validate().is_err());
        assert_eq!(
            calculate(&input).unwrap_err(),
            JoulesError::arity_mismatch("trapezium_area", 3, 2)
        );
    }

    #[test]
    fn test_division_by_zero_surfaces() {
        let input = FormulaInput::new("Stable", Formula::HalfLife, vec![0.0]);
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_json_integer_arguments() {
        let input: FormulaInput =
            serde_json::from_str(r#"{ "formula": "trapezium_area", "arguments": [10, 15, 3] }"#).unwrap();
        assert_eq!(input.label, "");
        assert_eq!(calculate(&input).unwrap().value, 37.5);
    }

    #[test]
    fn test_unknown_formula_in_json() {
        let result: Result<FormulaInput, _> =
            serde_json::from_str(r#"{ "formula": "warp_drive", "arguments": [1] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_calculate_batch() {
        let inputs = vec![
            tank(),
            FormulaInput::new("Zero", Formula::HalfLife, vec![0.0]),
            FormulaInput::new("Plate", Formula::Pressure, vec![10.0, 2.0]),
        ];
        let results = calculate_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().value, 5.0);
    }

    #[test]
    fn test_output_serialization() {
        let output = calculate(&tank()).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"formula\":\"cylinder_volume\""));
        let roundtrip: FormulaOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.label, roundtrip.label);
        assert_eq!(output.formula, roundtrip.formula);
        assert!((output.value - roundtrip.value).abs() < 1e-9);
    }
}
