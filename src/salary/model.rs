//! Regression model artifact.
//!
//! The engine depends only on [`SalaryModel::predict`]. The shipped
//! implementation reads a small JSON artifact produced offline:
//!
//! ```json
//! { "kind": "linear_regression", "feature_names": ["age"],
//!   "coefficients": [1520.75], "intercept": 18250.0 }
//! ```

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Artifact kind accepted by [`LinearRegressionModel::load`].
pub const LINEAR_REGRESSION_KIND: &str = "linear_regression";

/// A loaded, read-only regression model.
pub trait SalaryModel: Send + Sync {
    /// Predict one value from one feature vector.
    fn predict(&self, features: &[f64]) -> f64;

    /// Short identifier for logs.
    fn name(&self) -> &str {
        "model"
    }
}

/// On-disk representation of a linear regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionArtifact {
    pub kind: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// `intercept + Σ coefficient·feature`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressionModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Read and validate a single-feature (`age`) artifact.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::model(path, format!("cannot read artifact: {e}")))?;
        let artifact: LinearRegressionArtifact = serde_json::from_str(&raw)
            .map_err(|e| EngineError::model(path, format!("invalid artifact: {e}")))?;
        Self::from_artifact(artifact).map_err(|reason| EngineError::model(path, reason))
    }

    /// Validate an already-parsed artifact.
    pub fn from_artifact(artifact: LinearRegressionArtifact) -> Result<Self, String> {
        if artifact.kind != LINEAR_REGRESSION_KIND {
            return Err(format!(
                "unsupported model kind '{}', expected '{LINEAR_REGRESSION_KIND}'",
                artifact.kind
            ));
        }
        if artifact.coefficients.len() != 1 {
            return Err(format!(
                "expected exactly one coefficient (age), found {}",
                artifact.coefficients.len()
            ));
        }
        if artifact.feature_names.len() != artifact.coefficients.len() {
            return Err(format!(
                "{} feature names for {} coefficients",
                artifact.feature_names.len(),
                artifact.coefficients.len()
            ));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("model parameters must be finite".into());
        }
        Ok(Self::new(artifact.coefficients, artifact.intercept))
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl SalaryModel for LinearRegressionModel {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    fn name(&self) -> &str {
        LINEAR_REGRESSION_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact() -> LinearRegressionArtifact {
        LinearRegressionArtifact {
            kind: LINEAR_REGRESSION_KIND.into(),
            feature_names: vec!["age".into()],
            coefficients: vec![1000.0],
            intercept: 5000.0,
        }
    }

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn predicts_linear_combination() {
        let model = LinearRegressionModel::new(vec![1000.0], 5000.0);
        assert!((model.predict(&[30.0]) - 35000.0).abs() < 1e-9);
    }

    #[test]
    fn load_valid_artifact() {
        let file = write_json(
            r#"{"kind":"linear_regression","feature_names":["age"],"coefficients":[1520.75],"intercept":18250.0}"#,
        );
        let model = LinearRegressionModel::load(file.path()).unwrap();
        assert_eq!(model.coefficients(), &[1520.75]);
        assert!((model.intercept() - 18250.0).abs() < 1e-9);
    }

    #[test]
    fn load_missing_file_is_model_unavailable() {
        let err = LinearRegressionModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, EngineError::ModelUnavailable { .. }));
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn load_malformed_json_is_model_unavailable() {
        let file = write_json("not json at all");
        let err = LinearRegressionModel::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid artifact"));
    }

    #[test]
    fn rejects_wrong_kind() {
        let err = LinearRegressionModel::from_artifact(LinearRegressionArtifact {
            kind: "random_forest".into(),
            ..artifact()
        })
        .unwrap_err();
        assert!(err.contains("random_forest"));
    }

    #[test]
    fn rejects_multiple_features() {
        let err = LinearRegressionModel::from_artifact(LinearRegressionArtifact {
            feature_names: vec!["age".into(), "tenure".into()],
            coefficients: vec![1.0, 2.0],
            ..artifact()
        })
        .unwrap_err();
        assert!(err.contains("exactly one"));
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let err = LinearRegressionModel::from_artifact(LinearRegressionArtifact {
            intercept: f64::NAN,
            ..artifact()
        })
        .unwrap_err();
        assert!(err.contains("finite"));
    }
}
