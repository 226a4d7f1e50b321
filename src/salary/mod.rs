//! Age → salary inference.
//!
//! ## Design
//! - The model is loaded once at startup and shared read-only ([`ModelHandle`])
//! - [`SalaryPredictor`] takes the age the resolver already extracted; it
//!   never re-reads the utterance
//! - Load failures follow the configured [`SalaryMode`](crate::config::SalaryMode):
//!   fatal when required, logged and disabled when optional

pub mod model;

pub use model::{LinearRegressionArtifact, LinearRegressionModel, SalaryModel};

use crate::config::{SalaryConfig, SalaryMode};
use crate::error::EngineError;
use std::sync::Arc;

/// Process-wide, read-only handle to the loaded model.
pub type ModelHandle = Arc<dyn SalaryModel>;

/// Formats model output for a given age.
#[derive(Clone)]
pub struct SalaryPredictor {
    model: ModelHandle,
}

impl SalaryPredictor {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    /// Resolve the predictor for the configured mode.
    ///
    /// Returns `Ok(None)` when the feature is disabled, or optional and the
    /// artifact failed to load. A required artifact that fails to load is
    /// an error.
    pub fn from_config(config: &SalaryConfig) -> Result<Option<Self>, EngineError> {
        if config.mode == SalaryMode::Disabled {
            tracing::info!("Salary prediction disabled by config");
            return Ok(None);
        }

        match LinearRegressionModel::load(&config.model_path) {
            Ok(model) => {
                tracing::info!(
                    path = %config.model_path.display(),
                    coefficient = model.coefficients()[0],
                    intercept = model.intercept(),
                    "Loaded salary model"
                );
                Ok(Some(Self::new(Arc::new(model))))
            }
            Err(e) if config.mode == SalaryMode::Optional => {
                tracing::warn!("Salary model unavailable, age queries will be ignored: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Raw model output for `age`.
    pub fn predict(&self, age: u32) -> f64 {
        self.model.predict(&[f64::from(age)])
    }

    /// `Predicted salary for age {age}: ${value:.2}`
    pub fn predict_salary(&self, age: u32) -> String {
        let salary = self.predict(age);
        tracing::debug!(age, salary, model = self.model.name(), "Salary predicted");
        format!("Predicted salary for age {age}: ${salary:.2}")
    }
}
