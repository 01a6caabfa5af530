use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;

/// Default category weights: skills dominate, experience and GitHub signals
/// share the remainder.
pub const DEFAULT_WEIGHTS: CategoryWeights = CategoryWeights {
    skills: 0.4,
    experience: 0.3,
    github: 0.3,
};

/// Tolerance for the weight-sum invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the three scoring categories. Passed explicitly into every
/// evaluation; there is no process-wide mutable default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub skills: f64,
    pub experience: f64,
    pub github: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.github
    }

    /// Every weight must lie in [0, 1] and the sum must be 1 within
    /// [`WEIGHT_SUM_TOLERANCE`]. Anything else is a configuration error and
    /// no scoring takes place.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        for (name, weight) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("github", self.github),
        ] {
            if weight.is_nan() || !(0.0..=1.0).contains(&weight) {
                return Err(EvaluationError::Configuration(format!(
                    "category weight '{name}' must be in [0, 1], got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EvaluationError::Configuration(format!(
                "category weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn rejects_sum_above_one() {
        let weights = CategoryWeights {
            skills: 0.5,
            experience: 0.5,
            github: 0.1,
        };
        assert!(matches!(
            weights.validate(),
            Err(EvaluationError::Configuration(_))
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let weights = CategoryWeights {
            skills: 1.2,
            experience: -0.2,
            github: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn accepts_zeroed_category() {
        let weights = CategoryWeights {
            skills: 0.7,
            experience: 0.3,
            github: 0.0,
        };
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn tolerates_float_noise_in_sum() {
        let weights = CategoryWeights {
            skills: 0.1 + 0.2,
            experience: 0.4,
            github: 0.3,
        };
        assert!(weights.validate().is_ok());
    }
}
