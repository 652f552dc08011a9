use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weights applied to the seven nutrient sub-scores.
///
/// A well-formed profile's weights sum to 1.0; the evaluator clamps the
/// result either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    /// `None` for the built-in profile that has no catalog row.
    pub id: Option<Uuid>,
    pub name: String,
    pub calories_weight: f64,
    pub protein_weight: f64,
    pub carbs_weight: f64,
    pub fat_weight: f64,
    pub sodium_weight: f64,
    pub fiber_weight: f64,
    pub sugar_weight: f64,
    pub is_default: bool,
}

impl ScoreProfile {
    /// Built-in weights used when no profile is configured.
    pub fn default_profile() -> Self {
        Self {
            id: None,
            name: "Default Profile".into(),
            calories_weight: 0.20,
            protein_weight: 0.15,
            carbs_weight: 0.15,
            fat_weight: 0.15,
            sodium_weight: 0.15,
            fiber_weight: 0.10,
            sugar_weight: 0.10,
            is_default: true,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.calories_weight
            + self.protein_weight
            + self.carbs_weight
            + self.fat_weight
            + self.sodium_weight
            + self.fiber_weight
            + self.sugar_weight
    }
}

impl Default for ScoreProfile {
    fn default() -> Self {
        Self::default_profile()
    }
}
