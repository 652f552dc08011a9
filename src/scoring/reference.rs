use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Nutrient amounts treated as "100%" when normalizing a sub-score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceValues {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
}

/// Roughly a third of the daily table.
pub const MEAL_REFERENCE: ReferenceValues = ReferenceValues {
    calories: 667.0,
    protein: 17.0,
    carbs: 83.0,
    fat: 22.0,
    sodium: 767.0,
    fiber: 8.0,
    sugar: 17.0,
};

pub const DAILY_REFERENCE: ReferenceValues = ReferenceValues {
    calories: 2000.0,
    protein: 50.0,
    carbs: 250.0,
    fat: 65.0,
    sodium: 2300.0,
    fiber: 25.0,
    sugar: 50.0,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSet {
    #[default]
    Meal,
    Daily,
}

impl ReferenceSet {
    pub fn values(self) -> &'static ReferenceValues {
        match self {
            ReferenceSet::Meal => &MEAL_REFERENCE,
            ReferenceSet::Daily => &DAILY_REFERENCE,
        }
    }
}

impl fmt::Display for ReferenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSet::Meal => f.write_str("meal"),
            ReferenceSet::Daily => f.write_str("daily"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown reference set `{0}`, expected `meal` or `daily`")]
pub struct UnknownReferenceSet(pub String);

impl FromStr for ReferenceSet {
    type Err = UnknownReferenceSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meal" => Ok(ReferenceSet::Meal),
            "daily" => Ok(ReferenceSet::Daily),
            _ => Err(UnknownReferenceSet(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_per_meal() {
        assert_eq!(ReferenceSet::default().values(), &MEAL_REFERENCE);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Daily".parse::<ReferenceSet>().unwrap(), ReferenceSet::Daily);
        assert!("weekly".parse::<ReferenceSet>().is_err());
    }
}
