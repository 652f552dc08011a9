use crate::nutrition::NutritionData;

use super::profile::ScoreProfile;
use super::reference::ReferenceSet;

/// Maps a nutrient amount onto 0..=100 relative to its reference value.
///
/// Higher-is-better nutrients grow linearly and cap at 100. For the others
/// the score is `100 - (ratio - 1) * 50` clamped to 0..=100, and drops to 0
/// from twice the reference upward. A zero reference yields a neutral 50.
pub fn normalize(value: f64, reference: f64, higher_is_better: bool) -> f64 {
    if reference == 0.0 {
        return 50.0;
    }
    let ratio = value / reference;

    if higher_is_better {
        return (ratio * 100.0).clamp(0.0, 100.0);
    }
    if ratio <= 0.0 {
        return 100.0;
    }
    if ratio >= 2.0 {
        return 0.0;
    }
    (100.0 - (ratio - 1.0) * 50.0).clamp(0.0, 100.0)
}

/// Scores against the per-meal reference table.
pub fn compute_score(nutrition: &NutritionData, profile: &ScoreProfile) -> u8 {
    compute_score_with(nutrition, profile, ReferenceSet::Meal)
}

pub fn compute_score_with(
    nutrition: &NutritionData,
    profile: &ScoreProfile,
    reference: ReferenceSet,
) -> u8 {
    let refs = reference.values();

    let weighted = [
        (normalize(nutrition.calories, refs.calories, false), profile.calories_weight),
        (normalize(nutrition.protein, refs.protein, true), profile.protein_weight),
        (normalize(nutrition.carbs, refs.carbs, false), profile.carbs_weight),
        (normalize(nutrition.fat, refs.fat, false), profile.fat_weight),
        (normalize(nutrition.sodium, refs.sodium, false), profile.sodium_weight),
        (normalize(nutrition.fiber, refs.fiber, true), profile.fiber_weight),
        (normalize(nutrition.sugar, refs.sugar, false), profile.sugar_weight),
    ]
    .iter()
    .map(|(score, weight)| score * weight)
    .sum::<f64>();

    // NaN weights saturate to 0 in the cast.
    weighted.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{resolve_nutrition, Item};
    use uuid::Uuid;

    #[test]
    fn normalize_lower_is_better_breakpoints() {
        assert_eq!(normalize(0.0, 667.0, false), 100.0);
        assert_eq!(normalize(667.0, 667.0, false), 100.0);
        assert_eq!(normalize(1000.5, 667.0, false), 75.0);
        assert_eq!(normalize(1334.0, 667.0, false), 0.0);
        assert_eq!(normalize(5000.0, 667.0, false), 0.0);
    }

    #[test]
    fn normalize_higher_is_better_caps_at_hundred() {
        assert_eq!(normalize(8.5, 17.0, true), 50.0);
        assert_eq!(normalize(40.0, 17.0, true), 100.0);
        assert_eq!(normalize(0.0, 17.0, true), 0.0);
    }

    #[test]
    fn zero_reference_is_neutral() {
        assert_eq!(normalize(123.0, 0.0, true), 50.0);
        assert_eq!(normalize(123.0, 0.0, false), 50.0);
    }

    #[test]
    fn all_zero_nutrition_scores_75_with_default_profile() {
        let score = compute_score(&NutritionData::zero(), &ScoreProfile::default_profile());
        assert_eq!(score, 75);
    }

    #[test]
    fn more_protein_never_lowers_the_score() {
        let profile = ScoreProfile::default_profile();
        let mut nutrition = NutritionData {
            calories: 700.0,
            carbs: 60.0,
            fat: 30.0,
            sodium: 1100.0,
            fiber: 3.0,
            sugar: 12.0,
            ..NutritionData::zero()
        };
        let mut previous = 0;
        for grams in 0..40 {
            nutrition.protein = grams as f64;
            let score = compute_score(&nutrition, &profile);
            assert!(score >= previous, "score dropped at {grams}g protein");
            previous = score;
        }
    }

    #[test]
    fn overweighted_profile_is_clamped() {
        let profile = ScoreProfile {
            calories_weight: 1.0,
            carbs_weight: 1.0,
            ..ScoreProfile::default_profile()
        };
        assert_eq!(compute_score(&NutritionData::zero(), &profile), 100);
    }

    #[test]
    fn daily_reference_is_more_lenient_than_meal() {
        let heavy = NutritionData {
            calories: 1200.0,
            protein: 30.0,
            carbs: 120.0,
            fat: 50.0,
            sodium: 1800.0,
            fiber: 6.0,
            sugar: 30.0,
        };
        let profile = ScoreProfile::default_profile();
        assert!(
            compute_score_with(&heavy, &profile, ReferenceSet::Daily)
                > compute_score_with(&heavy, &profile, ReferenceSet::Meal)
        );
    }

    #[test]
    fn resolved_fixture_item_matches_hand_computed_score() {
        let item = Item {
            id: Uuid::from_u128(1),
            restaurant_id: None,
            name: "Grilled Chicken Wrap".into(),
            description: None,
            base_calories: 500.0,
            base_protein: 10.0,
            base_carbs: 50.0,
            base_fat: 20.0,
            base_sodium: 800.0,
            base_fiber: 4.0,
            base_sugar: 10.0,
        };
        let nutrition = resolve_nutrition(&item, &[], &[], &[]);
        // 20 + 8.8235 + 15 + 15 + 14.6773 + 5 + 10 = 88.50
        assert_eq!(compute_score(&nutrition, &ScoreProfile::default_profile()), 89);
    }
}
