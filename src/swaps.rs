//! Healthier ingredient alternatives.

use std::cmp::Ordering;

use serde::Serialize;

use crate::nutrition::Ingredient;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SwapSuggestion {
    pub ingredient: Ingredient,
    pub improvement: f64,
    pub reason: String,
}

/// Rough per-100g "cost": energy plus fat, minus protein and fiber.
fn heaviness(i: &Ingredient) -> f64 {
    i.calories_per_100g + i.fat * 9.0 - i.protein * 4.0 - i.fiber * 2.0
}

fn improvement(current: &Ingredient, candidate: &Ingredient) -> f64 {
    let gain = (current.calories_per_100g - candidate.calories_per_100g)
        + (candidate.protein - current.protein) * 4.0
        + (candidate.fiber - current.fiber) * 2.0
        - (candidate.fat - current.fat) * 9.0;
    gain.max(0.0)
}

fn reason(current: &Ingredient, candidate: &Ingredient) -> String {
    let mut parts = Vec::new();
    if candidate.calories_per_100g < current.calories_per_100g {
        parts.push("fewer calories");
    }
    if candidate.protein > current.protein {
        parts.push("more protein");
    }
    if candidate.fiber > current.fiber {
        parts.push("more fiber");
    }
    let phrase = match parts.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => return format!("Similar to {}", current.name),
    };
    let mut chars = phrase.chars();
    let capitalized: String = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .into_iter()
        .chain(chars)
        .collect();
    format!("{capitalized} than {}", current.name)
}

/// Candidates that beat `current` on calories, protein or fiber, lightest
/// first, at most `limit` of them.
pub fn suggest_swaps(current: &Ingredient, candidates: &[Ingredient], limit: usize) -> Vec<SwapSuggestion> {
    let mut better: Vec<&Ingredient> = candidates
        .iter()
        .filter(|c| c.id != current.id)
        .filter(|c| {
            c.calories_per_100g < current.calories_per_100g
                || c.protein > current.protein
                || c.fiber > current.fiber
        })
        .collect();

    better.sort_by(|a, b| {
        heaviness(a)
            .partial_cmp(&heaviness(b))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    better
        .into_iter()
        .take(limit)
        .map(|c| SwapSuggestion {
            ingredient: c.clone(),
            improvement: improvement(current, c),
            reason: reason(current, c),
        })
        .collect()
}
