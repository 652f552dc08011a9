use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Absolute nutrition totals for a served item or a whole tray.
///
/// Units: kcal for `calories`, mg for `sodium`, grams for everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl NutritionData {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Floors every field at zero.
    pub fn clamped(self) -> Self {
        Self {
            calories: self.calories.max(0.0),
            protein: self.protein.max(0.0),
            carbs: self.carbs.max(0.0),
            fat: self.fat.max(0.0),
            sodium: self.sodium.max(0.0),
            fiber: self.fiber.max(0.0),
            sugar: self.sugar.max(0.0),
        }
    }
}

/// Catalog ingredient. Nutrient fields are densities per 100g, not totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub calories_per_100g: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl Ingredient {
    /// Absolute nutrition contributed by `grams` of this ingredient.
    pub fn nutrition_for(&self, grams: f64) -> NutritionData {
        NutritionData {
            calories: self.calories_per_100g * grams / 100.0,
            protein: self.protein * grams / 100.0,
            carbs: self.carbs * grams / 100.0,
            fat: self.fat * grams / 100.0,
            sodium: self.sodium * grams / 100.0,
            fiber: self.fiber * grams / 100.0,
            sugar: self.sugar * grams / 100.0,
        }
    }
}

/// Menu item with the nutrition of its standard recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub restaurant_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub base_calories: f64,
    pub base_protein: f64,
    pub base_carbs: f64,
    pub base_fat: f64,
    pub base_sodium: f64,
    pub base_fiber: f64,
    pub base_sugar: f64,
}

impl Item {
    pub fn base_nutrition(&self) -> NutritionData {
        NutritionData {
            calories: self.base_calories,
            protein: self.base_protein,
            carbs: self.base_carbs,
            fat: self.base_fat,
            sodium: self.base_sodium,
            fiber: self.base_fiber,
            sugar: self.base_sugar,
        }
    }
}

/// Grams of one ingredient in an item's standard recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemIngredientLink {
    pub item_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity_g: f64,
}

/// What a customization does to its ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EditAction {
    /// Add `quantity_g` grams of an ingredient outside the standard recipe.
    Add { quantity_g: f64 },
    /// Drop the ingredient's standard-recipe contribution entirely.
    Remove,
    /// Scale the standard-recipe grams by `multiplier`.
    Modify { multiplier: f64 },
}

/// A single ingredient edit within one item customization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    pub ingredient_id: Uuid,
    #[serde(flatten)]
    pub action: EditAction,
}

impl Customization {
    pub fn add(ingredient_id: Uuid, quantity_g: f64) -> Self {
        Self {
            ingredient_id,
            action: EditAction::Add { quantity_g },
        }
    }

    pub fn remove(ingredient_id: Uuid) -> Self {
        Self {
            ingredient_id,
            action: EditAction::Remove,
        }
    }

    pub fn modify(ingredient_id: Uuid, multiplier: f64) -> Self {
        Self {
            ingredient_id,
            action: EditAction::Modify { multiplier },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_floors_negative_fields_only() {
        let n = NutritionData {
            calories: -12.0,
            protein: 3.0,
            carbs: -0.5,
            ..NutritionData::zero()
        }
        .clamped();
        assert_eq!(n.calories, 0.0);
        assert_eq!(n.protein, 3.0);
        assert_eq!(n.carbs, 0.0);
    }

    #[test]
    fn customization_serializes_flat() {
        let id = Uuid::from_u128(7);
        let json = serde_json::to_value(Customization::modify(id, 1.5)).unwrap();
        assert_eq!(json["action"], "modify");
        assert_eq!(json["multiplier"], 1.5);
        assert_eq!(json["ingredient_id"], id.to_string());
    }
}
