use sqlx::FromRow;
use uuid::Uuid;

use super::Restaurant;
use crate::nutrition::{Ingredient, Item, ItemIngredientLink};
use crate::scoring::ScoreProfile;

// Numeric columns are cast to float8 in the queries.

#[derive(Debug, FromRow)]
pub struct RestaurantRow {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(r: RestaurantRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            logo_url: r.logo_url,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ItemRow {
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

impl From<ItemRow> for Item {
    fn from(r: ItemRow) -> Self {
        Self {
            id: r.id,
            restaurant_id: r.restaurant_id,
            name: r.name,
            description: r.description,
            base_calories: r.base_calories,
            base_protein: r.base_protein,
            base_carbs: r.base_carbs,
            base_fat: r.base_fat,
            base_sodium: r.base_sodium,
            base_fiber: r.base_fiber,
            base_sugar: r.base_sugar,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct IngredientRow {
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

impl From<IngredientRow> for Ingredient {
    fn from(r: IngredientRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            calories_per_100g: r.calories_per_100g,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            sodium: r.sodium,
            fiber: r.fiber,
            sugar: r.sugar,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ItemIngredientRow {
    pub item_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity_g: f64,
}

impl From<ItemIngredientRow> for ItemIngredientLink {
    fn from(r: ItemIngredientRow) -> Self {
        Self {
            item_id: r.item_id,
            ingredient_id: r.ingredient_id,
            quantity_g: r.quantity_g,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ScoreProfileRow {
    pub id: Uuid,
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

impl From<ScoreProfileRow> for ScoreProfile {
    fn from(r: ScoreProfileRow) -> Self {
        Self {
            id: Some(r.id),
            name: r.name,
            calories_weight: r.calories_weight,
            protein_weight: r.protein_weight,
            carbs_weight: r.carbs_weight,
            fat_weight: r.fat_weight,
            sodium_weight: r.sodium_weight,
            fiber_weight: r.fiber_weight,
            sugar_weight: r.sugar_weight,
            is_default: r.is_default,
        }
    }
}
