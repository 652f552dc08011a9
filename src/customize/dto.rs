use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::nutrition::{Customization, EditAction, Ingredient, Item, NutritionData};
use crate::scoring::{ReferenceSet, ScoreBadge, ScoreBand};
use crate::swaps::SwapSuggestion;
use crate::tray::MealItem;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Remove,
    Modify,
}

/// Customization as sent by clients; payload fields depend on `action`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomizationInput {
    pub ingredient_id: Uuid,
    pub action: ActionKind,
    #[serde(default)]
    pub quantity_g: Option<f64>,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

impl TryFrom<CustomizationInput> for Customization {
    type Error = ValidationError;

    fn try_from(input: CustomizationInput) -> Result<Self, Self::Error> {
        let id = input.ingredient_id;
        let action = match input.action {
            ActionKind::Remove => EditAction::Remove,
            ActionKind::Add => {
                let q = input.quantity_g.ok_or(ValidationError::MissingQuantity(id))?;
                if !q.is_finite() || q < 0.0 {
                    return Err(ValidationError::InvalidQuantity { ingredient_id: id, value: q });
                }
                EditAction::Add { quantity_g: q }
            }
            ActionKind::Modify => {
                let m = input.multiplier.ok_or(ValidationError::MissingMultiplier(id))?;
                if !m.is_finite() || m < 0.0 {
                    return Err(ValidationError::InvalidMultiplier { ingredient_id: id, value: m });
                }
                EditAction::Modify { multiplier: m }
            }
        };
        Ok(Customization {
            ingredient_id: id,
            action,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CustomizeRequest {
    #[serde(default)]
    pub customizations: Vec<CustomizationInput>,
}

#[derive(Debug, Serialize)]
pub struct CustomizeResponse {
    pub nutrition: NutritionData,
    pub score: u8,
}

#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    pub profile_id: Option<Uuid>,
    pub reference: Option<ReferenceSet>,
    /// JSON-encoded list of customizations.
    pub customizations: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub customizations: Vec<CustomizationInput>,
    pub score_profile_id: Option<Uuid>,
    pub reference: Option<ReferenceSet>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub item_id: Uuid,
    pub profile_id: Option<Uuid>,
    pub reference: ReferenceSet,
    pub score: u8,
    pub badge: ScoreBadge,
    pub band: ScoreBand,
    pub nutrition: NutritionData,
    #[serde(with = "time::serde::rfc3339")]
    pub calculated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct LinkedIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub quantity_g: f64,
}

#[derive(Debug, Serialize)]
pub struct ItemDetails {
    pub item: Item,
    pub ingredients: Vec<LinkedIngredient>,
}

#[derive(Debug, Deserialize)]
pub struct SwapQuery {
    pub ingredient_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SwapResponse {
    pub item_id: Uuid,
    pub ingredient_id: Uuid,
    pub suggestions: Vec<SwapSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct TrayEntryRequest {
    pub item_id: Uuid,
    #[serde(default)]
    pub customizations: Vec<CustomizationInput>,
    pub quantity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TrayRequest {
    #[serde(default)]
    pub items: Vec<TrayEntryRequest>,
    pub score_profile_id: Option<Uuid>,
    pub reference: Option<ReferenceSet>,
}

#[derive(Debug, Serialize)]
pub struct TrayResponse {
    pub items: Vec<MealItem>,
    pub total_nutrition: NutritionData,
    pub total_score: u8,
    pub badge: ScoreBadge,
}
