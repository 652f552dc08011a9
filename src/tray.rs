//! Meal tray state. The tray is owned by whoever holds the session and is
//! passed in explicitly; nothing here is global.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::{Customization, Item, NutritionData};
use crate::scoring::{compute_score_with, ReferenceSet, ScoreProfile};

/// Score reported for a tray with nothing on it.
pub const EMPTY_TRAY_SCORE: u8 = 50;

#[derive(Debug, Clone, Serialize)]
pub struct MealItem {
    /// Tray entry id, distinct from the menu item id.
    pub id: Uuid,
    pub item: Item,
    pub customizations: Vec<Customization>,
    /// Resolved nutrition for one serving.
    pub nutrition: NutritionData,
    /// Score for one serving; quantity does not change it.
    pub score: u8,
    pub quantity: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

impl MealItem {
    pub fn new(item: Item, customizations: Vec<Customization>, nutrition: NutritionData, score: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            customizations,
            nutrition,
            score,
            quantity: 1.0,
            added_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Nutrition for every serving of this entry.
    pub fn total_nutrition(&self) -> NutritionData {
        self.nutrition.scale(self.quantity)
    }
}

/// Partial update for a tray entry; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct MealItemUpdate {
    pub customizations: Option<Vec<Customization>>,
    pub nutrition: Option<NutritionData>,
    pub score: Option<u8>,
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MealTray {
    items: Vec<MealItem>,
}

impl MealTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: MealItem) -> Uuid {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Returns false when no entry has that id.
    pub fn update_item(&mut self, id: Uuid, update: MealItemUpdate) -> bool {
        let Some(entry) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        if let Some(customizations) = update.customizations {
            entry.customizations = customizations;
        }
        if let Some(nutrition) = update.nutrition {
            entry.nutrition = nutrition;
        }
        if let Some(score) = update.score {
            entry.score = score;
        }
        if let Some(quantity) = update.quantity {
            entry.quantity = quantity;
        }
        true
    }

    pub fn remove_item(&mut self, id: Uuid) -> Option<MealItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_nutrition(&self) -> NutritionData {
        self.items.iter().map(MealItem::total_nutrition).sum()
    }

    pub fn total_score(&self, profile: &ScoreProfile, reference: ReferenceSet) -> u8 {
        if self.is_empty() {
            return EMPTY_TRAY_SCORE;
        }
        compute_score_with(&self.total_nutrition(), profile, reference)
    }
}
