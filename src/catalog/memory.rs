use async_trait::async_trait;
use uuid::Uuid;

use super::{Catalog, Restaurant};
use crate::nutrition::{Ingredient, Item, ItemIngredientLink};
use crate::scoring::ScoreProfile;

/// Catalog held in memory; used by tests and local demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub restaurants: Vec<Restaurant>,
    pub items: Vec<Item>,
    pub ingredients: Vec<Ingredient>,
    pub links: Vec<ItemIngredientLink>,
    pub profiles: Vec<ScoreProfile>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restaurant(mut self, restaurant: Restaurant) -> Self {
        self.restaurants.push(restaurant);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_link(mut self, item_id: Uuid, ingredient_id: Uuid, quantity_g: f64) -> Self {
        self.links.push(ItemIngredientLink {
            item_id,
            ingredient_id,
            quantity_g,
        });
        self
    }

    pub fn with_profile(mut self, profile: ScoreProfile) -> Self {
        self.profiles.push(profile);
        self
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn restaurants(&self) -> anyhow::Result<Vec<Restaurant>> {
        let mut all = self.restaurants.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn restaurant_by_id(&self, id: Uuid) -> anyhow::Result<Option<Restaurant>> {
        Ok(self.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn items_by_restaurant(&self, restaurant_id: Uuid) -> anyhow::Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| i.restaurant_id == Some(restaurant_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn item_by_id(&self, id: Uuid) -> anyhow::Result<Option<Item>> {
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }

    async fn item_links(&self, item_id: Uuid) -> anyhow::Result<Vec<ItemIngredientLink>> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.item_id == item_id)
            .copied()
            .collect())
    }

    async fn ingredients_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Ingredient>> {
        Ok(self
            .ingredients
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn all_ingredients(&self) -> anyhow::Result<Vec<Ingredient>> {
        let mut all = self.ingredients.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn default_profile(&self) -> anyhow::Result<Option<ScoreProfile>> {
        Ok(self.profiles.iter().find(|p| p.is_default).cloned())
    }

    async fn profile_by_id(&self, id: Uuid) -> anyhow::Result<Option<ScoreProfile>> {
        Ok(self.profiles.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn all_profiles(&self) -> anyhow::Result<Vec<ScoreProfile>> {
        let mut all = self.profiles.clone();
        all.sort_by(|a, b| b.is_default.cmp(&a.is_default).then_with(|| a.name.cmp(&b.name)));
        Ok(all)
    }
}
