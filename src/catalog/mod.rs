//! Read-only menu reference data: items, their recipes, ingredients and
//! score profiles.

mod memory;
mod repo;
mod repo_types;

pub use memory::InMemoryCatalog;
pub use repo::PgCatalog;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nutrition::{Ingredient, Item, ItemIngredientLink};
use crate::scoring::ScoreProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Ordered by name.
    async fn restaurants(&self) -> anyhow::Result<Vec<Restaurant>>;
    async fn restaurant_by_id(&self, id: Uuid) -> anyhow::Result<Option<Restaurant>>;
    /// Ordered by name.
    async fn items_by_restaurant(&self, restaurant_id: Uuid) -> anyhow::Result<Vec<Item>>;
    async fn item_by_id(&self, id: Uuid) -> anyhow::Result<Option<Item>>;
    async fn item_links(&self, item_id: Uuid) -> anyhow::Result<Vec<ItemIngredientLink>>;
    /// Unknown ids are left out of the result.
    async fn ingredients_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Ingredient>>;
    async fn all_ingredients(&self) -> anyhow::Result<Vec<Ingredient>>;
    async fn default_profile(&self) -> anyhow::Result<Option<ScoreProfile>>;
    async fn profile_by_id(&self, id: Uuid) -> anyhow::Result<Option<ScoreProfile>>;
    /// Default profile first, then by name.
    async fn all_profiles(&self) -> anyhow::Result<Vec<ScoreProfile>>;
}
