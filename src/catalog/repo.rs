use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{IngredientRow, ItemIngredientRow, ItemRow, RestaurantRow, ScoreProfileRow};
use super::{Catalog, Restaurant};
use crate::nutrition::{Ingredient, Item, ItemIngredientLink};
use crate::scoring::ScoreProfile;

const ITEM_COLUMNS: &str = r#"
    id, restaurant_id, name, description,
    base_calories::float8 AS base_calories,
    base_protein::float8 AS base_protein,
    base_carbs::float8 AS base_carbs,
    base_fat::float8 AS base_fat,
    base_sodium::float8 AS base_sodium,
    base_fiber::float8 AS base_fiber,
    base_sugar::float8 AS base_sugar
"#;

const INGREDIENT_COLUMNS: &str = r#"
    id, name,
    calories_per_100g::float8 AS calories_per_100g,
    protein::float8 AS protein,
    carbs::float8 AS carbs,
    fat::float8 AS fat,
    sodium::float8 AS sodium,
    fiber::float8 AS fiber,
    sugar::float8 AS sugar
"#;

const PROFILE_COLUMNS: &str = r#"
    id, name,
    calories_weight::float8 AS calories_weight,
    protein_weight::float8 AS protein_weight,
    carbs_weight::float8 AS carbs_weight,
    fat_weight::float8 AS fat_weight,
    sodium_weight::float8 AS sodium_weight,
    fiber_weight::float8 AS fiber_weight,
    sugar_weight::float8 AS sugar_weight,
    is_default
"#;

/// Catalog backed by the Postgres menu tables.
#[derive(Clone)]
pub struct PgCatalog {
    db: PgPool,
}

impl PgCatalog {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn restaurants(&self) -> anyhow::Result<Vec<Restaurant>> {
        let rows = sqlx::query_as::<_, RestaurantRow>(
            r#"SELECT id, name, logo_url FROM restaurants ORDER BY name"#,
        )
        .fetch_all(&self.db)
        .await
        .context("select restaurants")?;
        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn restaurant_by_id(&self, id: Uuid) -> anyhow::Result<Option<Restaurant>> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"SELECT id, name, logo_url FROM restaurants WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("select restaurant")?;
        Ok(row.map(Restaurant::from))
    }

    async fn items_by_restaurant(&self, restaurant_id: Uuid) -> anyhow::Result<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE restaurant_id = $1 ORDER BY name"
        ))
        .bind(restaurant_id)
        .fetch_all(&self.db)
        .await
        .context("select items by restaurant")?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn item_by_id(&self, id: Uuid) -> anyhow::Result<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("select item")?;
        Ok(row.map(Item::from))
    }

    async fn item_links(&self, item_id: Uuid) -> anyhow::Result<Vec<ItemIngredientLink>> {
        let rows = sqlx::query_as::<_, ItemIngredientRow>(
            r#"
            SELECT item_id, ingredient_id, quantity_g::float8 AS quantity_g
            FROM item_ingredients
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.db)
        .await
        .context("select item ingredients")?;
        Ok(rows.into_iter().map(ItemIngredientLink::from).collect())
    }

    async fn ingredients_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Ingredient>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, IngredientRow>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.db)
        .await
        .context("select ingredients by id")?;
        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    async fn all_ingredients(&self) -> anyhow::Result<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, IngredientRow>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients ORDER BY name"
        ))
        .fetch_all(&self.db)
        .await
        .context("select all ingredients")?;
        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    async fn default_profile(&self) -> anyhow::Result<Option<ScoreProfile>> {
        let row = sqlx::query_as::<_, ScoreProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM score_profiles WHERE is_default = TRUE LIMIT 1"
        ))
        .fetch_optional(&self.db)
        .await
        .context("select default score profile")?;
        Ok(row.map(ScoreProfile::from))
    }

    async fn profile_by_id(&self, id: Uuid) -> anyhow::Result<Option<ScoreProfile>> {
        let row = sqlx::query_as::<_, ScoreProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM score_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("select score profile")?;
        Ok(row.map(ScoreProfile::from))
    }

    async fn all_profiles(&self) -> anyhow::Result<Vec<ScoreProfile>> {
        let rows = sqlx::query_as::<_, ScoreProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM score_profiles ORDER BY is_default DESC, name"
        ))
        .fetch_all(&self.db)
        .await
        .context("select score profiles")?;
        Ok(rows.into_iter().map(ScoreProfile::from).collect())
    }
}
