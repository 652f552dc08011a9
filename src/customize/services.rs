use std::collections::HashMap;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::customize::dto::{
    CustomizationInput, ItemDetails, LinkedIngredient, ScoreResponse, SwapResponse, TrayRequest, TrayResponse,
};
use crate::errors::{ServiceError, ValidationError};
use crate::nutrition::{resolve_nutrition, Customization, Item, NutritionData};
use crate::scoring::{compute_score_with, ReferenceSet, ScoreBadge, ScoreBand, ScoreProfile};
use crate::state::AppState;
use crate::swaps::suggest_swaps;
use crate::tray::{MealItem, MealTray};

pub fn validate_customizations(inputs: Vec<CustomizationInput>) -> Result<Vec<Customization>, ValidationError> {
    inputs.into_iter().map(Customization::try_from).collect()
}

/// Decodes the `customizations` query parameter.
pub fn parse_customizations_param(raw: Option<&str>) -> Result<Vec<Customization>, ValidationError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    let inputs: Vec<CustomizationInput> =
        serde_json::from_str(raw).map_err(|e| ValidationError::MalformedCustomizations(e.to_string()))?;
    validate_customizations(inputs)
}

/// The requested profile, else the stored default, else the built-in one.
pub async fn load_profile(catalog: &dyn Catalog, profile_id: Option<Uuid>) -> Result<ScoreProfile, ServiceError> {
    if let Some(id) = profile_id {
        return catalog
            .profile_by_id(id)
            .await?
            .ok_or(ServiceError::ProfileNotFound(id));
    }
    match catalog.default_profile().await? {
        Some(p) => Ok(p),
        None => {
            debug!("no stored default profile, using built-in weights");
            Ok(ScoreProfile::default_profile())
        }
    }
}

/// Loads what the resolver needs for one item and applies `edits`.
pub async fn resolve_item(
    catalog: &dyn Catalog,
    item_id: Uuid,
    edits: &[Customization],
) -> Result<(Item, NutritionData), ServiceError> {
    let item = catalog
        .item_by_id(item_id)
        .await?
        .ok_or(ServiceError::ItemNotFound(item_id))?;
    let links = catalog.item_links(item_id).await?;

    let mut ids: Vec<Uuid> = links.iter().map(|l| l.ingredient_id).collect();
    for edit in edits {
        if !ids.contains(&edit.ingredient_id) {
            ids.push(edit.ingredient_id);
        }
    }
    let ingredients = catalog.ingredients_by_ids(&ids).await?;

    let nutrition = resolve_nutrition(&item, &ingredients, &links, edits);
    debug!(%item_id, edits = edits.len(), calories = nutrition.calories, "resolved nutrition");
    Ok((item, nutrition))
}

pub async fn customize_item(
    state: &AppState,
    item_id: Uuid,
    edits: &[Customization],
) -> Result<(NutritionData, u8), ServiceError> {
    let (_, nutrition) = resolve_item(state.catalog.as_ref(), item_id, edits).await?;
    let profile = load_profile(state.catalog.as_ref(), None).await?;
    let score = compute_score_with(&nutrition, &profile, state.scoring.default_reference);
    Ok((nutrition, score))
}

pub async fn score_item(
    state: &AppState,
    item_id: Uuid,
    edits: &[Customization],
    profile_id: Option<Uuid>,
    reference: Option<ReferenceSet>,
) -> Result<ScoreResponse, ServiceError> {
    let profile = load_profile(state.catalog.as_ref(), profile_id).await?;
    let (_, nutrition) = resolve_item(state.catalog.as_ref(), item_id, edits).await?;
    let reference = reference.unwrap_or(state.scoring.default_reference);
    let score = compute_score_with(&nutrition, &profile, reference);

    info!(%item_id, score, %reference, "item scored");
    Ok(ScoreResponse {
        item_id,
        profile_id: profile.id,
        reference,
        score,
        badge: ScoreBadge::for_score(score),
        band: ScoreBand::for_score(score),
        nutrition,
        calculated_at: OffsetDateTime::now_utc(),
    })
}

pub async fn item_details(state: &AppState, item_id: Uuid) -> Result<ItemDetails, ServiceError> {
    let catalog = state.catalog.as_ref();
    let item = catalog
        .item_by_id(item_id)
        .await?
        .ok_or(ServiceError::ItemNotFound(item_id))?;
    let links = catalog.item_links(item_id).await?;
    let ids: Vec<Uuid> = links.iter().map(|l| l.ingredient_id).collect();
    let mut by_id: HashMap<Uuid, _> = catalog
        .ingredients_by_ids(&ids)
        .await?
        .into_iter()
        .map(|i| (i.id, i))
        .collect();

    let ingredients = links
        .iter()
        .filter_map(|l| {
            by_id.remove(&l.ingredient_id).map(|ingredient| LinkedIngredient {
                ingredient,
                quantity_g: l.quantity_g,
            })
        })
        .collect();
    Ok(ItemDetails { item, ingredients })
}

pub async fn swap_suggestions(
    state: &AppState,
    item_id: Uuid,
    ingredient_id: Uuid,
) -> Result<SwapResponse, ServiceError> {
    let catalog = state.catalog.as_ref();
    catalog
        .item_by_id(item_id)
        .await?
        .ok_or(ServiceError::ItemNotFound(item_id))?;
    let current = catalog
        .ingredients_by_ids(&[ingredient_id])
        .await?
        .into_iter()
        .next()
        .ok_or(ServiceError::IngredientNotFound(ingredient_id))?;
    let candidates = catalog.all_ingredients().await?;

    let suggestions = suggest_swaps(&current, &candidates, state.scoring.swap_limit);
    Ok(SwapResponse {
        item_id,
        ingredient_id,
        suggestions,
    })
}

/// Builds a tray from the request and scores it as a whole.
pub async fn score_tray(state: &AppState, req: TrayRequest) -> Result<TrayResponse, ServiceError> {
    let catalog = state.catalog.as_ref();
    let profile = load_profile(catalog, req.score_profile_id).await?;
    let reference = req.reference.unwrap_or(state.scoring.default_reference);

    let mut tray = MealTray::new();
    for entry in req.items {
        let quantity = entry.quantity.unwrap_or(1.0);
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::InvalidTrayQuantity {
                item_id: entry.item_id,
                value: quantity,
            }
            .into());
        }
        let edits = validate_customizations(entry.customizations)?;
        let (item, nutrition) = resolve_item(catalog, entry.item_id, &edits).await?;
        let score = compute_score_with(&nutrition, &profile, reference);
        tray.add_item(MealItem::new(item, edits, nutrition, score).with_quantity(quantity));
    }

    let total_nutrition = tray.total_nutrition();
    let total_score = tray.total_score(&profile, reference);
    Ok(TrayResponse {
        items: tray.items().to_vec(),
        total_nutrition,
        total_score,
        badge: ScoreBadge::for_score(total_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::customize::dto::TrayEntryRequest;
    use crate::nutrition::Ingredient;

    fn item_id() -> Uuid {
        Uuid::from_u128(1)
    }

    fn cheese_id() -> Uuid {
        Uuid::from_u128(10)
    }

    fn state() -> AppState {
        let item = Item {
            id: item_id(),
            restaurant_id: None,
            name: "Cheeseburger".into(),
            description: Some("Single patty".into()),
            base_calories: 500.0,
            base_protein: 10.0,
            base_carbs: 40.0,
            base_fat: 25.0,
            base_sodium: 900.0,
            base_fiber: 2.0,
            base_sugar: 8.0,
        };
        let cheese = Ingredient {
            id: cheese_id(),
            name: "Cheese".into(),
            calories_per_100g: 400.0,
            protein: 25.0,
            carbs: 1.0,
            fat: 33.0,
            sodium: 600.0,
            fiber: 0.0,
            sugar: 0.5,
        };
        AppState::in_memory(
            InMemoryCatalog::new()
                .with_item(item)
                .with_ingredient(cheese)
                .with_link(item_id(), cheese_id(), 30.0),
        )
    }

    #[tokio::test]
    async fn customize_removes_cheese() {
        let (nutrition, _) = customize_item(&state(), item_id(), &[Customization::remove(cheese_id())])
            .await
            .unwrap();
        assert!((nutrition.calories - 380.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let err = customize_item(&state(), Uuid::from_u128(404), &[]).await.unwrap_err();
        assert!(matches!(err, ServiceError::ItemNotFound(_)));
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let err = score_item(&state(), item_id(), &[], Some(Uuid::from_u128(77)), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ProfileNotFound(_)));
    }

    #[tokio::test]
    async fn stored_default_profile_is_preferred() {
        let stored = ScoreProfile {
            id: Some(Uuid::from_u128(50)),
            name: "Protein focus".into(),
            ..ScoreProfile::default_profile()
        };
        let catalog = InMemoryCatalog::new().with_profile(stored.clone());
        assert_eq!(load_profile(&catalog, None).await.unwrap(), stored);
        assert_eq!(
            load_profile(&InMemoryCatalog::new(), None).await.unwrap(),
            ScoreProfile::default_profile()
        );
    }

    #[tokio::test]
    async fn item_details_lists_linked_quantities() {
        let details = item_details(&state(), item_id()).await.unwrap();
        assert_eq!(details.ingredients.len(), 1);
        assert_eq!(details.ingredients[0].quantity_g, 30.0);
        assert_eq!(details.ingredients[0].ingredient.name, "Cheese");
    }

    #[tokio::test]
    async fn empty_tray_scores_neutral() {
        let req = TrayRequest {
            items: Vec::new(),
            score_profile_id: None,
            reference: None,
        };
        let resp = score_tray(&state(), req).await.unwrap();
        assert_eq!(resp.total_score, 50);
        assert_eq!(resp.total_nutrition, NutritionData::zero());
    }

    #[tokio::test]
    async fn tray_quantity_doubles_totals() {
        let req = TrayRequest {
            items: vec![TrayEntryRequest {
                item_id: item_id(),
                customizations: Vec::new(),
                quantity: Some(2.0),
            }],
            score_profile_id: None,
            reference: None,
        };
        let resp = score_tray(&state(), req).await.unwrap();
        assert_eq!(resp.total_nutrition.calories, 1000.0);
        assert_eq!(resp.items.len(), 1);
    }

    #[tokio::test]
    async fn tray_rejects_zero_quantity() {
        let req = TrayRequest {
            items: vec![TrayEntryRequest {
                item_id: item_id(),
                customizations: Vec::new(),
                quantity: Some(0.0),
            }],
            score_profile_id: None,
            reference: None,
        };
        let err = score_tray(&state(), req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidTrayQuantity { .. })
        ));
    }

    #[test]
    fn blank_customizations_param_is_empty() {
        assert!(parse_customizations_param(None).unwrap().is_empty());
        assert!(parse_customizations_param(Some("  ")).unwrap().is_empty());
        assert!(matches!(
            parse_customizations_param(Some("[{")),
            Err(ValidationError::MalformedCustomizations(_))
        ));
    }
}
