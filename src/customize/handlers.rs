use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::state::AppState;

use super::dto::{
    CustomizeRequest, CustomizeResponse, ItemDetails, ScoreQuery, ScoreRequest, ScoreResponse, SwapQuery,
    SwapResponse, TrayRequest, TrayResponse,
};
use super::services::{
    customize_item, item_details, parse_customizations_param, score_item, score_tray, swap_suggestions,
    validate_customizations,
};

type Rejection = (StatusCode, String);

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:id", get(get_item))
        .route("/items/:id/customize", post(customize))
        .route("/swaps/:id", get(get_swaps))
}

pub fn score_routes() -> Router<AppState> {
    Router::new()
        .route("/score/:id", get(get_score).post(post_score))
        .route("/tray/score", post(post_tray_score))
}

#[instrument(skip(state))]
pub async fn get_item(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ItemDetails>, Rejection> {
    Ok(Json(item_details(&state, id).await?))
}

#[instrument(skip(state, body))]
pub async fn customize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CustomizeRequest>,
) -> Result<Json<CustomizeResponse>, Rejection> {
    let edits = validate_customizations(body.customizations).map_err(ServiceError::from)?;
    let (nutrition, score) = customize_item(&state, id, &edits).await?;
    info!(item_id = %id, edits = edits.len(), score, "item customized");
    Ok(Json(CustomizeResponse { nutrition, score }))
}

#[instrument(skip(state, q))]
pub async fn get_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(q): Query<ScoreQuery>,
) -> Result<Json<ScoreResponse>, Rejection> {
    let edits = parse_customizations_param(q.customizations.as_deref()).map_err(ServiceError::from)?;
    Ok(Json(score_item(&state, id, &edits, q.profile_id, q.reference).await?))
}

#[instrument(skip(state, body))]
pub async fn post_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, Rejection> {
    let edits = validate_customizations(body.customizations).map_err(ServiceError::from)?;
    Ok(Json(
        score_item(&state, id, &edits, body.score_profile_id, body.reference).await?,
    ))
}

#[instrument(skip(state))]
pub async fn get_swaps(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(q): Query<SwapQuery>,
) -> Result<Json<SwapResponse>, Rejection> {
    Ok(Json(swap_suggestions(&state, id, q.ingredient_id).await?))
}

#[instrument(skip(state, body), fields(entries = body.items.len()))]
pub async fn post_tray_score(
    State(state): State<AppState>,
    Json(body): Json<TrayRequest>,
) -> Result<Json<TrayResponse>, Rejection> {
    Ok(Json(score_tray(&state, body).await?))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::catalog::InMemoryCatalog;
    use crate::nutrition::{Ingredient, Item};
    use crate::state::AppState;

    use super::*;

    const ITEM: &str = "00000000-0000-0000-0000-000000000001";
    const CHEESE: &str = "00000000-0000-0000-0000-00000000000a";
    const BACON: &str = "00000000-0000-0000-0000-00000000000b";

    fn ingredient(id: &str, name: &str, calories: f64, protein: f64, fat: f64) -> Ingredient {
        Ingredient {
            id: id.parse().unwrap(),
            name: name.into(),
            calories_per_100g: calories,
            protein,
            carbs: 1.0,
            fat,
            sodium: 600.0,
            fiber: 0.0,
            sugar: 0.5,
        }
    }

    fn app() -> Router {
        let item = Item {
            id: ITEM.parse().unwrap(),
            restaurant_id: None,
            name: "Cheeseburger".into(),
            description: None,
            base_calories: 500.0,
            base_protein: 10.0,
            base_carbs: 40.0,
            base_fat: 25.0,
            base_sodium: 900.0,
            base_fiber: 2.0,
            base_sugar: 8.0,
        };
        let catalog = InMemoryCatalog::new()
            .with_item(item)
            .with_ingredient(ingredient(CHEESE, "Cheese", 400.0, 25.0, 33.0))
            .with_ingredient(ingredient(BACON, "Bacon", 540.0, 37.0, 42.0))
            .with_link(ITEM.parse().unwrap(), CHEESE.parse().unwrap(), 30.0);
        build_app(AppState::in_memory(catalog))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn customize_endpoint_applies_removal() {
        let (status, body) = send(post_json(
            &format!("/api/v1/items/{ITEM}/customize"),
            json!({ "customizations": [{ "ingredient_id": CHEESE, "action": "remove" }] }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nutrition"]["calories"], 380.0);
        assert!(body["score"].is_u64());
    }

    #[tokio::test]
    async fn customize_rejects_modify_without_multiplier() {
        let (status, _) = send(post_json(
            &format!("/api/v1/items/{ITEM}/customize"),
            json!({ "customizations": [{ "ingredient_id": CHEESE, "action": "modify" }] }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn score_get_reports_badge_and_reference() {
        let req = Request::get(format!("/api/v1/score/{ITEM}?reference=daily"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reference"], "daily");
        assert!(body["badge"].is_string());
        assert_eq!(body["nutrition"]["calories"], 500.0);
    }

    #[tokio::test]
    async fn score_for_unknown_item_is_404() {
        let req = Request::get("/api/v1/score/00000000-0000-0000-0000-0000000000ff")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn swaps_suggest_lighter_ingredients() {
        let req = Request::get(format!("/api/v1/swaps/{ITEM}?ingredient_id={BACON}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"][0]["ingredient"]["name"], "Cheese");
    }

    #[tokio::test]
    async fn tray_score_sums_entries() {
        let (status, body) = send(post_json(
            "/api/v1/tray/score",
            json!({ "items": [
                { "item_id": ITEM, "quantity": 2 },
                { "item_id": ITEM, "customizations": [{ "ingredient_id": CHEESE, "action": "remove" }] }
            ]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_nutrition"]["calories"], 1380.0);
        assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = app()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
