use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::catalog::Restaurant;
use crate::state::AppState;

use super::dto::{ProfileList, RestaurantList, RestaurantMenu};
use super::services::{list_profiles, list_restaurants, restaurant, restaurant_menu};

type Rejection = (StatusCode, String);

pub fn browse_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(get_restaurants))
        .route("/restaurants/:id", get(get_restaurant))
        .route("/restaurants/:id/items", get(get_restaurant_items))
        .route("/profiles", get(get_profiles))
}

#[instrument(skip(state))]
pub async fn get_restaurants(State(state): State<AppState>) -> Result<Json<RestaurantList>, Rejection> {
    Ok(Json(list_restaurants(&state).await?))
}

#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Restaurant>, Rejection> {
    Ok(Json(restaurant(&state, id).await?))
}

#[instrument(skip(state))]
pub async fn get_restaurant_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RestaurantMenu>, Rejection> {
    Ok(Json(restaurant_menu(&state, id).await?))
}

#[instrument(skip(state))]
pub async fn get_profiles(State(state): State<AppState>) -> Result<Json<ProfileList>, Rejection> {
    Ok(Json(list_profiles(&state).await?))
}
