use tracing::debug;
use uuid::Uuid;

use crate::catalog::Restaurant;
use crate::errors::ServiceError;
use crate::scoring::ScoreProfile;
use crate::state::AppState;

use super::dto::{ProfileList, RestaurantList, RestaurantMenu};

pub async fn list_restaurants(state: &AppState) -> Result<RestaurantList, ServiceError> {
    let restaurants = state.catalog.restaurants().await?;
    Ok(RestaurantList { restaurants })
}

pub async fn restaurant(state: &AppState, id: Uuid) -> Result<Restaurant, ServiceError> {
    state
        .catalog
        .restaurant_by_id(id)
        .await?
        .ok_or(ServiceError::RestaurantNotFound(id))
}

pub async fn restaurant_menu(state: &AppState, id: Uuid) -> Result<RestaurantMenu, ServiceError> {
    let restaurant = restaurant(state, id).await?;
    let items = state.catalog.items_by_restaurant(id).await?;
    debug!(restaurant_id = %id, items = items.len(), "loaded menu");
    Ok(RestaurantMenu { restaurant, items })
}

/// Stored profiles, or just the built-in one when none are stored.
pub async fn list_profiles(state: &AppState) -> Result<ProfileList, ServiceError> {
    let mut profiles = state.catalog.all_profiles().await?;
    if profiles.is_empty() {
        profiles.push(ScoreProfile::default_profile());
    }
    Ok(ProfileList { profiles })
}
