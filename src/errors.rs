use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

/// A customization or tray entry that breaks the input contract.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("`add` for ingredient {0} requires quantity_g")]
    MissingQuantity(Uuid),
    #[error("`modify` for ingredient {0} requires multiplier")]
    MissingMultiplier(Uuid),
    #[error("quantity_g for ingredient {ingredient_id} must be a non-negative number, got {value}")]
    InvalidQuantity { ingredient_id: Uuid, value: f64 },
    #[error("multiplier for ingredient {ingredient_id} must be a non-negative number, got {value}")]
    InvalidMultiplier { ingredient_id: Uuid, value: f64 },
    #[error("tray quantity for item {item_id} must be a positive number, got {value}")]
    InvalidTrayQuantity { item_id: Uuid, value: f64 },
    #[error("customizations parameter is not valid JSON: {0}")]
    MalformedCustomizations(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("restaurant {0} not found")]
    RestaurantNotFound(Uuid),
    #[error("item {0} not found")]
    ItemNotFound(Uuid),
    #[error("score profile {0} not found")]
    ProfileNotFound(Uuid),
    #[error("ingredient {0} not found")]
    IngredientNotFound(Uuid),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::RestaurantNotFound(_)
            | ServiceError::ItemNotFound(_)
            | ServiceError::ProfileNotFound(_)
            | ServiceError::IngredientNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for (StatusCode, String) {
    fn from(e: ServiceError) -> Self {
        let status = e.status();
        if status.is_server_error() {
            error!(error = %e, "request failed");
        } else {
            warn!(error = %e, %status, "request rejected");
        }
        (status, e.to_string())
    }
}
