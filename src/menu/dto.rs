use serde::Serialize;

use crate::catalog::Restaurant;
use crate::nutrition::Item;
use crate::scoring::ScoreProfile;

#[derive(Debug, Serialize)]
pub struct RestaurantList {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Serialize)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct ProfileList {
    pub profiles: Vec<ScoreProfile>,
}
