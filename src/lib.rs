//! Menu item customization with nutrition recomputation and health scoring.
//!
//! The engine lives in [`nutrition`] and [`scoring`] and is pure; the
//! remaining modules serve it over HTTP against a Postgres menu catalog.

pub mod app;
pub mod catalog;
pub mod config;
pub mod customize;
pub mod db;
pub mod errors;
pub mod menu;
pub mod nutrition;
pub mod scoring;
pub mod state;
pub mod swaps;
pub mod tray;

pub use nutrition::{resolve_nutrition, sum_nutrition, Customization, EditAction, Ingredient, Item, NutritionData};
pub use scoring::{compute_score, compute_score_with, ReferenceSet, ScoreProfile};
