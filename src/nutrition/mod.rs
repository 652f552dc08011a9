//! Nutrition recomputation for customized menu items.

pub mod aggregate;
pub mod resolver;
pub mod types;

pub use aggregate::sum_nutrition;
pub use resolver::{resolve_nutrition, EditSet};
pub use types::{Customization, EditAction, Ingredient, Item, ItemIngredientLink, NutritionData};
