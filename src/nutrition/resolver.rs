use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use super::types::{Customization, EditAction, Ingredient, Item, ItemIngredientLink, NutritionData};

/// Edits keyed by ingredient. A later edit for the same ingredient replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSet {
    edits: BTreeMap<Uuid, EditAction>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edit: Customization) {
        if let Some(previous) = self.edits.insert(edit.ingredient_id, edit.action) {
            debug!(
                ingredient_id = %edit.ingredient_id,
                ?previous,
                current = ?edit.action,
                "duplicate edit overrides earlier one"
            );
        }
    }

    pub fn get(&self, ingredient_id: &Uuid) -> Option<&EditAction> {
        self.edits.get(ingredient_id)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &EditAction)> {
        self.edits.iter()
    }
}

impl FromIterator<Customization> for EditSet {
    fn from_iter<I: IntoIterator<Item = Customization>>(iter: I) -> Self {
        let mut set = Self::new();
        for edit in iter {
            set.insert(edit);
        }
        set
    }
}

impl<'a> FromIterator<&'a Customization> for EditSet {
    fn from_iter<I: IntoIterator<Item = &'a Customization>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

/// Applies ingredient edits to an item's base nutrition.
///
/// Every linked ingredient contributes the difference between its effective
/// and standard grams, ingredients added outside the recipe contribute their
/// full amount, and the result is floored at zero. Edits naming ingredients
/// absent from `ingredients` are ignored.
pub fn resolve_nutrition(
    item: &Item,
    ingredients: &[Ingredient],
    links: &[ItemIngredientLink],
    edits: &[Customization],
) -> NutritionData {
    let edits: EditSet = edits.iter().collect();
    resolve_with_edit_set(item, ingredients, links, &edits)
}

pub fn resolve_with_edit_set(
    item: &Item,
    ingredients: &[Ingredient],
    links: &[ItemIngredientLink],
    edits: &EditSet,
) -> NutritionData {
    let mut totals = item.base_nutrition();
    if edits.is_empty() {
        return totals.clamped();
    }

    let catalog: HashMap<Uuid, &Ingredient> = ingredients.iter().map(|i| (i.id, i)).collect();
    let linked: HashSet<Uuid> = links.iter().map(|l| l.ingredient_id).collect();

    for link in links {
        let Some(edit) = edits.get(&link.ingredient_id) else {
            continue;
        };
        let Some(ingredient) = catalog.get(&link.ingredient_id) else {
            debug!(ingredient_id = %link.ingredient_id, "linked ingredient missing from catalog");
            continue;
        };
        let effective_g = match *edit {
            EditAction::Remove => 0.0,
            EditAction::Modify { multiplier } => link.quantity_g * multiplier,
            // Already in the recipe; the standard grams stay as they are.
            EditAction::Add { .. } => link.quantity_g,
        };
        totals += ingredient.nutrition_for(effective_g) - ingredient.nutrition_for(link.quantity_g);
    }

    for (ingredient_id, edit) in edits.iter() {
        let EditAction::Add { quantity_g } = *edit else {
            continue;
        };
        if linked.contains(ingredient_id) {
            continue;
        }
        match catalog.get(ingredient_id) {
            Some(ingredient) => totals += ingredient.nutrition_for(quantity_g),
            None => debug!(%ingredient_id, "added ingredient missing from catalog"),
        }
    }

    totals.clamped()
}
