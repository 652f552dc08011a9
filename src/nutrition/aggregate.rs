use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use super::types::NutritionData;

impl NutritionData {
    /// Multiplies every field by `factor`, e.g. two of the same item.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            sodium: self.sodium * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
        }
    }
}

impl Add for NutritionData {
    type Output = NutritionData;

    fn add(self, other: NutritionData) -> NutritionData {
        NutritionData {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            sodium: self.sodium + other.sodium,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
        }
    }
}

impl AddAssign for NutritionData {
    fn add_assign(&mut self, other: NutritionData) {
        *self = *self + other;
    }
}

impl Sub for NutritionData {
    type Output = NutritionData;

    fn sub(self, other: NutritionData) -> NutritionData {
        self + other.scale(-1.0)
    }
}

impl Mul<f64> for NutritionData {
    type Output = NutritionData;

    fn mul(self, factor: f64) -> NutritionData {
        self.scale(factor)
    }
}

impl Sum for NutritionData {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionData::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a NutritionData> for NutritionData {
    fn sum<I: Iterator<Item = &'a NutritionData>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Field-wise total. Quantity scaling is the caller's job.
pub fn sum_nutrition<'a, I>(items: I) -> NutritionData
where
    I: IntoIterator<Item = &'a NutritionData>,
{
    items.into_iter().sum()
}
