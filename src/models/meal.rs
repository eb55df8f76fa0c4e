// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Meal log model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// Stored meal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Meal {
    #[serde(rename = "mealId")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub food: String,
    pub calories: u32,
    /// Grams
    pub protein: f64,
    /// Grams
    pub carbs: f64,
    /// Grams
    pub fat: f64,
}

/// Meal entry as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMeal {
    #[serde(rename = "type")]
    pub meal_type: Option<MealType>,
    pub date: Option<NaiveDate>,
    pub food: Option<String>,
    pub calories: Option<u32>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meal_accepts_partial_body() {
        let meal: NewMeal =
            serde_json::from_str(r#"{"type":"lunch","food":"Salad","calories":300}"#).unwrap();
        assert_eq!(meal.meal_type, Some(MealType::Lunch));
        assert_eq!(meal.calories, Some(300));
        assert!(meal.date.is_none());
        assert!(meal.protein.is_none());
    }

    #[test]
    fn test_meal_type_rejects_unknown() {
        let result = serde_json::from_str::<NewMeal>(r#"{"type":"brunch"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_meal_wire_names() {
        let meal = Meal {
            id: 3,
            user_id: 1,
            meal_type: MealType::Dinner,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            food: "Soup".to_string(),
            calories: 250,
            protein: 8.0,
            carbs: 30.0,
            fat: 5.0,
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["mealId"], 3);
        assert_eq!(json["userId"], 1);
        assert_eq!(json["type"], "dinner");
        assert_eq!(json["date"], "2024-05-01");
    }
}
