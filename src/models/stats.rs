//! Dashboard and weekly trend aggregates.
//!
//! These are computed on every request from the full record lists; nothing
//! is cached, so results always reflect the current store.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Meal, Workout};

/// Approximate steps per kilometer used for step estimates.
pub const STEPS_PER_KM: f64 = 1300.0;

/// Number of days covered by the weekly trend.
pub const TREND_DAYS: i64 = 7;

/// Today's totals for the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardStats {
    pub date: NaiveDate,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories_in: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories_out: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub net_calories: i64,
    pub workout_count: u32,
    pub meal_count: u32,
}

/// One day of the weekly trend.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrendRecord {
    pub date: NaiveDate,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories_in: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories_out: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: u64,
}

/// Estimated steps for a distance in kilometers.
pub fn steps_for_distance(distance_km: f64) -> u64 {
    // Negative or NaN distances saturate to 0.
    (distance_km * STEPS_PER_KM).floor() as u64
}

/// Totals for a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub calories_in: i64,
    pub calories_out: i64,
    pub steps: u64,
    pub workout_count: u32,
    pub meal_count: u32,
}

impl DayTotals {
    /// Sum the records dated `date`. Callers pass one user's records.
    pub fn for_date(date: NaiveDate, meals: &[Meal], workouts: &[Workout]) -> Self {
        let mut totals = Self::default();

        for meal in meals.iter().filter(|m| m.date == date) {
            totals.calories_in += i64::from(meal.calories);
            totals.meal_count += 1;
        }

        for workout in workouts.iter().filter(|w| w.date == date) {
            totals.calories_out += i64::from(workout.calories);
            totals.steps += steps_for_distance(workout.distance);
            totals.workout_count += 1;
        }

        totals
    }
}

/// Dashboard figures for `today`.
pub fn dashboard_stats(today: NaiveDate, meals: &[Meal], workouts: &[Workout]) -> DashboardStats {
    let totals = DayTotals::for_date(today, meals, workouts);

    DashboardStats {
        date: today,
        steps: totals.steps,
        calories_in: totals.calories_in,
        calories_out: totals.calories_out,
        net_calories: totals.calories_in - totals.calories_out,
        workout_count: totals.workout_count,
        meal_count: totals.meal_count,
    }
}

/// Trend records for the seven days ending `today`, oldest first.
pub fn weekly_trends(today: NaiveDate, meals: &[Meal], workouts: &[Workout]) -> Vec<TrendRecord> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            let totals = DayTotals::for_date(date, meals, workouts);
            TrendRecord {
                date,
                calories_in: totals.calories_in,
                calories_out: totals.calories_out,
                steps: totals.steps,
            }
        })
        .collect()
}
