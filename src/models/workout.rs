// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored workout record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    #[serde(rename = "workoutId")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    pub date: NaiveDate,
    pub location: String,
    /// Distance in kilometers
    pub distance: f64,
    pub avg_heart_rate: u32,
    pub calories: u32,
    pub weather_context: WeatherContext,
}

/// Weather at the time of the workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeatherContext {
    /// Temperature in °C
    pub temp: i32,
    /// Relative humidity in percent
    pub humidity: u32,
}

/// Form fields sent alongside the uploaded workout file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutUpload {
    pub date: Option<String>,
    pub location: Option<String>,
}
