// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness goal model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum GoalType {
    Weight,
    CaloriesBurn,
    CaloriesIntake,
    WorkoutFrequency,
    Distance,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

/// Stored goal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Goal {
    #[serde(rename = "goalId")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub title: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: NaiveDate,
    pub status: GoalStatus,
}

impl Goal {
    /// Percent of the target reached, clamped to `0..=100`.
    pub fn progress_percent(&self) -> f64 {
        if self.target_value == 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value * 100.0).clamp(0.0, 100.0)
    }

    pub fn view(&self) -> GoalView {
        GoalView {
            progress_percent: self.progress_percent(),
            goal: self.clone(),
        }
    }
}

/// Goal plus derived progress, as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress_percent: f64,
}

/// Goal as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(rename = "type")]
    pub goal_type: Option<GoalType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub target_date: Option<NaiveDate>,
}

/// Progress update for an existing goal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub current_value: Option<f64>,
    pub status: Option<GoalStatus>,
}

impl GoalUpdate {
    pub fn apply(self, goal: &mut Goal) {
        if let Some(value) = self.current_value {
            goal.current_value = value;
        }
        if let Some(status) = self.status {
            goal.status = status;
        }
    }
}
