// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod goal;
pub mod meal;
pub mod stats;
pub mod user;
pub mod workout;

pub use goal::{Goal, GoalStatus, GoalType, GoalUpdate, GoalView, NewGoal};
pub use meal::{Meal, MealType, NewMeal};
pub use stats::{DashboardStats, TrendRecord};
pub use user::{AuthSession, Preferences, Profile, PublicUser, User};
pub use workout::{WeatherContext, Workout, WorkoutUpload};
