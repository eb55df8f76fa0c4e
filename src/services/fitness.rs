// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness data service.
//!
//! Every operation follows the same shape:
//! 1. Pause for the simulated network latency
//! 2. Validate input
//! 3. Run one store operation (a single critical section)
//! 4. Shape the result for the caller

use std::sync::Arc;

use chrono::NaiveDate;

use crate::db::{MemoryDb, NewUserRecord};
use crate::error::{AppError, Result};
use crate::models::{
    stats, AuthSession, DashboardStats, Goal, GoalStatus, GoalUpdate, GoalView, Meal, NewGoal,
    NewMeal, Preferences, Profile, TrendRecord, Workout, WorkoutUpload,
};
use crate::models::user::{Credentials, ProfileUpdate, Registration};
use crate::services::clock::Clock;
use crate::services::extraction::WorkoutExtractor;
use crate::services::latency::{Operation, SimulatedLatency};
use crate::time_utils::{parse_date, unix_millis};

/// Mock session token. Unsigned and guessable: acceptable only for a mock.
fn issue_token(user_id: u64) -> String {
    format!("mock.jwt.{}.{}", user_id, unix_millis())
}

/// Trimmed, non-empty value of an optional form field.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct FitnessService {
    db: MemoryDb,
    latency: SimulatedLatency,
    extractor: Arc<dyn WorkoutExtractor>,
    clock: Clock,
}

impl FitnessService {
    pub fn new(
        db: MemoryDb,
        latency: SimulatedLatency,
        extractor: Arc<dyn WorkoutExtractor>,
        clock: Clock,
    ) -> Self {
        Self {
            db,
            latency,
            extractor,
            clock,
        }
    }

    pub fn db(&self) -> &MemoryDb {
        &self.db
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ─── Identity & Session ──────────────────────────────────────

    /// Register a new account and issue a session.
    pub async fn register(&self, form: Registration) -> Result<AuthSession> {
        self.latency.pause(Operation::Standard).await;

        let missing = || AppError::MissingFields("Missing required fields".to_string());
        let full_name = present(form.full_name).ok_or_else(missing)?;
        let email = present(form.email).ok_or_else(missing)?;
        let password = form.password.filter(|p| !p.is_empty()).ok_or_else(missing)?;
        let date_of_birth = present(form.date_of_birth).ok_or_else(missing)?;
        let date_of_birth = parse_date(&date_of_birth).ok_or_else(|| {
            AppError::BadRequest("dateOfBirth must be a YYYY-MM-DD date".to_string())
        })?;

        let user = self.db.create_user(NewUserRecord {
            full_name,
            email,
            password,
            date_of_birth,
            height: form.height.unwrap_or(0.0),
            weight: form.weight.unwrap_or(0.0),
        })?;

        tracing::info!(user_id = user.id, "Registered user");

        Ok(AuthSession {
            token: issue_token(user.id),
            user_id: user.id,
            user: user.public(),
        })
    }

    /// Log in with email and password.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthSession> {
        self.latency.pause(Operation::Login).await;

        let user = self
            .db
            .find_user_by_email(credentials.email.trim())?
            .ok_or_else(AppError::user_not_found)?;

        if user.password != credentials.password {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::debug!(user_id = user.id, "Login succeeded");

        Ok(AuthSession {
            token: issue_token(user.id),
            user_id: user.id,
            user: user.public(),
        })
    }

    // ─── Profile Management ──────────────────────────────────────

    pub async fn get_profile(&self, user_id: u64) -> Result<Profile> {
        self.latency.pause(Operation::Standard).await;

        self.db
            .get_user(user_id)?
            .map(|u| u.profile())
            .ok_or_else(AppError::user_not_found)
    }

    /// Apply the provided name/height/weight fields.
    pub async fn update_profile(&self, user_id: u64, update: ProfileUpdate) -> Result<Profile> {
        self.latency.pause(Operation::Standard).await;

        self.db
            .update_user(user_id, |user| update.apply(user))?
            .map(|u| u.profile())
            .ok_or_else(AppError::user_not_found)
    }

    /// Record a new profile picture reference. The bytes are not inspected or kept.
    pub async fn upload_profile_picture(&self, user_id: u64, file: &[u8]) -> Result<String> {
        self.latency.pause(Operation::PictureUpload).await;

        if file.is_empty() {
            return Err(AppError::MissingFields("No file provided".to_string()));
        }

        let url = format!("/media/avatars/avatar_{}_{}.png", user_id, unix_millis());

        let user = self
            .db
            .update_user(user_id, |user| user.profile_picture_url = url.clone())?
            .ok_or_else(AppError::user_not_found)?;

        tracing::debug!(user_id, bytes = file.len(), url = %url, "Stored profile picture reference");

        Ok(user.profile_picture_url)
    }

    pub async fn get_preferences(&self, user_id: u64) -> Result<Preferences> {
        self.latency.pause(Operation::Standard).await;

        self.db
            .get_preferences(user_id)?
            .ok_or_else(|| AppError::NotFound("Preferences not found".to_string()))
    }

    /// Merge `patch` into the stored preferences (keys not in `patch` are kept).
    pub async fn update_preferences(&self, user_id: u64, patch: Preferences) -> Result<Preferences> {
        self.latency.pause(Operation::Standard).await;

        self.db.merge_preferences(user_id, patch)
    }

    // ─── Workout Records ─────────────────────────────────────────

    /// Store a workout from an uploaded file plus its date and location.
    pub async fn upload_workout(
        &self,
        user_id: u64,
        file: &[u8],
        form: WorkoutUpload,
    ) -> Result<Workout> {
        self.latency.pause(Operation::WorkoutUpload).await;

        if file.is_empty() {
            return Err(AppError::MissingFields("No file provided".to_string()));
        }

        let (Some(date), Some(location)) = (present(form.date), present(form.location)) else {
            return Err(AppError::MissingFields(
                "Missing date or location".to_string(),
            ));
        };
        let date = parse_date(&date)
            .ok_or_else(|| AppError::BadRequest("date must be a YYYY-MM-DD date".to_string()))?;

        let metrics = self.extractor.extract(file).map_err(|e| {
            tracing::warn!(user_id, error = %e, "Workout extraction failed");
            AppError::Extraction(e)
        })?;

        let workout = self.db.insert_workout(Workout {
            id: 0,
            user_id,
            date,
            location,
            distance: metrics.distance_km,
            avg_heart_rate: metrics.avg_heart_rate,
            calories: metrics.calories,
            weather_context: metrics.weather,
        })?;

        tracing::info!(
            user_id,
            workout_id = workout.id,
            distance_km = workout.distance,
            calories = workout.calories,
            "Stored workout"
        );

        Ok(workout)
    }

    pub async fn get_workouts(&self, user_id: u64) -> Result<Vec<Workout>> {
        self.latency.pause(Operation::Standard).await;

        self.db.workouts_for_user(user_id)
    }

    pub async fn get_workout_by_id(&self, user_id: u64, workout_id: u64) -> Result<Workout> {
        self.latency.pause(Operation::Standard).await;

        self.db
            .get_workout(user_id, workout_id)?
            .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))
    }

    pub async fn delete_workout(&self, user_id: u64, workout_id: u64) -> Result<()> {
        self.latency.pause(Operation::Standard).await;

        if !self.db.delete_workout(user_id, workout_id)? {
            return Err(AppError::NotFound("Workout not found".to_string()));
        }
        tracing::info!(user_id, workout_id, "Deleted workout");
        Ok(())
    }

    // ─── Meal Logging ────────────────────────────────────────────

    /// Log a meal. Date defaults to today and nutrition values to 0.
    pub async fn log_meal(&self, user_id: u64, form: NewMeal) -> Result<Meal> {
        self.latency.pause(Operation::Standard).await;

        let (Some(meal_type), Some(food)) = (form.meal_type, present(form.food)) else {
            return Err(AppError::MissingFields(
                "Missing meal type or food".to_string(),
            ));
        };

        let meal = self.db.insert_meal(Meal {
            id: 0,
            user_id,
            meal_type,
            date: form.date.unwrap_or_else(|| self.today()),
            food,
            calories: form.calories.unwrap_or(0),
            protein: form.protein.unwrap_or(0.0),
            carbs: form.carbs.unwrap_or(0.0),
            fat: form.fat.unwrap_or(0.0),
        })?;

        tracing::debug!(user_id, meal_id = meal.id, calories = meal.calories, "Logged meal");

        Ok(meal)
    }

    /// Meals of a user, optionally only those on `date`.
    pub async fn get_meals(&self, user_id: u64, date: Option<NaiveDate>) -> Result<Vec<Meal>> {
        self.latency.pause(Operation::Standard).await;

        self.db.meals_for_user(user_id, date)
    }

    pub async fn delete_meal(&self, user_id: u64, meal_id: u64) -> Result<()> {
        self.latency.pause(Operation::Standard).await;

        if !self.db.delete_meal(user_id, meal_id)? {
            return Err(AppError::NotFound("Meal not found".to_string()));
        }
        tracing::debug!(user_id, meal_id, "Deleted meal");
        Ok(())
    }

    // ─── Goals ───────────────────────────────────────────────────

    pub async fn create_goal(&self, user_id: u64, form: NewGoal) -> Result<GoalView> {
        self.latency.pause(Operation::Standard).await;

        let (Some(goal_type), Some(title), Some(target_value), Some(target_date)) = (
            form.goal_type,
            present(form.title),
            form.target_value,
            form.target_date,
        ) else {
            return Err(AppError::MissingFields(
                "Missing required fields".to_string(),
            ));
        };

        let goal = self.db.insert_goal(Goal {
            id: 0,
            user_id,
            goal_type,
            title,
            description: present(form.description),
            target_value,
            current_value: 0.0,
            target_date,
            status: GoalStatus::Active,
        })?;

        tracing::info!(user_id, goal_id = goal.id, goal_type = ?goal.goal_type, "Created goal");

        Ok(goal.view())
    }

    pub async fn get_goals(&self, user_id: u64) -> Result<Vec<GoalView>> {
        self.latency.pause(Operation::Standard).await;

        Ok(self
            .db
            .goals_for_user(user_id)?
            .iter()
            .map(Goal::view)
            .collect())
    }

    pub async fn update_goal(&self, user_id: u64, goal_id: u64, update: GoalUpdate) -> Result<GoalView> {
        self.latency.pause(Operation::Standard).await;

        self.db
            .update_goal(user_id, goal_id, update)?
            .map(|g| g.view())
            .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))
    }

    pub async fn delete_goal(&self, user_id: u64, goal_id: u64) -> Result<()> {
        self.latency.pause(Operation::Standard).await;

        if !self.db.delete_goal(user_id, goal_id)? {
            return Err(AppError::NotFound("Goal not found".to_string()));
        }
        Ok(())
    }

    // ─── Aggregation ─────────────────────────────────────────────

    /// Today's calorie and step totals.
    pub async fn get_dashboard_stats(&self, user_id: u64) -> Result<DashboardStats> {
        self.latency.pause(Operation::Standard).await;

        let (meals, workouts) = self.db.records_for_user(user_id)?;
        Ok(stats::dashboard_stats(self.today(), &meals, &workouts))
    }

    /// Seven daily trend records ending today, oldest first.
    pub async fn get_weekly_trends(&self, user_id: u64) -> Result<Vec<TrendRecord>> {
        self.latency.pause(Operation::Standard).await;

        let (meals, workouts) = self.db.records_for_user(user_id)?;
        Ok(stats::weekly_trends(self.today(), &meals, &workouts))
    }
}
