// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage)
//! - Preferences (one open key-value map per user)
//! - Workouts, meals and goals (per-user records)
//!
//! All collections live behind a single lock. Each operation runs as one
//! critical section, so a caller never observes a partially applied write.
//! The lock is never held across an `.await`.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Duration, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::user::{default_preferences, DEFAULT_PROFILE_PICTURE};
use crate::models::{Goal, GoalUpdate, Meal, MealType, Preferences, User, WeatherContext, Workout};

/// Fields of a user about to be registered (id is assigned by the store).
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub height: f64,
    pub weight: f64,
}

#[derive(Debug, Default)]
struct Collections {
    users: BTreeMap<u64, User>,
    preferences: HashMap<u64, Preferences>,
    workouts: Vec<Workout>,
    meals: Vec<Meal>,
    goals: Vec<Goal>,
}

impl Collections {
    fn require_user(&self, user_id: u64) -> Result<()> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(AppError::user_not_found())
        }
    }
}

/// Next id for a collection: one past the largest existing id, 1 when empty.
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

/// In-memory database handle. Clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryDb {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo account and a few records around `today`.
    pub fn with_demo_data(today: NaiveDate) -> Self {
        let mut collections = Collections::default();

        collections.users.insert(
            1,
            User {
                id: 1,
                full_name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                password: "password123".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap_or_default(),
                height: 180.0,
                weight: 75.0,
                profile_picture_url: DEFAULT_PROFILE_PICTURE.to_string(),
            },
        );
        collections.preferences.insert(1, default_preferences());
        collections.workouts.push(Workout {
            id: 1,
            user_id: 1,
            date: today - Duration::days(2),
            location: "Riverside Park".to_string(),
            distance: 5.2,
            avg_heart_rate: 142,
            calories: 320,
            weather_context: WeatherContext {
                temp: 18,
                humidity: 65,
            },
        });
        collections.meals.push(Meal {
            id: 1,
            user_id: 1,
            meal_type: MealType::Breakfast,
            date: today,
            food: "Oatmeal with berries".to_string(),
            calories: 350,
            protein: 10.0,
            carbs: 50.0,
            fat: 8.0,
        });

        tracing::info!(users = 1, workouts = 1, meals = 1, "Seeded demo data");

        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by id.
    pub fn get_user(&self, user_id: u64) -> Result<Option<User>> {
        Ok(self.read()?.users.get(&user_id).cloned())
    }

    /// Find a user by exact email.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    /// Insert a new user with default preferences.
    ///
    /// The duplicate-email check and the insert happen under the same lock.
    pub fn create_user(&self, record: NewUserRecord) -> Result<User> {
        let mut c = self.write()?;

        if c.users.values().any(|u| u.email == record.email) {
            return Err(AppError::DuplicateEmail);
        }

        let id = next_id(c.users.keys().copied());
        let user = User {
            id,
            full_name: record.full_name,
            email: record.email,
            password: record.password,
            date_of_birth: record.date_of_birth,
            height: record.height,
            weight: record.weight,
            profile_picture_url: DEFAULT_PROFILE_PICTURE.to_string(),
        };

        c.users.insert(id, user.clone());
        c.preferences.insert(id, default_preferences());
        Ok(user)
    }

    /// Mutate a user in place. Returns `None` if the user does not exist.
    pub fn update_user(&self, user_id: u64, f: impl FnOnce(&mut User)) -> Result<Option<User>> {
        let mut c = self.write()?;
        Ok(c.users.get_mut(&user_id).map(|user| {
            f(user);
            user.clone()
        }))
    }

    // ─── Preference Operations ───────────────────────────────────

    pub fn get_preferences(&self, user_id: u64) -> Result<Option<Preferences>> {
        Ok(self.read()?.preferences.get(&user_id).cloned())
    }

    /// Shallow-merge `patch` into the user's preferences.
    pub fn merge_preferences(&self, user_id: u64, patch: Preferences) -> Result<Preferences> {
        let mut c = self.write()?;
        c.require_user(user_id)?;

        let prefs = c.preferences.entry(user_id).or_default();
        prefs.extend(patch);
        Ok(prefs.clone())
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Append a workout, assigning its id. The id on `workout` is ignored.
    pub fn insert_workout(&self, mut workout: Workout) -> Result<Workout> {
        let mut c = self.write()?;
        c.require_user(workout.user_id)?;

        workout.id = next_id(c.workouts.iter().map(|w| w.id));
        c.workouts.push(workout.clone());
        Ok(workout)
    }

    /// All workouts of a user, in insertion order.
    pub fn workouts_for_user(&self, user_id: u64) -> Result<Vec<Workout>> {
        Ok(self
            .read()?
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    pub fn get_workout(&self, user_id: u64, workout_id: u64) -> Result<Option<Workout>> {
        Ok(self
            .read()?
            .workouts
            .iter()
            .find(|w| w.id == workout_id && w.user_id == user_id)
            .cloned())
    }

    /// Remove a workout owned by `user_id`. Returns `false` if there was none.
    pub fn delete_workout(&self, user_id: u64, workout_id: u64) -> Result<bool> {
        let mut c = self.write()?;
        let before = c.workouts.len();
        c.workouts
            .retain(|w| !(w.id == workout_id && w.user_id == user_id));
        Ok(c.workouts.len() != before)
    }

    // ─── Meal Operations ─────────────────────────────────────────

    /// Append a meal, assigning its id. The id on `meal` is ignored.
    pub fn insert_meal(&self, mut meal: Meal) -> Result<Meal> {
        let mut c = self.write()?;
        c.require_user(meal.user_id)?;

        meal.id = next_id(c.meals.iter().map(|m| m.id));
        c.meals.push(meal.clone());
        Ok(meal)
    }

    /// Meals of a user, optionally restricted to one date, in insertion order.
    pub fn meals_for_user(&self, user_id: u64, date: Option<NaiveDate>) -> Result<Vec<Meal>> {
        Ok(self
            .read()?
            .meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter(|m| date.map_or(true, |d| m.date == d))
            .cloned()
            .collect())
    }

    /// Remove a meal owned by `user_id`. Returns `false` if there was none.
    pub fn delete_meal(&self, user_id: u64, meal_id: u64) -> Result<bool> {
        let mut c = self.write()?;
        let before = c.meals.len();
        c.meals.retain(|m| !(m.id == meal_id && m.user_id == user_id));
        Ok(c.meals.len() != before)
    }

    // ─── Goal Operations ─────────────────────────────────────────

    /// Append a goal, assigning its id. The id on `goal` is ignored.
    pub fn insert_goal(&self, mut goal: Goal) -> Result<Goal> {
        let mut c = self.write()?;
        c.require_user(goal.user_id)?;

        goal.id = next_id(c.goals.iter().map(|g| g.id));
        c.goals.push(goal.clone());
        Ok(goal)
    }

    pub fn goals_for_user(&self, user_id: u64) -> Result<Vec<Goal>> {
        Ok(self
            .read()?
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Apply `update` to a goal owned by `user_id`. Returns `None` if there was none.
    pub fn update_goal(&self, user_id: u64, goal_id: u64, update: GoalUpdate) -> Result<Option<Goal>> {
        let mut c = self.write()?;
        Ok(c
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.user_id == user_id)
            .map(|goal| {
                update.apply(goal);
                goal.clone()
            }))
    }

    /// Remove a goal owned by `user_id`. Returns `false` if there was none.
    pub fn delete_goal(&self, user_id: u64, goal_id: u64) -> Result<bool> {
        let mut c = self.write()?;
        let before = c.goals.len();
        c.goals.retain(|g| !(g.id == goal_id && g.user_id == user_id));
        Ok(c.goals.len() != before)
    }

    // ─── Aggregate Inputs ────────────────────────────────────────

    /// A user's meals and workouts, read under one lock for a consistent view.
    pub fn records_for_user(&self, user_id: u64) -> Result<(Vec<Meal>, Vec<Workout>)> {
        let c = self.read()?;
        let meals = c
            .meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        let workouts = c
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        Ok((meals, workouts))
    }
}
