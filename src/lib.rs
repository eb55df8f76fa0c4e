// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fittrack: mock backend for a fitness-tracking client
//!
//! This crate provides an in-memory data service (accounts, workouts, meals,
//! goals, dashboard aggregates) behind the same HTTP API the client expects
//! from the real backend, including simulated network latency.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::MemoryDb;
use services::{Clock, FitnessService, SimulatedLatency, SyntheticExtractor, WorkoutExtractor};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub service: FitnessService,
}

impl AppState {
    /// Build the store and service described by `config`, using the system clock.
    pub fn from_config(config: Config) -> Self {
        Self::with_clock(config, Clock::System)
    }

    pub fn with_clock(config: Config, clock: Clock) -> Self {
        let db = if config.seed_demo_data {
            MemoryDb::with_demo_data(clock.today())
        } else {
            MemoryDb::new()
        };

        let extractor: Arc<dyn WorkoutExtractor> = match config.extractor_seed {
            Some(seed) => Arc::new(SyntheticExtractor::seeded(seed)),
            None => Arc::new(SyntheticExtractor::new()),
        };

        let service = FitnessService::new(
            db,
            SimulatedLatency::new(config.latency_scale),
            extractor,
            clock,
        );

        Self { config, service }
    }
}
