// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod clock;
pub mod extraction;
pub mod fitness;
pub mod latency;

pub use clock::Clock;
pub use extraction::{ExtractionError, SyntheticExtractor, WorkoutExtractor, WorkoutMetrics};
pub use fitness::FitnessService;
pub use latency::{Operation, SimulatedLatency};
