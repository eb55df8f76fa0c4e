// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout metric extraction from uploaded files.
//!
//! A real implementation would read a screenshot or PDF export from a
//! fitness device and pull out distance, heart rate and so on. That pipeline
//! does not exist yet; `SyntheticExtractor` fills every field with plausible
//! random values so the rest of the service can run end to end.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::WeatherContext;

/// Metrics read from an uploaded workout file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutMetrics {
    /// Kilometers
    pub distance_km: f64,
    pub avg_heart_rate: u32,
    pub calories: u32,
    pub weather: WeatherContext,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("file could not be read")]
    Unreadable,

    #[error("extraction confidence too low ({confidence:.2})")]
    LowConfidence { confidence: f64 },
}

/// Turns uploaded workout bytes (image or PDF) into metrics.
pub trait WorkoutExtractor: Send + Sync {
    fn extract(&self, file: &[u8]) -> Result<WorkoutMetrics, ExtractionError>;
}

/// Cut a value down to two decimals. Never rounds up, so a sample drawn
/// from `[2, 12)` stays inside that range.
fn truncate_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Stand-in extractor that ignores the file contents and samples metrics.
///
/// Ranges: distance 2–12 km (truncated to two decimals), heart rate 120–169 bpm,
/// calories 200–399, temperature 10–24 °C, humidity 50–79 %.
pub struct SyntheticExtractor {
    rng: Mutex<StdRng>,
}

impl SyntheticExtractor {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence of metrics for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SyntheticExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutExtractor for SyntheticExtractor {
    fn extract(&self, _file: &[u8]) -> Result<WorkoutMetrics, ExtractionError> {
        // A panic while sampling cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let distance_km = truncate_to_hundredths(rng.gen_range(2.0..12.0_f64));

        Ok(WorkoutMetrics {
            distance_km,
            avg_heart_rate: rng.gen_range(120..170),
            calories: rng.gen_range(200..400),
            weather: WeatherContext {
                temp: rng.gen_range(10..25),
                humidity: rng.gen_range(50..80),
            },
        })
    }
}
