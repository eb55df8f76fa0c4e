// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Simulated network latency.
//!
//! Every service operation pauses before touching the store, the way a
//! remote backend would. The pause depends on the operation and is scaled by
//! a configurable factor; a scale of 0 skips sleeping entirely.

use std::time::Duration;

/// Operation classes with distinct simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Standard,
    Login,
    PictureUpload,
    WorkoutUpload,
}

impl Operation {
    /// Unscaled delay for this operation.
    pub fn base_delay(self) -> Duration {
        match self {
            Operation::Standard => Duration::from_millis(300),
            Operation::Login => Duration::from_millis(500),
            Operation::PictureUpload => Duration::from_millis(800),
            Operation::WorkoutUpload => Duration::from_millis(1200),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    scale: f64,
}

impl SimulatedLatency {
    /// Latency scaled by `scale`. Negative or non-finite values disable it.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale }
    }

    /// No simulated latency.
    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        let base_ms = op.base_delay().as_millis() as f64;
        Duration::from_millis((base_ms * self.scale).round() as u64)
    }

    /// Sleep for the operation's delay.
    pub async fn pause(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tracing::trace!(?op, delay_ms = delay.as_millis() as u64, "Simulating latency");
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(1.0)
    }
}
