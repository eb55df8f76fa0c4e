// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Source of "today" for date defaults and aggregates.

use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Local calendar date of the running process.
    #[default]
    System,
    /// A pinned date, for tests and demos.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}
