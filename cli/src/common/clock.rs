//! # travelrs Clock Utilities (`common::clock`)
//!
//! File: cli/src/common/clock.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Train availability depends on the current time of day. Rather than reading
//! the wall clock deep inside the route evaluator, callers hand it a `Clock`:
//!
//! - `SystemClock`: local wall-clock time via `chrono::Local`.
//! - `FixedClock`: always reports the same time. Used by `--at HH:MM` and by tests.
//!
use crate::transport::ClockTime;
use chrono::Local;

/// Source of the current time of day.
pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time, truncated to the minute.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_naive(Local::now().time())
    }
}

/// A clock stopped at a given time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
