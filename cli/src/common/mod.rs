//! # travelrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! command-specific logic (`commands::`) and the core infrastructure (`core::`).
//!
//! - **`clock`**: The `Clock` trait and its system and fixed implementations.
//! - **`ui`**: Line-oriented console prompting for the interactive loop.
//!

/// Sources of the current time of day (system and fixed clocks).
pub mod clock;
/// Console prompting helpers.
pub mod ui;
