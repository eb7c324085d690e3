//! # travelrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Line-oriented console helpers for the interactive chat loop. Everything is
//! generic over `BufRead` / `Write` so the loop can be driven from in-memory
//! buffers in tests as well as from stdin/stdout.
//!
use crate::core::error::{Result, TravelError};
use std::io::{BufRead, Write};

/// Prints `label` (without a newline), flushes, and reads one line.
///
/// Returns `Ok(None)` at end of input. The returned line has its trailing
/// newline (`\n` or `\r\n`) removed.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}").map_err(TravelError::from)?;
    output.flush().map_err(TravelError::from)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(TravelError::from)?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// True if `line` is exactly `quit`, in any case.
pub fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit")
}
