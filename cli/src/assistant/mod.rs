//! # travelrs Query Handler
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a free-text question into a formatted answer. Understanding is
//! deliberately shallow: a query is about travel if it contains "route" or
//! "travel", and it must name both supported cities. Anything else gets a fixed
//! fallback reply.
//!
//! ## Direction
//!
//! The city mentioned first is taken as the origin, so "travel from lyon to
//! paris" plans Lyon to Paris. Queries that only use the city names as
//! substrings of other words still count as mentions.
//!
//! ## Response Layout
//!
//! ```text
//! Here are your travel options from Paris to Lyon:
//!
//! By Car:
//! Estimated time: 4.4 hours
//! Traffic conditions:
//! - A1: heavy
//! - A2: light
//!
//! By Train:
//! Next available train:
//! - Departure: 08:00
//! - Arrival: 10:00
//! - Available seats: 45
//! ```
//!
//! Sections for modes that failed are left out. If every mode failed, a single
//! "no options" line follows the header instead.
//!
use crate::routing::{CarRoute, Route, RouteEvaluator, TrainOption};
use crate::transport::{City, RouteKey};
use std::fmt::Write;
use tracing::{debug, info};

/// Reply for anything that is not a recognisable Paris/Lyon travel question.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't understand your query. \
Please ask about routes between supported cities (e.g., Paris and Lyon).";

/// Appended after the header when neither car nor train produced an option.
pub const NO_OPTIONS_RESPONSE: &str = "No travel options are currently available for this route.";

const TRAVEL_KEYWORDS: [&str; 2] = ["route", "travel"];

/// Answers travel questions using a `RouteEvaluator`.
pub struct TravelAssistant<'a> {
    evaluator: RouteEvaluator<'a>,
}

impl<'a> TravelAssistant<'a> {
    pub fn new(evaluator: RouteEvaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// Produces the textual reply to `query`. Never fails.
    pub fn process(&self, query: &str) -> String {
        let query = query.to_lowercase();

        let Some(key) = parse_trip(&query) else {
            debug!("Query not understood: {query:?}");
            return FALLBACK_RESPONSE.to_string();
        };
        info!("Planning trip {key}");

        let mut response = format!(
            "Here are your travel options from {} to {}:\n\n",
            key.origin, key.destination
        );
        let mut any_option = false;
        for (mode, result) in self.evaluator.evaluate_all(key) {
            match result {
                Ok(Route::Car(car)) => {
                    any_option = true;
                    write_car_section(&mut response, &car);
                }
                Ok(Route::Train(train)) => {
                    any_option = true;
                    write_train_section(&mut response, &train);
                }
                Err(reason) => debug!("Omitting {mode} section: {reason}"),
            }
        }
        if !any_option {
            response.push_str(NO_OPTIONS_RESPONSE);
            response.push('\n');
        }
        response
    }
}

/// Extracts the trip from a lowercased query, `None` if it is not a travel question.
fn parse_trip(query: &str) -> Option<RouteKey> {
    if !TRAVEL_KEYWORDS.iter().any(|keyword| query.contains(keyword)) {
        return None;
    }

    let mut mentions: Vec<(usize, City)> = City::ALL
        .into_iter()
        .filter_map(|city| query.find(city.keyword()).map(|pos| (pos, city)))
        .collect();
    if mentions.len() < City::ALL.len() {
        return None;
    }
    mentions.sort_unstable();
    Some(RouteKey::new(mentions[0].1, mentions[1].1))
}

fn write_car_section(out: &mut String, car: &CarRoute) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "By Car:");
    let _ = writeln!(out, "Estimated time: {:.1} hours", car.estimated_hours);
    let _ = writeln!(out, "Traffic conditions:");
    for info in &car.traffic_info {
        let _ = writeln!(out, "- {info}");
    }
    out.push('\n');
}

fn write_train_section(out: &mut String, train: &TrainOption) {
    let _ = writeln!(out, "By Train:");
    let _ = writeln!(out, "Next available train:");
    let _ = writeln!(out, "- Departure: {}", train.departure);
    let _ = writeln!(out, "- Arrival: {}", train.arrival);
    let _ = writeln!(out, "- Available seats: {}", train.available_seats);
}
