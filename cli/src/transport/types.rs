//! # Transport Data Types
//!
//! File: cli/src/transport/types.rs
//! Author: Christi Mahu
//!
//! Typed keys and records for the traffic and timetable tables. Cities are a
//! closed set, so city pairs are looked up with a structured `RouteKey`
//! rather than a concatenated `"Paris-Lyon"` string.
//!
use super::time::ClockTime;
use crate::core::error::TravelError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A supported city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum City {
    Paris,
    Lyon,
}

impl City {
    /// Every supported city, in display order.
    pub const ALL: [City; 2] = [City::Paris, City::Lyon];

    /// Display name, e.g. `"Paris"`.
    pub fn name(self) -> &'static str {
        match self {
            City::Paris => "Paris",
            City::Lyon => "Lyon",
        }
    }

    /// Matches `name` against the display names, ignoring case and surrounding
    /// blanks. Used where input is typed by a person (dataset files, flags).
    pub fn from_name_ignore_case(name: &str) -> Option<City> {
        let wanted = name.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
    }

    /// Lowercase keyword used when scanning free-text queries.
    pub fn keyword(self) -> &'static str {
        match self {
            City::Paris => "paris",
            City::Lyon => "lyon",
        }
    }
}

/// Exact match on the display name: `"Paris"` parses, `"paris"` does not.
impl FromStr for City {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.name() == s)
            .ok_or_else(|| TravelError::UnknownCity {
                name: s.to_string(),
            })
    }
}

/// Dataset files accept any capitalisation.
impl TryFrom<String> for City {
    type Error = TravelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        City::from_name_ignore_case(&value).ok_or(TravelError::UnknownCity { name: value })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered (origin, destination) pair. Displays as `Origin-Destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub origin: City,
    pub destination: City,
}

impl RouteKey {
    pub fn new(origin: City, destination: City) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The same pair travelled the other way.
    pub fn reversed(self) -> Self {
        Self::new(self.destination, self.origin)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

/// Qualitative traffic level on a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    Heavy,
    Moderate,
    Light,
    Unknown,
}

impl fmt::Display for Congestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Congestion::Heavy => "heavy",
            Congestion::Moderate => "moderate",
            Congestion::Light => "light",
            Congestion::Unknown => "unknown",
        })
    }
}

/// Current state of one road segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadStatus {
    pub congestion: Congestion,
    /// Average speed in km/h. Zero means no data.
    pub speed: f64,
}

impl RoadStatus {
    /// Returned for roads that are not in the table.
    pub const UNKNOWN: RoadStatus = RoadStatus {
        congestion: Congestion::Unknown,
        speed: 0.0,
    };

    /// True when a travel time can be computed from this status.
    pub fn is_passable(&self) -> bool {
        self.speed.is_finite() && self.speed > 0.0
    }
}

/// One scheduled train between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub available_seats: u32,
}
