//! # travelrs Route Evaluator
//!
//! File: cli/src/routing/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Given a start city, an end city and a transport mode, the evaluator consults
//! the transport tables and produces a `RouteResult`: either a `Route` with the
//! mode-specific details, or a `RouteError` explaining why there is none.
//! Failures here are ordinary values, not faults; the caller decides how to
//! present them.
//!
//! ## Modes
//!
//! - **car**: sums `segment_distance / speed` over the road plan for the city
//!   pair and reports the congestion of every road. A road without a usable
//!   speed makes the route impassable rather than dividing by zero.
//! - **train**: returns the first timetable entry, in timetable order, that
//!   departs strictly after the current time and still has seats.
//!
//! The result is a pure function of the inputs, the tables and `Clock::now()`,
//! which is read once per train evaluation.
//!
//! ## Examples
//!
//! ```rust
//! let data = TravelData::builtin();
//! let evaluator = RouteEvaluator::new(&data, &SystemClock);
//! match evaluator.evaluate("Paris", "Lyon", "car") {
//!     Ok(route) => println!("{route}"),
//!     Err(reason) => println!("{reason}"),
//! }
//! ```
//!
use crate::common::clock::Clock;
use crate::transport::{City, ClockTime, RouteKey, TravelData};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Distance assumed for every road segment when none is configured.
pub const DEFAULT_SEGMENT_DISTANCE_KM: f64 = 100.0;

/// How the traveller wants to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Car,
    Train,
}

impl TransportMode {
    /// Every supported mode, in the order responses present them.
    pub const ALL: [TransportMode; 2] = [TransportMode::Car, TransportMode::Train];
}

/// Only the exact lowercase names are accepted.
impl FromStr for TransportMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TransportMode::Car),
            "train" => Ok(TransportMode::Train),
            _ => Err(RouteError::UnsupportedMode),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
        })
    }
}

/// Why no route could be offered. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route found")]
    NoRouteFound,

    #[error("No route found: road {road} is impassable")]
    ImpassableRoad { road: String },

    #[error("No trains found")]
    NoTrainsFound,

    #[error("No available trains")]
    NoAvailableTrains,

    #[error("Unsupported transport mode")]
    UnsupportedMode,
}

/// A car journey estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRoute {
    /// Total driving time in hours, rounded to one decimal place.
    pub estimated_hours: f64,
    /// `"road: congestion"` for every road, in driving order.
    pub traffic_info: Vec<String>,
}

/// The next train that can be boarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainOption {
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub available_seats: u32,
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Car(CarRoute),
    Train(TrainOption),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Car(car) => write!(
                f,
                "car: {:.1} hours via {}",
                car.estimated_hours,
                car.traffic_info.join(", ")
            ),
            Route::Train(train) => write!(
                f,
                "train: departs {}, arrives {}, {} seats available",
                train.departure, train.arrival, train.available_seats
            ),
        }
    }
}

pub type RouteResult = Result<Route, RouteError>;

/// Evaluates routes against a dataset and a clock.
pub struct RouteEvaluator<'a> {
    data: &'a TravelData,
    clock: &'a dyn Clock,
    segment_distance_km: f64,
}

impl<'a> RouteEvaluator<'a> {
    pub fn new(data: &'a TravelData, clock: &'a dyn Clock) -> Self {
        Self {
            data,
            clock,
            segment_distance_km: DEFAULT_SEGMENT_DISTANCE_KM,
        }
    }

    /// Overrides the per-segment distance used for car estimates.
    pub fn with_segment_distance(mut self, km: f64) -> Self {
        self.segment_distance_km = km;
        self
    }

    /// Evaluates a trip described by names.
    ///
    /// Names must match exactly (`"Paris"`, `"car"`). The mode is checked
    /// first, so an unsupported mode is reported even for unknown cities.
    /// Unknown cities behave like a city pair with no data.
    pub fn evaluate(&self, start: &str, end: &str, mode: &str) -> RouteResult {
        let mode: TransportMode = mode.parse()?;
        match (start.parse::<City>(), end.parse::<City>()) {
            (Ok(origin), Ok(destination)) => {
                self.evaluate_key(RouteKey::new(origin, destination), mode)
            }
            _ => {
                debug!("Unknown city in {start} -> {end}, no {mode} data");
                Err(match mode {
                    TransportMode::Car => RouteError::NoRouteFound,
                    TransportMode::Train => RouteError::NoTrainsFound,
                })
            }
        }
    }

    /// Evaluates a trip between two known cities.
    pub fn evaluate_key(&self, key: RouteKey, mode: TransportMode) -> RouteResult {
        let result = match mode {
            TransportMode::Car => self.evaluate_car(key),
            TransportMode::Train => self.evaluate_train(key),
        };
        match &result {
            Ok(route) => debug!("{key} by {mode}: {route}"),
            Err(reason) => debug!("{key} by {mode}: {reason}"),
        }
        result
    }

    /// Evaluates every supported mode, in presentation order.
    pub fn evaluate_all(&self, key: RouteKey) -> Vec<(TransportMode, RouteResult)> {
        TransportMode::ALL
            .into_iter()
            .map(|mode| (mode, self.evaluate_key(key, mode)))
            .collect()
    }

    fn evaluate_car(&self, key: RouteKey) -> RouteResult {
        let roads = self.data.road_plan(key);
        if roads.is_empty() {
            return Err(RouteError::NoRouteFound);
        }

        let mut total_hours = 0.0;
        let mut traffic_info = Vec::with_capacity(roads.len());
        for road in roads {
            let status = self.data.lookup_traffic(road);
            if !status.is_passable() {
                return Err(RouteError::ImpassableRoad { road: road.clone() });
            }
            total_hours += self.segment_distance_km / status.speed;
            traffic_info.push(format!("{road}: {}", status.congestion));
        }

        Ok(Route::Car(CarRoute {
            estimated_hours: round_to_tenth(total_hours),
            traffic_info,
        }))
    }

    fn evaluate_train(&self, key: RouteKey) -> RouteResult {
        let schedule = self.data.lookup_schedule(key);
        if schedule.is_empty() {
            return Err(RouteError::NoTrainsFound);
        }

        let now = self.clock.now();
        schedule
            .iter()
            .find(|entry| entry.departure > now && entry.available_seats > 0)
            .map(|entry| {
                Route::Train(TrainOption {
                    departure: entry.departure,
                    arrival: entry.arrival,
                    available_seats: entry.available_seats,
                })
            })
            .ok_or(RouteError::NoAvailableTrains)
    }
}

/// Rounds to one decimal place, halves to even.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::clock::FixedClock;
    use crate::transport::dataset::parse_dataset;

    fn at(hhmm: &str) -> FixedClock {
        FixedClock(ClockTime::parse_hhmm(hhmm).unwrap())
    }

    fn car(result: RouteResult) -> CarRoute {
        match result {
            Ok(Route::Car(car)) => car,
            other => panic!("expected a car route, got {other:?}"),
        }
    }

    fn train(result: RouteResult) -> TrainOption {
        match result {
            Ok(Route::Train(train)) => train,
            other => panic!("expected a train, got {other:?}"),
        }
    }

    #[test]
    fn car_paris_to_lyon() {
        let data = TravelData::builtin();
        let clock = at("12:00");
        let route = car(RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "car"));

        assert_eq!(route.traffic_info, ["A1: heavy", "A2: light"]);
        assert_eq!(route.estimated_hours, 4.4);
    }

    #[test]
    fn car_lyon_to_paris() {
        let data = TravelData::builtin();
        let clock = at("00:00");
        let route = car(RouteEvaluator::new(&data, &clock).evaluate("Lyon", "Paris", "car"));

        assert_eq!(route.traffic_info, ["A2: light", "A1: heavy"]);
        assert_eq!(route.estimated_hours, 4.4);
    }

    #[test]
    fn car_result_does_not_depend_on_time() {
        let data = TravelData::builtin();
        let (early, late) = (at("00:01"), at("23:59"));
        assert_eq!(
            RouteEvaluator::new(&data, &early).evaluate("Paris", "Lyon", "car"),
            RouteEvaluator::new(&data, &late).evaluate("Paris", "Lyon", "car")
        );
    }

    #[test]
    fn train_picks_next_departure() {
        let data = TravelData::builtin();

        let clock = at("07:30");
        let first = train(RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train"));
        assert_eq!(first.departure.to_string(), "08:00");
        assert_eq!(first.arrival.to_string(), "10:00");
        assert_eq!(first.available_seats, 45);

        let clock = at("09:15");
        let second = train(RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train"));
        assert_eq!(second.departure.to_string(), "10:00");
        assert_eq!(second.arrival.to_string(), "12:00");
        assert_eq!(second.available_seats, 20);
    }

    #[test]
    fn train_departing_now_is_missed() {
        let data = TravelData::builtin();
        let clock = at("08:00");
        let next = train(RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train"));
        assert_eq!(next.departure.to_string(), "10:00");

        let clock = at("10:00");
        assert_eq!(
            RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train"),
            Err(RouteError::NoAvailableTrains)
        );
    }

    #[test]
    fn no_trains_after_last_departure() {
        let data = TravelData::builtin();
        let clock = at("18:45");
        let result = RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train");
        assert_eq!(result, Err(RouteError::NoAvailableTrains));
        assert_eq!(result.unwrap_err().to_string(), "No available trains");
    }

    #[test]
    fn sold_out_trains_are_skipped() {
        let data = parse_dataset(
            r#"
            [[trains]]
            from = "Paris"
            to = "Lyon"
            departure = "08:00"
            arrival = "10:00"
            seats = 0

            [[trains]]
            from = "Paris"
            to = "Lyon"
            departure = "09:00"
            arrival = "11:00"
            seats = 3
            "#,
            "test",
        )
        .unwrap();
        let clock = at("06:00");
        let next = train(RouteEvaluator::new(&data, &clock).evaluate("Paris", "Lyon", "train"));
        assert_eq!(next.departure.to_string(), "09:00");
        assert_eq!(next.available_seats, 3);
    }

    #[test]
    fn unknown_cities() {
        let data = TravelData::builtin();
        let clock = at("06:00");
        let evaluator = RouteEvaluator::new(&data, &clock);

        let car = evaluator.evaluate("X", "Y", "car");
        assert_eq!(car, Err(RouteError::NoRouteFound));
        assert_eq!(car.unwrap_err().to_string(), "No route found");

        let train = evaluator.evaluate("X", "Y", "train");
        assert_eq!(train, Err(RouteError::NoTrainsFound));
        assert_eq!(train.unwrap_err().to_string(), "No trains found");
    }

    #[test]
    fn same_city_has_no_route() {
        let data = TravelData::builtin();
        let clock = at("06:00");
        let evaluator = RouteEvaluator::new(&data, &clock);
        assert_eq!(
            evaluator.evaluate("Paris", "Paris", "car"),
            Err(RouteError::NoRouteFound)
        );
        assert_eq!(
            evaluator.evaluate("Lyon", "Lyon", "train"),
            Err(RouteError::NoTrainsFound)
        );
    }

    #[test]
    fn unsupported_mode() {
        let data = TravelData::builtin();
        let clock = at("06:00");
        let evaluator = RouteEvaluator::new(&data, &clock);

        let result = evaluator.evaluate("Paris", "Lyon", "plane");
        assert_eq!(result, Err(RouteError::UnsupportedMode));
        assert_eq!(result.unwrap_err().to_string(), "Unsupported transport mode");
        // Mode is checked before the cities.
        assert_eq!(
            evaluator.evaluate("X", "Y", "bike"),
            Err(RouteError::UnsupportedMode)
        );
    }

    #[test]
    fn zero_speed_road_is_impassable() {
        let data = parse_dataset(
            r#"
            [[roads]]
            id = "A1"
            congestion = "heavy"
            speed = 30

            [[roads]]
            id = "D9"
            congestion = "heavy"
            speed = 0

            [[car_routes]]
            from = "Paris"
            to = "Lyon"
            roads = ["A1", "D9"]

            [[car_routes]]
            from = "Lyon"
            to = "Paris"
            roads = ["A1", "missing"]
            "#,
            "test",
        )
        .unwrap();
        let clock = at("06:00");
        let evaluator = RouteEvaluator::new(&data, &clock);

        let result = evaluator.evaluate("Paris", "Lyon", "car");
        assert_eq!(
            result,
            Err(RouteError::ImpassableRoad { road: "D9".into() })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "No route found: road D9 is impassable"
        );
        // Untracked roads report speed 0 too.
        assert_eq!(
            evaluator.evaluate("Lyon", "Paris", "car"),
            Err(RouteError::ImpassableRoad {
                road: "missing".into()
            })
        );
    }

    #[test]
    fn segment_distance_scales_estimate() {
        let data = TravelData::builtin();
        let clock = at("06:00");
        let result = RouteEvaluator::new(&data, &clock)
            .with_segment_distance(45.0)
            .evaluate("Paris", "Lyon", "car");
        let route = car(result);
        // 45/30 + 45/90 = 2.0
        assert_eq!(route.estimated_hours, 2.0);
    }

    #[test]
    fn evaluate_all_is_car_then_train() {
        let data = TravelData::builtin();
        let clock = at("07:00");
        let all = RouteEvaluator::new(&data, &clock)
            .evaluate_all(RouteKey::new(City::Paris, City::Lyon));
        let modes: Vec<TransportMode> = all.iter().map(|(mode, _)| *mode).collect();
        assert_eq!(modes, TransportMode::ALL);
        assert!(matches!(all[0].1, Ok(Route::Car(_))));
        assert!(matches!(all[1].1, Ok(Route::Train(_))));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("car".parse::<TransportMode>(), Ok(TransportMode::Car));
        assert_eq!("train".parse::<TransportMode>(), Ok(TransportMode::Train));
        for input in ["CAR", "Car", " car ", "boat", ""] {
            assert_eq!(
                input.parse::<TransportMode>(),
                Err(RouteError::UnsupportedMode),
                "{input:?}"
            );
        }
    }

    #[test]
    fn names_must_match_exactly() {
        let data = TravelData::builtin();
        let clock = at("07:00");
        let evaluator = RouteEvaluator::new(&data, &clock);

        assert_eq!(evaluator.evaluate("Paris", "Lyon", "Car"), Err(RouteError::UnsupportedMode));
        assert_eq!(evaluator.evaluate("Paris", "Lyon", " car "), Err(RouteError::UnsupportedMode));
        assert_eq!(evaluator.evaluate("paris", "lyon", "car"), Err(RouteError::NoRouteFound));
        assert_eq!(evaluator.evaluate("paris", "lyon", "train"), Err(RouteError::NoTrainsFound));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_tenth(4.444), 4.4);
        assert_eq!(round_to_tenth(4.45000001), 4.5);
        assert_eq!(round_to_tenth(100.0 / 30.0 + 100.0 / 90.0), 4.4);
        // Halves go to the even tenth.
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(0.75), 0.8);
    }

    #[test]
    fn half_tenth_estimate_rounds_to_even() {
        let data = parse_dataset(
            r#"
            [[roads]]
            id = "A1"
            congestion = "light"
            speed = 100

            [[car_routes]]
            from = "Paris"
            to = "Lyon"
            roads = ["A1"]
            "#,
            "ties",
        )
        .unwrap();
        let clock = at("07:00");
        let result = RouteEvaluator::new(&data, &clock)
            .with_segment_distance(25.0)
            .evaluate("Paris", "Lyon", "car");
        let route = car(result);
        assert_eq!(route.estimated_hours, 0.2);
    }
}
