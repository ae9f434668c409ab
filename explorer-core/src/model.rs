use serde::{Deserialize, Serialize};
use std::fmt;

/// The effective input key of a weather panel.
///
/// `trigger` grows on every submission, repeats of the same city included,
/// so comparing cities alone cannot detect a new search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WeatherQuery {
    pub city: String,
    pub trigger: u64,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, trigger: u64) -> Self {
        Self { city: city.into(), trigger }
    }
}

/// Current conditions for one city, mapped from a successful provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature_c: i32,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Short categorical label, e.g. "Rain" or "Clear".
    pub condition: String,
}

/// Rounds half-up (towards positive infinity), so 15.5 -> 16 and -2.5 -> -2.
pub fn round_temperature(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.setup, self.punchline)
    }
}
