//! Pure display helpers derived from a [`WeatherResult`](crate::WeatherResult).

/// Icon category picked for a condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    Fallback,
}

impl WeatherIcon {
    /// Case-insensitive substring match; the first category in priority order wins.
    pub fn from_condition(condition: &str) -> Self {
        let lower = condition.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("clear") {
            Self::Clear
        } else if has("cloud") {
            Self::Clouds
        } else if has("rain") || has("drizzle") {
            Self::Rain
        } else if has("snow") {
            Self::Snow
        } else if has("thunder") || has("storm") {
            Self::Thunderstorm
        } else if has("mist") || has("fog") {
            Self::Mist
        } else {
            Self::Fallback
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Mist => "🌫️",
            Self::Fallback => "🌤️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Mist => "mist",
            Self::Fallback => "fair",
        }
    }
}

/// What to wear, by temperature bucket (lower bound inclusive).
pub fn clothing_advice(temperature_c: i32) -> &'static str {
    match temperature_c {
        t if t < 0 => "Bundle up! Heavy coat, scarf, gloves, and warm boots essential!",
        t if t < 10 => "Chilly vibes! Wear a warm jacket, long pants, and closed shoes.",
        t if t < 20 => "Mild weather! Light jacket or sweater with jeans works perfectly.",
        t if t < 28 => "Comfy weather! T-shirt and light pants or shorts are ideal.",
        _ => "Hot day! Light, breathable clothes, sunglasses, and stay hydrated!",
    }
}

pub const DEFAULT_WEATHER_JOKE: &str =
    "What's the weather's favorite snack? Climate-control bars!";

/// A joke keyed by the exact (lowercased) condition label.
pub fn weather_joke(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "clear" => "Why did the sun go to school? To get a little brighter!",
        "clouds" => "What did one cloud say to the other? I mist you!",
        "rain" => "What's a rain cloud's favorite drink? Mountain Dew!",
        "snow" => "What do you call a snowman in summer? A puddle!",
        "thunderstorm" => "Why did the lightning break up? It found the relationship too shocking!",
        _ => DEFAULT_WEATHER_JOKE,
    }
}
