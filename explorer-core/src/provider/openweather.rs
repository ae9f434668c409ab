use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::Credential,
    error::LookupError,
    model::{WeatherResult, round_temperature},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    credential: Credential,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(
        base_url: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.into(), credential, http })
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherResult, LookupError> {
        let res = self
            .http
            .get(self.endpoint())
            .query(&[("q", city), ("appid", self.credential.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| LookupError::from_request(&e))?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(LookupError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound { city: city.to_string() });
        }
        if !status.is_success() {
            return Err(LookupError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let body = res.text().await.map_err(|e| LookupError::from_request(&e))?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            LookupError::Unknown(format!("failed to parse weather response: {e}"))
        })?;

        parsed.into_result()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_result(self) -> Result<WeatherResult, LookupError> {
        let weather = self.weather.into_iter().next().ok_or_else(|| {
            LookupError::Unknown("weather response contained no conditions".to_string())
        })?;

        Ok(WeatherResult {
            temperature_c: round_temperature(self.main.temp),
            description: weather.description,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            condition: weather.main,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherResult, LookupError> {
        tracing::debug!(city, "requesting current weather");

        let outcome = self.fetch_current(city).await;
        if let Err(err) = &outcome {
            tracing::info!(city, kind = err.kind(), "weather lookup failed");
        }
        outcome
    }
}
