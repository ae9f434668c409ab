use crate::{Config, LookupError, WeatherResult, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// A source of current weather conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherResult, LookupError>;
}

/// Construct the provider from config.
///
/// Returns `None` when no credential is configured; the panel reports that
/// as `CredentialMissing` without touching the network.
pub fn provider_from_config(
    config: &Config,
) -> Result<Option<Arc<dyn WeatherProvider>>, LookupError> {
    let Some(credential) = config.credential() else {
        tracing::warn!("no OpenWeather credential configured");
        return Ok(None);
    };

    let provider = OpenWeatherProvider::new(
        config.endpoints.weather.clone(),
        credential,
        config.request_timeout(),
    )
    .map_err(|e| LookupError::Unknown(format!("failed to build HTTP client: {e}")))?;

    Ok(Some(Arc::new(provider)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_absent_without_credential() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg).expect("building must not fail");
        assert!(provider.is_none());
    }

    #[test]
    fn provider_present_with_credential() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg).expect("building must not fail");
        assert!(provider.is_some());
    }
}
