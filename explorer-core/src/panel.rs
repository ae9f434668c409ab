//! The weather panel: one lookup per `(city, trigger)` change, four view states.
//!
//! Lookups are dispatched as detached [`Dispatch`] futures tagged with a
//! [`RequestId`]. A [`Completion`] only lands if its id is the latest one
//! issued, so a slow response to an older search can never overwrite a newer
//! one.

use std::sync::Arc;

use crate::{
    advice::{WeatherIcon, clothing_advice, weather_joke},
    config::{Config, PanelFeatures},
    error::LookupError,
    model::{WeatherQuery, WeatherResult},
    provider::{WeatherProvider, provider_from_config},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(LookupError),
    Success(WeatherResult),
}

/// Sequence number of a dispatched lookup, unique per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A lookup that has been issued but not yet run.
#[derive(Debug)]
pub struct Dispatch {
    id: RequestId,
    city: String,
    provider: Arc<dyn WeatherProvider>,
}

impl Dispatch {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub async fn run(self) -> Completion {
        let outcome = self.provider.current(&self.city).await;
        Completion { id: self.id, outcome }
    }
}

/// Result of a [`Dispatch`], to be fed back through [`WeatherPanel::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub id: RequestId,
    pub outcome: Result<WeatherResult, LookupError>,
}

#[derive(Debug)]
pub struct WeatherPanel {
    provider: Option<Arc<dyn WeatherProvider>>,
    features: PanelFeatures,
    state: RequestState,
    key: Option<WeatherQuery>,
    latest: RequestId,
}

impl WeatherPanel {
    /// `provider` is `None` when no credential is configured.
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>, features: PanelFeatures) -> Self {
        Self {
            provider,
            features,
            state: RequestState::Idle,
            key: None,
            latest: RequestId::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Ok(Self::new(provider_from_config(config)?, config.panel))
    }

    pub fn with_features(mut self, features: PanelFeatures) -> Self {
        self.features = features;
        self
    }

    /// React to a new input key.
    ///
    /// Returns the lookup to run when the key changed and names a city. A
    /// missing credential goes straight to the error state with nothing to run.
    pub fn observe(&mut self, query: &WeatherQuery) -> Option<Dispatch> {
        if self.key.as_ref() == Some(query) {
            return None;
        }
        self.key = Some(query.clone());

        if query.city.is_empty() {
            return None;
        }

        self.latest = self.latest.next();

        let Some(provider) = self.provider.clone() else {
            self.state = RequestState::Error(LookupError::CredentialMissing);
            return None;
        };

        self.state = RequestState::Loading;
        tracing::debug!(id = self.latest.0, city = %query.city, "dispatching weather lookup");

        Some(Dispatch { id: self.latest, city: query.city.clone(), provider })
    }

    /// Apply a finished lookup. Returns `false` if it was superseded and dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.id != self.latest {
            tracing::debug!(
                id = completion.id.0,
                latest = self.latest.0,
                "discarding stale weather response"
            );
            return false;
        }

        self.state = match completion.outcome {
            Ok(result) => RequestState::Success(result),
            Err(err) => RequestState::Error(err),
        };
        true
    }

    /// Observe, run and complete in one go.
    pub async fn lookup(&mut self, query: &WeatherQuery) -> &RequestState {
        if let Some(dispatch) = self.observe(query) {
            let completion = dispatch.run().await;
            self.complete(completion);
        }
        &self.state
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn features(&self) -> PanelFeatures {
        self.features
    }

    pub fn view(&self) -> PanelView<'_> {
        match &self.state {
            RequestState::Idle => PanelView::Idle,
            RequestState::Loading => PanelView::Loading,
            RequestState::Error(err) => PanelView::Error(err),
            RequestState::Success(result) => PanelView::Weather(WeatherView {
                city: self.key.as_ref().map(|k| k.city.as_str()).unwrap_or_default(),
                result,
                icon: WeatherIcon::from_condition(&result.condition),
                clothing_advice: self
                    .features
                    .clothing_advice
                    .then(|| clothing_advice(result.temperature_c)),
                weather_joke: self.features.weather_joke.then(|| weather_joke(&result.condition)),
            }),
        }
    }
}

/// What the panel shows, with derived display values already computed.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<'a> {
    Idle,
    Loading,
    Error(&'a LookupError),
    Weather(WeatherView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView<'a> {
    pub city: &'a str,
    pub result: &'a WeatherResult,
    pub icon: WeatherIcon,
    pub clothing_advice: Option<&'static str>,
    pub weather_joke: Option<&'static str>,
}
