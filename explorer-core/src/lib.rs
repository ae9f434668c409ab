//! Core library for the `weather-explorer` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - The lookup error taxonomy
//! - Search input, page state and the weather panel state machine
//! - The joke card and pure display helpers (icons, clothing advice, jokes)
//!
//! It is used by `explorer-cli`, but can also be driven by other front ends.

pub mod advice;
pub mod config;
pub mod error;
pub mod joke;
pub mod model;
pub mod panel;
pub mod provider;
pub mod search;

pub use config::{Config, Credential, PanelFeatures};
pub use error::LookupError;
pub use joke::{JokeCard, JokeClient};
pub use model::{Joke, WeatherQuery, WeatherResult};
pub use panel::{Completion, Dispatch, PanelView, RequestId, RequestState, WeatherPanel};
pub use provider::WeatherProvider;
pub use search::{Page, SearchInput};
