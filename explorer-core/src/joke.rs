use reqwest::Client;
use std::time::Duration;

use crate::model::Joke;

pub const FALLBACK_JOKE: &str =
    "Why did the weather app break up with the thermometer? It just wasn't their temperature!";

/// Client for the Official Joke API.
#[derive(Debug, Clone)]
pub struct JokeClient {
    base_url: String,
    http: Client,
}

impl JokeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.into(), http })
    }

    pub async fn random(&self) -> reqwest::Result<Joke> {
        let url = format!("{}/random_joke", self.base_url.trim_end_matches('/'));
        self.http.get(url).send().await?.error_for_status()?.json().await
    }

    /// A joke as display text, or [`FALLBACK_JOKE`] on any failure.
    pub async fn random_or_fallback(&self) -> String {
        match self.random().await {
            Ok(joke) => joke.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "joke fetch failed, using fallback");
                FALLBACK_JOKE.to_string()
            }
        }
    }
}

/// The independent "daily joke" card.
#[derive(Debug)]
pub struct JokeCard {
    client: JokeClient,
    text: Option<String>,
    loading: bool,
}

/// A detached joke request, so the card can render its loading state meanwhile.
#[derive(Debug)]
pub struct JokeFetch {
    client: JokeClient,
}

impl JokeFetch {
    pub async fn run(self) -> String {
        self.client.random_or_fallback().await
    }
}

impl JokeCard {
    pub fn new(client: JokeClient) -> Self {
        Self { client, text: None, loading: false }
    }

    /// Fetch a joke unless one is already shown.
    pub async fn mount(&mut self) -> &str {
        if self.text.is_none() {
            self.refresh().await;
        }
        self.text()
    }

    pub async fn refresh(&mut self) -> &str {
        let fetch = self.begin_refresh();
        let text = fetch.run().await;
        self.finish(text);
        self.text()
    }

    pub fn begin_refresh(&mut self) -> JokeFetch {
        self.loading = true;
        JokeFetch { client: self.client.clone() }
    }

    pub fn finish(&mut self, text: String) {
        self.text = Some(text);
        self.loading = false;
    }

    pub fn has_joke(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
