use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use explorer_core::{
    Completion, Config, Dispatch, JokeCard, JokeClient, Page, PanelFeatures, SearchInput,
    WeatherPanel,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render;

const QUIT: &str = "/quit";
const REFRESH_JOKE: &str = "/joke";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-explorer",
    version,
    about = "Current weather, clothing advice and a joke for any city"
)]
pub struct Cli {
    /// Read and write this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `explore`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show weather for one city.
    Show {
        /// City name, e.g. "London" or "New York".
        city: String,

        /// Hide the clothing suggestion and weather joke.
        #[arg(long)]
        minimal: bool,
    },

    /// Search cities interactively.
    Explore {
        /// Hide the clothing suggestion and weather joke.
        #[arg(long)]
        minimal: bool,
    },

    /// Print a random joke.
    Joke,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Explore { minimal: false }) {
            Command::Configure => configure(self.config),
            Command::Show { city, minimal } => {
                let mut session = Session::new(&load_config(self.config.as_deref())?, minimal)?;
                session.search(&city).await;
                Ok(())
            }
            Command::Explore { minimal } => {
                let session = Session::new(&load_config(self.config.as_deref())?, minimal)?;
                explore(session).await
            }
            Command::Joke => {
                let config = load_config(self.config.as_deref())?;
                let client = JokeClient::new(config.endpoints.joke.clone(), config.request_timeout())
                    .context("Failed to build HTTP client")?;
                println!("{}", client.random_or_fallback().await);
                Ok(())
            }
        }
    }
}

fn load_file_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// File config with environment overrides applied.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = load_file_config(path)?;
    config.apply_env();
    Ok(config)
}

fn configure(path: Option<PathBuf>) -> anyhow::Result<()> {
    // Only the file contents are saved, never environment overrides.
    let mut config = load_file_config(path.as_deref())?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    tracing::info!(path = %saved_to.display(), "configuration saved");
    println!("Saved configuration to {}", saved_to.display());
    Ok(())
}

/// Search input, page state, weather panel and joke card wired together.
struct Session {
    input: SearchInput,
    page: Page,
    panel: WeatherPanel,
    jokes: JokeCard,
}

impl Session {
    fn new(config: &Config, minimal: bool) -> anyhow::Result<Self> {
        let mut panel = WeatherPanel::from_config(config)?;
        if minimal {
            panel = panel.with_features(PanelFeatures::minimal());
        }

        let client = JokeClient::new(config.endpoints.joke.clone(), config.request_timeout())
            .context("Failed to build HTTP client")?;

        Ok(Self { input: SearchInput::new(), page: Page::new(), panel, jokes: JokeCard::new(client) })
    }

    /// Submit `text` as a search and print the resulting cards.
    async fn search(&mut self, text: &str) {
        self.input.set_buffer(text);

        let page = &mut self.page;
        if !self.input.submit(|city| {
            page.on_search(city);
        }) {
            return;
        }

        let dispatch = self.panel.observe(self.page.query());
        self.print_panel();

        let (completion, _) = tokio::join!(run_dispatch(dispatch), self.jokes.mount());
        if let Some(completion) = completion {
            self.panel.complete(completion);
            self.print_panel();
        }
        self.print_joke();
    }

    async fn refresh_joke(&mut self) {
        let fetch = self.jokes.begin_refresh();
        self.print_joke();
        let text = fetch.run().await;
        self.jokes.finish(text);
        self.print_joke();
    }

    fn print_panel(&self) {
        let out = render::panel(&self.panel.view(), &self.page.query().city);
        if !out.is_empty() {
            println!("\n{out}");
        }
    }

    fn print_joke(&self) {
        if self.page.has_city() {
            println!("\n{}", render::joke_card(&self.jokes));
        }
    }
}

async fn run_dispatch(dispatch: Option<Dispatch>) -> Option<Completion> {
    match dispatch {
        Some(dispatch) => Some(dispatch.run().await),
        None => None,
    }
}

async fn explore(mut session: Session) -> anyhow::Result<()> {
    println!("Type a city and press Enter. {REFRESH_JOKE} for a new joke, {QUIT} or Esc to leave.");

    loop {
        let answer = Text::new("City:")
            .with_placeholder("e.g. London, Tokyo, New York")
            .with_initial_value(session.input.buffer())
            .prompt();

        let text = match answer {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        match text.trim() {
            QUIT => break,
            REFRESH_JOKE => {
                if session.page.has_city() {
                    session.refresh_joke().await;
                }
            }
            _ => session.search(&text).await,
        }
    }

    Ok(())
}
