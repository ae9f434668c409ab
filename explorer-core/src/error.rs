use thiserror::Error;

/// Every way a weather lookup can end without a result.
///
/// All variants are terminal for the request that produced them. `Display`
/// is the message shown to the user in place of the weather content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error(
        "API key missing: add your OpenWeather API key to continue.\n\
         Run `weather-explorer configure` or set OPENWEATHER_API_KEY."
    )]
    CredentialMissing,

    #[error(
        "Unauthorized: your API key is invalid. Check your credential \
         (OPENWEATHER_API_KEY or the config file)."
    )]
    Unauthorized,

    #[error("City not found: \"{city}\" doesn't exist or couldn't be found. Try a different city name.")]
    NotFound { city: String },

    #[error("API error: {status} - {reason}")]
    Transport { status: u16, reason: String },

    #[error("Network error: unable to connect to the weather service. Check your internet connection.")]
    Network,

    #[error("Error: {0}")]
    Unknown(String),
}

impl LookupError {
    /// Sorts a client-side failure into connectivity vs. everything else.
    pub fn from_request(err: &reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            LookupError::Network
        } else {
            LookupError::Unknown(err.to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::CredentialMissing => "credential_missing",
            LookupError::Unauthorized => "unauthorized",
            LookupError::NotFound { .. } => "not_found",
            LookupError::Transport { .. } => "transport",
            LookupError::Network => "network",
            LookupError::Unknown(_) => "unknown",
        }
    }
}
