//! Plain-text rendering of the panel and joke card.

use explorer_core::{JokeCard, PanelView, panel::WeatherView};

pub fn panel(view: &PanelView<'_>, city: &str) -> String {
    match view {
        PanelView::Idle => String::new(),
        PanelView::Loading => format!("Fetching weather for {city}..."),
        PanelView::Error(err) => format!("[!] {err}"),
        PanelView::Weather(weather) => weather_card(weather),
    }
}

fn weather_card(view: &WeatherView<'_>) -> String {
    let result = view.result;
    let mut out = format!(
        "{}  {}\n{}°C  {}\nHumidity: {}%   Wind speed: {} m/s",
        view.icon.emoji(),
        view.city,
        result.temperature_c,
        result.description,
        result.humidity_pct,
        result.wind_speed_mps,
    );

    if let Some(advice) = view.clothing_advice {
        out.push_str(&format!("\n\nClothing suggestion\n  {advice}"));
    }
    if let Some(joke) = view.weather_joke {
        out.push_str(&format!("\n\nWeather joke\n  {joke}"));
    }
    out
}

pub fn joke_card(card: &JokeCard) -> String {
    if card.is_loading() {
        "Daily joke\n  (loading...)".to_string()
    } else {
        let body = card.text().replace('\n', "\n  ");
        format!("Daily joke\n  {body}")
    }
}
