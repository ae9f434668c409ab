use crate::model::WeatherQuery;

/// Free-text city entry.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    buffer: String,
    clear_on_submit: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant that empties the buffer after a successful submit.
    pub fn clearing() -> Self {
        Self { buffer: String::new(), clear_on_submit: true }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Calls `on_search` with the trimmed buffer, unless it is blank.
    ///
    /// Returns whether the callback ran.
    pub fn submit<F>(&mut self, on_search: F) -> bool
    where
        F: FnOnce(&str),
    {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            return false;
        }

        on_search(trimmed);
        if self.clear_on_submit {
            self.buffer.clear();
        }
        true
    }
}

/// Owner of the `(city, trigger)` pair the weather panel observes.
#[derive(Debug, Clone, Default)]
pub struct Page {
    query: WeatherQuery,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search; the trigger grows even when the city repeats.
    pub fn on_search(&mut self, city: &str) -> WeatherQuery {
        self.query.city = city.to_string();
        self.query.trigger += 1;
        self.query.clone()
    }

    pub fn query(&self) -> &WeatherQuery {
        &self.query
    }

    /// Cards are only shown once something has been searched.
    pub fn has_city(&self) -> bool {
        !self.query.city.is_empty()
    }
}
