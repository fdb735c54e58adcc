//! Presentation-facing forecast state and the commands that drive it.

use tracing::{info, warn};

use crate::{
    city::City,
    model::WeatherSummary,
    provider::{ForecastProvider, OpenMeteoClient},
    repository::WeatherRepository,
};

/// What a front-end renders: a spinner, an error, or the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastState {
    /// Raised by a front-end while it awaits a refresh; cleared by the
    /// session once the refresh completes.
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub summary: Option<WeatherSummary>,
    pub selected_city: City,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self {
            is_loading: false,
            error_message: None,
            summary: None,
            selected_city: City::default_city().clone(),
        }
    }
}

/// Holds the current [`ForecastState`] for one front-end.
///
/// Commands take `&mut self`, so a session never has two refreshes in
/// flight. A summary from a previous refresh is kept when a later one fails.
#[derive(Debug)]
pub struct ForecastSession<P = OpenMeteoClient> {
    repository: WeatherRepository<P>,
    state: ForecastState,
}

impl<P: ForecastProvider> ForecastSession<P> {
    pub fn new(repository: WeatherRepository<P>) -> Self {
        Self::with_city(repository, City::default_city().clone())
    }

    pub fn with_city(repository: WeatherRepository<P>, city: City) -> Self {
        Self {
            repository,
            state: ForecastState {
                selected_city: city,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    /// Switches the active location and refreshes it.
    pub async fn select_location(&mut self, city: City) -> &ForecastState {
        info!(city = %city, "location selected");
        self.state.selected_city = city;
        self.refresh().await
    }

    /// Re-fetches the forecast for the selected location.
    ///
    /// State is written only once the request completes, so dropping the
    /// returned future leaves the previous state untouched.
    pub async fn refresh(&mut self) -> &ForecastState {
        let coordinates = self.state.selected_city.coordinates;
        let result = self.repository.get_weather(coordinates).await;

        match result {
            Ok(summary) => {
                self.state.summary = Some(summary);
                self.state.error_message = None;
            }
            Err(err) => {
                warn!(error = %err, "forecast refresh failed");
                let message = err.to_string();
                self.state.error_message = Some(if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                });
            }
        }
        self.state.is_loading = false;

        &self.state
    }
}
