use tracing::{debug, instrument};

use crate::{
    Config,
    error::ForecastError,
    mapper::map_response,
    model::{Coordinates, WeatherSummary},
    provider::{ForecastProvider, OpenMeteoClient},
};

/// Fetches raw data from a provider and maps it into a [`WeatherSummary`].
#[derive(Debug, Clone)]
pub struct WeatherRepository<P = OpenMeteoClient> {
    provider: P,
}

impl WeatherRepository<OpenMeteoClient> {
    /// Repository backed by Open-Meteo, honoring the configured base URL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(OpenMeteoClient::from_config(config))
    }
}

impl<P: ForecastProvider> WeatherRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    pub async fn get_weather(&self, coordinates: Coordinates) -> Result<WeatherSummary, ForecastError> {
        let raw = self.provider.fetch(coordinates).await?;
        let summary = map_response(&raw);
        debug!(days = summary.daily.len(), "mapped forecast");
        Ok(summary)
    }
}
