use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Config, error::ForecastError, model::Coordinates};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_mean,weathercode";

/// Open-Meteo forecast response. The provider may omit any field, and
/// may emit `null` inside the daily arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecastResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current_weather: Option<RawCurrentWeather>,
    #[serde(default)]
    pub daily: Option<RawDailyBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCurrentWeather {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub weathercode: Option<i32>,
}

/// Parallel arrays, one slot per forecast day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDailyBlock {
    #[serde(default)]
    pub time: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_probability_mean: Option<Vec<Option<i32>>>,
    #[serde(default)]
    pub weathercode: Option<Vec<Option<i32>>>,
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query(coordinates: Coordinates) -> [(&'static str, String); 5] {
        [
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("timezone", "auto".to_string()),
            ("daily", DAILY_FIELDS.to_string()),
        ]
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn fetch(&self, coordinates: Coordinates) -> Result<RawForecastResponse, ForecastError> {
        let request = self
            .http
            .get(&self.base_url)
            .query(&Self::query(coordinates))
            .build()
            .map_err(|source| ForecastError::Network {
                url: self.base_url.clone(),
                source,
            })?;

        let url = request.url().to_string();
        debug!(method = %request.method(), %url, "sending forecast request");

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|source| ForecastError::Network { url: url.clone(), source })?;

        let status = res.status();
        debug!(%status, "received forecast response");

        let body = res
            .text()
            .await
            .map_err(|source| ForecastError::Network { url, source })?;

        if !status.is_success() {
            return Err(ForecastError::HttpStatus {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
