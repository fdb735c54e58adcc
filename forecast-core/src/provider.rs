use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::ForecastError, model::Coordinates};

pub mod openmeteo;

pub use openmeteo::{OpenMeteoClient, RawCurrentWeather, RawDailyBlock, RawForecastResponse};

/// Source of raw forecast data for a location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, coordinates: Coordinates) -> Result<RawForecastResponse, ForecastError>;
}
