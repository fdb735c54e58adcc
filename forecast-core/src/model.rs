use serde::{Deserialize, Serialize};

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// One calendar day of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// ISO date as returned by the provider, e.g. "2025-10-14".
    pub date_iso: String,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    /// 0..=100
    pub precip_probability_pct: i32,
    /// WMO weather code, see [`crate::WeatherCondition`].
    pub weather_code: i32,
}

/// Current temperature plus the daily forecasts, in provider order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub current_temp_c: Option<f64>,
    pub daily: Vec<DailyForecast>,
}
