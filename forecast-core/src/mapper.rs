//! Normalizes a raw provider response into a [`WeatherSummary`].

use tracing::trace;

use crate::{
    model::{DailyForecast, WeatherSummary},
    provider::{RawDailyBlock, RawForecastResponse},
};

/// Maps a raw response into a summary. Never fails.
///
/// The daily list is bounded by the length of `daily.time`. An index
/// missing its date, max or min temperature is skipped; precipitation
/// probability and weather code default to 0. Provider order is kept.
pub fn map_response(response: &RawForecastResponse) -> WeatherSummary {
    let current_temp_c = response.current_weather.as_ref().and_then(|c| c.temperature);

    let daily = response.daily.as_ref().map(map_daily).unwrap_or_default();

    WeatherSummary { current_temp_c, daily }
}

fn map_daily(block: &RawDailyBlock) -> Vec<DailyForecast> {
    let size = block.time.as_ref().map_or(0, Vec::len);

    (0..size)
        .filter_map(|i| {
            let entry = daily_entry(block, i);
            if entry.is_none() {
                trace!(index = i, "skipping incomplete daily entry");
            }
            entry
        })
        .collect()
}

fn daily_entry(block: &RawDailyBlock, i: usize) -> Option<DailyForecast> {
    let date_iso = at(&block.time, i)?.clone();
    let temp_max_c = *at(&block.temperature_2m_max, i)?;
    let temp_min_c = *at(&block.temperature_2m_min, i)?;
    let precip_probability_pct = at(&block.precipitation_probability_mean, i).copied().unwrap_or(0);
    let weather_code = at(&block.weathercode, i).copied().unwrap_or(0);

    Some(DailyForecast {
        date_iso,
        temp_max_c,
        temp_min_c,
        precip_probability_pct,
        weather_code,
    })
}

/// Element `i` of an optional array of optional values.
fn at<T>(values: &Option<Vec<Option<T>>>, i: usize) -> Option<&T> {
    values.as_ref()?.get(i)?.as_ref()
}
