use chrono::NaiveDate;
use forecast_core::{DailyForecast, ForecastState, WeatherCondition, WeatherSummary};

/// Renders the state the way the forecast screen lays it out.
pub fn render_state(state: &ForecastState) -> String {
    if state.is_loading {
        return "Loading...\n".to_string();
    }
    if let Some(message) = &state.error_message {
        return format!("Error: {message}\n");
    }
    match &state.summary {
        Some(summary) => render_summary(&state.selected_city.name, summary),
        None => String::new(),
    }
}

fn render_summary(city: &str, summary: &WeatherSummary) -> String {
    let current = summary
        .current_temp_c
        .map_or_else(|| "-".to_string(), |t| (t as i64).to_string());

    let mut out = format!("{city}\n{current}°C\nToday\n\nThis Week\n");
    for day in &summary.daily {
        out.push_str(&daily_row(day));
        out.push('\n');
    }
    out
}

fn daily_row(day: &DailyForecast) -> String {
    let condition = WeatherCondition::from_code(day.weather_code);
    format!(
        "{}  {:<18} {:<22} {}° / {}°  ·  {}% rain",
        condition.icon(),
        headline(&day.date_iso),
        condition.description(),
        day.temp_min_c as i64,
        day.temp_max_c as i64,
        day.precip_probability_pct,
    )
}

/// "Tue, Oct 14, 2025", or the raw string if it is not an ISO date.
fn headline(date_iso: &str) -> String {
    match NaiveDate::parse_from_str(date_iso, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => date_iso.to_string(),
    }
}
