use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{City, Config, Coordinates, ForecastSession, ForecastState, WeatherRepository};
use inquire::Select;
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "7-day weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick the default city interactively.
    Configure,

    /// List the predefined cities.
    Cities,

    /// Show current weather and the 7-day forecast.
    Show {
        /// City name, e.g. "London". Defaults to the configured city.
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in degrees, used together with --lon.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees, used together with --lat.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => {
                let options: Vec<&str> = City::all().iter().map(|c| &*c.name).collect();
                let current = config.default_city().ok().map(|c| &*c.name);
                let start = current
                    .and_then(|name| options.iter().position(|o| *o == name))
                    .unwrap_or(0);

                let picked = Select::new("Default city:", options)
                    .with_starting_cursor(start)
                    .prompt()
                    .context("City selection was cancelled")?;

                let city = City::find(picked).context("Selected city is not in the table")?;
                config.set_default_city(city);
                config.save()?;
                info!(city = %city, "default city saved");

                println!("Default city set to {city}.");
            }
            Command::Cities => {
                let default = config.default_city().ok();
                for city in City::all() {
                    let marker = if Some(city) == default { "*" } else { " " };
                    println!("{marker} {:<14} {}", city.name, city.coordinates);
                }
            }
            Command::Show { city, lat, lon } => {
                let city = match (city, lat, lon) {
                    (Some(name), _, _) => <&City>::try_from(name.as_str())?.clone(),
                    (None, Some(lat), Some(lon)) => City::at(Coordinates::new(lat, lon)),
                    _ => config.default_city()?.clone(),
                };

                info!(city = %city, coordinates = %city.coordinates, "showing forecast");

                let repository = WeatherRepository::from_config(&config);
                let mut session = ForecastSession::with_city(repository, city);
                let state = session.refresh().await;

                print!("{}", show_output(state)?);
            }
        }

        Ok(())
    }
}

/// Rendered forecast, or the refresh error as the command's failure.
fn show_output(state: &ForecastState) -> anyhow::Result<String> {
    if let Some(message) = &state.error_message {
        anyhow::bail!("{message}");
    }
    Ok(render::render_state(state))
}
