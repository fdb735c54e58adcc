//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The Open-Meteo forecast client and its raw response shape
//! - Mapping of raw responses into a flat [`WeatherSummary`]
//! - The predefined city table and configuration handling
//! - A session type holding loading/error/content state for front-ends
//!
//! It is used by `forecast-cli`, but can also be reused by other front-ends.

pub mod city;
pub mod condition;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod repository;
pub mod session;

pub use city::City;
pub use condition::WeatherCondition;
pub use config::Config;
pub use error::{ErrorKind, ForecastError};
pub use mapper::map_response;
pub use model::{Coordinates, DailyForecast, WeatherSummary};
pub use provider::{ForecastProvider, OpenMeteoClient, RawForecastResponse};
pub use repository::WeatherRepository;
pub use session::{ForecastSession, ForecastState};
