use std::{borrow::Cow, convert::TryFrom};

use crate::model::Coordinates;

/// A selectable location.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: Cow<'static, str>,
    pub coordinates: Coordinates,
}

static CITIES: [City; 5] = [
    City::new("San Francisco", 37.7749, -122.4194),
    City::new("New York", 40.7128, -74.0060),
    City::new("London", 51.5074, -0.1278),
    City::new("Tokyo", 35.6762, 139.6503),
    City::new("Sydney", -33.8688, 151.2093),
];

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            coordinates: Coordinates::new(latitude, longitude),
        }
    }

    /// An ad-hoc location outside the predefined table, named by its coordinates.
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            name: Cow::Owned(coordinates.to_string()),
            coordinates,
        }
    }

    pub fn all() -> &'static [City] {
        &CITIES
    }

    /// The first city in the table.
    pub fn default_city() -> &'static City {
        &CITIES[0]
    }

    /// Case-insensitive lookup by name.
    pub fn find(name: &str) -> Option<&'static City> {
        let name = name.trim();
        CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<&str> for &'static City {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        City::find(value).ok_or_else(|| {
            let names: Vec<&str> = City::all().iter().map(|c| &*c.name).collect();
            anyhow::anyhow!("Unknown city '{value}'. Supported cities: {}.", names.join(", "))
        })
    }
}
