use serde::{Deserialize, Serialize};

/// A single forecast query, as typed by the user.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub location: String,
}

impl ForecastRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

/// Multi-day forecast as returned by weatherapi.com `forecast.json`.
///
/// Replaced wholesale on every successful query; never merged with a previous payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

impl ForecastPayload {
    /// Forecast days, index 0 = today.
    pub fn days(&self) -> &[DayForecast] {
        &self.forecast.days
    }

    pub fn day(&self, index: usize) -> Option<&DayForecast> {
        self.forecast.days.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Location-local date-time, e.g. "2024-03-15 9:05".
    #[serde(rename = "localtime")]
    pub local_time: String,
}

impl Location {
    /// "Name, Country" when the country is known, the bare name otherwise.
    pub fn display_name(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    #[serde(rename = "temp_c")]
    pub temperature_c: f64,
    pub condition: Condition,
    #[serde(rename = "uv", default)]
    pub uv_index: Option<f64>,
    pub wind_kph: f64,
    #[serde(rename = "humidity")]
    pub humidity_pct: f64,
    #[serde(rename = "vis_km")]
    pub visibility_km: f64,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
}

/// Pollutant concentrations in µg/m³. Only `pm2_5` feeds the derived index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(rename = "forecastday")]
    pub days: Vec<DayForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub day: DaySummary,
    pub astro: Astro,
    /// One entry per hour 00..=23, ascending.
    #[serde(rename = "hour")]
    pub hours: Vec<HourEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub condition: Condition,
    #[serde(rename = "maxtemp_c", default)]
    pub max_temperature_c: Option<f64>,
    #[serde(rename = "mintemp_c", default)]
    pub min_temperature_c: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourEntry {
    /// "YYYY-MM-DD HH:MM"
    #[serde(rename = "time")]
    pub timestamp: String,
    #[serde(rename = "temp_c")]
    pub temperature_c: f64,
    pub condition: Condition,
}

impl HourEntry {
    /// Clock part of the timestamp ("HH:MM"), or the whole string if it has none.
    pub fn clock(&self) -> &str {
        self.timestamp.split_once(' ').map_or(self.timestamp.as_str(), |(_, clock)| clock)
    }
}
