//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The forecast payload model (WeatherAPI.com `forecast.json`)
//! - Pure display derivations: date/clock formatting, hourly window, AQI and UV categories
//! - The forecast provider abstraction and its HTTP implementation
//! - A query session that discards stale responses
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but the derivations can be reused by any front-end.

pub mod config;
pub mod derive;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;

pub use config::{ClockSource, Config, DisplaySettings, ProviderSettings};
pub use derive::{AirQualityCategory, AirQualityReading, UvCategory, WindowStrategy};
pub use error::{ProviderError, TimeError};
pub use model::{DayForecast, ForecastPayload, ForecastRequest, HourEntry};
pub use provider::{ForecastProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use session::{FetchStatus, ForecastSession, Outcome, RequestTicket, SessionState};
pub use view::DerivedView;
