//! Pure derivations over a fetched forecast: no I/O, no clock reads.

pub mod air_quality;
pub mod time;
pub mod uv;
pub mod window;

pub use air_quality::{AirQualityCategory, AirQualityReading, calculate_aqi};
pub use time::{
    INVALID_DATE, current_hour_index, format_date, format_date_time, hour_of, location_hour,
};
pub use uv::UvCategory;
pub use window::{WindowStrategy, hourly_window};
