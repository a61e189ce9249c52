use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    derive::{
        AirQualityCategory, AirQualityReading, INVALID_DATE, UvCategory, WindowStrategy,
        current_hour_index, format_date, format_date_time, hourly_window,
    },
    model::{ForecastPayload, HourEntry},
};

/// Everything the presentation layer needs beyond the raw payload.
///
/// Recomputed from scratch whenever the payload changes; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub current_hour_index: Option<usize>,
    pub hourly_window: Vec<HourEntry>,
    /// `None` when the payload carried no PM2.5 reading.
    pub air_quality: Option<AirQualityReading>,
    pub uv_category: UvCategory,
    pub formatted_local_date_time: String,
    /// Day index (0 = today) → "Weekday, DD-MM".
    pub formatted_day_labels: BTreeMap<usize, String>,
}

impl DerivedView {
    /// Derive the view for a payload, given the hour of day considered "now".
    pub fn derive(payload: &ForecastPayload, now_hour: u32, strategy: WindowStrategy) -> Self {
        let days = payload.days();
        let today = days.first().map(|d| d.hours.as_slice()).unwrap_or_default();
        let tomorrow = days.get(1).map(|d| d.hours.as_slice()).unwrap_or_default();

        let current_hour_index = current_hour_index(today, now_hour);
        let hourly_window = hourly_window(today, tomorrow, current_hour_index, strategy);

        let air_quality = payload
            .current
            .air_quality
            .as_ref()
            .and_then(|aq| aq.pm2_5)
            .map(AirQualityReading::from_pm2_5);

        let formatted_day_labels = days
            .iter()
            .enumerate()
            .map(|(idx, day)| {
                (idx, format_date(&day.date).unwrap_or_else(|_| INVALID_DATE.to_string()))
            })
            .collect();

        Self {
            current_hour_index,
            hourly_window,
            air_quality,
            uv_category: UvCategory::classify(payload.current.uv_index),
            formatted_local_date_time: format_date_time(&payload.location.local_time)
                .unwrap_or_else(|_| INVALID_DATE.to_string()),
            formatted_day_labels,
        }
    }

    /// Air-quality index, 0 when no reading was available.
    pub fn air_quality_index(&self) -> f64 {
        self.air_quality.unwrap_or_default().index
    }

    /// Air-quality category, unclassified when no reading was available.
    pub fn air_quality_category(&self) -> AirQualityCategory {
        self.air_quality.unwrap_or_default().category
    }

    pub fn day_label(&self, index: usize) -> Option<&str> {
        self.formatted_day_labels.get(&index).map(String::as_str)
    }
}
