use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    config::ProviderSettings,
    error::ProviderError,
    model::{ForecastPayload, ForecastRequest},
};

use super::ForecastProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    days: u8,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(request_timeout(settings)).build()?;

        Ok(Self {
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            days: settings.forecast_days.clamp(1, 14),
            http,
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url)
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    #[instrument(skip(self, request), fields(location = %request.location))]
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastPayload, ProviderError> {
        let query = request.location.trim();
        if query.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }

        debug!(days = self.days, "requesting forecast");

        let days = self.days.to_string();

        let res = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", days.as_str()),
                ("aqi", "yes"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, "forecast request rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let payload: ForecastPayload = serde_json::from_str(&body)?;
        debug!(days = payload.days().len(), location = %payload.location.name, "forecast received");

        Ok(payload)
    }
}

/// Configured timeout, never below one second.
fn request_timeout(settings: &ProviderSettings) -> Duration {
    Duration::from_secs(settings.timeout_secs.max(1))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
