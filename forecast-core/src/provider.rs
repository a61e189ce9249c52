use crate::{
    Config, ForecastPayload, ForecastRequest, error::ProviderError,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, request: &ForecastRequest)
    -> Result<ForecastPayload, ProviderError>;
}

/// Construct the WeatherAPI.com provider from the stored configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No WeatherAPI.com API key configured.\n\
                 Hint: run `forecast configure` and enter your API key."
        )
    })?;

    let provider = WeatherApiProvider::new(api_key.to_owned(), &config.provider)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No WeatherAPI.com API key configured"));
        assert!(msg.contains("Hint: run `forecast configure`"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
