use serde::{Deserialize, Serialize};

/// Linear proxy: 25 µg/m³ of PM2.5 maps to an index of 100.
///
/// Not the EPA piecewise breakpoint table.
pub fn calculate_aqi(pm2_5: f64) -> f64 {
    (pm2_5 / 25.0) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    /// Outside every band: negative, above 500, or between two bands (e.g. 50.5).
    Unclassified,
}

impl AirQualityCategory {
    /// Inclusive bands 0-50, 51-100, 101-150, 151-200, 201-300, 301-500.
    pub fn classify(index: f64) -> Self {
        match index {
            i if (0.0..=50.0).contains(&i) => Self::Good,
            i if (51.0..=100.0).contains(&i) => Self::Moderate,
            i if (101.0..=150.0).contains(&i) => Self::UnhealthyForSensitiveGroups,
            i if (151.0..=200.0).contains(&i) => Self::Unhealthy,
            i if (201.0..=300.0).contains(&i) => Self::VeryUnhealthy,
            i if (301.0..=500.0).contains(&i) => Self::Hazardous,
            _ => Self::Unclassified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
            Self::Unclassified => "",
        }
    }
}

impl std::fmt::Display for AirQualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Index and category derived from a PM2.5 reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub index: f64,
    pub category: AirQualityCategory,
}

impl AirQualityReading {
    pub fn from_pm2_5(pm2_5: f64) -> Self {
        let index = calculate_aqi(pm2_5);
        Self { index, category: AirQualityCategory::classify(index) }
    }
}

impl Default for AirQualityReading {
    fn default() -> Self {
        Self { index: 0.0, category: AirQualityCategory::Unclassified }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aqi_is_linear_in_pm2_5() {
        assert_eq!(calculate_aqi(25.0), 100.0);
        assert_eq!(calculate_aqi(0.0), 0.0);
        assert_eq!(calculate_aqi(125.0), 500.0);
        assert_eq!(calculate_aqi(12.5), 50.0);
    }

    #[test]
    fn band_edges_are_inclusive() {
        use AirQualityCategory::*;

        let cases = [
            (0.0, Good),
            (50.0, Good),
            (51.0, Moderate),
            (100.0, Moderate),
            (101.0, UnhealthyForSensitiveGroups),
            (150.0, UnhealthyForSensitiveGroups),
            (151.0, Unhealthy),
            (200.0, Unhealthy),
            (201.0, VeryUnhealthy),
            (300.0, VeryUnhealthy),
            (301.0, Hazardous),
            (500.0, Hazardous),
        ];

        for (index, expected) in cases {
            assert_eq!(AirQualityCategory::classify(index), expected, "index {index}");
        }
    }

    #[test]
    fn outside_bands_is_unclassified() {
        for index in [501.0, -1.0, 50.5, 100.4, f64::NAN, f64::INFINITY] {
            let category = AirQualityCategory::classify(index);
            assert_eq!(category, AirQualityCategory::Unclassified, "index {index}");
            assert_eq!(category.label(), "");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(AirQualityCategory::Good.label(), "Good");
        assert_eq!(
            AirQualityCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }

    #[test]
    fn reading_from_concentration() {
        let reading = AirQualityReading::from_pm2_5(30.0);
        assert_eq!(reading.index, 120.0);
        assert_eq!(reading.category, AirQualityCategory::UnhealthyForSensitiveGroups);

        assert_eq!(AirQualityReading::from_pm2_5(30.0), reading);
    }

    #[test]
    fn default_reading_is_zero_and_unlabelled() {
        let reading = AirQualityReading::default();
        assert_eq!(reading.index, 0.0);
        assert_eq!(reading.category.label(), "");
    }
}
