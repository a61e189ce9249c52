use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvCategory {
    /// Thresholds are inclusive upper bounds: 2, 5, 7, 10, then `Extreme`.
    ///
    /// A missing reading (or NaN) matches no threshold and lands in `Extreme`.
    pub fn classify(uv_index: Option<f64>) -> Self {
        match uv_index {
            Some(uv) if uv <= 2.0 => Self::Low,
            Some(uv) if uv <= 5.0 => Self::Moderate,
            Some(uv) if uv <= 7.0 => Self::High,
            Some(uv) if uv <= 10.0 => Self::VeryHigh,
            Some(_) => Self::Extreme,
            None => Self::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for UvCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
