//! Selection of the hourly strip shown under the current conditions.

use serde::{Deserialize, Serialize};

use crate::model::HourEntry;

pub const DEFAULT_NEXT_DAY_HOURS: usize = 12;
pub const DEFAULT_ROLLING_HOURS: usize = 24;

/// How the hourly strip is cut out of today's and tomorrow's hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum WindowStrategy {
    /// The rest of today followed by a fixed slice of tomorrow's first hours.
    ///
    /// Length varies with the current hour: 13 to 36 entries with the default slice.
    TodayPlusNextDay {
        #[serde(default = "default_next_day_hours")]
        next_day_hours: usize,
    },
    /// At most `hours` consecutive entries starting at the current hour.
    Rolling {
        #[serde(default = "default_rolling_hours")]
        hours: usize,
    },
}

const fn default_next_day_hours() -> usize {
    DEFAULT_NEXT_DAY_HOURS
}

const fn default_rolling_hours() -> usize {
    DEFAULT_ROLLING_HOURS
}

impl Default for WindowStrategy {
    fn default() -> Self {
        Self::TodayPlusNextDay { next_day_hours: DEFAULT_NEXT_DAY_HOURS }
    }
}

impl WindowStrategy {
    pub fn rolling() -> Self {
        Self::Rolling { hours: DEFAULT_ROLLING_HOURS }
    }
}

/// Build the hourly strip starting at `current`.
///
/// Returns an empty strip when the current hour was not found, or when the index
/// lies beyond today's hours. A short `tomorrow` is used as far as it goes.
pub fn hourly_window(
    today: &[HourEntry],
    tomorrow: &[HourEntry],
    current: Option<usize>,
    strategy: WindowStrategy,
) -> Vec<HourEntry> {
    let Some(remainder) = current.and_then(|idx| today.get(idx..)) else {
        return Vec::new();
    };

    match strategy {
        WindowStrategy::TodayPlusNextDay { next_day_hours } => remainder
            .iter()
            .chain(tomorrow.iter().take(next_day_hours))
            .cloned()
            .collect(),
        WindowStrategy::Rolling { hours } => {
            remainder.iter().chain(tomorrow.iter()).take(hours).cloned().collect()
        }
    }
}
