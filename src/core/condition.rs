use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Weather condition tag used as the stable key for presets and overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Thunderstorm,
    Snow,
    HeavySnow,
    Sleet,
    Hail,
    Windy,
}

impl WeatherCondition {
    /// Every supported condition, in presentation order.
    pub const ALL: [Self; 13] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Fog,
        Self::Drizzle,
        Self::Rain,
        Self::HeavyRain,
        Self::Thunderstorm,
        Self::Snow,
        Self::HeavySnow,
        Self::Sleet,
        Self::Hail,
        Self::Windy,
    ];

    /// Stable tag used in persisted snapshots and exports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::HeavyRain => "heavy-rain",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::HeavySnow => "heavy-snow",
            Self::Sleet => "sleet",
            Self::Hail => "hail",
            Self::Windy => "windy",
        }
    }

    /// Human-facing label for editor surfaces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::HeavySnow => "Heavy Snow",
            Self::Sleet => "Sleet",
            Self::Hail => "Hail",
            Self::Windy => "Windy",
        }
    }

    /// True when the condition carries liquid precipitation.
    #[must_use]
    pub(crate) fn has_rain(self) -> bool {
        matches!(
            self,
            Self::Drizzle | Self::Rain | Self::HeavyRain | Self::Thunderstorm | Self::Sleet | Self::Hail
        )
    }

    /// True when the condition carries frozen precipitation.
    #[must_use]
    pub(crate) fn has_snow(self) -> bool {
        matches!(self, Self::Snow | Self::HeavySnow | Self::Sleet)
    }

    #[must_use]
    pub(crate) fn has_lightning(self) -> bool {
        self == Self::Thunderstorm
    }

    #[must_use]
    pub(crate) fn has_clouds(self) -> bool {
        self != Self::Clear
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WeatherCondition {
    type Err = TuningError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.tag() == input)
            .ok_or_else(|| TuningError::UnknownCondition(input.to_owned()))
    }
}
