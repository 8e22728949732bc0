//! Sparse override counterparts of the full parameter groups.
//!
//! A patch carries only the fields a user changed relative to a computed
//! baseline. Callers may hand the engine patches containing redundant
//! fields (values equal to base); every consumer tolerates that.

use serde::{Deserialize, Serialize};

/// Sparse override for [`crate::core::LayerToggles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LayerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clouds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celestial: Option<bool>,
}

impl LayerPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.clouds.is_none()
            && self.rain.is_none()
            && self.lightning.is_none()
            && self.snow.is_none()
            && self.celestial.is_none()
    }
}

/// Sparse override for [`crate::core::CelestialParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CelestialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_glow: Option<f64>,
}

impl CelestialPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.time_of_day.is_none()
            && self.sun_intensity.is_none()
            && self.moon_intensity.is_none()
            && self.star_density.is_none()
            && self.horizon_glow.is_none()
    }
}

/// Sparse override for [`crate::core::CloudParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CloudPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_speed: Option<f64>,
}

impl CloudPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.coverage.is_none()
            && self.density.is_none()
            && self.darkness.is_none()
            && self.drift_speed.is_none()
    }
}

/// Sparse override for [`crate::core::RainParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RainPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_shear: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_enabled: Option<bool>,
}

impl RainPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.intensity.is_none()
            && self.fall_speed.is_none()
            && self.wind_shear.is_none()
            && self.splash_enabled.is_none()
    }
}

/// Sparse override for [`crate::core::LightningParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LightningPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_strikes: Option<bool>,
}

impl LightningPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.strike_frequency.is_none()
            && self.branch_density.is_none()
            && self.flash_brightness.is_none()
            && self.auto_strikes.is_none()
    }
}

/// Sparse override for [`crate::core::SnowParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SnowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_amplitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flake_size: Option<f64>,
}

impl SnowPatch {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.intensity.is_none()
            && self.fall_speed.is_none()
            && self.drift_amplitude.is_none()
            && self.flake_size.is_none()
    }
}

/// Sparse override over a whole [`crate::core::WeatherParams`].
///
/// A group that interpolated or diffed to nothing is `None`, so consumers
/// can distinguish "no override" from "override present but empty".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<LayerPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celestial: Option<CelestialPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<RainPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning: Option<LightningPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<SnowPatch>,
}

impl WeatherPatch {
    /// True when no field is overridden; groups present but empty count as
    /// empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.layers.is_none_or(LayerPatch::is_empty)
            && self.celestial.is_none_or(CelestialPatch::is_empty)
            && self.cloud.is_none_or(CloudPatch::is_empty)
            && self.rain.is_none_or(RainPatch::is_empty)
            && self.lightning.is_none_or(LightningPatch::is_empty)
            && self.snow.is_none_or(SnowPatch::is_empty)
    }
}
