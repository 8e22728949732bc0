//! Sparse diff and overlay merge between full parameter sets and patches.
//!
//! `diff` captures a user edit as the minimal set of fields that differ
//! from baseline; `merge` is its inverse. The diff compares with exact
//! value inequality: any UI-visible change becomes an override, and no
//! epsilon is applied here. `merge(base, diff(current, base))` equals
//! `current` on every field not excluded from the diff.

use crate::core::field::{CelestialField, CloudField, LayerField, LightningField, ParamField, RainField, SnowField};
use crate::core::params::{
    CelestialParams, CloudParams, LayerToggles, LightningParams, RainParams, SnowParams,
    WeatherParams,
};
use crate::core::patch::{
    CelestialPatch, CloudPatch, LayerPatch, LightningPatch, RainPatch, SnowPatch, WeatherPatch,
};

fn diff_bool(current: bool, base: bool, keep: bool) -> Option<bool> {
    (keep && current != base).then_some(current)
}

#[allow(clippy::float_cmp)] // exact inequality is the diff contract
fn diff_number(current: f64, base: f64, keep: bool) -> Option<f64> {
    (keep && current != base).then_some(current)
}

impl LayerPatch {
    pub(crate) fn diff(current: LayerToggles, base: LayerToggles, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: LayerField| !exclude.contains(&ParamField::Layers(f));
        let patch = Self {
            clouds: diff_bool(current.clouds, base.clouds, keep(LayerField::Clouds)),
            rain: diff_bool(current.rain, base.rain, keep(LayerField::Rain)),
            lightning: diff_bool(current.lightning, base.lightning, keep(LayerField::Lightning)),
            snow: diff_bool(current.snow, base.snow, keep(LayerField::Snow)),
            celestial: diff_bool(current.celestial, base.celestial, keep(LayerField::Celestial)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: LayerToggles) -> LayerToggles {
        if let Some(v) = self.clouds {
            base.clouds = v;
        }
        if let Some(v) = self.rain {
            base.rain = v;
        }
        if let Some(v) = self.lightning {
            base.lightning = v;
        }
        if let Some(v) = self.snow {
            base.snow = v;
        }
        if let Some(v) = self.celestial {
            base.celestial = v;
        }
        base
    }
}

impl CelestialPatch {
    pub(crate) fn diff(current: CelestialParams, base: CelestialParams, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: CelestialField| !exclude.contains(&ParamField::Celestial(f));
        let patch = Self {
            time_of_day: diff_number(current.time_of_day, base.time_of_day, keep(CelestialField::TimeOfDay)),
            sun_intensity: diff_number(current.sun_intensity, base.sun_intensity, keep(CelestialField::SunIntensity)),
            moon_intensity: diff_number(current.moon_intensity, base.moon_intensity, keep(CelestialField::MoonIntensity)),
            star_density: diff_number(current.star_density, base.star_density, keep(CelestialField::StarDensity)),
            horizon_glow: diff_number(current.horizon_glow, base.horizon_glow, keep(CelestialField::HorizonGlow)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: CelestialParams) -> CelestialParams {
        if let Some(v) = self.time_of_day {
            base.time_of_day = v;
        }
        if let Some(v) = self.sun_intensity {
            base.sun_intensity = v;
        }
        if let Some(v) = self.moon_intensity {
            base.moon_intensity = v;
        }
        if let Some(v) = self.star_density {
            base.star_density = v;
        }
        if let Some(v) = self.horizon_glow {
            base.horizon_glow = v;
        }
        base
    }
}

impl CloudPatch {
    pub(crate) fn diff(current: CloudParams, base: CloudParams, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: CloudField| !exclude.contains(&ParamField::Cloud(f));
        let patch = Self {
            coverage: diff_number(current.coverage, base.coverage, keep(CloudField::Coverage)),
            density: diff_number(current.density, base.density, keep(CloudField::Density)),
            darkness: diff_number(current.darkness, base.darkness, keep(CloudField::Darkness)),
            drift_speed: diff_number(current.drift_speed, base.drift_speed, keep(CloudField::DriftSpeed)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: CloudParams) -> CloudParams {
        if let Some(v) = self.coverage {
            base.coverage = v;
        }
        if let Some(v) = self.density {
            base.density = v;
        }
        if let Some(v) = self.darkness {
            base.darkness = v;
        }
        if let Some(v) = self.drift_speed {
            base.drift_speed = v;
        }
        base
    }
}

impl RainPatch {
    pub(crate) fn diff(current: RainParams, base: RainParams, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: RainField| !exclude.contains(&ParamField::Rain(f));
        let patch = Self {
            intensity: diff_number(current.intensity, base.intensity, keep(RainField::Intensity)),
            fall_speed: diff_number(current.fall_speed, base.fall_speed, keep(RainField::FallSpeed)),
            wind_shear: diff_number(current.wind_shear, base.wind_shear, keep(RainField::WindShear)),
            splash_enabled: diff_bool(current.splash_enabled, base.splash_enabled, keep(RainField::SplashEnabled)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: RainParams) -> RainParams {
        if let Some(v) = self.intensity {
            base.intensity = v;
        }
        if let Some(v) = self.fall_speed {
            base.fall_speed = v;
        }
        if let Some(v) = self.wind_shear {
            base.wind_shear = v;
        }
        if let Some(v) = self.splash_enabled {
            base.splash_enabled = v;
        }
        base
    }
}

impl LightningPatch {
    pub(crate) fn diff(current: LightningParams, base: LightningParams, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: LightningField| !exclude.contains(&ParamField::Lightning(f));
        let patch = Self {
            strike_frequency: diff_number(current.strike_frequency, base.strike_frequency, keep(LightningField::StrikeFrequency)),
            branch_density: diff_number(current.branch_density, base.branch_density, keep(LightningField::BranchDensity)),
            flash_brightness: diff_number(current.flash_brightness, base.flash_brightness, keep(LightningField::FlashBrightness)),
            auto_strikes: diff_bool(current.auto_strikes, base.auto_strikes, keep(LightningField::AutoStrikes)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: LightningParams) -> LightningParams {
        if let Some(v) = self.strike_frequency {
            base.strike_frequency = v;
        }
        if let Some(v) = self.branch_density {
            base.branch_density = v;
        }
        if let Some(v) = self.flash_brightness {
            base.flash_brightness = v;
        }
        if let Some(v) = self.auto_strikes {
            base.auto_strikes = v;
        }
        base
    }
}

impl SnowPatch {
    pub(crate) fn diff(current: SnowParams, base: SnowParams, exclude: &[ParamField]) -> Option<Self> {
        let keep = |f: SnowField| !exclude.contains(&ParamField::Snow(f));
        let patch = Self {
            intensity: diff_number(current.intensity, base.intensity, keep(SnowField::Intensity)),
            fall_speed: diff_number(current.fall_speed, base.fall_speed, keep(SnowField::FallSpeed)),
            drift_amplitude: diff_number(current.drift_amplitude, base.drift_amplitude, keep(SnowField::DriftAmplitude)),
            flake_size: diff_number(current.flake_size, base.flake_size, keep(SnowField::FlakeSize)),
        };
        (!patch.is_empty()).then_some(patch)
    }

    #[must_use]
    pub(crate) fn apply(self, mut base: SnowParams) -> SnowParams {
        if let Some(v) = self.intensity {
            base.intensity = v;
        }
        if let Some(v) = self.fall_speed {
            base.fall_speed = v;
        }
        if let Some(v) = self.drift_amplitude {
            base.drift_amplitude = v;
        }
        if let Some(v) = self.flake_size {
            base.flake_size = v;
        }
        base
    }
}

/// Minimal sparse diff of `current` against `base`.
///
/// Fields listed in `exclude` are skipped regardless of difference; a
/// group with no differing field is omitted from the result entirely. The
/// result may be empty (`WeatherPatch::is_empty`) when the two sets agree
/// everywhere.
#[must_use]
pub fn diff_params(current: WeatherParams, base: WeatherParams, exclude: &[ParamField]) -> WeatherPatch {
    WeatherPatch {
        layers: LayerPatch::diff(current.layers, base.layers, exclude),
        celestial: CelestialPatch::diff(current.celestial, base.celestial, exclude),
        cloud: CloudPatch::diff(current.cloud, base.cloud, exclude),
        rain: RainPatch::diff(current.rain, base.rain, exclude),
        lightning: LightningPatch::diff(current.lightning, base.lightning, exclude),
        snow: SnowPatch::diff(current.snow, base.snow, exclude),
    }
}

/// Shallow overlay of a patch's groups and fields onto `base`.
///
/// Returns `base` unchanged when `patch` is `None`.
#[must_use]
pub fn merge_params(base: WeatherParams, patch: Option<&WeatherPatch>) -> WeatherParams {
    let Some(patch) = patch else {
        return base;
    };
    WeatherParams {
        layers: patch.layers.map_or(base.layers, |p| p.apply(base.layers)),
        celestial: patch.celestial.map_or(base.celestial, |p| p.apply(base.celestial)),
        cloud: patch.cloud.map_or(base.cloud, |p| p.apply(base.cloud)),
        rain: patch.rain.map_or(base.rain, |p| p.apply(base.rain)),
        lightning: patch.lightning.map_or(base.lightning, |p| p.apply(base.lightning)),
        snow: patch.snow.map_or(base.snow, |p| p.apply(base.snow)),
    }
}
