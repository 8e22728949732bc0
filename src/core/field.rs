//! Typed addressing of single parameter fields.
//!
//! Bulk propagation and diff exclusions need to name one field of one
//! group without going through string keys; [`ParamField`] is that address
//! and [`ParamValue`] the matching value union.

use crate::core::params::WeatherParams;
use crate::core::patch::{
    CelestialPatch, CloudPatch, LayerPatch, LightningPatch, RainPatch, SnowPatch, WeatherPatch,
};
use crate::error::{TuningError, TuningResult};

/// Value kind carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Flag,
}

/// A single field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
}

impl ParamValue {
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Number(_) => FieldKind::Number,
            Self::Flag(_) => FieldKind::Flag,
        }
    }

    #[must_use]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    #[must_use]
    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(value),
            Self::Number(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerField {
    Clouds,
    Rain,
    Lightning,
    Snow,
    Celestial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialField {
    TimeOfDay,
    SunIntensity,
    MoonIntensity,
    StarDensity,
    HorizonGlow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudField {
    Coverage,
    Density,
    Darkness,
    DriftSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RainField {
    Intensity,
    FallSpeed,
    WindShear,
    SplashEnabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightningField {
    StrikeFrequency,
    BranchDensity,
    FlashBrightness,
    AutoStrikes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnowField {
    Intensity,
    FallSpeed,
    DriftAmplitude,
    FlakeSize,
}

/// Address of one field inside one parameter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    Layers(LayerField),
    Celestial(CelestialField),
    Cloud(CloudField),
    Rain(RainField),
    Lightning(LightningField),
    Snow(SnowField),
}

impl ParamField {
    /// Value kind this address expects.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Layers(_)
            | Self::Rain(RainField::SplashEnabled)
            | Self::Lightning(LightningField::AutoStrikes) => FieldKind::Flag,
            _ => FieldKind::Number,
        }
    }
}

impl WeatherParams {
    /// Typed read of one field.
    #[must_use]
    pub fn field(&self, field: ParamField) -> ParamValue {
        match field {
            ParamField::Layers(f) => ParamValue::Flag(match f {
                LayerField::Clouds => self.layers.clouds,
                LayerField::Rain => self.layers.rain,
                LayerField::Lightning => self.layers.lightning,
                LayerField::Snow => self.layers.snow,
                LayerField::Celestial => self.layers.celestial,
            }),
            ParamField::Celestial(f) => ParamValue::Number(match f {
                CelestialField::TimeOfDay => self.celestial.time_of_day,
                CelestialField::SunIntensity => self.celestial.sun_intensity,
                CelestialField::MoonIntensity => self.celestial.moon_intensity,
                CelestialField::StarDensity => self.celestial.star_density,
                CelestialField::HorizonGlow => self.celestial.horizon_glow,
            }),
            ParamField::Cloud(f) => ParamValue::Number(match f {
                CloudField::Coverage => self.cloud.coverage,
                CloudField::Density => self.cloud.density,
                CloudField::Darkness => self.cloud.darkness,
                CloudField::DriftSpeed => self.cloud.drift_speed,
            }),
            ParamField::Rain(f) => match f {
                RainField::Intensity => ParamValue::Number(self.rain.intensity),
                RainField::FallSpeed => ParamValue::Number(self.rain.fall_speed),
                RainField::WindShear => ParamValue::Number(self.rain.wind_shear),
                RainField::SplashEnabled => ParamValue::Flag(self.rain.splash_enabled),
            },
            ParamField::Lightning(f) => match f {
                LightningField::StrikeFrequency => ParamValue::Number(self.lightning.strike_frequency),
                LightningField::BranchDensity => ParamValue::Number(self.lightning.branch_density),
                LightningField::FlashBrightness => ParamValue::Number(self.lightning.flash_brightness),
                LightningField::AutoStrikes => ParamValue::Flag(self.lightning.auto_strikes),
            },
            ParamField::Snow(f) => ParamValue::Number(match f {
                SnowField::Intensity => self.snow.intensity,
                SnowField::FallSpeed => self.snow.fall_speed,
                SnowField::DriftAmplitude => self.snow.drift_amplitude,
                SnowField::FlakeSize => self.snow.flake_size,
            }),
        }
    }
}

fn number(field: ParamField, value: ParamValue) -> TuningResult<f64> {
    value
        .as_number()
        .ok_or(TuningError::FieldKind { field })
}

fn flag(field: ParamField, value: ParamValue) -> TuningResult<bool> {
    value.as_flag().ok_or(TuningError::FieldKind { field })
}

impl WeatherPatch {
    /// Typed read of one override field; `None` when the field is not
    /// overridden.
    #[must_use]
    pub fn field(&self, field: ParamField) -> Option<ParamValue> {
        match field {
            ParamField::Layers(f) => self
                .layers
                .and_then(|g| match f {
                    LayerField::Clouds => g.clouds,
                    LayerField::Rain => g.rain,
                    LayerField::Lightning => g.lightning,
                    LayerField::Snow => g.snow,
                    LayerField::Celestial => g.celestial,
                })
                .map(ParamValue::Flag),
            ParamField::Celestial(f) => self
                .celestial
                .and_then(|g| match f {
                    CelestialField::TimeOfDay => g.time_of_day,
                    CelestialField::SunIntensity => g.sun_intensity,
                    CelestialField::MoonIntensity => g.moon_intensity,
                    CelestialField::StarDensity => g.star_density,
                    CelestialField::HorizonGlow => g.horizon_glow,
                })
                .map(ParamValue::Number),
            ParamField::Cloud(f) => self
                .cloud
                .and_then(|g| match f {
                    CloudField::Coverage => g.coverage,
                    CloudField::Density => g.density,
                    CloudField::Darkness => g.darkness,
                    CloudField::DriftSpeed => g.drift_speed,
                })
                .map(ParamValue::Number),
            ParamField::Rain(f) => self.rain.and_then(|g| match f {
                RainField::Intensity => g.intensity.map(ParamValue::Number),
                RainField::FallSpeed => g.fall_speed.map(ParamValue::Number),
                RainField::WindShear => g.wind_shear.map(ParamValue::Number),
                RainField::SplashEnabled => g.splash_enabled.map(ParamValue::Flag),
            }),
            ParamField::Lightning(f) => self.lightning.and_then(|g| match f {
                LightningField::StrikeFrequency => g.strike_frequency.map(ParamValue::Number),
                LightningField::BranchDensity => g.branch_density.map(ParamValue::Number),
                LightningField::FlashBrightness => g.flash_brightness.map(ParamValue::Number),
                LightningField::AutoStrikes => g.auto_strikes.map(ParamValue::Flag),
            }),
            ParamField::Snow(f) => self
                .snow
                .and_then(|g| match f {
                    SnowField::Intensity => g.intensity,
                    SnowField::FallSpeed => g.fall_speed,
                    SnowField::DriftAmplitude => g.drift_amplitude,
                    SnowField::FlakeSize => g.flake_size,
                })
                .map(ParamValue::Number),
        }
    }

    /// Typed write of one override field, lazily creating its group.
    ///
    /// Rejects a value whose kind does not match the field; the patch is
    /// left untouched in that case.
    pub fn set_field(&mut self, field: ParamField, value: ParamValue) -> TuningResult<()> {
        match field {
            ParamField::Layers(f) => {
                let v = flag(field, value)?;
                let group = self.layers.get_or_insert_with(LayerPatch::default);
                match f {
                    LayerField::Clouds => group.clouds = Some(v),
                    LayerField::Rain => group.rain = Some(v),
                    LayerField::Lightning => group.lightning = Some(v),
                    LayerField::Snow => group.snow = Some(v),
                    LayerField::Celestial => group.celestial = Some(v),
                }
            }
            ParamField::Celestial(f) => {
                let v = number(field, value)?;
                let group = self.celestial.get_or_insert_with(CelestialPatch::default);
                match f {
                    CelestialField::TimeOfDay => group.time_of_day = Some(v),
                    CelestialField::SunIntensity => group.sun_intensity = Some(v),
                    CelestialField::MoonIntensity => group.moon_intensity = Some(v),
                    CelestialField::StarDensity => group.star_density = Some(v),
                    CelestialField::HorizonGlow => group.horizon_glow = Some(v),
                }
            }
            ParamField::Cloud(f) => {
                let v = number(field, value)?;
                let group = self.cloud.get_or_insert_with(CloudPatch::default);
                match f {
                    CloudField::Coverage => group.coverage = Some(v),
                    CloudField::Density => group.density = Some(v),
                    CloudField::Darkness => group.darkness = Some(v),
                    CloudField::DriftSpeed => group.drift_speed = Some(v),
                }
            }
            ParamField::Rain(f) => match f {
                RainField::Intensity => {
                    let v = number(field, value)?;
                    self.rain.get_or_insert_with(RainPatch::default).intensity = Some(v);
                }
                RainField::FallSpeed => {
                    let v = number(field, value)?;
                    self.rain.get_or_insert_with(RainPatch::default).fall_speed = Some(v);
                }
                RainField::WindShear => {
                    let v = number(field, value)?;
                    self.rain.get_or_insert_with(RainPatch::default).wind_shear = Some(v);
                }
                RainField::SplashEnabled => {
                    let v = flag(field, value)?;
                    self.rain.get_or_insert_with(RainPatch::default).splash_enabled = Some(v);
                }
            },
            ParamField::Lightning(f) => match f {
                LightningField::StrikeFrequency => {
                    let v = number(field, value)?;
                    self.lightning
                        .get_or_insert_with(LightningPatch::default)
                        .strike_frequency = Some(v);
                }
                LightningField::BranchDensity => {
                    let v = number(field, value)?;
                    self.lightning
                        .get_or_insert_with(LightningPatch::default)
                        .branch_density = Some(v);
                }
                LightningField::FlashBrightness => {
                    let v = number(field, value)?;
                    self.lightning
                        .get_or_insert_with(LightningPatch::default)
                        .flash_brightness = Some(v);
                }
                LightningField::AutoStrikes => {
                    let v = flag(field, value)?;
                    self.lightning
                        .get_or_insert_with(LightningPatch::default)
                        .auto_strikes = Some(v);
                }
            },
            ParamField::Snow(f) => {
                let v = number(field, value)?;
                let group = self.snow.get_or_insert_with(SnowPatch::default);
                match f {
                    SnowField::Intensity => group.intensity = Some(v),
                    SnowField::FallSpeed => group.fall_speed = Some(v),
                    SnowField::DriftAmplitude => group.drift_amplitude = Some(v),
                    SnowField::FlakeSize => group.flake_size = Some(v),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CloudField, ParamField, ParamValue, RainField};
    use crate::core::patch::WeatherPatch;

    #[test]
    fn set_field_creates_group_lazily() {
        let mut patch = WeatherPatch::default();
        patch
            .set_field(ParamField::Cloud(CloudField::Coverage), ParamValue::Number(0.9))
            .expect("kind matches");
        assert_eq!(
            patch.field(ParamField::Cloud(CloudField::Coverage)),
            Some(ParamValue::Number(0.9))
        );
        assert!(patch.celestial.is_none());
    }

    #[test]
    fn set_field_rejects_kind_mismatch_without_mutation() {
        let mut patch = WeatherPatch::default();
        let result = patch.set_field(
            ParamField::Rain(RainField::SplashEnabled),
            ParamValue::Number(1.0),
        );
        assert!(result.is_err());
        assert_eq!(patch, WeatherPatch::default());
    }
}
