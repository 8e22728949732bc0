//! Deterministic baseline parameter sets per weather condition.
//!
//! This is the ground truth the diff engine compares edits against: for a
//! given condition (and optionally a wall-clock timestamp feeding the
//! celestial group) the resolver always returns the same fully-populated
//! parameter set.

use std::f64::consts::TAU;

use chrono::{DateTime, Timelike, Utc};

use crate::core::checkpoint::normalize_time_of_day;
use crate::core::condition::WeatherCondition;
use crate::core::params::{
    CelestialParams, CloudParams, LayerToggles, LightningParams, RainParams, SnowParams,
    WeatherParams,
};

/// Time of day assumed when no timestamp is supplied.
pub const DEFAULT_TIME_OF_DAY: f64 = 0.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Canonical no-edits parameter set for `condition` at noon.
#[must_use]
pub fn base_params(condition: WeatherCondition) -> WeatherParams {
    base_params_at(condition, DEFAULT_TIME_OF_DAY)
}

/// Canonical no-edits parameter set for `condition` at a normalized time
/// of day.
///
/// Only the celestial group depends on the time; every other group is a
/// pure function of the condition tag.
#[must_use]
pub fn base_params_at(condition: WeatherCondition, time_of_day: f64) -> WeatherParams {
    let time_of_day = normalize_time_of_day(time_of_day);
    WeatherParams {
        layers: layer_toggles(condition),
        celestial: celestial_params(condition, time_of_day),
        cloud: cloud_params(condition),
        rain: rain_params(condition),
        lightning: lightning_params(condition),
        snow: snow_params(condition),
    }
}

/// Normalized time of day derived from a UTC wall clock.
#[must_use]
pub fn time_of_day_from_timestamp(timestamp: DateTime<Utc>) -> f64 {
    normalize_time_of_day(f64::from(timestamp.num_seconds_from_midnight()) / SECONDS_PER_DAY)
}

/// Canonical no-edits parameter set for `condition` at a wall-clock
/// timestamp.
#[must_use]
pub fn base_params_for_timestamp(condition: WeatherCondition, timestamp: DateTime<Utc>) -> WeatherParams {
    base_params_at(condition, time_of_day_from_timestamp(timestamp))
}

fn layer_toggles(condition: WeatherCondition) -> LayerToggles {
    LayerToggles {
        clouds: condition.has_clouds(),
        rain: condition.has_rain(),
        lightning: condition.has_lightning(),
        snow: condition.has_snow(),
        celestial: true,
    }
}

/// Raised-cosine day curve: 0 at midnight, 1 at noon.
fn daylight_factor(time_of_day: f64) -> f64 {
    0.5 - 0.5 * (time_of_day * TAU).cos()
}

/// Twilight curve peaking at dawn and dusk, 0 at noon and midnight.
fn twilight_factor(time_of_day: f64) -> f64 {
    0.5 - 0.5 * (time_of_day * 2.0 * TAU).cos()
}

/// Fraction of sky light blocked by the condition, 0 clear to ~1 socked in.
fn sky_occlusion(condition: WeatherCondition) -> f64 {
    match condition {
        WeatherCondition::Clear => 0.0,
        WeatherCondition::PartlyCloudy => 0.35,
        WeatherCondition::Overcast => 0.85,
        WeatherCondition::Fog => 0.9,
        WeatherCondition::Drizzle => 0.7,
        WeatherCondition::Rain => 0.8,
        WeatherCondition::HeavyRain => 0.9,
        WeatherCondition::Thunderstorm => 0.95,
        WeatherCondition::Snow => 0.75,
        WeatherCondition::HeavySnow => 0.9,
        WeatherCondition::Sleet => 0.85,
        WeatherCondition::Hail => 0.9,
        WeatherCondition::Windy => 0.25,
    }
}

fn celestial_params(condition: WeatherCondition, time_of_day: f64) -> CelestialParams {
    let daylight = daylight_factor(time_of_day);
    let occlusion = sky_occlusion(condition);
    CelestialParams {
        time_of_day,
        sun_intensity: daylight * (1.0 - 0.85 * occlusion),
        moon_intensity: (1.0 - daylight) * (1.0 - 0.9 * occlusion),
        star_density: (1.0 - daylight) * (1.0 - occlusion),
        horizon_glow: twilight_factor(time_of_day) * (1.0 - 0.6 * occlusion),
    }
}

fn cloud_params(condition: WeatherCondition) -> CloudParams {
    match condition {
        WeatherCondition::Clear => CloudParams {
            coverage: 0.0,
            density: 0.5,
            darkness: 0.1,
            drift_speed: 0.2,
        },
        WeatherCondition::PartlyCloudy => CloudParams {
            coverage: 0.4,
            density: 0.45,
            darkness: 0.15,
            drift_speed: 0.25,
        },
        WeatherCondition::Overcast => CloudParams {
            coverage: 0.95,
            density: 0.8,
            darkness: 0.4,
            drift_speed: 0.15,
        },
        WeatherCondition::Fog => CloudParams {
            coverage: 1.0,
            density: 0.35,
            darkness: 0.2,
            drift_speed: 0.05,
        },
        WeatherCondition::Drizzle => CloudParams {
            coverage: 0.85,
            density: 0.6,
            darkness: 0.35,
            drift_speed: 0.2,
        },
        WeatherCondition::Rain => CloudParams {
            coverage: 0.9,
            density: 0.75,
            darkness: 0.5,
            drift_speed: 0.3,
        },
        WeatherCondition::HeavyRain => CloudParams {
            coverage: 1.0,
            density: 0.9,
            darkness: 0.65,
            drift_speed: 0.4,
        },
        WeatherCondition::Thunderstorm => CloudParams {
            coverage: 1.0,
            density: 0.95,
            darkness: 0.8,
            drift_speed: 0.45,
        },
        WeatherCondition::Snow => CloudParams {
            coverage: 0.9,
            density: 0.7,
            darkness: 0.3,
            drift_speed: 0.15,
        },
        WeatherCondition::HeavySnow => CloudParams {
            coverage: 1.0,
            density: 0.85,
            darkness: 0.45,
            drift_speed: 0.25,
        },
        WeatherCondition::Sleet => CloudParams {
            coverage: 0.95,
            density: 0.8,
            darkness: 0.5,
            drift_speed: 0.3,
        },
        WeatherCondition::Hail => CloudParams {
            coverage: 1.0,
            density: 0.9,
            darkness: 0.7,
            drift_speed: 0.4,
        },
        WeatherCondition::Windy => CloudParams {
            coverage: 0.3,
            density: 0.4,
            darkness: 0.15,
            drift_speed: 0.9,
        },
    }
}

fn rain_params(condition: WeatherCondition) -> RainParams {
    match condition {
        WeatherCondition::Drizzle => RainParams {
            intensity: 0.25,
            fall_speed: 0.5,
            wind_shear: 0.05,
            splash_enabled: false,
        },
        WeatherCondition::Rain => RainParams {
            intensity: 0.6,
            fall_speed: 0.7,
            wind_shear: 0.1,
            splash_enabled: true,
        },
        WeatherCondition::HeavyRain => RainParams {
            intensity: 0.9,
            fall_speed: 0.85,
            wind_shear: 0.2,
            splash_enabled: true,
        },
        WeatherCondition::Thunderstorm => RainParams {
            intensity: 1.0,
            fall_speed: 0.9,
            wind_shear: 0.35,
            splash_enabled: true,
        },
        WeatherCondition::Sleet => RainParams {
            intensity: 0.5,
            fall_speed: 0.6,
            wind_shear: 0.15,
            splash_enabled: false,
        },
        WeatherCondition::Hail => RainParams {
            intensity: 0.7,
            fall_speed: 0.95,
            wind_shear: 0.25,
            splash_enabled: true,
        },
        _ => RainParams::default(),
    }
}

fn lightning_params(condition: WeatherCondition) -> LightningParams {
    if condition.has_lightning() {
        LightningParams {
            strike_frequency: 0.4,
            branch_density: 0.6,
            flash_brightness: 0.9,
            auto_strikes: true,
        }
    } else {
        LightningParams::default()
    }
}

fn snow_params(condition: WeatherCondition) -> SnowParams {
    match condition {
        WeatherCondition::Snow => SnowParams {
            intensity: 0.5,
            fall_speed: 0.3,
            drift_amplitude: 0.4,
            flake_size: 0.5,
        },
        WeatherCondition::HeavySnow => SnowParams {
            intensity: 0.9,
            fall_speed: 0.45,
            drift_amplitude: 0.55,
            flake_size: 0.65,
        },
        WeatherCondition::Sleet => SnowParams {
            intensity: 0.35,
            fall_speed: 0.6,
            drift_amplitude: 0.2,
            flake_size: 0.3,
        },
        _ => SnowParams::default(),
    }
}
