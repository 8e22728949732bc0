//! Per-field interpolation over sparse parameter overrides.
//!
//! The interpolator blends two optional patches between two checkpoints.
//! A side that does not override a field falls back to that side's base
//! value, so a dawn-only edit still blends smoothly toward the unedited
//! baseline at noon. Numeric fields interpolate linearly; booleans step
//! discretely at `t = 0.5`, resolving to the "after" side from exactly
//! 0.5 onward.

use crate::core::params::{
    CelestialParams, CloudParams, LayerToggles, LightningParams, RainParams, SnowParams,
    WeatherParams,
};
use crate::core::patch::{
    CelestialPatch, CloudPatch, LayerPatch, LightningPatch, RainPatch, SnowPatch, WeatherPatch,
};

/// Linear blend of one numeric field.
///
/// Skips the field when neither override defines it. When only one
/// endpoint resolves after base substitution, that value passes through
/// unchanged.
fn lerp_field(
    a: Option<f64>,
    b: Option<f64>,
    base_a: Option<f64>,
    base_b: Option<f64>,
    t: f64,
) -> Option<f64> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let start = a.or(base_a);
    let end = b.or(base_b);
    match (start, end) {
        (Some(start), Some(end)) => Some(start + (end - start) * t),
        (only, none) => only.or(none),
    }
}

/// Discrete step of one non-numeric field: before-value while `t < 0.5`,
/// after-value from 0.5 onward.
fn step_field<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    base_a: Option<T>,
    base_b: Option<T>,
    t: f64,
) -> Option<T> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let start = a.or(base_a);
    let end = b.or(base_b);
    match (start, end) {
        (Some(start), Some(end)) => Some(if t < 0.5 { start } else { end }),
        (only, none) => only.or(none),
    }
}

impl LayerPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<LayerToggles>,
        base_b: Option<LayerToggles>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            clouds: step_field(
                a.and_then(|p| p.clouds),
                b.and_then(|p| p.clouds),
                base_a.map(|g| g.clouds),
                base_b.map(|g| g.clouds),
                t,
            ),
            rain: step_field(
                a.and_then(|p| p.rain),
                b.and_then(|p| p.rain),
                base_a.map(|g| g.rain),
                base_b.map(|g| g.rain),
                t,
            ),
            lightning: step_field(
                a.and_then(|p| p.lightning),
                b.and_then(|p| p.lightning),
                base_a.map(|g| g.lightning),
                base_b.map(|g| g.lightning),
                t,
            ),
            snow: step_field(
                a.and_then(|p| p.snow),
                b.and_then(|p| p.snow),
                base_a.map(|g| g.snow),
                base_b.map(|g| g.snow),
                t,
            ),
            celestial: step_field(
                a.and_then(|p| p.celestial),
                b.and_then(|p| p.celestial),
                base_a.map(|g| g.celestial),
                base_b.map(|g| g.celestial),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

impl CelestialPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<CelestialParams>,
        base_b: Option<CelestialParams>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            time_of_day: lerp_field(
                a.and_then(|p| p.time_of_day),
                b.and_then(|p| p.time_of_day),
                base_a.map(|g| g.time_of_day),
                base_b.map(|g| g.time_of_day),
                t,
            ),
            sun_intensity: lerp_field(
                a.and_then(|p| p.sun_intensity),
                b.and_then(|p| p.sun_intensity),
                base_a.map(|g| g.sun_intensity),
                base_b.map(|g| g.sun_intensity),
                t,
            ),
            moon_intensity: lerp_field(
                a.and_then(|p| p.moon_intensity),
                b.and_then(|p| p.moon_intensity),
                base_a.map(|g| g.moon_intensity),
                base_b.map(|g| g.moon_intensity),
                t,
            ),
            star_density: lerp_field(
                a.and_then(|p| p.star_density),
                b.and_then(|p| p.star_density),
                base_a.map(|g| g.star_density),
                base_b.map(|g| g.star_density),
                t,
            ),
            horizon_glow: lerp_field(
                a.and_then(|p| p.horizon_glow),
                b.and_then(|p| p.horizon_glow),
                base_a.map(|g| g.horizon_glow),
                base_b.map(|g| g.horizon_glow),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

impl CloudPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<CloudParams>,
        base_b: Option<CloudParams>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            coverage: lerp_field(
                a.and_then(|p| p.coverage),
                b.and_then(|p| p.coverage),
                base_a.map(|g| g.coverage),
                base_b.map(|g| g.coverage),
                t,
            ),
            density: lerp_field(
                a.and_then(|p| p.density),
                b.and_then(|p| p.density),
                base_a.map(|g| g.density),
                base_b.map(|g| g.density),
                t,
            ),
            darkness: lerp_field(
                a.and_then(|p| p.darkness),
                b.and_then(|p| p.darkness),
                base_a.map(|g| g.darkness),
                base_b.map(|g| g.darkness),
                t,
            ),
            drift_speed: lerp_field(
                a.and_then(|p| p.drift_speed),
                b.and_then(|p| p.drift_speed),
                base_a.map(|g| g.drift_speed),
                base_b.map(|g| g.drift_speed),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

impl RainPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<RainParams>,
        base_b: Option<RainParams>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            intensity: lerp_field(
                a.and_then(|p| p.intensity),
                b.and_then(|p| p.intensity),
                base_a.map(|g| g.intensity),
                base_b.map(|g| g.intensity),
                t,
            ),
            fall_speed: lerp_field(
                a.and_then(|p| p.fall_speed),
                b.and_then(|p| p.fall_speed),
                base_a.map(|g| g.fall_speed),
                base_b.map(|g| g.fall_speed),
                t,
            ),
            wind_shear: lerp_field(
                a.and_then(|p| p.wind_shear),
                b.and_then(|p| p.wind_shear),
                base_a.map(|g| g.wind_shear),
                base_b.map(|g| g.wind_shear),
                t,
            ),
            splash_enabled: step_field(
                a.and_then(|p| p.splash_enabled),
                b.and_then(|p| p.splash_enabled),
                base_a.map(|g| g.splash_enabled),
                base_b.map(|g| g.splash_enabled),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

impl LightningPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<LightningParams>,
        base_b: Option<LightningParams>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            strike_frequency: lerp_field(
                a.and_then(|p| p.strike_frequency),
                b.and_then(|p| p.strike_frequency),
                base_a.map(|g| g.strike_frequency),
                base_b.map(|g| g.strike_frequency),
                t,
            ),
            branch_density: lerp_field(
                a.and_then(|p| p.branch_density),
                b.and_then(|p| p.branch_density),
                base_a.map(|g| g.branch_density),
                base_b.map(|g| g.branch_density),
                t,
            ),
            flash_brightness: lerp_field(
                a.and_then(|p| p.flash_brightness),
                b.and_then(|p| p.flash_brightness),
                base_a.map(|g| g.flash_brightness),
                base_b.map(|g| g.flash_brightness),
                t,
            ),
            auto_strikes: step_field(
                a.and_then(|p| p.auto_strikes),
                b.and_then(|p| p.auto_strikes),
                base_a.map(|g| g.auto_strikes),
                base_b.map(|g| g.auto_strikes),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

impl SnowPatch {
    fn interpolate(
        a: Option<Self>,
        b: Option<Self>,
        base_a: Option<SnowParams>,
        base_b: Option<SnowParams>,
        t: f64,
    ) -> Option<Self> {
        let out = Self {
            intensity: lerp_field(
                a.and_then(|p| p.intensity),
                b.and_then(|p| p.intensity),
                base_a.map(|g| g.intensity),
                base_b.map(|g| g.intensity),
                t,
            ),
            fall_speed: lerp_field(
                a.and_then(|p| p.fall_speed),
                b.and_then(|p| p.fall_speed),
                base_a.map(|g| g.fall_speed),
                base_b.map(|g| g.fall_speed),
                t,
            ),
            drift_amplitude: lerp_field(
                a.and_then(|p| p.drift_amplitude),
                b.and_then(|p| p.drift_amplitude),
                base_a.map(|g| g.drift_amplitude),
                base_b.map(|g| g.drift_amplitude),
                t,
            ),
            flake_size: lerp_field(
                a.and_then(|p| p.flake_size),
                b.and_then(|p| p.flake_size),
                base_a.map(|g| g.flake_size),
                base_b.map(|g| g.flake_size),
                t,
            ),
        };
        (!out.is_empty()).then_some(out)
    }
}

/// Interpolates two checkpoint overrides group by group.
///
/// `base_a`/`base_b` supply fallback endpoints for fields only one side
/// overrides. Returns `None` (not an empty patch) when no group survives,
/// so callers can tell "no override at all" from "override present but
/// empty".
#[must_use]
pub fn interpolate_patches(
    a: Option<&WeatherPatch>,
    b: Option<&WeatherPatch>,
    base_a: Option<&WeatherParams>,
    base_b: Option<&WeatherParams>,
    t: f64,
) -> Option<WeatherPatch> {
    let out = WeatherPatch {
        layers: LayerPatch::interpolate(
            a.and_then(|p| p.layers),
            b.and_then(|p| p.layers),
            base_a.map(|p| p.layers),
            base_b.map(|p| p.layers),
            t,
        ),
        celestial: CelestialPatch::interpolate(
            a.and_then(|p| p.celestial),
            b.and_then(|p| p.celestial),
            base_a.map(|p| p.celestial),
            base_b.map(|p| p.celestial),
            t,
        ),
        cloud: CloudPatch::interpolate(
            a.and_then(|p| p.cloud),
            b.and_then(|p| p.cloud),
            base_a.map(|p| p.cloud),
            base_b.map(|p| p.cloud),
            t,
        ),
        rain: RainPatch::interpolate(
            a.and_then(|p| p.rain),
            b.and_then(|p| p.rain),
            base_a.map(|p| p.rain),
            base_b.map(|p| p.rain),
            t,
        ),
        lightning: LightningPatch::interpolate(
            a.and_then(|p| p.lightning),
            b.and_then(|p| p.lightning),
            base_a.map(|p| p.lightning),
            base_b.map(|p| p.lightning),
            t,
        ),
        snow: SnowPatch::interpolate(
            a.and_then(|p| p.snow),
            b.and_then(|p| p.snow),
            base_a.map(|p| p.snow),
            base_b.map(|p| p.snow),
            t,
        ),
    };
    (!out.is_empty()).then_some(out)
}
