use serde::{Deserialize, Serialize};

/// Per-layer enable flags for the composited weather scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerToggles {
    pub clouds: bool,
    pub rain: bool,
    pub lightning: bool,
    pub snow: bool,
    pub celestial: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            clouds: false,
            rain: false,
            lightning: false,
            snow: false,
            celestial: true,
        }
    }
}

/// Sun, moon, and star lighting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialParams {
    /// Normalized time of day in `[0, 1)`; 0.0 is midnight, 0.5 is noon.
    pub time_of_day: f64,
    /// Sun light contribution in `[0, 1]`.
    pub sun_intensity: f64,
    /// Moon light contribution in `[0, 1]`.
    pub moon_intensity: f64,
    /// Visible star field density in `[0, 1]`.
    pub star_density: f64,
    /// Dawn/dusk horizon tint strength in `[0, 1]`.
    pub horizon_glow: f64,
}

impl Default for CelestialParams {
    fn default() -> Self {
        Self {
            time_of_day: 0.5,
            sun_intensity: 1.0,
            moon_intensity: 0.0,
            star_density: 0.0,
            horizon_glow: 0.0,
        }
    }
}

/// Cloud layer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudParams {
    /// Sky fraction covered by clouds, in `[0, 1]`.
    pub coverage: f64,
    /// Optical density of individual clouds, in `[0, 1]`.
    pub density: f64,
    /// Underside shading, in `[0, 1]`.
    pub darkness: f64,
    /// Horizontal drift speed, in `[0, 1]` of the layer's max scroll rate.
    pub drift_speed: f64,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            coverage: 0.0,
            density: 0.5,
            darkness: 0.1,
            drift_speed: 0.2,
        }
    }
}

/// Rain layer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainParams {
    /// Drop spawn rate, in `[0, 1]`.
    pub intensity: f64,
    /// Drop fall speed, in `[0, 1]` of the layer's max.
    pub fall_speed: f64,
    /// Horizontal wind skew, in `[-1, 1]`; negative blows left.
    pub wind_shear: f64,
    /// Enables ground splash particles.
    pub splash_enabled: bool,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            fall_speed: 0.7,
            wind_shear: 0.0,
            splash_enabled: false,
        }
    }
}

/// Lightning layer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightningParams {
    /// Average strikes per second, in `[0, 1]` of the layer's max cadence.
    pub strike_frequency: f64,
    /// Bolt branching amount, in `[0, 1]`.
    pub branch_density: f64,
    /// Screen flash strength, in `[0, 1]`.
    pub flash_brightness: f64,
    /// Enables autonomous strike scheduling; off means strikes are manual.
    pub auto_strikes: bool,
}

impl Default for LightningParams {
    fn default() -> Self {
        Self {
            strike_frequency: 0.0,
            branch_density: 0.5,
            flash_brightness: 0.8,
            auto_strikes: false,
        }
    }
}

/// Snow layer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnowParams {
    /// Flake spawn rate, in `[0, 1]`.
    pub intensity: f64,
    /// Flake fall speed, in `[0, 1]` of the layer's max.
    pub fall_speed: f64,
    /// Side-to-side drift amplitude, in `[0, 1]`.
    pub drift_amplitude: f64,
    /// Flake size scale, in `[0, 1]`.
    pub flake_size: f64,
}

impl Default for SnowParams {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            fall_speed: 0.3,
            drift_amplitude: 0.4,
            flake_size: 0.5,
        }
    }
}

/// Fully-populated parameter set consumed by renderers.
///
/// Every group and field is always present; sparse edits live in
/// [`crate::core::WeatherPatch`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherParams {
    pub layers: LayerToggles,
    pub celestial: CelestialParams,
    pub cloud: CloudParams,
    pub rain: RainParams,
    pub lightning: LightningParams,
    pub snow: SnowParams,
}
