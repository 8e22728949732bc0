pub mod checkpoint;
pub mod condition;
pub mod diff;
pub mod field;
pub mod interpolate;
pub mod params;
pub mod patch;
pub mod presets;

pub use checkpoint::{Checkpoint, CheckpointSpan, locate, normalize_time_of_day};
pub use condition::WeatherCondition;
pub use diff::{diff_params, merge_params};
pub use field::{
    CelestialField, CloudField, FieldKind, LayerField, LightningField, ParamField, ParamValue,
    RainField, SnowField,
};
pub use interpolate::interpolate_patches;
pub use params::{
    CelestialParams, CloudParams, LayerToggles, LightningParams, RainParams, SnowParams,
    WeatherParams,
};
pub use patch::{
    CelestialPatch, CloudPatch, LayerPatch, LightningPatch, RainPatch, SnowPatch, WeatherPatch,
};
pub use presets::{
    base_params, base_params_at, base_params_for_timestamp, time_of_day_from_timestamp,
};
