use chrono::{TimeZone, Utc};
use skytune::core::{
    WeatherCondition, base_params, base_params_at, base_params_for_timestamp,
    time_of_day_from_timestamp,
};

#[test]
fn thunderstorm_implies_lightning_layer_on() {
    let params = base_params(WeatherCondition::Thunderstorm);
    assert!(params.layers.lightning);
    assert!(params.layers.rain);
    assert!(params.layers.clouds);
    assert!(params.lightning.auto_strikes);
    assert!(params.lightning.strike_frequency > 0.0);
}

#[test]
fn clear_sky_disables_every_precipitation_layer() {
    let params = base_params(WeatherCondition::Clear);
    assert!(!params.layers.clouds);
    assert!(!params.layers.rain);
    assert!(!params.layers.snow);
    assert!(!params.layers.lightning);
    assert!(params.layers.celestial);
    assert_eq!(params.rain.intensity, 0.0);
    assert_eq!(params.snow.intensity, 0.0);
}

#[test]
fn sleet_enables_both_rain_and_snow() {
    let params = base_params(WeatherCondition::Sleet);
    assert!(params.layers.rain);
    assert!(params.layers.snow);
    assert!(params.rain.intensity > 0.0);
    assert!(params.snow.intensity > 0.0);
}

#[test]
fn resolver_is_deterministic() {
    for condition in WeatherCondition::ALL {
        assert_eq!(base_params(condition), base_params(condition));
        assert_eq!(base_params_at(condition, 0.3), base_params_at(condition, 0.3));
    }
}

#[test]
fn time_of_day_only_moves_the_celestial_group() {
    let noon = base_params_at(WeatherCondition::Rain, 0.5);
    let midnight = base_params_at(WeatherCondition::Rain, 0.0);

    assert_ne!(noon.celestial, midnight.celestial);
    assert_eq!(noon.layers, midnight.layers);
    assert_eq!(noon.cloud, midnight.cloud);
    assert_eq!(noon.rain, midnight.rain);
    assert_eq!(noon.lightning, midnight.lightning);
    assert_eq!(noon.snow, midnight.snow);
}

#[test]
fn daylight_peaks_at_noon_and_stars_at_clear_midnight() {
    let noon = base_params_at(WeatherCondition::Clear, 0.5);
    let midnight = base_params_at(WeatherCondition::Clear, 0.0);

    assert!(noon.celestial.sun_intensity > midnight.celestial.sun_intensity);
    assert!(midnight.celestial.moon_intensity > noon.celestial.moon_intensity);
    assert!(midnight.celestial.star_density > 0.9);
    assert_eq!(noon.celestial.star_density, 0.0);
}

#[test]
fn overcast_dims_the_sun() {
    let clear = base_params_at(WeatherCondition::Clear, 0.5);
    let overcast = base_params_at(WeatherCondition::Overcast, 0.5);
    assert!(overcast.celestial.sun_intensity < clear.celestial.sun_intensity);
}

#[test]
fn timestamp_entry_point_derives_time_of_day() {
    let six_am = Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).single().expect("valid timestamp");
    assert!((time_of_day_from_timestamp(six_am) - 0.25).abs() <= 1e-9);

    let via_timestamp = base_params_for_timestamp(WeatherCondition::Clear, six_am);
    let via_scalar = base_params_at(WeatherCondition::Clear, 0.25);
    assert_eq!(via_timestamp, via_scalar);
}
