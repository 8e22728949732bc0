use proptest::option;
use proptest::prelude::*;
use skytune::core::{
    CloudParams, CloudPatch, RainParams, RainPatch, WeatherParams, WeatherPatch,
    interpolate_patches, merge_params,
};

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

prop_compose! {
    fn cloud_patch()(
        coverage in option::of(unit()),
        density in option::of(unit()),
        darkness in option::of(unit()),
        drift_speed in option::of(unit()),
    ) -> CloudPatch {
        CloudPatch { coverage, density, darkness, drift_speed }
    }
}

prop_compose! {
    fn rain_patch()(
        intensity in option::of(unit()),
        fall_speed in option::of(unit()),
        wind_shear in option::of(-1.0f64..=1.0),
        splash_enabled in option::of(any::<bool>()),
    ) -> RainPatch {
        RainPatch { intensity, fall_speed, wind_shear, splash_enabled }
    }
}

prop_compose! {
    fn weather_patch()(
        cloud in option::of(cloud_patch()),
        rain in option::of(rain_patch()),
    ) -> WeatherPatch {
        WeatherPatch { cloud, rain, ..Default::default() }
    }
}

prop_compose! {
    fn base_params()(
        coverage in unit(),
        density in unit(),
        darkness in unit(),
        drift_speed in unit(),
        intensity in unit(),
        fall_speed in unit(),
        wind_shear in -1.0f64..=1.0,
        splash_enabled in any::<bool>(),
    ) -> WeatherParams {
        WeatherParams {
            cloud: CloudParams { coverage, density, darkness, drift_speed },
            rain: RainParams { intensity, fall_speed, wind_shear, splash_enabled },
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn t_zero_reduces_to_the_before_side(
        a in weather_patch(),
        b in weather_patch(),
        base_a in base_params(),
        base_b in base_params(),
    ) {
        let out = interpolate_patches(Some(&a), Some(&b), Some(&base_a), Some(&base_b), 0.0);
        // With both bases supplied, every field either resolves to the
        // before side (override or base fallback) or is absent from the
        // blend; merging onto the before base therefore reproduces
        // merge(base_a, a) exactly on the numeric groups.
        let via_blend = merge_params(base_a, out.as_ref());
        let direct = merge_params(base_a, Some(&a));
        prop_assert_eq!(via_blend.cloud, direct.cloud);
        prop_assert_eq!(via_blend.rain, direct.rain);
    }

    #[test]
    fn t_one_reduces_to_the_after_side(
        a in weather_patch(),
        b in weather_patch(),
        base_a in base_params(),
        base_b in base_params(),
    ) {
        let out = interpolate_patches(Some(&a), Some(&b), Some(&base_a), Some(&base_b), 1.0);
        let via_blend = merge_params(base_b, out.as_ref());
        let direct = merge_params(base_b, Some(&b));
        // `start + (end - start) * 1.0` lands within one ulp of `end`, so
        // numeric fields compare with a tight epsilon; flags are exact.
        prop_assert!((via_blend.cloud.coverage - direct.cloud.coverage).abs() <= 1e-12);
        prop_assert!((via_blend.cloud.density - direct.cloud.density).abs() <= 1e-12);
        prop_assert!((via_blend.cloud.darkness - direct.cloud.darkness).abs() <= 1e-12);
        prop_assert!((via_blend.cloud.drift_speed - direct.cloud.drift_speed).abs() <= 1e-12);
        prop_assert!((via_blend.rain.intensity - direct.rain.intensity).abs() <= 1e-12);
        prop_assert!((via_blend.rain.fall_speed - direct.rain.fall_speed).abs() <= 1e-12);
        prop_assert!((via_blend.rain.wind_shear - direct.rain.wind_shear).abs() <= 1e-12);
        prop_assert_eq!(via_blend.rain.splash_enabled, direct.rain.splash_enabled);
    }

    #[test]
    fn blend_never_invents_fields(
        a in weather_patch(),
        b in weather_patch(),
        base_a in base_params(),
        base_b in base_params(),
        t in 0.0f64..=1.0,
    ) {
        let Some(out) = interpolate_patches(Some(&a), Some(&b), Some(&base_a), Some(&base_b), t)
        else {
            return Ok(());
        };
        if let Some(cloud) = out.cloud {
            let a_cloud = a.cloud.unwrap_or_default();
            let b_cloud = b.cloud.unwrap_or_default();
            prop_assert!(cloud.coverage.is_none() || a_cloud.coverage.is_some() || b_cloud.coverage.is_some());
            prop_assert!(cloud.density.is_none() || a_cloud.density.is_some() || b_cloud.density.is_some());
            prop_assert!(cloud.darkness.is_none() || a_cloud.darkness.is_some() || b_cloud.darkness.is_some());
            prop_assert!(cloud.drift_speed.is_none() || a_cloud.drift_speed.is_some() || b_cloud.drift_speed.is_some());
        }
        prop_assert!(out.layers.is_none());
        prop_assert!(out.celestial.is_none());
        prop_assert!(out.snow.is_none());
    }
}
