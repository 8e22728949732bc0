use skytune::api::{TimeQuery, TuningEngine};
use skytune::core::{Checkpoint, WeatherCondition};

fn review_all(engine: &mut TuningEngine, condition: WeatherCondition) {
    for checkpoint in Checkpoint::ALL {
        engine.select_checkpoint(condition, checkpoint);
    }
}

#[test]
fn explicit_navigation_marks_the_checkpoint_reviewed() {
    let mut engine = TuningEngine::new();
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Dusk);

    let status = engine.review_status(WeatherCondition::Rain);
    assert!(status.dusk);
    assert!(!status.dawn);
    assert!(!status.noon);
    assert!(!status.midnight);
    assert_eq!(engine.time_of_day(), Checkpoint::Dusk.time_of_day());
    assert_eq!(engine.active_checkpoint(), Checkpoint::Dusk);
}

#[test]
fn continuous_scrubbing_never_marks_review() {
    let mut engine = TuningEngine::new();
    // Scrub straight through every canonical time.
    for step in 0..=100 {
        engine.set_time_of_day(f64::from(step) / 100.0);
    }
    let status = engine.review_status(WeatherCondition::Rain);
    assert!(!status.dawn && !status.noon && !status.dusk && !status.midnight);
}

#[test]
fn sign_off_is_rejected_until_every_checkpoint_is_reviewed() {
    let mut engine = TuningEngine::new();
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Dawn);
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Noon);
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Dusk);

    assert!(engine.sign_off(WeatherCondition::Rain).is_err());
    assert!(!engine.is_signed_off(WeatherCondition::Rain));

    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Midnight);
    engine.sign_off(WeatherCondition::Rain).expect("all reviewed");
    assert!(engine.is_signed_off(WeatherCondition::Rain));
}

#[test]
fn sign_off_can_be_revoked_and_reapplied() {
    let mut engine = TuningEngine::new();
    review_all(&mut engine, WeatherCondition::Snow);
    engine.sign_off(WeatherCondition::Snow).expect("all reviewed");

    engine.revoke_sign_off(WeatherCondition::Snow);
    assert!(!engine.is_signed_off(WeatherCondition::Snow));
    // Review flags survive revocation, so sign-off is immediately legal.
    engine.sign_off(WeatherCondition::Snow).expect("still reviewed");
}

#[test]
fn review_is_scoped_per_condition() {
    let mut engine = TuningEngine::new();
    review_all(&mut engine, WeatherCondition::Rain);

    assert!(engine.review_status(WeatherCondition::Rain).all_reviewed());
    assert!(!engine.review_status(WeatherCondition::Snow).all_reviewed());
    assert!(engine.sign_off(WeatherCondition::Snow).is_err());
}

#[test]
fn reset_clears_overrides_review_and_sign_off_together() {
    let mut engine = TuningEngine::new();
    review_all(&mut engine, WeatherCondition::Rain);
    let mut params = engine.full_params(WeatherCondition::Rain, TimeQuery::At(Checkpoint::Midnight));
    params.cloud.coverage = 0.1;
    engine.update_params(WeatherCondition::Rain, &params);
    engine.sign_off(WeatherCondition::Rain).expect("all reviewed");

    engine.reset_condition(WeatherCondition::Rain);

    assert!(!engine.has_overrides(WeatherCondition::Rain));
    let status = engine.review_status(WeatherCondition::Rain);
    assert!(!status.dawn && !status.noon && !status.dusk && !status.midnight);
    assert!(!engine.is_signed_off(WeatherCondition::Rain));
    assert!(engine.snapshot().overrides.get(&WeatherCondition::Rain).is_none());
}
