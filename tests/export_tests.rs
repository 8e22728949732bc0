use skytune::api::{TimeQuery, TuningEngine, export_overrides_json, export_overrides_source};
use skytune::core::{Checkpoint, WeatherCondition};

fn engine_with_edit(coverage: f64) -> TuningEngine {
    let mut engine = TuningEngine::new();
    engine.select_checkpoint(WeatherCondition::Rain, Checkpoint::Dawn);
    let mut params = engine.full_params(WeatherCondition::Rain, TimeQuery::At(Checkpoint::Dawn));
    params.cloud.coverage = coverage;
    engine.update_params(WeatherCondition::Rain, &params);
    engine
}

#[test]
fn json_export_is_keyed_by_condition_then_checkpoint() {
    let engine = engine_with_edit(0.25);
    let exported = export_overrides_json(engine.snapshot());

    let coverage = exported
        .get("rain")
        .and_then(|c| c.get("dawn"))
        .and_then(|p| p.get("cloud"))
        .and_then(|g| g.get("coverage"))
        .and_then(|v| v.as_f64())
        .expect("coverage present");
    assert_eq!(coverage, 0.25);
}

#[test]
fn json_export_rounds_to_four_decimals() {
    let engine = engine_with_edit(0.123_456_789);
    let exported = export_overrides_json(engine.snapshot());

    let coverage = exported["rain"]["dawn"]["cloud"]["coverage"]
        .as_f64()
        .expect("coverage present");
    assert_eq!(coverage, 0.1235);
}

#[test]
fn empty_checkpoints_are_skipped() {
    let engine = engine_with_edit(0.25);
    let exported = export_overrides_json(engine.snapshot());

    assert!(exported["rain"].get("noon").is_none());
    assert!(exported["rain"].get("dusk").is_none());
    assert!(exported["rain"].get("midnight").is_none());
}

#[test]
fn untuned_state_exports_an_empty_tree() {
    let engine = TuningEngine::new();
    let exported = export_overrides_json(engine.snapshot());
    assert_eq!(exported, serde_json::json!({}));
    assert!(export_overrides_source(engine.snapshot()).is_empty());
}

#[test]
fn source_export_renders_patch_literals() {
    let engine = engine_with_edit(0.123_456_789);
    let source = export_overrides_source(engine.snapshot());

    assert!(source.contains("// rain @ dawn"));
    assert!(source.contains("WeatherPatch {"));
    assert!(source.contains("cloud: Some(CloudPatch {"));
    assert!(source.contains("coverage: Some(0.1235),"));
    assert!(source.contains("..Default::default()"));
}

#[test]
fn flag_overrides_render_as_plain_booleans() {
    let mut engine = TuningEngine::new();
    engine.select_checkpoint(WeatherCondition::Thunderstorm, Checkpoint::Noon);
    let mut params = engine.full_params(WeatherCondition::Thunderstorm, TimeQuery::At(Checkpoint::Noon));
    params.lightning.auto_strikes = false;
    engine.update_params(WeatherCondition::Thunderstorm, &params);

    let source = export_overrides_source(engine.snapshot());
    assert!(source.contains("auto_strikes: Some(false),"));

    let exported = export_overrides_json(engine.snapshot());
    assert_eq!(exported["thunderstorm"]["noon"]["lightning"]["auto_strikes"], serde_json::json!(false));
}
