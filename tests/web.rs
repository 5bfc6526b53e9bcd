//! Browser tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use impact_audio_wasm::{ContactEvent, InstrumentKind, JsInstrument, SoundRouter};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// `{ volume: { value: 0 }, calls: [], triggerAttack(note) { this.calls.push(note) } }`
fn fake_tone_instrument() -> Object {
    let target = Object::new();
    let volume = Object::new();
    Reflect::set(&volume, &"value".into(), &JsValue::from_f64(0.0)).unwrap();
    Reflect::set(&target, &"volume".into(), &volume).unwrap();
    Reflect::set(&target, &"calls".into(), &Array::new()).unwrap();
    let trigger = Function::new_with_args("note", "this.calls.push(note)");
    Reflect::set(&target, &"triggerAttack".into(), &trigger).unwrap();
    target
}

fn volume_of(target: &Object) -> f64 {
    let volume = Reflect::get(target, &"volume".into()).unwrap();
    Reflect::get(&volume, &"value".into()).unwrap().as_f64().unwrap()
}

fn calls_of(target: &Object) -> Vec<String> {
    let calls: Array = Reflect::get(target, &"calls".into()).unwrap().unchecked_into();
    calls.iter().filter_map(|v| v.as_string()).collect()
}

fn collide_event(velocity: f64) -> JsValue {
    let contact = Object::new();
    Reflect::set(&contact, &"impactVelocity".into(), &JsValue::from_f64(velocity)).unwrap();
    let event = Object::new();
    Reflect::set(&event, &"contact".into(), &contact).unwrap();
    event.into()
}

#[wasm_bindgen_test]
fn contact_event_reads_cannon_shape() {
    assert_eq!(ContactEvent::from_js(&collide_event(2.5)).impact_velocity, 2.5);
}

#[wasm_bindgen_test]
fn contact_event_tolerates_garbage() {
    assert_eq!(ContactEvent::from_js(&JsValue::UNDEFINED).impact_velocity, 0.0);
    assert_eq!(ContactEvent::from_js(&JsValue::from_str("boom")).impact_velocity, 0.0);

    let event = Object::new();
    Reflect::set(&event, &"contact".into(), &Object::new()).unwrap();
    assert_eq!(ContactEvent::from_js(&event.into()).impact_velocity, 0.0);
}

#[wasm_bindgen_test]
fn js_instrument_requires_trigger_attack() {
    let target = Object::new();
    Reflect::set(&target, &"volume".into(), &Object::new()).unwrap();
    assert!(JsInstrument::new(InstrumentKind::Synth, target.into()).is_err());
}

#[wasm_bindgen_test]
fn router_drives_selected_tone_instrument() {
    let sampler = fake_tone_instrument();
    let synth = fake_tone_instrument();
    let router = SoundRouter::new(sampler.clone().into(), synth.clone().into(), JsValue::UNDEFINED)
        .ok()
        .expect("fake instruments are valid");

    router.handle_collision(&collide_event(10.0));
    assert_eq!(volume_of(&sampler), 0.0);
    assert_eq!(calls_of(&sampler), vec!["C3".to_string()]);

    assert!(router.set_instrument_by_label("Synth").is_ok());
    assert_eq!(router.instrument(), InstrumentKind::Synth);
    let handler = router.collision_handler();
    handler.call1(&JsValue::NULL, &collide_event(2.0)).unwrap();

    assert!((volume_of(&synth) - (-6.0206)).abs() < 1e-3);
    assert_eq!(calls_of(&synth), vec!["C3".to_string()]);
    assert_eq!(calls_of(&sampler).len(), 1);
}

#[wasm_bindgen_test]
fn router_rejects_bad_config() {
    let config = Object::new();
    Reflect::set(&config, &"referenceVelocity".into(), &JsValue::from_f64(-1.0)).unwrap();
    let result = SoundRouter::new(
        fake_tone_instrument().into(),
        fake_tone_instrument().into(),
        config.into(),
    );
    assert!(result.is_err());
}

fn two_fakes() -> (Object, Object, SoundRouter) {
    let sampler = fake_tone_instrument();
    let synth = fake_tone_instrument();
    let router = SoundRouter::new(sampler.clone().into(), synth.clone().into(), JsValue::UNDEFINED)
        .ok()
        .expect("fake instruments are valid");
    (sampler, synth, router)
}

#[wasm_bindgen_test]
fn contact_event_falls_back_to_top_level_velocity() {
    let event = Object::new();
    Reflect::set(&event, &"impactVelocity".into(), &JsValue::from_f64(3.0)).unwrap();
    assert_eq!(ContactEvent::from_js(&event.into()).impact_velocity, 3.0);
}

#[wasm_bindgen_test]
fn contact_event_saturates_huge_velocity() {
    assert_eq!(ContactEvent::from_js(&collide_event(1e39)).impact_velocity, f32::MAX);
}

#[wasm_bindgen_test]
fn negative_velocity_mutes_but_still_triggers() {
    let (sampler, _, router) = two_fakes();
    router.handle_collision(&collide_event(-2.0));

    assert_eq!(volume_of(&sampler), f64::NEG_INFINITY);
    assert_eq!(calls_of(&sampler), vec!["C3".to_string()]);
}

#[wasm_bindgen_test]
fn handle_impact_follows_set_instrument() {
    let (sampler, synth, router) = two_fakes();
    router.set_instrument(InstrumentKind::Synth);
    router.handle_impact(1e39);

    assert_eq!(volume_of(&synth), 0.0);
    assert_eq!(calls_of(&synth), vec!["C3".to_string()]);
    assert!(calls_of(&sampler).is_empty());
    assert_eq!(router.instrument_label(), "Synth");
}
