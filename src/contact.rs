use js_sys::Reflect;
use wasm_bindgen::prelude::*;

/// One contact reported by the physics engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactEvent {
    /// Relative closing speed at the moment of contact.
    pub impact_velocity: f32,
}

impl ContactEvent {
    pub fn new(impact_velocity: f32) -> Self {
        Self { impact_velocity }
    }

    /// From a JS number. Finite values beyond `f32` range saturate instead
    /// of overflowing to infinity; NaN and infinities read as zero.
    pub fn from_f64(impact_velocity: f64) -> Self {
        if !impact_velocity.is_finite() {
            return Self::new(0.0);
        }
        let max = f64::from(f32::MAX);
        Self::new(impact_velocity.clamp(-max, max) as f32)
    }

    /// Read a cannon collide event.
    ///
    /// Looks for `event.contact.impactVelocity`, then `event.impactVelocity`.
    /// Anything missing or non-numeric reads as a zero-velocity contact.
    pub fn from_js(event: &JsValue) -> Self {
        let velocity = Reflect::get(event, &"contact".into())
            .ok()
            .filter(|contact| contact.is_object())
            .and_then(|contact| Self::velocity_field(&contact))
            .or_else(|| Self::velocity_field(event))
            .unwrap_or(0.0);

        Self::from_f64(velocity)
    }

    fn velocity_field(value: &JsValue) -> Option<f64> {
        if !value.is_object() {
            return None;
        }
        Reflect::get(value, &"impactVelocity".into())
            .ok()
            .and_then(|v| v.as_f64())
    }
}

impl From<f32> for ContactEvent {
    fn from(impact_velocity: f32) -> Self {
        Self::new(impact_velocity)
    }
}
