use wasm_bindgen::prelude::*;

/// Impact velocity at which loudness saturates.
pub const REFERENCE_VELOCITY: f32 = 4.0;

/// Normalized gain in [0, 1] for an impact.
///
/// Negative, NaN and infinite velocities count as no impact at all.
/// A non-positive or non-finite `reference_velocity` silences everything.
pub fn impact_gain(impact_velocity: f32, reference_velocity: f32) -> f32 {
    let velocity = if impact_velocity.is_finite() {
        impact_velocity.max(0.0)
    } else {
        0.0
    };
    if !(reference_velocity.is_finite() && reference_velocity > 0.0) {
        return 0.0;
    }

    (velocity / reference_velocity).min(1.0)
}

/// Gain to decibels: 0 is silence (-inf), 1 is unity (0 dB).
pub fn gain_to_db(gain: f32) -> f32 {
    if gain <= 0.0 || gain.is_nan() {
        return f32::NEG_INFINITY;
    }
    20.0 * gain.log10()
}

/// Loudness in dB for an impact, as applied to the active instrument.
pub fn impact_level(impact_velocity: f32, reference_velocity: f32) -> f32 {
    gain_to_db(impact_gain(impact_velocity, reference_velocity))
}

// JS-facing versions for the debug panel readouts

#[wasm_bindgen(js_name = impactGain)]
pub fn impact_gain_js(impact_velocity: f32) -> f32 {
    impact_gain(impact_velocity, REFERENCE_VELOCITY)
}

#[wasm_bindgen(js_name = gainToDb)]
pub fn gain_to_db_js(gain: f32) -> f32 {
    gain_to_db(gain)
}
