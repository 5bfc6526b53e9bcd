use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::RouterError;
use crate::gain::REFERENCE_VELOCITY;
use crate::instrument::InstrumentKind;

/// Pitch both instruments sound on impact.
pub const IMPACT_NOTE: &str = "C3";

/// Router tuning. Every field is optional on the JS side:
///
/// ```js
/// new SoundRouter(sampler, synth, { referenceVelocity: 6, defaultInstrument: "Synth" })
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RouterConfig {
    /// Impact velocity that maps to full loudness.
    pub reference_velocity: f32,
    pub note: String,
    pub default_instrument: InstrumentKind,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            reference_velocity: REFERENCE_VELOCITY,
            note: IMPACT_NOTE.to_string(),
            default_instrument: InstrumentKind::default(),
        }
    }
}

impl RouterConfig {
    /// `undefined` and `null` give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, RouterError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: RouterConfig = serde_wasm_bindgen::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RouterError> {
        if !(self.reference_velocity.is_finite() && self.reference_velocity > 0.0) {
            return Err(RouterError::InvalidReferenceVelocity(self.reference_velocity));
        }
        if self.note.trim().is_empty() {
            return Err(RouterError::EmptyNote);
        }
        Ok(())
    }
}
