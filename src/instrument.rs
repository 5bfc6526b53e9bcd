use std::fmt;
use std::str::FromStr;

use js_sys::{Function, Object, Reflect};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::error::RouterError;

/// Which instrument backend collisions play through.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum InstrumentKind {
    /// Plays the `hit.mp3` sample
    #[default]
    Sampler = 0,
    /// Percussive membrane synth
    Synth = 1,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 2] = [InstrumentKind::Sampler, InstrumentKind::Synth];

    /// Label shown in the debug panel dropdown.
    pub fn label(self) -> &'static str {
        match self {
            InstrumentKind::Sampler => "Sampler",
            InstrumentKind::Synth => "Synth",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstrumentKind {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        InstrumentKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| RouterError::UnknownInstrument(s.to_string()))
    }
}

impl TryFrom<String> for InstrumentKind {
    type Error = RouterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Anything that can be made louder or quieter and struck.
///
/// Methods take `&self`: the audio engine owns the mutable state, and the
/// router only ever holds shared handles.
pub trait Instrument {
    /// Set output loudness in dB (`-inf` is silence, `0` is unity).
    fn set_loudness(&self, level_db: f32);
    /// Start sounding `note`, e.g. `"C3"`.
    fn trigger(&self, note: &str);
}

impl<I: Instrument + ?Sized> Instrument for Box<I> {
    fn set_loudness(&self, level_db: f32) {
        (**self).set_loudness(level_db)
    }

    fn trigger(&self, note: &str) {
        (**self).trigger(note)
    }
}

/// A Tone.js instrument object (`Tone.Sampler`, `Tone.MembraneSynth`, ...).
///
/// Loudness goes to `instrument.volume.value`, playback through
/// `instrument.triggerAttack(note)`. Failures inside Tone are logged and
/// dropped.
pub struct JsInstrument {
    kind: InstrumentKind,
    volume: Object,
    trigger_attack: Function,
    target: JsValue,
}

impl JsInstrument {
    pub fn new(kind: InstrumentKind, target: JsValue) -> Result<Self, RouterError> {
        let volume = Reflect::get(&target, &"volume".into())
            .ok()
            .and_then(|v| v.dyn_into::<Object>().ok())
            .ok_or(RouterError::MissingCapability("volume"))?;
        let trigger_attack = Reflect::get(&target, &"triggerAttack".into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(RouterError::MissingCapability("triggerAttack"))?;

        Ok(Self {
            kind,
            volume,
            trigger_attack,
            target,
        })
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }
}

impl Instrument for JsInstrument {
    fn set_loudness(&self, level_db: f32) {
        let level = JsValue::from_f64(f64::from(level_db));
        if let Err(err) = Reflect::set(&self.volume, &"value".into(), &level) {
            console_warn!("{}: could not set volume: {:?}", self.kind, err);
        }
    }

    fn trigger(&self, note: &str) {
        if let Err(err) = self.trigger_attack.call1(&self.target, &JsValue::from_str(note)) {
            console_warn!("{}: triggerAttack({note}) failed: {:?}", self.kind, err);
        }
    }
}
