use crate::config::RouterConfig;
use crate::contact::ContactEvent;
use crate::gain::impact_level;
use crate::instrument::{Instrument, InstrumentKind};
use crate::selection::InstrumentSelection;

/// Receiver for a body's collision callback.
pub trait CollisionHandler {
    fn on_collision(&self, event: &ContactEvent);
}

/// Turns contacts into hits on whichever instrument is selected.
///
/// Holds one instrument per [`InstrumentKind`] for the whole session and
/// reads the shared [`InstrumentSelection`] on every event, so switching
/// only affects collisions that arrive afterwards.
pub struct CollisionSoundRouter<I> {
    sampler: I,
    synth: I,
    selection: InstrumentSelection,
    reference_velocity: f32,
    note: String,
}

impl<I: Instrument> CollisionSoundRouter<I> {
    pub fn new(sampler: I, synth: I, selection: InstrumentSelection) -> Self {
        Self::with_config(sampler, synth, selection, &RouterConfig::default())
    }

    /// Tuning comes from `config`; the selection handle is used as given, so
    /// `config.default_instrument` is only applied by callers that create
    /// the handle from it.
    pub fn with_config(
        sampler: I,
        synth: I,
        selection: InstrumentSelection,
        config: &RouterConfig,
    ) -> Self {
        Self {
            sampler,
            synth,
            selection,
            reference_velocity: config.reference_velocity,
            note: config.note.clone(),
        }
    }

    pub fn handle_collision(&self, event: &ContactEvent) {
        let instrument = self.active();
        instrument.set_loudness(impact_level(event.impact_velocity, self.reference_velocity));
        instrument.trigger(&self.note);
    }

    pub fn set_instrument_selection(&self, kind: InstrumentKind) {
        let previous = self.selection.set(kind);
        if previous != kind {
            console_log!("collision sound: {previous} -> {kind}");
        }
    }

    pub fn instrument_selection(&self) -> InstrumentKind {
        self.selection.get()
    }

    pub fn reference_velocity(&self) -> f32 {
        self.reference_velocity
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    fn active(&self) -> &I {
        match self.selection.get() {
            InstrumentKind::Sampler => &self.sampler,
            InstrumentKind::Synth => &self.synth,
        }
    }
}

impl<I: Instrument> CollisionHandler for CollisionSoundRouter<I> {
    fn on_collision(&self, event: &ContactEvent) {
        self.handle_collision(event);
    }
}
