use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::config::RouterConfig;
use crate::contact::ContactEvent;
use crate::instrument::{InstrumentKind, JsInstrument};
use crate::router::CollisionSoundRouter;
use crate::selection::InstrumentSelection;

/// Collision sound router as seen from the scene.
///
/// ```js
/// const router = new SoundRouter(sampler, membraneSynth);
/// const onCollide = router.collisionHandler();
/// useBox(() => ({ mass: 1, onCollide, ...props }));
/// ```
#[wasm_bindgen]
pub struct SoundRouter {
    inner: Rc<CollisionSoundRouter<JsInstrument>>,
}

#[wasm_bindgen]
impl SoundRouter {
    /// `sampler` and `synth` are Tone.js instruments already connected to
    /// the destination. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(sampler: JsValue, synth: JsValue, config: JsValue) -> Result<SoundRouter, JsError> {
        let config = RouterConfig::from_js(config)?;
        let sampler = JsInstrument::new(InstrumentKind::Sampler, sampler)?;
        let synth = JsInstrument::new(InstrumentKind::Synth, synth)?;
        let selection = InstrumentSelection::new(config.default_instrument);

        console_log!(
            "collision sound: {} at {} m/s full scale, note {}",
            config.default_instrument,
            config.reference_velocity,
            config.note
        );

        Ok(SoundRouter {
            inner: Rc::new(CollisionSoundRouter::with_config(
                sampler, synth, selection, &config,
            )),
        })
    }

    /// Route one collide event (`{ contact: { impactVelocity } }`).
    #[wasm_bindgen(js_name = handleCollision)]
    pub fn handle_collision(&self, event: &JsValue) {
        self.inner.handle_collision(&ContactEvent::from_js(event));
    }

    /// Route a bare impact velocity.
    #[wasm_bindgen(js_name = handleImpact)]
    pub fn handle_impact(&self, impact_velocity: f64) {
        self.inner.handle_collision(&ContactEvent::from_f64(impact_velocity));
    }

    #[wasm_bindgen(js_name = setInstrument)]
    pub fn set_instrument(&self, kind: InstrumentKind) {
        self.inner.set_instrument_selection(kind);
    }

    /// Same as `setInstrument`, from the panel's dropdown label.
    #[wasm_bindgen(js_name = setInstrumentByLabel)]
    pub fn set_instrument_by_label(&self, label: &str) -> Result<(), JsError> {
        let kind = label.parse::<InstrumentKind>()?;
        self.inner.set_instrument_selection(kind);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn instrument(&self) -> InstrumentKind {
        self.inner.instrument_selection()
    }

    #[wasm_bindgen(getter = instrumentLabel)]
    pub fn instrument_label(&self) -> String {
        self.inner.instrument_selection().label().to_string()
    }

    #[wasm_bindgen(getter = referenceVelocity)]
    pub fn reference_velocity(&self) -> f32 {
        self.inner.reference_velocity()
    }

    /// A plain JS function `(event) => void` sharing this router.
    ///
    /// Hand the same function to every body's `onCollide`; the scene can
    /// swap it for its own handler without touching the router.
    #[wasm_bindgen(js_name = collisionHandler)]
    pub fn collision_handler(&self) -> Function {
        let router = Rc::clone(&self.inner);
        let handler = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            router.handle_collision(&ContactEvent::from_js(&event));
        });
        handler.into_js_value().unchecked_into()
    }
}
