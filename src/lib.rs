use wasm_bindgen::prelude::*;

#[macro_use]
pub mod log;

pub mod config;
pub mod contact;
pub mod error;
pub mod gain;
pub mod instrument;
pub mod router;
pub mod selection;
pub mod wasm_api;

pub use config::{RouterConfig, IMPACT_NOTE};
pub use contact::ContactEvent;
pub use error::RouterError;
pub use gain::{gain_to_db, impact_gain, REFERENCE_VELOCITY};
pub use instrument::{Instrument, InstrumentKind, JsInstrument};
pub use router::{CollisionHandler, CollisionSoundRouter};
pub use selection::InstrumentSelection;
pub use wasm_api::SoundRouter;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();

    console_log!("impact-audio {} ready", env!("CARGO_PKG_VERSION"));
}
