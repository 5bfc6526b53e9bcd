use thiserror::Error;

/// Errors raised while setting up the router. Collision handling itself never fails.
///
/// Crosses the wasm boundary as a `JsError` through its blanket `From` impl.
#[derive(Debug, Error, PartialEq)]
pub enum RouterError {
    #[error("reference velocity must be finite and positive, got {0}")]
    InvalidReferenceVelocity(f32),
    #[error("note must not be empty")]
    EmptyNote,
    #[error("unknown instrument {0:?}, expected \"Sampler\" or \"Synth\"")]
    UnknownInstrument(String),
    #[error("instrument object has no `{0}`")]
    MissingCapability(&'static str),
    #[error("invalid router config: {0}")]
    Config(String),
}

impl From<serde_wasm_bindgen::Error> for RouterError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        RouterError::Config(err.to_string())
    }
}
