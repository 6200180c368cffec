use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("unknown animation mode: {0:?}")]
    UnknownMode(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("frame scheduling failed: {0}")]
    Schedule(String),

    #[error("listener registration failed: {0}")]
    Listener(String),
}

impl BackdropError {
    /// Wraps a JS exception thrown by a browser API.
    pub(crate) fn js(kind: fn(String) -> Self, value: JsValue) -> Self {
        kind(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
