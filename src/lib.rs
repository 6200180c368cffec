use std::sync::Once;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod modes;
pub mod platform;
pub mod render;

pub use config::{BackdropOptions, Mode};
pub use error::BackdropError;

use platform::web::Mount;

static LOGGER: Once = Once::new();

fn init_logging() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));
}

/// A procedural background animation bound to one `<canvas>`.
#[wasm_bindgen]
pub struct Backdrop {
    mount: Option<Mount>,
    /// Mode at the time of `destroy`, reported once the controller is gone.
    last_mode: Mode,
}

#[wasm_bindgen]
impl Backdrop {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web_sys::HtmlCanvasElement, mode: &str) -> Result<Backdrop, JsValue> {
        init_logging();
        let mode: Mode = mode.parse()?;
        Ok(Self::mount(canvas, BackdropOptions::with_mode(mode))?)
    }

    /// Builds a backdrop from a JSON `BackdropOptions` document.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(canvas: web_sys::HtmlCanvasElement, options: &str) -> Result<Backdrop, JsValue> {
        init_logging();
        let options = BackdropOptions::from_json(options)?;
        Ok(Self::mount(canvas, options)?)
    }

    /// Tears the current mode down and seeds `mode` in its place.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: Mode = mode.parse()?;
        self.mounted()?.with(|c| c.switch_mode(mode))??;
        Ok(())
    }

    pub fn mode(&self) -> String {
        self.current_mode().tag().to_string()
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.mounted()?.with(|c| c.resize(width, height))??;
        Ok(())
    }

    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, visible: bool) -> Result<(), JsValue> {
        self.mounted()?.with(|c| c.set_visible(visible))??;
        Ok(())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mount
            .as_ref()
            .and_then(|m| m.with(|c| c.is_running()).ok())
            .unwrap_or(false)
    }

    /// Cancels the loop and releases every listener. Further calls other than
    /// `mode` and `isRunning` fail.
    pub fn destroy(&mut self) {
        self.last_mode = self.current_mode();
        if self.mount.take().is_some() {
            log::info!("backdrop destroyed");
        }
    }
}

impl Backdrop {
    fn mount(canvas: web_sys::HtmlCanvasElement, options: BackdropOptions) -> Result<Backdrop, BackdropError> {
        let mode = options.mode;
        log::info!("backdrop initializing in {} mode", mode);
        Ok(Backdrop {
            mount: Some(Mount::new(canvas, options)?),
            last_mode: mode,
        })
    }

    /// The controller's mode while mounted. After a failed switch this is
    /// the mode that was attempted, left idle.
    fn current_mode(&self) -> Mode {
        self.mount
            .as_ref()
            .and_then(|m| m.with(|c| c.mode()).ok())
            .unwrap_or(self.last_mode)
    }

    fn mounted(&self) -> Result<&Mount, BackdropError> {
        self.mount
            .as_ref()
            .ok_or_else(|| BackdropError::SurfaceUnavailable("backdrop destroyed".into()))
    }
}
