//! Browser bindings: the rAF frame clock, the window pointer listener, and
//! the resize and visibility observers that feed the controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry, MouseEvent, ResizeObserver,
    ResizeObserverEntry, Window,
};

use crate::config::{BackdropOptions, Sizing};
use crate::engine::{Controller, FrameHandle, FrameScheduler, PointerSource, PointerState};
use crate::error::BackdropError;
use crate::field::Dimensions;
use crate::render::CanvasTarget;

pub type WebController = Controller<CanvasTarget, RafScheduler, WindowPointerSource>;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` driven scheduler. Every request re-arms the same
/// callback, which lives until the owning [`Mount`] is torn down.
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, BackdropError> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| BackdropError::Schedule("frame callback released".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| BackdropError::js(BackdropError::Schedule, e))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame({}) failed: {:?}", handle.0, err);
        }
    }
}

/// Window `mousemove` listener reporting positions relative to the canvas.
pub struct WindowPointerSource {
    window: Window,
    canvas: HtmlCanvasElement,
    listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl WindowPointerSource {
    fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        Self {
            window,
            canvas,
            listener: None,
        }
    }
}

impl PointerSource for WindowPointerSource {
    fn subscribe(&mut self, state: PointerState) -> Result<(), BackdropError> {
        self.unsubscribe();
        let canvas = self.canvas.clone();
        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            state.set(Vec2::new(
                (event.client_x() as f64 - rect.left()) as f32,
                (event.client_y() as f64 - rect.top()) as f32,
            ));
        }) as Box<dyn FnMut(MouseEvent)>);
        self.window
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            .map_err(|e| BackdropError::js(BackdropError::Listener, e))?;
        self.listener = Some(listener);
        Ok(())
    }

    fn unsubscribe(&mut self) {
        let Some(listener) = self.listener.take() else { return };
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
        {
            log::debug!("removing mousemove listener failed: {:?}", err);
        }
    }
}

impl Drop for WindowPointerSource {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Current size of the surface under `sizing`.
fn measure(window: &Window, canvas: &HtmlCanvasElement, sizing: Sizing) -> Dimensions {
    match sizing {
        Sizing::Window => {
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
            };
            Dimensions::new(read(window.inner_width()), read(window.inner_height()))
        }
        Sizing::Element => Dimensions::new(canvas.client_width() as f32, canvas.client_height() as f32),
    }
}

/// Forwards `f` to the controller unless it is gone or mid-frame.
fn with_controller(controller: &Weak<RefCell<WebController>>, f: impl FnOnce(&mut WebController)) {
    let Some(controller) = controller.upgrade() else { return };
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::trace!("engine busy, event dropped"),
    };
}

enum ResizeBinding {
    Window {
        window: Window,
        listener: Closure<dyn FnMut()>,
    },
    Element {
        observer: ResizeObserver,
        _callback: Closure<dyn FnMut(js_sys::Array)>,
    },
}

impl ResizeBinding {
    fn bind(
        window: &Window,
        canvas: &HtmlCanvasElement,
        sizing: Sizing,
        controller: Weak<RefCell<WebController>>,
    ) -> Result<Self, BackdropError> {
        let apply = move |dims: Dimensions| {
            with_controller(&controller, |c| {
                if let Err(err) = c.resize(dims.width, dims.height) {
                    log::warn!("resize failed: {}", err);
                }
            })
        };

        match sizing {
            Sizing::Window => {
                let (win, el) = (window.clone(), canvas.clone());
                let listener = Closure::wrap(Box::new(move || {
                    apply(measure(&win, &el, Sizing::Window));
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                    .map_err(|e| BackdropError::js(BackdropError::Listener, e))?;
                Ok(Self::Window {
                    window: window.clone(),
                    listener,
                })
            }
            Sizing::Element => {
                let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    let last = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<ResizeObserverEntry>().ok())
                        .last();
                    if let Some(entry) = last {
                        let rect = entry.content_rect();
                        apply(Dimensions::new(rect.width() as f32, rect.height() as f32));
                    }
                }) as Box<dyn FnMut(js_sys::Array)>);
                let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
                    .map_err(|e| BackdropError::js(BackdropError::Listener, e))?;
                observer.observe(canvas);
                Ok(Self::Element {
                    observer,
                    _callback: callback,
                })
            }
        }
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        match self {
            Self::Window { window, listener } => {
                if let Err(err) =
                    window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                {
                    log::debug!("removing resize listener failed: {:?}", err);
                }
            }
            Self::Element { observer, .. } => observer.disconnect(),
        }
    }
}

/// IntersectionObserver that pauses the engine while the canvas is off
/// screen.
struct VisibilityBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityBinding {
    fn bind(canvas: &HtmlCanvasElement, controller: Weak<RefCell<WebController>>) -> Result<Self, BackdropError> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let last = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            let Some(entry) = last else { return };
            let visible = entry.is_intersecting();
            with_controller(&controller, |c| {
                if let Err(err) = c.set_visible(visible) {
                    log::warn!("visibility change failed: {}", err);
                }
            });
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| BackdropError::js(BackdropError::Listener, e))?;
        observer.observe(canvas);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// A controller attached to a live canvas together with every browser
/// resource it holds. Dropping the mount releases all of them.
pub struct Mount {
    controller: Rc<RefCell<WebController>>,
    frame_callback: FrameCallback,
    resize: Option<ResizeBinding>,
    visibility: Option<VisibilityBinding>,
}

impl Mount {
    /// Acquires the 2D context, wires the observers and activates
    /// `options.mode`.
    pub fn new(canvas: HtmlCanvasElement, mut options: BackdropOptions) -> Result<Self, BackdropError> {
        let window = web_sys::window().ok_or_else(|| BackdropError::SurfaceUnavailable("no window".into()))?;
        let target = CanvasTarget::new(canvas.clone())?;
        let dims = measure(&window, &canvas, options.sizing);
        options.seed.get_or_insert_with(random_seed);
        let (mode, sizing, pause_when_hidden) = (options.mode, options.sizing, options.pause_when_hidden);

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let controller = Rc::new(RefCell::new(Controller::new(
            target,
            RafScheduler::new(window.clone(), frame_callback.clone()),
            WindowPointerSource::new(window.clone(), canvas.clone()),
            dims,
            options,
        )));

        let weak = Rc::downgrade(&controller);
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            with_controller(&weak, |c| c.frame(now));
        }) as Box<dyn FnMut(f64)>));

        let mut mount = Self {
            controller,
            frame_callback,
            resize: None,
            visibility: None,
        };
        let weak = Rc::downgrade(&mount.controller);
        mount.resize = Some(ResizeBinding::bind(&window, &canvas, sizing, weak.clone())?);
        if pause_when_hidden {
            mount.visibility = Some(VisibilityBinding::bind(&canvas, weak)?);
        }
        mount.with(|c| c.activate(mode))??;
        log::info!("backdrop mounted at {}x{}", dims.width, dims.height);
        Ok(mount)
    }

    /// Runs `f` against the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut WebController) -> R) -> Result<R, BackdropError> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| BackdropError::SurfaceUnavailable("engine busy".into()))?;
        Ok(f(&mut controller))
    }

    fn unmount(&mut self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.deactivate();
        }
        self.resize.take();
        self.visibility.take();
        self.frame_callback.borrow_mut().take();
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
        log::info!("backdrop unmounted");
    }
}
