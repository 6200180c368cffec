use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::error::BackdropError;

/// Latest pointer position in surface coordinates, shared between the
/// platform listener (writer) and the frame loop (reader).
#[derive(Debug, Clone, Default)]
pub struct PointerState(Rc<Cell<Option<Vec2>>>);

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set(&self, pos: Vec2) {
        self.0.set(Some(pos));
    }
    pub fn get(&self) -> Option<Vec2> {
        self.0.get()
    }
    pub fn clear(&self) {
        self.0.set(None);
    }
}

/// Platform pointer feed. Between `subscribe` and `unsubscribe` the source
/// writes every move into the given state.
pub trait PointerSource {
    fn subscribe(&mut self, state: PointerState) -> Result<(), BackdropError>;
    fn unsubscribe(&mut self);
}

/// Owns the pointer subscription for one engine.
pub struct InputTracker<P> {
    source: P,
    state: PointerState,
    enabled: bool,
}

impl<P: PointerSource> InputTracker<P> {
    pub fn new(source: P) -> Self {
        Self {
            source,
            state: PointerState::new(),
            enabled: false,
        }
    }

    pub fn enable(&mut self) -> Result<(), BackdropError> {
        if self.enabled {
            return Ok(());
        }
        self.source.subscribe(self.state.clone())?;
        self.enabled = true;
        log::debug!("pointer tracking enabled");
        Ok(())
    }

    /// Unsubscribes and forgets the last position.
    pub fn disable(&mut self) {
        if self.enabled {
            self.source.unsubscribe();
            self.enabled = false;
            log::debug!("pointer tracking disabled");
        }
        self.state.clear();
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.state.get()
    }
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    pub fn source(&self) -> &P {
        &self.source
    }
}
