use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::input::{InputTracker, PointerSource};
use super::scheduler::FrameScheduler;
use super::surface::SurfaceManager;
use crate::config::{BackdropOptions, Mode};
use crate::error::BackdropError;
use crate::field::{Dimensions, ParticleField};
use crate::modes::{self, FrameContext};
use crate::render::DrawTarget;

const DEFAULT_SEED: u64 = 0x5eed_ba5e;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Seeding,
    Running,
    Paused,
    Stopping,
}

/// Drives one mode at a time over a surface: seeding, the frame loop,
/// pointer tracking and teardown.
pub struct Controller<T: DrawTarget, S: FrameScheduler, P: PointerSource> {
    surface: SurfaceManager<T, S>,
    input: InputTracker<P>,
    mode: Mode,
    field: ParticleField,
    rng: SmallRng,
    options: BackdropOptions,
    phase: Phase,
    started_at: Option<f64>,
    visible: bool,
}

impl<T: DrawTarget, S: FrameScheduler, P: PointerSource> Controller<T, S, P> {
    /// Builds an idle controller. Nothing is scheduled or subscribed until
    /// `activate`.
    pub fn new(target: T, scheduler: S, source: P, dims: Dimensions, options: BackdropOptions) -> Self {
        let rng = SmallRng::seed_from_u64(options.seed.unwrap_or(DEFAULT_SEED));
        Self {
            surface: SurfaceManager::attach(target, scheduler, dims),
            input: InputTracker::new(source),
            mode: options.mode,
            field: ParticleField::empty(),
            rng,
            options,
            phase: Phase::Idle,
            started_at: None,
            visible: true,
        }
    }

    /// Seeds `mode` and starts its loop, tearing down any previous mode
    /// first. On failure everything acquired is released again.
    pub fn activate(&mut self, mode: Mode) -> Result<(), BackdropError> {
        if self.phase != Phase::Idle {
            self.deactivate();
        }

        self.phase = Phase::Seeding;
        self.mode = mode;
        self.seed_field();

        if !self.visible && self.options.pause_when_hidden {
            self.phase = Phase::Paused;
            log::info!("{} activated paused", mode);
            return Ok(());
        }

        if let Err(err) = self.run() {
            self.deactivate();
            return Err(err);
        }
        self.phase = Phase::Running;
        log::info!("{} running", mode);
        Ok(())
    }

    /// Replaces the active mode. Equivalent to `activate` with the new tag.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<(), BackdropError> {
        log::debug!("switching {} -> {}", self.mode, mode);
        self.activate(mode)
    }

    /// Cancels the pending tick, drops the pointer listener and the field.
    /// After this returns no frame draws until the next activation.
    pub fn deactivate(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        self.phase = Phase::Stopping;
        self.surface.stop();
        self.input.disable();
        self.field = ParticleField::empty();
        self.started_at = None;
        self.phase = Phase::Idle;
        log::info!("{} stopped", self.mode);
    }

    /// Delivers one scheduled frame at host time `now_ms`.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.surface.begin_frame() {
            return;
        }

        let started = *self.started_at.get_or_insert(now_ms);
        let frame = FrameContext {
            dims: self.surface.dims(),
            pointer: self.input.pointer(),
            elapsed_ms: (now_ms - started).max(0.0),
            palette: self.options.palette,
        };
        if !modes::render(self.mode, self.surface.target_mut(), &mut self.field, &frame) {
            log::trace!("skipped frame on empty surface {:?}", frame.dims);
        }

        if let Err(err) = self.surface.schedule_next() {
            log::warn!("{}; stopping {}", err, self.mode);
            self.deactivate();
        }
    }

    /// Resizes the surface. Particles are brought back in bounds by their
    /// boundary policy on the next tick unless a full re-seed is configured.
    /// A field still waiting on a surface with area is seeded here.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), BackdropError> {
        self.surface.resize(width, height);
        log::debug!("resized to {}x{}", width, height);
        if self.options.reseed_on_resize && self.phase != Phase::Idle {
            self.activate(self.mode)?;
        } else if self.awaiting_seed() {
            self.seed_field();
        }
        Ok(())
    }

    /// Pauses or resumes the loop and pointer tracking as the surface leaves
    /// or enters the viewport. The field is kept across a pause.
    pub fn set_visible(&mut self, visible: bool) -> Result<(), BackdropError> {
        self.visible = visible;
        if !self.options.pause_when_hidden {
            return Ok(());
        }
        match (self.phase, visible) {
            (Phase::Running, false) => {
                self.surface.stop();
                self.input.disable();
                self.phase = Phase::Paused;
                log::debug!("{} paused", self.mode);
            }
            (Phase::Paused, true) => {
                if let Err(err) = self.run() {
                    self.deactivate();
                    return Err(err);
                }
                self.phase = Phase::Running;
                log::debug!("{} resumed", self.mode);
            }
            _ => {}
        }
        Ok(())
    }

    /// Seeds the field for the current mode. A surface with no area seeds
    /// nothing; the field is filled by the first resize that gives it one.
    fn seed_field(&mut self) {
        let dims = self.surface.dims();
        self.field = match self.mode.spec().seed {
            Some(params) if !dims.is_empty() => ParticleField::seed(&params, dims, &mut self.rng),
            Some(_) => {
                log::debug!("{} waiting for a non-empty surface to seed", self.mode);
                ParticleField::empty()
            }
            None => ParticleField::empty(),
        };
        log::debug!("seeded {} with {} particles", self.mode, self.field.len());
    }

    fn awaiting_seed(&self) -> bool {
        self.phase != Phase::Idle && self.field.is_empty() && self.mode.spec().seed.is_some()
    }

    fn run(&mut self) -> Result<(), BackdropError> {
        if self.mode.spec().interactive {
            self.input.enable()?;
        }
        self.surface.start()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
    pub fn is_tick_scheduled(&self) -> bool {
        self.surface.is_tick_scheduled()
    }
    pub fn is_tracking_pointer(&self) -> bool {
        self.input.is_enabled()
    }
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
    pub fn dims(&self) -> Dimensions {
        self.surface.dims()
    }
    pub fn options(&self) -> &BackdropOptions {
        &self.options
    }
    pub fn target(&self) -> &T {
        self.surface.target()
    }
    pub fn target_mut(&mut self) -> &mut T {
        self.surface.target_mut()
    }
    pub fn scheduler(&self) -> &S {
        self.surface.scheduler()
    }
    pub fn pointer_source(&self) -> &P {
        self.input.source()
    }
}

impl<T: DrawTarget, S: FrameScheduler, P: PointerSource> Drop for Controller<T, S, P> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::platform::headless::{ManualPointer, ManualScheduler};
    use crate::render::DrawList;

    type Headless = Controller<DrawList, ManualScheduler, ManualPointer>;

    fn controller(options: BackdropOptions) -> Headless {
        Controller::new(
            DrawList::new(),
            ManualScheduler::new(),
            ManualPointer::new(),
            Dimensions::new(800.0, 600.0),
            BackdropOptions {
                seed: Some(42),
                ..options
            },
        )
    }

    #[test]
    fn new_controller_is_idle() {
        let c = controller(BackdropOptions::default());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.is_tick_scheduled());
        assert_eq!(c.scheduler().requested(), 0);
        assert!(c.field().is_empty());
    }

    #[test]
    fn activation_seeds_and_schedules() {
        let mut c = controller(BackdropOptions::default());
        c.activate(Mode::Particles).unwrap();
        assert_eq!(c.phase(), Phase::Running);
        assert_eq!(c.field().len(), 40);
        assert!(c.is_tick_scheduled());
        assert!(c.is_tracking_pointer());
    }

    #[test]
    fn frame_renders_and_reschedules() {
        let mut c = controller(BackdropOptions::default());
        c.activate(Mode::Waves).unwrap();
        c.target_mut().take_commands();
        c.frame(16.0);
        assert!(c.target().draw_count() > 0);
        assert!(c.is_tick_scheduled());
        assert_eq!(c.scheduler().requested(), 2);
    }

    #[test]
    fn failed_schedule_releases_everything() {
        let mut c = Controller::new(
            DrawList::new(),
            ManualScheduler::failing(),
            ManualPointer::new(),
            Dimensions::new(100.0, 100.0),
            BackdropOptions::default(),
        );
        let err = c.activate(Mode::Particles).unwrap_err();
        assert!(matches!(err, BackdropError::Schedule(_)));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.pointer_source().is_subscribed());
        assert!(c.field().is_empty());
    }

    #[test]
    fn failed_subscription_releases_everything() {
        let mut c = Controller::new(
            DrawList::new(),
            ManualScheduler::new(),
            ManualPointer::failing(),
            Dimensions::new(100.0, 100.0),
            BackdropOptions::default(),
        );
        assert!(matches!(c.activate(Mode::Particles), Err(BackdropError::Listener(_))));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.is_tick_scheduled());

        // a non-interactive mode never asks for the pointer
        c.activate(Mode::OrbitalRings).unwrap();
        assert!(c.is_running());
    }

    #[test]
    fn elapsed_time_starts_at_first_frame() {
        let mut c = controller(BackdropOptions::default());
        c.activate(Mode::AttractorField).unwrap();
        c.pointer_source().move_to(Vec2::new(10.0, 10.0));
        c.frame(5_000.0);
        c.frame(5_016.0);
        assert!(c.is_running());
        assert_eq!(c.started_at, Some(5_000.0));
    }

    #[test]
    fn paused_activation_waits_for_visibility() {
        let mut c = controller(BackdropOptions::default());
        c.set_visible(false).unwrap();
        c.activate(Mode::Particles).unwrap();
        assert_eq!(c.phase(), Phase::Paused);
        assert!(!c.is_tick_scheduled());
        assert_eq!(c.field().len(), 40);

        c.set_visible(true).unwrap();
        assert!(c.is_running());
        assert!(c.is_tick_scheduled());
    }

    #[test]
    fn empty_surface_defers_seeding_until_resized() {
        let mut c = Controller::new(
            DrawList::new(),
            ManualScheduler::new(),
            ManualPointer::new(),
            Dimensions::default(),
            BackdropOptions::default(),
        );
        c.activate(Mode::FloatingOrbs).unwrap();
        assert!(c.is_running());
        assert!(c.field().is_empty());

        c.resize(0.0, 240.0).unwrap();
        assert!(c.field().is_empty());

        c.resize(320.0, 240.0).unwrap();
        assert_eq!(c.field().len(), 40);
        assert!(c.field().particles().iter().any(|p| p.pos != Vec2::ZERO));
        assert_eq!(c.scheduler().requested(), 1);
    }

    #[test]
    fn failed_switch_leaves_the_attempted_mode_idle() {
        let mut c = Controller::new(
            DrawList::new(),
            ManualScheduler::new(),
            ManualPointer::failing(),
            Dimensions::new(100.0, 100.0),
            BackdropOptions::default(),
        );
        c.activate(Mode::OrbitalRings).unwrap();
        assert!(c.switch_mode(Mode::Waves).is_err());
        assert_eq!(c.mode(), Mode::Waves);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn visibility_is_ignored_when_pausing_is_disabled() {
        let mut c = controller(BackdropOptions {
            pause_when_hidden: false,
            ..BackdropOptions::default()
        });
        c.activate(Mode::Particles).unwrap();
        c.set_visible(false).unwrap();
        assert!(c.is_running());
        assert!(c.is_tracking_pointer());
    }
}
