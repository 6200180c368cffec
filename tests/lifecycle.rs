use std::cell::Cell;
use std::rc::Rc;

use backdrop::config::{BackdropOptions, Mode};
use backdrop::engine::{Controller, FrameHandle, FrameScheduler, Phase, PointerSource, PointerState};
use backdrop::error::BackdropError;
use backdrop::field::Dimensions;
use backdrop::platform::headless::{ManualPointer, ManualScheduler};
use backdrop::render::{DrawCommand, DrawList};
use glam::Vec2;

type Headless = Controller<DrawList, ManualScheduler, ManualPointer>;

fn options() -> BackdropOptions {
    BackdropOptions {
        seed: Some(7),
        ..BackdropOptions::default()
    }
}

fn engine(width: f32, height: f32, options: BackdropOptions) -> Headless {
    Controller::new(
        DrawList::new(),
        ManualScheduler::new(),
        ManualPointer::new(),
        Dimensions::new(width, height),
        options,
    )
}

fn fill_circles(commands: &[DrawCommand]) -> Vec<(Vec2, f32)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillCircle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

#[test]
fn particles_starting_near_pointer_render_larger_than_their_base() {
    let pointer = Vec2::new(400.0, 300.0);
    for seed in 0..50 {
        let mut c = engine(
            800.0,
            600.0,
            BackdropOptions {
                seed: Some(seed),
                ..options()
            },
        );
        c.activate(Mode::Particles).unwrap();
        c.pointer_source().move_to(pointer);
        c.target_mut().take_commands();
        let initial = c.field().particles().to_vec();

        c.frame(16.0);

        let drawn = fill_circles(c.target().commands());
        assert_eq!(drawn.len(), 40);
        for (p, (center, radius)) in initial.iter().zip(drawn) {
            assert_eq!(p.pos, center);
            if p.pos.distance(pointer) < 300.0 {
                assert!(radius > p.radius, "seed {seed} particle {} at {:?}", p.index, p.pos);
            } else {
                assert_eq!(radius, p.radius);
            }
        }
        assert_ne!(c.field().particles(), &initial[..]);
    }
}

#[test]
fn stop_leaves_nothing_scheduled_and_draws_nothing() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::FloatingOrbs).unwrap();
    c.frame(0.0);
    c.frame(16.0);
    c.deactivate();

    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.is_tick_scheduled());
    assert_eq!(c.scheduler().cancelled(), 1);
    assert!(!c.pointer_source().is_subscribed());

    c.target_mut().take_commands();
    // a callback that was already in flight still arrives
    c.frame(32.0);
    c.frame(48.0);
    assert!(c.target().commands().is_empty());
    assert!(!c.is_tick_scheduled());
}

#[test]
fn repeated_activation_keeps_a_single_loop() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::Waves).unwrap();
    c.activate(Mode::Waves).unwrap();
    assert!(c.is_tick_scheduled());
    // each activation cancels the previous loop before scheduling its own
    assert_eq!(c.scheduler().requested(), 2);
    assert_eq!(c.scheduler().cancelled(), 1);
}

#[test]
fn mode_switch_replaces_the_field() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::Particles).unwrap();
    assert_eq!(c.field().len(), 40);

    c.switch_mode(Mode::MenuBackdrop).unwrap();
    assert_eq!(c.mode(), Mode::MenuBackdrop);
    assert_eq!(c.field().len(), 60);
    for p in c.field().particles() {
        assert!((1.0..=5.0).contains(&p.radius));
        assert!(p.vel.x.abs() <= 0.75 && p.vel.y.abs() <= 0.75);
    }

    c.switch_mode(Mode::Waves).unwrap();
    assert!(c.field().is_empty());
    assert!(c.is_running());
}

#[test]
fn only_interactive_modes_track_the_pointer() {
    for mode in Mode::ALL {
        let mut c = engine(640.0, 480.0, options());
        c.activate(mode).unwrap();
        assert_eq!(c.is_tracking_pointer(), mode.spec().interactive, "{mode}");
        assert_eq!(
            c.pointer_source().subscriptions(),
            usize::from(mode.spec().interactive)
        );
    }
}

#[test]
fn switching_to_a_static_mode_drops_the_pointer() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::NeedleField).unwrap();
    c.pointer_source().move_to(Vec2::new(10.0, 10.0));
    c.switch_mode(Mode::OrbitalRings).unwrap();
    assert!(!c.pointer_source().is_subscribed());

    c.target_mut().take_commands();
    c.frame(0.0);
    assert!(c.target().draw_count() > 0);
}

#[test]
fn shrinking_resize_brings_particles_back_in_bounds() {
    let small = Dimensions::new(400.0, 300.0);

    let mut wrapped = engine(800.0, 600.0, options());
    wrapped.activate(Mode::Particles).unwrap();
    wrapped.frame(0.0);
    wrapped.resize(small.width, small.height).unwrap();
    wrapped.frame(16.0);
    assert!(wrapped.field().particles().iter().all(|p| small.contains(p.pos)));

    let mut bounced = engine(800.0, 600.0, options());
    bounced.activate(Mode::MenuBackdrop).unwrap();
    bounced.frame(0.0);
    bounced.resize(small.width, small.height).unwrap();
    bounced.frame(16.0);
    for p in bounced.field().particles() {
        assert!((0.0..=small.width).contains(&p.pos.x));
        assert!((0.0..=small.height).contains(&p.pos.y));
    }
}

#[test]
fn resize_updates_the_backing_buffer_without_reseeding() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::BlobField).unwrap();
    let before = c.field().particles().to_vec();

    c.resize(1024.0, 768.0).unwrap();
    assert_eq!(c.dims(), Dimensions::new(1024.0, 768.0));
    assert_eq!(c.target().dims(), Dimensions::new(1024.0, 768.0));
    assert_eq!(c.field().particles(), &before[..]);
    assert_eq!(c.scheduler().requested(), 1);
}

#[test]
fn reseed_on_resize_restarts_with_a_fresh_field() {
    let mut c = engine(
        800.0,
        600.0,
        BackdropOptions {
            reseed_on_resize: true,
            ..options()
        },
    );
    c.activate(Mode::Particles).unwrap();
    c.resize(200.0, 100.0).unwrap();

    assert!(c.is_running());
    assert_eq!(c.field().len(), 40);
    for p in c.field().particles() {
        assert!((0.0..=200.0).contains(&p.pos.x) && (0.0..=100.0).contains(&p.pos.y));
    }
    assert_eq!(c.scheduler().requested(), 2);
    assert_eq!(c.scheduler().cancelled(), 1);
}

#[test]
fn zero_sized_surface_skips_frames_but_keeps_looping() {
    let mut c = engine(0.0, 0.0, options());
    c.activate(Mode::Particles).unwrap();
    c.target_mut().take_commands();
    c.frame(0.0);
    assert!(c.target().commands().is_empty());
    assert!(c.is_tick_scheduled());

    c.resize(320.0, 240.0).unwrap();
    c.frame(16.0);
    assert!(c.target().draw_count() > 0);
}

#[test]
fn field_seeded_after_layout_spreads_over_the_surface() {
    let mut c = engine(0.0, 0.0, options());
    c.activate(Mode::Particles).unwrap();
    assert!(c.field().is_empty());

    c.resize(640.0, 480.0).unwrap();
    let particles = c.field().particles();
    assert_eq!(particles.len(), 40);
    let spread = particles.iter().filter(|p| p.pos.x > 320.0 || p.pos.y > 240.0).count();
    assert!(spread > 0, "field clumped at the origin");
}

#[test]
fn hidden_surface_pauses_loop_and_pointer() {
    let mut c = engine(800.0, 600.0, options());
    c.activate(Mode::Particles).unwrap();
    c.frame(0.0);
    let field = c.field().particles().to_vec();

    c.set_visible(false).unwrap();
    assert_eq!(c.phase(), Phase::Paused);
    assert!(!c.is_tick_scheduled());
    assert!(!c.pointer_source().is_subscribed());
    assert_eq!(c.field().particles(), &field[..]);

    c.target_mut().take_commands();
    c.frame(16.0);
    assert!(c.target().commands().is_empty());

    c.set_visible(true).unwrap();
    assert!(c.is_running());
    assert!(c.is_tick_scheduled());
    assert!(c.pointer_source().is_subscribed());
    c.frame(32.0);
    assert!(c.target().draw_count() > 0);
}

#[test]
fn seeding_is_reproducible_for_a_fixed_seed() {
    let mut a = engine(800.0, 600.0, options());
    let mut b = engine(800.0, 600.0, options());
    a.activate(Mode::AttractorField).unwrap();
    b.activate(Mode::AttractorField).unwrap();
    assert_eq!(a.field().particles(), b.field().particles());
}

#[derive(Default, Clone)]
struct Probe {
    cancelled: Rc<Cell<usize>>,
    subscribed: Rc<Cell<bool>>,
}

struct ProbeScheduler(Probe);

impl FrameScheduler for ProbeScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, BackdropError> {
        Ok(FrameHandle(1))
    }
    fn cancel(&mut self, _handle: FrameHandle) {
        self.0.cancelled.set(self.0.cancelled.get() + 1);
    }
}

struct ProbePointer(Probe);

impl PointerSource for ProbePointer {
    fn subscribe(&mut self, _state: PointerState) -> Result<(), BackdropError> {
        self.0.subscribed.set(true);
        Ok(())
    }
    fn unsubscribe(&mut self) {
        self.0.subscribed.set(false);
    }
}

#[test]
fn dropping_the_controller_releases_loop_and_listener() {
    let probe = Probe::default();
    let mut c = Controller::new(
        DrawList::new(),
        ProbeScheduler(probe.clone()),
        ProbePointer(probe.clone()),
        Dimensions::new(800.0, 600.0),
        options(),
    );
    c.activate(Mode::LatticeArrows).unwrap();
    assert!(probe.subscribed.get());

    drop(c);
    assert_eq!(probe.cancelled.get(), 1);
    assert!(!probe.subscribed.get());
}
