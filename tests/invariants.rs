//! Whole-run properties of the simulation

use glam::Vec2;
use proptest::prelude::*;

use pogo_hero::Tuning;
use pogo_hero::sim::{Level, RunStatus, SimState, StatusKind, TickInput, tick};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, charge)| TickInput {
        left,
        right,
        charge,
        restart: false,
    })
}

fn frames_strategy(max: usize) -> impl Strategy<Value = Vec<(f32, TickInput)>> {
    prop::collection::vec((0.001f32..=0.04, input_strategy()), 1..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bounded_state_holds(frames in frames_strategy(400)) {
        let level = Level::default();
        let tuning = Tuning::default();
        let mut state = SimState::new(&level, &tuning);

        for (dt, input) in &frames {
            tick(&mut state, input, *dt, &level, &tuning);
            prop_assert!((0.0..=tuning.energy_max).contains(&state.hero.energy));
            prop_assert!((0.0..=state.pogo.max_compression).contains(&state.pogo.compression));
            prop_assert!(state.hero.angle.abs() <= tuning.max_angle);
            prop_assert!(state.camera_x >= 0.0);
        }
    }

    #[test]
    fn distance_never_decreases_while_alive(frames in frames_strategy(400)) {
        let level = Level::default();
        let tuning = Tuning::default();
        let mut state = SimState::new(&level, &tuning);

        let mut last = state.hero.distance;
        for (dt, input) in &frames {
            let was_alive = state.is_alive();
            tick(&mut state, input, *dt, &level, &tuning);
            if was_alive {
                prop_assert!(state.hero.distance >= last);
            } else {
                prop_assert_eq!(state.hero.distance, last);
            }
            last = state.hero.distance;
        }
    }

    #[test]
    fn identical_inputs_give_identical_runs(frames in frames_strategy(300)) {
        let level = Level::default();
        let tuning = Tuning::default();
        let mut a = SimState::new(&level, &tuning);
        let mut b = SimState::new(&level, &tuning);

        for (dt, input) in &frames {
            let ea = tick(&mut a, input, *dt, &level, &tuning);
            let eb = tick(&mut b, input, *dt, &level, &tuning);
            prop_assert_eq!(ea, eb);
        }
        prop_assert_eq!(a.hero.pos.x.to_bits(), b.hero.pos.x.to_bits());
        prop_assert_eq!(a.hero.pos.y.to_bits(), b.hero.pos.y.to_bits());
        prop_assert_eq!(a.hero.vel.x.to_bits(), b.hero.vel.x.to_bits());
        prop_assert_eq!(a.hero.vel.y.to_bits(), b.hero.vel.y.to_bits());
        prop_assert_eq!(a.hero.angle.to_bits(), b.hero.angle.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn restart_always_returns_to_spawn(frames in frames_strategy(300)) {
        let level = Level::default();
        let tuning = Tuning::default();
        let fresh = SimState::new(&level, &tuning);
        let mut state = fresh.clone();

        for (dt, input) in &frames {
            tick(&mut state, input, *dt, &level, &tuning);
        }
        let restart = TickInput { restart: true, ..Default::default() };
        tick(&mut state, &restart, 0.016, &level, &tuning);

        prop_assert_eq!(&state, &fresh);
        prop_assert_eq!(state.hero.vel, Vec2::ZERO);
        prop_assert!(state.ragdoll_parts().is_empty());
        prop_assert_eq!(
            serde_json::to_string(&state).unwrap(),
            serde_json::to_string(&fresh).unwrap()
        );
    }
}

#[test]
fn hazard_in_the_way_ends_the_run_before_the_next_frame() {
    let mut level = Level::default();
    level.hazards = vec![pogo_hero::sim::Rect::new(100.0, 200.0, 80.0, 80.0)];
    let tuning = Tuning::default();

    for input in [
        TickInput::default(),
        TickInput { left: true, ..Default::default() },
        TickInput { right: true, charge: true, ..Default::default() },
    ] {
        let mut state = SimState::new(&level, &tuning);
        tick(&mut state, &input, 1.0 / 60.0, &level, &tuning);
        assert_eq!(state.status_kind(), StatusKind::Ragdoll);
    }
}

#[test]
fn finishing_freezes_the_clock() {
    let level = Level::default();
    let tuning = Tuning::default();
    let mut state = SimState::new(&level, &tuning);
    state.hero.pos = Vec2::new(2700.0, 320.0);
    state.hero.distance = 2500.0;
    state.hero.time = 20.0;

    let input = TickInput { right: true, ..Default::default() };
    tick(&mut state, &input, 0.02, &level, &tuning);
    let RunStatus::Finished { time } = state.status else {
        panic!("expected to finish, got {:?}", state.status);
    };
    assert_eq!(time, state.hero.time);

    let (distance, hero_time) = (state.hero.distance, state.hero.time);
    for _ in 0..50 {
        tick(&mut state, &input, 0.02, &level, &tuning);
    }
    assert_eq!(state.hero.distance, distance);
    assert_eq!(state.hero.time, hero_time);
    assert_eq!(state.finish_time(), Some(time));
}

#[test]
fn idle_rider_stands_on_the_first_platform() {
    let level = Level::default();
    let tuning = Tuning::default();
    let mut state = SimState::new(&level, &tuning);
    for _ in 0..90 {
        tick(&mut state, &TickInput::default(), 1.0 / 60.0, &level, &tuning);
    }
    assert!(state.is_alive());
    // The stick holds the body well clear of the ground
    assert!(state.hero.pos.y < 420.0 - tuning.torso_radius);
    assert_eq!(state.hero.health, tuning.health_start);
}

#[test]
fn session_replay_matches_direct_ticks() {
    use pogo_hero::Session;
    use pogo_hero::script::InputScript;

    let level = Level::default();
    let tuning = Tuning::default();
    let script = InputScript::demo();
    let dt = 1.0 / 60.0;

    let mut session = Session::new(level.clone(), tuning.clone());
    let mut state = SimState::new(&level, &tuning);
    for input in script.inputs() {
        session.step(dt, &input);
        tick(&mut state, &input, dt, &level, &tuning);
    }
    assert_eq!(session.state(), &state);
    assert_eq!(session.frames(), script.total_frames());

    let view = session.view();
    assert_eq!(view.hud, state.hud());
    assert!((0.0..=1.0).contains(&view.progress));
}
