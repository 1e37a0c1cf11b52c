//! Game session
//!
//! Owns everything one running game needs and performs exactly one
//! simulation step per presented frame. The render side only ever sees the
//! read-only [`FrameView`] produced after the step.

use glam::Vec2;
use serde::Serialize;

use crate::platform::{FrameClock, InputAdapter};
use crate::sim::{Hud, Level, RagdollPart, SimEvent, SimState, TickInput, tick};
use crate::tuning::Tuning;

/// Rider pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub pos: Vec2,
    pub angle: f32,
    /// Where the stick meets the ground
    pub tip: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    /// Absent while crashed (the ragdoll is drawn instead)
    pub pose: Option<Pose>,
    pub ragdoll: Vec<RagdollPart>,
    pub camera_x: f32,
    pub hud: Hud,
    /// Fraction of the course covered, 0-1
    pub progress: f32,
}

pub struct Session {
    state: SimState,
    level: Level,
    tuning: Tuning,
    input: InputAdapter,
    clock: FrameClock,
    frames: u64,
}

impl Session {
    pub fn new(level: Level, tuning: Tuning) -> Self {
        let state = SimState::new(&level, &tuning);
        let clock = FrameClock::new(tuning.max_dt);
        log::info!(
            "Session started: {} platforms, {} hazards",
            level.platforms.len(),
            level.hazards.len()
        );
        Self {
            state,
            level,
            tuning,
            input: InputAdapter::new(),
            clock,
            frames: 0,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Key state, written by the host's event handlers between frames
    pub fn input_mut(&mut self) -> &mut InputAdapter {
        &mut self.input
    }

    /// Animation-frame callback: derive dt from the timestamp, step once
    pub fn frame(&mut self, now_ms: f64) -> FrameView {
        let dt = self.clock.advance(now_ms);
        let input = self.input.snapshot();
        self.step(dt, &input)
    }

    /// Step with an explicit dt and input (fixed-step harnesses, replays)
    pub fn step(&mut self, dt: f32, input: &TickInput) -> FrameView {
        let before = self.state.status_kind();
        let events = tick(&mut self.state, input, dt, &self.level, &self.tuning);
        self.frames += 1;

        for event in &events {
            match event {
                SimEvent::Restarted => log::info!("Restarted"),
                SimEvent::Damaged { amount, health } => {
                    log::debug!("Hit for {amount:.1}, health {health:.1}")
                }
                SimEvent::Crashed { cause, impact } => log::info!(
                    "Crashed ({cause:?}, impact {impact:.0}) at distance {:.0}",
                    self.state.hero.distance
                ),
                SimEvent::Finished { time } => log::info!("Victory! {time:.2}s"),
            }
        }

        let after = self.state.status_kind();
        if before != after {
            log::debug!("Status {before:?} -> {after:?} on frame {}", self.frames);
        }

        self.view()
    }

    /// Read-only snapshot of the current state
    pub fn view(&self) -> FrameView {
        let hero = &self.state.hero;
        let pose = self.state.ragdoll_parts().is_empty().then(|| Pose {
            pos: hero.pos,
            angle: hero.angle,
            tip: self.state.pogo.tip(hero),
        });
        let extent = self.level.extent() - self.level.spawn.x;
        let progress = if extent > 0.0 {
            (hero.distance / extent).clamp(0.0, 1.0)
        } else {
            0.0
        };

        FrameView {
            pose,
            ragdoll: self.state.ragdoll_parts().to_vec(),
            camera_x: self.state.camera_x,
            hud: self.state.hud(),
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::sim::StatusKind;

    #[test]
    fn test_frame_uses_clock_and_input() {
        let mut session = Session::new(Level::default(), Tuning::default());
        // First frame: dt 0, nothing moves
        let view = session.frame(1000.0);
        assert_eq!(view.pose.unwrap().pos, Level::default().spawn);

        session.input_mut().key_down(Key::Right);
        let view = session.frame(1016.0);
        assert!(view.pose.unwrap().pos.y > Level::default().spawn.y);
        assert!(session.state().hero.angular_vel > 0.0);
        assert_eq!(session.frames(), 2);
    }

    #[test]
    fn test_restart_key_resets_and_is_consumed() {
        let mut session = Session::new(Level::default(), Tuning::default());
        for i in 0..30 {
            session.frame(i as f64 * 16.0);
        }
        assert!(session.state().hero.time > 0.0);

        session.input_mut().key_down(Key::Restart);
        session.frame(30.0 * 16.0);
        assert_eq!(session.state().hero.time, 0.0);

        // Key still held, but the latch was consumed
        let view = session.frame(31.0 * 16.0);
        assert!(session.state().hero.time > 0.0);
        assert_eq!(view.hud.status, StatusKind::Alive);
    }

    #[test]
    fn test_view_switches_to_ragdoll() {
        let mut level = Level::default();
        level.hazards.push(crate::sim::Rect::new(100.0, 240.0, 80.0, 40.0));
        let mut session = Session::new(level, Tuning::default());
        let view = session.step(1.0 / 60.0, &TickInput::default());
        assert!(view.pose.is_none());
        assert_eq!(view.ragdoll.len(), 3);
        assert_eq!(view.hud.status, StatusKind::Ragdoll);
        assert_eq!(view.hud.banner().as_deref(), Some("You crashed!"));
    }
}
