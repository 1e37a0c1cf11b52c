//! Simulation step
//!
//! One call advances the run by one frame's clamped dt. The status variant
//! picks the update rules: the full rider pipeline while alive, loose
//! particles while crashed, nothing once finished.

use serde::{Deserialize, Serialize};

use super::collision::collide_torso;
use super::geometry::Level;
use super::integrator::{integrate_position, integrate_velocity};
use super::pogo::step_pogo;
use super::ragdoll::{spawn_parts, step_ragdoll};
use super::state::{CrashCause, RunStatus, SimEvent, SimState};
use crate::tuning::Tuning;

/// Input for a single step, sampled once by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Tilt / steer left
    pub left: bool,
    /// Tilt / steer right
    pub right: bool,
    /// Compress the spring
    pub charge: bool,
    /// Start over from the spawn point
    pub restart: bool,
}

/// Advance the simulation by one step.
///
/// `dt` is clamped to `[0, tuning.max_dt]`. A restart request wins over
/// everything else and consumes the step.
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    dt: f32,
    level: &Level,
    tuning: &Tuning,
) -> Vec<SimEvent> {
    let mut events = Vec::new();

    if input.restart {
        restart(state, level, tuning);
        events.push(SimEvent::Restarted);
        return events;
    }

    let dt = dt.clamp(0.0, tuning.max_dt);

    match state.status {
        RunStatus::Alive => tick_alive(state, input, dt, level, tuning, &mut events),
        RunStatus::Ragdoll { ref mut parts, .. } => step_ragdoll(parts, dt, level, tuning),
        RunStatus::Finished { .. } => {}
    }

    events
}

/// Reset to a fresh run at the spawn point
pub fn restart(state: &mut SimState, level: &Level, tuning: &Tuning) {
    *state = SimState::new(level, tuning);
    log::debug!("Run restarted at {:?}", level.spawn);
}

fn tick_alive(
    state: &mut SimState,
    input: &TickInput,
    dt: f32,
    level: &Level,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) {
    let hero = &mut state.hero;
    hero.time += dt;

    integrate_velocity(hero, input, dt, tuning);
    let pogo = step_pogo(hero, &mut state.pogo, input, dt, level, tuning);
    integrate_position(hero, dt);
    hero.distance = hero.distance.max(hero.pos.x - level.spawn.x);

    if let Some(force) = pogo.released {
        log::trace!("Spring fired, force {force:.0}, energy {:.2}", hero.energy);
    }

    // First failure wins: torso impact, then hazards, then falling off
    let mut failure = None;
    if let Some(hit) = collide_torso(hero, level, tuning) {
        if hit.damage > 0.0 {
            events.push(SimEvent::Damaged {
                amount: hit.damage,
                health: hero.health,
            });
        }
        if hit.lethal {
            failure = Some((CrashCause::Impact, hit.impact));
        }
    }
    // The tip is the one the spring probed with, before the body moved
    let failure = failure.or_else(|| {
        if level.is_inside_hazard(hero.pos) || level.is_inside_hazard(pogo.tip) {
            Some((CrashCause::Hazard, tuning.hazard_impact))
        } else if hero.pos.y > level.fall_limit_y {
            Some((CrashCause::OutOfBounds, tuning.fall_impact))
        } else {
            None
        }
    });

    match failure {
        Some((cause, impact)) => crash(state, cause, impact, tuning, events),
        None if level.is_inside_finish(state.hero.pos) => {
            let time = state.hero.time;
            state.status = RunStatus::Finished { time };
            events.push(SimEvent::Finished { time });
            log::debug!("Finished in {time:.2}s");
        }
        None => {}
    }

    state.camera_x = (state.hero.pos.x - tuning.view_width / 2.0).clamp(0.0, tuning.camera_max_x);
}

fn crash(
    state: &mut SimState,
    cause: CrashCause,
    impact: f32,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) {
    let parts = spawn_parts(&state.hero, impact, tuning);
    state.status = RunStatus::Ragdoll { parts, cause };
    events.push(SimEvent::Crashed { cause, impact });
    log::debug!("Crashed ({cause:?}, impact {impact:.0})");
}
