//! Body integration
//!
//! Gravity, per-tick damping, steering and the tilt limit, followed later in
//! the step by a semi-implicit Euler position update.

use std::f32::consts::FRAC_PI_2;

use super::state::Hero;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Update velocities and orientation for one step.
///
/// Steering both spins the body and pushes it sideways along the
/// perpendicular to the stick, so leaning is how the rider travels.
pub fn integrate_velocity(hero: &mut Hero, input: &TickInput, dt: f32, tuning: &Tuning) {
    hero.vel.y += tuning.gravity * dt;
    hero.vel.x *= tuning.air_resistance;
    hero.angular_vel *= tuning.angle_damping;

    let lateral = tuning.steer_thrust * dt * (hero.angle + FRAC_PI_2).cos();
    if input.left {
        hero.angular_vel -= tuning.steer_torque * dt;
        hero.vel.x -= lateral;
    }
    if input.right {
        hero.angular_vel += tuning.steer_torque * dt;
        hero.vel.x += lateral;
    }

    hero.angle = (hero.angle + hero.angular_vel * dt).clamp(-tuning.max_angle, tuning.max_angle);
}

/// Advance position with the already-updated velocity
#[inline]
pub fn integrate_position(hero: &mut Hero, dt: f32) {
    hero.pos += hero.vel * dt;
}
