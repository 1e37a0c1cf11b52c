//! Crash ragdoll
//!
//! On a crash the rider breaks into three loose particles (head, torso,
//! legs) that fly apart and bounce around the course. There are no joints
//! and the particles never touch each other; this is a visual effect only.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Response, resolve_circle};
use super::geometry::Level;
use super::state::Hero;
use crate::tuning::Tuning;

pub const HEAD_COLOR: u32 = 0xF3F3F3;
pub const TORSO_COLOR: u32 = 0x454ADE;
pub const LEGS_COLOR: u32 = 0xF0B429;

/// A loose ragdoll particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RagdollPart {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// RGB color for rendering
    pub color: u32,
}

/// Break the rider apart.
///
/// Head and legs are kicked in opposite directions along the tilt, harder for
/// bigger impacts (but never less than the minimum kick); the torso keeps the
/// rider's velocity.
pub fn spawn_parts(hero: &Hero, impact: f32, tuning: &Tuning) -> [RagdollPart; 3] {
    let kick = tuning.ragdoll_min_kick.max(impact * tuning.ragdoll_kick_scale);
    let (sin, cos) = hero.angle.sin_cos();
    let Vec2 { x, y } = hero.pos;
    let Vec2 { x: vx, y: vy } = hero.vel;

    [
        RagdollPart {
            pos: Vec2::new(x, y - 40.0),
            vel: Vec2::new(vx + cos * kick, vy - (sin * kick).abs()),
            radius: 14.0,
            color: HEAD_COLOR,
        },
        RagdollPart {
            pos: hero.pos,
            vel: hero.vel,
            radius: 18.0,
            color: TORSO_COLOR,
        },
        RagdollPart {
            pos: Vec2::new(x, y + 36.0),
            vel: Vec2::new(vx - cos * kick * 0.4, vy + (sin * kick).abs()),
            radius: 10.0,
            color: LEGS_COLOR,
        },
    ]
}

/// Advance every particle independently: gravity, drag, move, bounce
pub fn step_ragdoll(parts: &mut [RagdollPart], dt: f32, level: &Level, tuning: &Tuning) {
    let response = Response::Bounce {
        restitution: tuning.ragdoll_restitution,
    };
    for part in parts.iter_mut() {
        part.vel.y += tuning.gravity * dt;
        part.vel *= tuning.ragdoll_drag;
        part.pos += part.vel * dt;

        if let Some(hit) = level.find_platform_collision(part.pos, part.radius) {
            resolve_circle(
                &mut part.pos,
                &mut part.vel,
                &hit,
                part.radius,
                tuning.ragdoll_skin,
                response,
            );
        }
    }
}
