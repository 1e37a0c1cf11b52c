//! Collision response for circles against platforms
//!
//! Every collider in the game is a circle: the rider's torso while alive and
//! each ragdoll particle after a crash. Contacts come from
//! [`Level::find_platform_collision`]; this module pushes the circle out and
//! fixes up its velocity.

use glam::Vec2;

use super::geometry::{Level, PlatformHit};
use super::state::Hero;
use crate::tuning::Tuning;

/// Normal used when the circle centre sits exactly on the contact point
pub const FALLBACK_NORMAL: Vec2 = Vec2::NEG_Y;

/// How the normal component of velocity is treated on contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Normal velocity into the surface is removed
    Inelastic,
    /// Normal velocity into the surface is reflected, scaled by restitution
    Bounce { restitution: f32 },
}

/// Unit normal pointing from the surface towards the circle
#[inline]
pub fn contact_normal(offset: Vec2) -> Vec2 {
    offset.try_normalize().unwrap_or(FALLBACK_NORMAL)
}

/// Remove (`restitution = 0`) or reflect the part of `velocity` heading into the surface
///
/// v' = v - (1 + e)(v·n)n, applied only when v·n < 0
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let vn = velocity.dot(normal);
    if vn < 0.0 {
        velocity - (1.0 + restitution) * vn * normal
    } else {
        velocity
    }
}

/// Push a circle out of a platform and apply the velocity response.
///
/// The circle ends up exactly `radius + skin` from the contact point along
/// the normal. Tangential velocity is untouched. Returns the normal velocity
/// measured before the response (negative when moving into the surface).
pub fn resolve_circle(
    pos: &mut Vec2,
    vel: &mut Vec2,
    hit: &PlatformHit,
    radius: f32,
    skin: f32,
    response: Response,
) -> f32 {
    let normal = contact_normal(hit.offset);
    *pos = hit.closest + normal * (radius + skin);

    let vn = vel.dot(normal);
    let restitution = match response {
        Response::Inelastic => 0.0,
        Response::Bounce { restitution } => restitution,
    };
    *vel = reflect_velocity(*vel, normal, restitution);
    vn
}

/// Outcome of the torso striking a platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsoHit {
    /// Normal speed at impact
    pub impact: f32,
    pub damage: f32,
    /// Hit hard enough, or health ran out
    pub lethal: bool,
}

/// Collide the rider's torso with the course and apply damage
pub fn collide_torso(hero: &mut Hero, level: &Level, tuning: &Tuning) -> Option<TorsoHit> {
    let hit = level.find_platform_collision(hero.pos, tuning.torso_radius)?;
    let vn = resolve_circle(
        &mut hero.pos,
        &mut hero.vel,
        &hit,
        tuning.torso_radius,
        tuning.torso_skin,
        Response::Inelastic,
    );

    let impact = vn.abs();
    let damage = (impact * tuning.damage_per_speed).min(tuning.max_hit_damage);
    hero.health -= damage;

    Some(TorsoHit {
        impact,
        damage,
        lethal: hero.health <= 0.0 || impact > tuning.lethal_impact,
    })
}
