//! Static course geometry
//!
//! The course is a set of axis-aligned rectangles in screen space (y grows
//! downward): solid platforms, lethal hazards and a finish zone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FALL_MARGIN, VIEW_HEIGHT};

/// An axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict containment: a point exactly on an edge is outside
    pub fn contains_open(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Nearest point of `rect` to `point` (the point itself when inside)
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect: &Rect) -> Vec2 {
    Vec2::new(
        point.x.clamp(rect.x, rect.right()),
        point.y.clamp(rect.y, rect.bottom()),
    )
}

/// A circle overlapping a platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformHit {
    /// Index into `Level::platforms`
    pub index: usize,
    /// Closest point on the platform to the circle centre
    pub closest: Vec2,
    /// Circle centre minus `closest`
    pub offset: Vec2,
}

/// The course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub spawn: Vec2,
    /// Solid ground, in authored order
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub finish: Rect,
    /// Anything below this line has fallen off the course
    pub fall_limit_y: f32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(140.0, 260.0),
            platforms: vec![
                Rect::new(0.0, 420.0, 420.0, 140.0),
                Rect::new(420.0, 380.0, 180.0, 180.0),
                Rect::new(600.0, 340.0, 140.0, 220.0),
                Rect::new(740.0, 380.0, 140.0, 180.0),
                Rect::new(880.0, 420.0, 220.0, 140.0),
                Rect::new(1040.0, 400.0, 260.0, 160.0),
                Rect::new(1310.0, 360.0, 220.0, 200.0),
                Rect::new(1570.0, 320.0, 220.0, 240.0),
                Rect::new(1820.0, 360.0, 300.0, 200.0),
                Rect::new(2120.0, 420.0, 320.0, 140.0),
                Rect::new(2440.0, 360.0, 360.0, 200.0),
            ],
            hazards: vec![
                Rect::new(520.0, 376.0, 40.0, 44.0),
                Rect::new(740.0, 374.0, 140.0, 6.0),
                Rect::new(1560.0, 316.0, 40.0, 44.0),
                Rect::new(1640.0, 316.0, 40.0, 44.0),
                Rect::new(1720.0, 316.0, 40.0, 44.0),
            ],
            finish: Rect::new(2670.0, 270.0, 120.0, 210.0),
            fall_limit_y: VIEW_HEIGHT + FALL_MARGIN,
        }
    }
}

impl Level {
    /// First platform, in authored order, overlapping the circle.
    ///
    /// There is no nearest-match search: where platforms overlap, the one
    /// declared first always wins.
    pub fn find_platform_collision(&self, point: Vec2, radius: f32) -> Option<PlatformHit> {
        self.platforms
            .iter()
            .enumerate()
            .find_map(|(index, rect)| {
                let closest = closest_point_on_rect(point, rect);
                let offset = point - closest;
                (offset.length_squared() < radius * radius).then_some(PlatformHit {
                    index,
                    closest,
                    offset,
                })
            })
    }

    pub fn is_inside_hazard(&self, point: Vec2) -> bool {
        self.hazards.iter().any(|h| h.contains_open(point))
    }

    pub fn is_inside_finish(&self, point: Vec2) -> bool {
        self.finish.contains_open(point)
    }

    /// Right edge of the course
    pub fn extent(&self) -> f32 {
        self.platforms
            .iter()
            .map(Rect::right)
            .fold(self.finish.right(), f32::max)
    }
}
