//! Scripted scene constants.
//!
//! Every tuning value of the animation lives here: actor speeds, spin
//! rate, hold duration, trail bounds, the static letter cells and the
//! fixed camera pose.

use glam::{Vec2, Vec3};

// ---------------------------------------------------------------------------
// Sequencer Timing
// ---------------------------------------------------------------------------
/// Base linear speed of every moving block, units per millisecond (0.5/s).
pub const BLOCK_SPEED: f32 = 0.5 / 1000.0;
/// Visual spin rate: one radian per this many milliseconds.
pub const SPIN_MS_PER_RADIAN: f64 = 250.0;
/// Pause after all actors complete, before the scene resets.
pub const HOLD_MS: f64 = 5_000.0;

// ---------------------------------------------------------------------------
// Actors / Trail
// ---------------------------------------------------------------------------
pub const ACTOR_COUNT: usize = 12;
/// Hard cap on recorded trail squares; emissions past this are dropped.
pub const TRAIL_CAPACITY: usize = 1000;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------
/// Half extent of both the flat squares and the moving cuboids.
pub const BLOCK_HALF_EXTENT: f32 = 0.1;

/// Fixed letter cells drawn every frame, unrotated, at z = 0.
pub const STATIC_QUADS: [Vec2; 6] = [
    Vec2::new(-3.0, 1.5),
    Vec2::new(-2.5, 1.5),
    Vec2::new(-3.0, -1.5),
    Vec2::new(-1.3, 1.5),
    Vec2::new(0.5, 1.5),
    Vec2::new(2.3, 1.5),
];

// ---------------------------------------------------------------------------
// Camera / Window
// ---------------------------------------------------------------------------
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, -5.0, -5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_UP: Vec3 = Vec3::Y;
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 100.0;
pub const DEFAULT_ASPECT: f32 = 1.6;

pub const WINDOW_TITLE: &str = "logo-sequencer";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;
