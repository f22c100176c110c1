//! Fundamental geometric and simulation types.
//!
//! The ground plane is 2D `(x, y)`; in 3D space it maps to `(x, height, y)`,
//! so `Vec3::y` is always height above the ground.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Project a 3D world point onto the ground plane.
pub fn ground(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.z)
}

/// Lift a ground-plane point to the given height.
pub fn lift(point: Vec2, height: f32) -> Vec3 {
    Vec3::new(point.x, height, point.y)
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated so far.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Square play area centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub half_extent: f32,
    /// Inset from the edge that entities may not cross.
    pub margin: f32,
}

impl ArenaBounds {
    pub fn new(half_extent: f32, margin: f32) -> Self {
        Self {
            half_extent,
            margin,
        }
    }

    /// Largest absolute coordinate an entity may occupy.
    pub fn limit(&self) -> f32 {
        (self.half_extent - self.margin).max(0.0)
    }

    /// Clamp a ground-plane point into the playable area.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        let limit = self.limit();
        point.clamp(Vec2::splat(-limit), Vec2::splat(limit))
    }

    /// Whether a ground-plane point lies inside the playable area.
    pub fn contains(&self, point: Vec2) -> bool {
        let limit = self.limit();
        point.x.abs() <= limit && point.y.abs() <= limit
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(
            crate::constants::ARENA_HALF_EXTENT,
            crate::constants::ARENA_MARGIN,
        )
    }
}

/// First-person view: eye position plus yaw/pitch orientation.
///
/// Yaw 0 looks down +z (ground-plane +y); positive yaw turns toward +x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation around the vertical axis (radians).
    pub yaw: f32,
    /// Rotation above (+) or below (-) the horizon (radians).
    pub pitch: f32,
}

impl Camera {
    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Unit view direction flattened onto the ground plane.
    pub fn ground_forward(&self) -> Vec2 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec2::new(sin_yaw, cos_yaw)
    }

    /// Unit ground-plane direction to the viewer's right.
    pub fn ground_right(&self) -> Vec2 {
        let forward = self.ground_forward();
        Vec2::new(forward.y, -forward.x)
    }
}
