use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Orbit camera state captured in snapshots and saved scenes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Azimuth angle, radians.
    pub alpha: f64,
    /// Polar angle, radians.
    pub beta: f64,
    /// Orbit distance from the target.
    pub radius: f64,
    pub target: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            alpha: std::f64::consts::PI * 0.25,
            beta: std::f64::consts::PI / 3.0,
            radius: 15.0,
            target: Vec3::ZERO,
        }
    }
}
