use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Round to 4 decimal places. Applied to persisted vertex positions and
/// normals to bound snapshot size; at millimeter scale the loss is below
/// visible precision.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// A 3-vector persisted as named fields, matching the `{x, y, z}` records
/// in saved scenes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Interpret this vector as Euler angles (radians) and build the
    /// rotation quaternion. YXZ order, the order the rendering collaborator
    /// applies object rotation in.
    pub fn to_rotation(self) -> DQuat {
        DQuat::from_euler(EulerRot::YXZ, self.y, self.x, self.z)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Vec3::from_glam(v)
    }
}

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        v.to_glam()
    }
}

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}
