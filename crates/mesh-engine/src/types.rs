use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Opaque handle to a boolean-geometry value held by the engine.
/// NEVER persisted. Valid only until released.
#[derive(Debug, Clone)]
pub struct CsgHandle(pub(crate) u64);

impl CsgHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from geometry engine operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("unknown geometry handle: {handle}")]
    UnknownHandle { handle: u64 },

    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("boolean {op} failed: {reason}")]
    BooleanFailed { op: String, reason: String },

    #[error("shape kind {kind} has no parametric construction")]
    NotParametric { kind: String },
}

/// Indexed triangle mesh with flat f64 buffers.
///
/// Positions and normals are `[x0, y0, z0, x1, ...]`; indices reference
/// vertices, three per triangle. The layout matches the geometry payload
/// stored in snapshots, so capture is a straight buffer copy plus rounding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriMesh {
    pub positions: Vec<f64>,
    pub normals: Vec<f64>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex(&self, i: usize) -> DVec3 {
        DVec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Bake an affine transform into the vertex buffers. Normals are
    /// transformed by the inverse-transpose and renormalized, so
    /// non-uniform scaling keeps them perpendicular to their faces.
    pub fn transform(&mut self, matrix: &DMat4) {
        let normal_matrix = matrix.inverse().transpose();
        for i in 0..self.vertex_count() {
            let p = matrix.transform_point3(self.vertex(i));
            self.positions[i * 3] = p.x;
            self.positions[i * 3 + 1] = p.y;
            self.positions[i * 3 + 2] = p.z;

            let n = DVec3::new(
                self.normals[i * 3],
                self.normals[i * 3 + 1],
                self.normals[i * 3 + 2],
            );
            let n = normal_matrix.transform_vector3(n).normalize_or_zero();
            self.normals[i * 3] = n.x;
            self.normals[i * 3 + 1] = n.y;
            self.normals[i * 3 + 2] = n.z;
        }
    }

    /// Axis-aligned bounds, or `None` for a mesh with no vertices.
    pub fn aabb(&self) -> Option<(DVec3, DVec3)> {
        if self.positions.is_empty() {
            return None;
        }
        let mut min = self.vertex(0);
        let mut max = min;
        for i in 1..self.vertex_count() {
            let v = self.vertex(i);
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}
