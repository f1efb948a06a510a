//! Shared fixtures: error type, descriptor constructors, float comparison.

use shape_types::*;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("object not found: {name}")]
    ObjectNotFound { name: String },

    #[error("session error: {0}")]
    Session(#[from] editor_core::SessionError),
}

// ── Descriptor Constructors ─────────────────────────────────────────────────

/// A plain leaf descriptor with neutral display attributes.
pub fn leaf_descriptor(id: u64, spec: ShapeSpec, position: Vec3) -> ShapeDescriptor {
    ShapeDescriptor {
        id: ObjectId(id),
        spec,
        name: format!("Shape {id}"),
        position,
        rotation: Vec3::ZERO,
        color: Color::new(0.5, 0.5, 0.5),
        opacity: 1.0,
        show_edges: true,
        text_content: None,
        font_size: None,
        font_file: None,
        geometry: None,
        scaling: None,
        operation: None,
        operands: None,
    }
}

/// A 20mm default box descriptor at `position`.
pub fn box_descriptor(id: u64, position: Vec3) -> ShapeDescriptor {
    leaf_descriptor(id, ShapeKind::Box.default_spec(), position)
}

/// A radius-10 default sphere descriptor at `position`.
pub fn sphere_descriptor(id: u64, position: Vec3) -> ShapeDescriptor {
    leaf_descriptor(id, ShapeKind::Sphere.default_spec(), position)
}

// ── Float Comparison ────────────────────────────────────────────────────────

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn approx_vec(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}
