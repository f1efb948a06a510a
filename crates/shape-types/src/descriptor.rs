use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;
use crate::math::{round4, Color, Vec3};
use crate::spec::ShapeSpec;

/// Boolean operator combining the operands of a composite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl std::fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BooleanOp::Union => "union",
            BooleanOp::Subtract => "subtract",
            BooleanOp::Intersect => "intersect",
        };
        f.write_str(s)
    }
}

/// Explicit vertex data for shapes that cannot be regenerated from
/// parameters: baked boolean results, extruded text, imported meshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryData {
    /// Flat `[x0, y0, z0, x1, ...]` vertex positions.
    pub positions: Vec<f64>,
    /// Triangle indices into the position array.
    pub indices: Vec<u32>,
    /// Flat per-vertex normals, same layout as positions.
    pub normals: Vec<f64>,
}

impl GeometryData {
    /// Capture vertex buffers, rounding positions and normals to 4 decimals.
    /// Indices are stored verbatim.
    pub fn rounded(positions: &[f64], indices: &[u32], normals: &[f64]) -> Self {
        Self {
            positions: positions.iter().copied().map(round4).collect(),
            indices: indices.to_vec(),
            normals: normals.iter().copied().map(round4).collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Mesh-free description of one scene object at a point in time.
///
/// Doubles as the node type of the operand tree: a descriptor with
/// `operation` and at least two `operands` records how a composite was
/// built; a descriptor without `operation` is a leaf. Snapshots and saved
/// files are sequences of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub id: ObjectId,
    #[serde(flatten)]
    pub spec: ShapeSpec,
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Color,
    pub opacity: f64,
    #[serde(rename = "showEdges")]
    pub show_edges: bool,
    #[serde(rename = "textContent", default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(rename = "fontFile", default, skip_serializing_if = "Option::is_none")]
    pub font_file: Option<String>,
    /// Present only for non-parametric kinds. Takes precedence over `spec`
    /// when rebuilding a mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryData>,
    /// Present only alongside `geometry`; parametric kinds encode size in
    /// their dimensions instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<BooleanOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operands: Option<Vec<ShapeDescriptor>>,
}

impl ShapeDescriptor {
    /// True when this node records a boolean combination that can be
    /// rebuilt or reversed: an operator plus at least two operands.
    pub fn is_composite(&self) -> bool {
        self.operation.is_some() && self.operands.as_ref().is_some_and(|ops| ops.len() >= 2)
    }

    /// Scaling to apply when rebuilding, defaulting to identity. Stored
    /// scaling is only meaningful when a geometry payload is present.
    pub fn effective_scaling(&self) -> Vec3 {
        if self.geometry.is_some() {
            self.scaling.unwrap_or(Vec3::ONE)
        } else {
            Vec3::ONE
        }
    }
}
