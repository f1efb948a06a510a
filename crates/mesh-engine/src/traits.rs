use shape_types::{BooleanOp, ShapeSpec};

use crate::types::{CsgHandle, EngineError, TriMesh};

/// Deterministic primitive mesh construction: same spec, same buffers.
pub trait MeshFactory {
    /// Tessellate a parametric shape. Errs for kinds without a parametric
    /// construction (text, csg, imported).
    fn build_primitive(&mut self, spec: &ShapeSpec) -> Result<TriMesh, EngineError>;
}

/// Boolean-geometry collaborator. Converting a mesh in and out repeatedly
/// degrades the internal spatial partition, which is why callers rebuild
/// composites from their operand trees instead of round-tripping meshes.
pub trait BooleanEngine {
    fn from_mesh(&mut self, mesh: &TriMesh) -> Result<CsgHandle, EngineError>;

    fn union(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError>;

    /// a minus b. Not commutative.
    fn subtract(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError>;

    fn intersect(&mut self, a: &CsgHandle, b: &CsgHandle) -> Result<CsgHandle, EngineError>;

    fn to_mesh(&mut self, handle: &CsgHandle) -> Result<TriMesh, EngineError>;

    /// Drop the geometry behind a handle. Releasing an unknown handle is
    /// a no-op.
    fn release(&mut self, handle: CsgHandle);

    fn apply(
        &mut self,
        op: BooleanOp,
        a: &CsgHandle,
        b: &CsgHandle,
    ) -> Result<CsgHandle, EngineError> {
        match op {
            BooleanOp::Union => self.union(a, b),
            BooleanOp::Subtract => self.subtract(a, b),
            BooleanOp::Intersect => self.intersect(a, b),
        }
    }
}

/// Combined trait for operations that need both primitive construction and
/// boolean geometry on the same engine object behind one `&mut dyn`.
pub trait GeometryEngine: MeshFactory + BooleanEngine {
    fn as_factory(&mut self) -> &mut dyn MeshFactory;
}

// Blanket implementation for any type that implements both traits
impl<T: MeshFactory + BooleanEngine> GeometryEngine for T {
    fn as_factory(&mut self) -> &mut dyn MeshFactory {
        self
    }
}
