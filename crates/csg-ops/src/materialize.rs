use glam::DMat4;

use mesh_engine::{MeshFactory, TriMesh};
use shape_types::ShapeDescriptor;

use crate::types::CsgError;

/// Rebuild the local-space mesh for one descriptor.
///
/// A stored geometry payload wins over the parametric recipe; kinds that
/// cannot be regenerated from parameters must carry one.
pub fn local_mesh(
    descriptor: &ShapeDescriptor,
    factory: &mut dyn MeshFactory,
) -> Result<TriMesh, CsgError> {
    if let Some(geometry) = &descriptor.geometry {
        return Ok(TriMesh {
            positions: geometry.positions.clone(),
            normals: geometry.normals.clone(),
            indices: geometry.indices.clone(),
        });
    }
    if !descriptor.spec.is_parametric() {
        return Err(CsgError::MissingGeometry {
            id: descriptor.id,
            kind: descriptor.spec.kind().display_name().to_lowercase(),
        });
    }
    Ok(factory.build_primitive(&descriptor.spec)?)
}

/// The descriptor's transform at capture time, relative to its parent.
/// Scaling participates only when a geometry payload is present;
/// parametric primitives encode their size in the dimensions.
pub fn local_matrix(descriptor: &ShapeDescriptor) -> DMat4 {
    DMat4::from_scale_rotation_translation(
        descriptor.effective_scaling().to_glam(),
        descriptor.rotation.to_rotation(),
        descriptor.position.to_glam(),
    )
}
