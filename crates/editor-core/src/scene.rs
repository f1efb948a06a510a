use glam::{DMat4, DVec3};

use csg_ops::{local_mesh, CsgError};
use mesh_engine::{MeshFactory, TriMesh};
use shape_types::{
    BooleanOp, Color, GeometryData, ObjectId, ShapeDescriptor, ShapeSpec, Vec3,
};

/// A live scene object: one renderable mesh plus the attributes needed to
/// describe, snapshot and rebuild it.
///
/// The mesh is owned exclusively by the object and is private: it changes
/// only through [`SceneObject::replace_mesh`] and is freed when the object
/// drops, so no mutation path can leak the previous buffers.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub spec: ShapeSpec,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Color,
    pub opacity: f64,
    pub show_edges: bool,
    pub text_content: Option<String>,
    pub font_size: Option<f64>,
    pub font_file: Option<String>,
    /// Captured scaling, meaningful only for geometry-payload shapes.
    pub scaling: Option<Vec3>,
    /// The boolean operator and original operand descriptors that produced
    /// this object, when it is a composite result.
    pub operation: Option<BooleanOp>,
    pub operands: Option<Vec<ShapeDescriptor>>,
    mesh: TriMesh,
}

impl SceneObject {
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// Swap in a new mesh, dropping the old buffers.
    pub fn replace_mesh(&mut self, mesh: TriMesh) {
        self.mesh = mesh;
    }

    /// The object's world transform. The scene graph is flat, so this is
    /// the local transform of its descriptor.
    pub fn world_matrix(&self) -> DMat4 {
        let scaling = if self.spec.is_parametric() {
            Vec3::ONE
        } else {
            self.scaling.unwrap_or(Vec3::ONE)
        };
        DMat4::from_scale_rotation_translation(
            scaling.to_glam(),
            self.rotation.to_rotation(),
            self.position.to_glam(),
        )
    }

    /// World-space axis-aligned bounds, or `None` for an empty mesh.
    pub fn world_bounds(&self) -> Option<(DVec3, DVec3)> {
        let (min, max) = self.mesh.aabb()?;
        let matrix = self.world_matrix();
        let mut out_min = DVec3::INFINITY;
        let mut out_max = DVec3::NEG_INFINITY;
        for corner in [
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(min.x, max.y, max.z),
            DVec3::new(max.x, max.y, max.z),
        ] {
            let p = matrix.transform_point3(corner);
            out_min = out_min.min(p);
            out_max = out_max.max(p);
        }
        Some((out_min, out_max))
    }

    /// Serialize this object into a mesh-free descriptor.
    ///
    /// Reads the live transform and attributes, never a cached copy. Kinds
    /// that cannot be regenerated parametrically embed their vertex buffers
    /// (rounded to 4 decimals) and their scaling; parametric primitives
    /// store dimensions only. Operand trees are carried over as captured at
    /// combination time.
    pub fn capture(&self) -> ShapeDescriptor {
        let parametric = self.spec.is_parametric();
        ShapeDescriptor {
            id: self.id,
            spec: self.spec.clone(),
            name: self.name.clone(),
            position: self.position,
            rotation: self.rotation,
            color: self.color,
            opacity: self.opacity,
            show_edges: self.show_edges,
            text_content: self.text_content.clone(),
            font_size: self.font_size,
            font_file: self.font_file.clone(),
            geometry: (!parametric).then(|| {
                GeometryData::rounded(&self.mesh.positions, &self.mesh.indices, &self.mesh.normals)
            }),
            scaling: (!parametric).then(|| self.scaling.unwrap_or(Vec3::ONE)),
            operation: self.operation,
            operands: self.operands.clone(),
        }
    }

    /// Rebuild a live object from a descriptor: geometry payload upload
    /// when present, parametric reconstruction otherwise. The caller owns
    /// the result and its mesh.
    pub fn materialize(
        descriptor: &ShapeDescriptor,
        factory: &mut dyn MeshFactory,
    ) -> Result<SceneObject, CsgError> {
        let mesh = local_mesh(descriptor, factory)?;
        Ok(SceneObject {
            id: descriptor.id,
            name: descriptor.name.clone(),
            spec: descriptor.spec.clone(),
            position: descriptor.position,
            rotation: descriptor.rotation,
            color: descriptor.color,
            opacity: descriptor.opacity,
            show_edges: descriptor.show_edges,
            text_content: descriptor.text_content.clone(),
            font_size: descriptor.font_size,
            font_file: descriptor.font_file.clone(),
            scaling: descriptor.geometry.is_some().then(|| {
                descriptor.scaling.unwrap_or(Vec3::ONE)
            }),
            operation: descriptor.operation,
            operands: descriptor.operands.clone(),
            mesh,
        })
    }

    /// Construct a fresh object around an already-built mesh.
    pub(crate) fn from_parts(
        id: ObjectId,
        name: String,
        spec: ShapeSpec,
        mesh: TriMesh,
        color: Color,
    ) -> SceneObject {
        SceneObject {
            id,
            name,
            spec,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            color,
            opacity: 1.0,
            show_edges: true,
            text_content: None,
            font_size: None,
            font_file: None,
            scaling: None,
            operation: None,
            operands: None,
            mesh,
        }
    }
}
