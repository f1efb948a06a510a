//! Perform / reverse orchestration for boolean operations.
//!
//! Both directions are atomic: new objects are fully materialized before
//! any consumed object leaves the scene, so a failure at any point leaves
//! the session untouched.

use tracing::{debug, warn};

use csg_ops::{build_boolean_input, CsgError, HandlePool};
use mesh_engine::{CsgHandle, GeometryEngine, TriMesh};
use shape_types::{BooleanOp, ObjectId, ShapeDescriptor, ShapeSpec, Vec3};

use crate::errors::SessionError;
use crate::scene::SceneObject;
use crate::EditorSession;

impl EditorSession {
    /// Combine the selected objects under `operation`.
    ///
    /// The result object stores the *pre-operation* descriptors of every
    /// input as its operand tree, which is what makes [`Self::reverse_boolean`]
    /// and clean nested rebuilds possible. The inputs are consumed: net
    /// object count drops by `ids.len() - 1`.
    pub fn perform_boolean(
        &mut self,
        operation: BooleanOp,
        ids: &[ObjectId],
        engine: &mut dyn GeometryEngine,
    ) -> Result<ObjectId, SessionError> {
        if ids.len() < 2 {
            return Err(SessionError::InsufficientSelection {
                required: 2,
                selected: ids.len(),
            });
        }
        let mut descriptors = Vec::with_capacity(ids.len());
        for &id in ids {
            descriptors.push(self.require(id)?.capture());
        }

        debug!(%operation, operands = ids.len(), "performing boolean");
        let mut pool = HandlePool::new();
        let built = fold_boolean(&descriptors, operation, engine, &mut pool);
        let mesh = built.and_then(|handle| engine.to_mesh(&handle).map_err(CsgError::from));
        pool.release_all(engine);
        let mesh = match mesh {
            Ok(mesh) => mesh,
            Err(err) => {
                warn!(%operation, error = %err, "boolean failed, scene unchanged");
                return Err(err.into());
            }
        };

        // Success: build the composite, then retire the consumed inputs
        let id = self.next_id();
        let first = &descriptors[0];
        let mut result = SceneObject::from_parts(
            id,
            format!("{} {}", operation_name(operation), id.value()),
            ShapeSpec::Csg {},
            TriMesh::default(),
            first.color,
        );
        result.opacity = first.opacity;
        result.show_edges = first.show_edges;
        result.scaling = Some(Vec3::ONE);
        result.operation = Some(operation);
        result.operands = Some(descriptors);
        result.replace_mesh(mesh);

        for &consumed in ids {
            self.remove(consumed);
        }
        self.insert(result);
        self.record(operation_name(operation));
        Ok(id)
    }

    /// Split a composite back into the objects it was built from.
    ///
    /// Restores each stored operand with its original id, transform and
    /// display attributes, then removes the composite. Reversal is one
    /// level shallow: an operand that was itself a composite comes back
    /// still carrying its own operand tree. A stored id that is already
    /// live (a duplicated composite carries the same operand tree as its
    /// original) comes back under a fresh id instead; lookups by id must
    /// never match two objects.
    pub fn reverse_boolean(
        &mut self,
        id: ObjectId,
        engine: &mut dyn GeometryEngine,
    ) -> Result<Vec<ObjectId>, SessionError> {
        let target = self.require(id)?;
        let operands: Vec<ShapeDescriptor> = match &target.operands {
            Some(ops) if !ops.is_empty() => ops.clone(),
            _ => return Err(SessionError::NotReversible { id }),
        };
        let operation = target.operation;

        // Materialize everything before touching the scene
        let mut restored = Vec::with_capacity(operands.len());
        for descriptor in &operands {
            restored.push(SceneObject::materialize(descriptor, engine.as_factory())?);
        }

        debug!(id = id.value(), restored = restored.len(), "reversing boolean");
        self.remove(id);
        // Lift the counter past every stored id first, so a remapped id
        // cannot land on another operand of this same reversal
        for object in &restored {
            self.bump_counter(object.id);
        }
        let mut ids = Vec::with_capacity(restored.len());
        for mut object in restored {
            if self.object(object.id).is_some() {
                object.id = self.next_id();
            }
            ids.push(object.id);
            self.insert(object);
        }
        self.record(match operation {
            Some(op) => format!("Reverse {}", op),
            None => "Reverse".to_string(),
        });
        Ok(ids)
    }
}

fn operation_name(operation: BooleanOp) -> &'static str {
    match operation {
        BooleanOp::Union => "Union",
        BooleanOp::Subtract => "Subtract",
        BooleanOp::Intersect => "Intersect",
    }
}

/// Left-fold `operation` across the captured inputs: object 0 is the base,
/// every later object is rebuilt (from its operand tree when it has one)
/// and applied in selection order.
fn fold_boolean(
    descriptors: &[ShapeDescriptor],
    operation: BooleanOp,
    engine: &mut dyn GeometryEngine,
    pool: &mut HandlePool,
) -> Result<CsgHandle, CsgError> {
    let mut result = build_boolean_input(&descriptors[0], engine, pool)?;
    for descriptor in &descriptors[1..] {
        let next = build_boolean_input(descriptor, engine, pool)?;
        let combined = engine.apply(operation, &result, &next)?;
        result = pool.track(combined);
    }
    Ok(result)
}
