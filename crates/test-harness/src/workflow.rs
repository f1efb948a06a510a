//! Fluent wrapper for scripting multi-step editing workflows in tests.

use editor_core::{EditorSession, SceneObject};
use mesh_engine::MockEngine;
use shape_types::{BooleanOp, ObjectId, ShapeKind, Vec3};

use crate::helpers::HarnessError;

/// An editing session paired with a deterministic geometry engine.
///
/// Thin sugar over [`EditorSession`]: every method forwards to the session
/// with the builder's engine, so tests read as the user actions they
/// script.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    pub session: EditorSession,
    pub engine: MockEngine,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ShapeKind) -> Result<ObjectId, HarnessError> {
        Ok(self.session.add_shape(kind, &mut self.engine)?)
    }

    /// Add a shape, then move it; the move is its own undo step, the same
    /// as dragging the gizmo after creating the shape.
    pub fn add_at(&mut self, kind: ShapeKind, position: Vec3) -> Result<ObjectId, HarnessError> {
        let id = self.session.add_shape(kind, &mut self.engine)?;
        if let Some(object) = self.session.object_mut(id) {
            object.position = position;
        }
        self.session.record("Move");
        Ok(id)
    }

    pub fn union(&mut self, ids: &[ObjectId]) -> Result<ObjectId, HarnessError> {
        Ok(self
            .session
            .perform_boolean(BooleanOp::Union, ids, &mut self.engine)?)
    }

    pub fn subtract(&mut self, ids: &[ObjectId]) -> Result<ObjectId, HarnessError> {
        Ok(self
            .session
            .perform_boolean(BooleanOp::Subtract, ids, &mut self.engine)?)
    }

    pub fn intersect(&mut self, ids: &[ObjectId]) -> Result<ObjectId, HarnessError> {
        Ok(self
            .session
            .perform_boolean(BooleanOp::Intersect, ids, &mut self.engine)?)
    }

    pub fn reverse(&mut self, id: ObjectId) -> Result<Vec<ObjectId>, HarnessError> {
        Ok(self.session.reverse_boolean(id, &mut self.engine)?)
    }

    pub fn undo(&mut self) -> Result<Option<String>, HarnessError> {
        Ok(self.session.undo(&mut self.engine)?)
    }

    pub fn redo(&mut self) -> Result<Option<String>, HarnessError> {
        Ok(self.session.redo(&mut self.engine)?)
    }

    /// Look an object up by display name.
    pub fn object_named(&self, name: &str) -> Result<&SceneObject, HarnessError> {
        self.session
            .objects()
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| HarnessError::ObjectNotFound {
                name: name.to_string(),
            })
    }
}
