//! Editing session: live objects, the snapshot history stack, and the
//! operations that mutate them.
//!
//! Every undoable action follows the same shape: mutate the object list,
//! then capture a full scene snapshot and record it. Undo and redo replace
//! the live scene wholesale from a recorded snapshot. All state lives in an
//! explicit [`EditorSession`] passed to each operation; there are no
//! process-wide globals, which keeps the single-writer ownership story
//! visible in the signatures.

pub mod align;
pub mod boolean;
pub mod errors;
pub mod history;
pub mod patterns;
pub mod scene;
pub mod shapes;
pub mod snapshot;

pub use align::AlignMode;
pub use errors::SessionError;
pub use history::{HistoryStack, MAX_HISTORY};
pub use patterns::{GridPlane, PatternSpec};
pub use scene::SceneObject;
pub use shapes::Axis;
pub use snapshot::SceneSnapshot;

use tracing::debug;

use mesh_engine::MeshFactory;
use shape_types::{CameraState, ObjectId, ShapeDescriptor};

/// One single-user editing session.
#[derive(Debug, Default)]
pub struct EditorSession {
    objects: Vec<SceneObject>,
    history: HistoryStack,
    object_counter: u64,
    pub camera: CameraState,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            history: HistoryStack::new(),
            object_counter: 0,
            camera: CameraState::default(),
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn object_counter(&self) -> u64 {
        self.object_counter
    }

    /// Hand out the next object id. Ids only ever move forward.
    pub(crate) fn next_id(&mut self) -> ObjectId {
        self.object_counter += 1;
        ObjectId(self.object_counter)
    }

    /// Lift the counter so it can never re-issue `id`. Used when restored
    /// or loaded objects bring their original ids back into the scene.
    pub(crate) fn bump_counter(&mut self, id: ObjectId) {
        self.object_counter = self.object_counter.max(id.0);
    }

    pub(crate) fn insert(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Remove an object from the scene; its mesh drops with it.
    pub(crate) fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub(crate) fn require(&self, id: ObjectId) -> Result<&SceneObject, SessionError> {
        self.object(id).ok_or(SessionError::UnknownObject { id })
    }

    /// Capture the whole live scene as a snapshot.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            camera: self.camera,
            objects: self.objects.iter().map(SceneObject::capture).collect(),
            next_id: self.object_counter,
        }
    }

    /// Capture the scene and append one history entry.
    pub fn record(&mut self, label: impl Into<String>) {
        let label = label.into();
        debug!(%label, objects = self.objects.len(), "recording history entry");
        let snapshot = self.snapshot();
        self.history.record(label, snapshot);
    }

    /// Destroy every live object and rebuild the scene from a snapshot.
    fn restore(
        &mut self,
        snapshot: &SceneSnapshot,
        factory: &mut dyn MeshFactory,
    ) -> Result<(), SessionError> {
        let mut rebuilt = Vec::with_capacity(snapshot.objects.len());
        for descriptor in &snapshot.objects {
            rebuilt.push(SceneObject::materialize(descriptor, factory)?);
        }
        self.objects = rebuilt;
        self.camera = snapshot.camera;
        self.object_counter = snapshot.next_id;
        Ok(())
    }

    /// Step back one history entry and restore it, reporting its label.
    ///
    /// `Ok(None)` when already at the oldest entry; an empty history is the
    /// one case surfaced to the user. The cursor moves only after the
    /// restore has succeeded, so a failed restore leaves history and scene
    /// in agreement.
    pub fn undo(
        &mut self,
        factory: &mut dyn MeshFactory,
    ) -> Result<Option<String>, SessionError> {
        if self.history.is_empty() {
            return Err(SessionError::HistoryEmpty);
        }
        let Some(entry) = self.history.peek_back() else {
            return Ok(None);
        };
        let label = entry.label.clone();
        let snapshot = entry.snapshot.clone();
        debug!(%label, "undo");
        self.restore(&snapshot, factory)?;
        self.history.step_back();
        Ok(Some(label))
    }

    /// Step forward one history entry and restore it, reporting its label.
    /// `Ok(None)` when already at the tail.
    pub fn redo(
        &mut self,
        factory: &mut dyn MeshFactory,
    ) -> Result<Option<String>, SessionError> {
        let Some(entry) = self.history.peek_forward() else {
            return Ok(None);
        };
        let label = entry.label.clone();
        let snapshot = entry.snapshot.clone();
        debug!(%label, "redo");
        self.restore(&snapshot, factory)?;
        self.history.step_forward();
        Ok(Some(label))
    }

    /// Delete objects and record one history entry.
    pub fn delete_objects(&mut self, ids: &[ObjectId]) -> Result<(), SessionError> {
        for &id in ids {
            self.require(id)?;
        }
        for &id in ids {
            self.remove(id);
        }
        self.record("Delete");
        Ok(())
    }

    /// Replace the entire scene, e.g. when loading a saved project.
    /// Resets history and records the loaded state as its first entry.
    pub fn replace_scene(
        &mut self,
        camera: CameraState,
        descriptors: &[ShapeDescriptor],
        factory: &mut dyn MeshFactory,
    ) -> Result<(), SessionError> {
        let mut rebuilt = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            rebuilt.push(SceneObject::materialize(descriptor, factory)?);
        }
        self.objects = rebuilt;
        self.camera = camera;
        self.object_counter = descriptors.iter().map(|d| d.id.0).max().unwrap_or(0);
        self.history.clear();
        self.record("Load project");
        Ok(())
    }
}
