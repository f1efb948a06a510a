use serde::{Deserialize, Serialize};

use shape_types::{CameraState, ShapeDescriptor};

/// Deep, mesh-free copy of the whole scene at one point in time.
///
/// Self-contained by construction: it holds descriptors, never live
/// objects, so it can outlive everything it was captured from and be
/// replayed after those objects are long destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub camera: CameraState,
    pub objects: Vec<ShapeDescriptor>,
    /// Object counter at capture time, restored with the snapshot so ids
    /// handed out after an undo do not collide with snapshot ids.
    pub next_id: u64,
}
