use editor_core::EditorSession;
use serde::{Deserialize, Serialize};

use shape_types::{CameraState, ShapeDescriptor};

/// Current file format version.
pub const FORMAT_VERSION: &str = "1.0";

/// The top-level file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    /// Format version string.
    pub version: String,
    /// Orbit camera state.
    pub camera: CameraState,
    /// Every scene object as a descriptor, operand trees included.
    pub objects: Vec<ShapeDescriptor>,
}

impl SceneFile {
    pub fn from_session(session: &EditorSession) -> Self {
        let snapshot = session.snapshot();
        SceneFile {
            version: FORMAT_VERSION.to_string(),
            camera: snapshot.camera,
            objects: snapshot.objects,
        }
    }
}

/// Serialize the whole scene to a pretty-printed JSON string.
pub fn save_scene(session: &EditorSession) -> String {
    let file = SceneFile::from_session(session);
    serde_json::to_string_pretty(&file).expect("scene serialization should never fail")
}
