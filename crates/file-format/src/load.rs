use tracing::debug;

use editor_core::EditorSession;
use mesh_engine::MeshFactory;
use shape_types::{CameraState, ShapeDescriptor};

use crate::errors::LoadError;
use crate::save::{SceneFile, FORMAT_VERSION};

/// Deserialize a scene from a JSON string.
///
/// Validates the version string and returns the camera plus the object
/// descriptors, ready to materialize.
pub fn load_scene(json: &str) -> Result<(CameraState, Vec<ShapeDescriptor>), LoadError> {
    let file: SceneFile =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if file.version != FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            file_version: file.version,
        });
    }
    Ok((file.camera, file.objects))
}

/// Load a scene file straight into a session: full clear-and-rebuild, with
/// the object counter advanced past every loaded id.
pub fn load_into(
    session: &mut EditorSession,
    factory: &mut dyn MeshFactory,
    json: &str,
) -> Result<(), LoadError> {
    let (camera, objects) = load_scene(json)?;
    debug!(objects = objects.len(), "loading scene file");
    session
        .replace_scene(camera, &objects, factory)
        .map_err(|e| LoadError::RebuildFailed(e.to_string()))
}
