use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use editor_core::EditorSession;

use crate::errors::LoadError;
use crate::save::{SceneFile, FORMAT_VERSION};

/// Project metadata stored alongside a saved scene by host storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Human-readable project name.
    pub name: String,
    /// When the project was first created.
    pub created: DateTime<Utc>,
    /// When the project was last modified.
    pub modified: DateTime<Utc>,
}

impl ProjectMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// A named project: metadata wrapper around the scene payload. The scene
/// half is exactly the user-facing save format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project: ProjectMetadata,
    pub scene: SceneFile,
}

/// Serialize a named project to a pretty-printed JSON string.
pub fn save_project(session: &EditorSession, metadata: &ProjectMetadata) -> String {
    let record = ProjectRecord {
        project: metadata.clone(),
        scene: SceneFile::from_session(session),
    };
    serde_json::to_string_pretty(&record).expect("scene serialization should never fail")
}

/// Deserialize a named project, validating the scene version.
pub fn load_project(json: &str) -> Result<ProjectRecord, LoadError> {
    let record: ProjectRecord =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;
    if record.scene.version != FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            file_version: record.scene.version,
        });
    }
    Ok(record)
}
