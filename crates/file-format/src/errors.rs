/// Errors during scene file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unsupported file version: {file_version}")]
    UnsupportedVersion { file_version: String },

    #[error("failed to rebuild scene: {0}")]
    RebuildFailed(String),
}

/// Errors during STL export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("scene has no triangles to export")]
    EmptyScene,
}
