use csg_ops::CsgError;
use mesh_engine::EngineError;
use shape_types::ObjectId;

/// Errors from session operations. All are recoverable: every failure path
/// leaves the scene, selection and history exactly as they were.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("select at least {required} objects ({selected} selected)")]
    InsufficientSelection { required: usize, selected: usize },

    #[error("boolean operation failed: {0}")]
    Boolean(#[from] CsgError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("object {id} has no stored operands to restore")]
    NotReversible { id: ObjectId },

    #[error("nothing to undo")]
    HistoryEmpty,

    #[error("unknown object: {id}")]
    UnknownObject { id: ObjectId },
}
