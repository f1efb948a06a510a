use mesh_engine::{BooleanEngine, CsgHandle, EngineError};
use shape_types::ObjectId;

/// Errors from boolean-input reconstruction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CsgError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("object {id} ({kind}) has no stored geometry to rebuild from")]
    MissingGeometry { id: ObjectId, kind: String },

    #[error("boolean input needs at least 2 operands, got {count}")]
    TooFewOperands { count: usize },
}

/// Collects every engine handle a tree rebuild creates so they can be
/// released in one pass once the result mesh has been extracted, on the
/// success and failure paths alike.
#[derive(Debug, Default)]
pub struct HandlePool {
    handles: Vec<CsgHandle>,
}

impl HandlePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: CsgHandle) -> CsgHandle {
        self.handles.push(handle.clone());
        handle
    }

    pub fn release_all(&mut self, engine: &mut dyn BooleanEngine) {
        for handle in self.handles.drain(..) {
            engine.release(handle);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
