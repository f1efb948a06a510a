pub mod mock_engine;
pub mod primitives;
pub mod traits;
pub mod types;

pub use mock_engine::MockEngine;
pub use traits::{BooleanEngine, GeometryEngine, MeshFactory};
pub use types::{CsgHandle, EngineError, TriMesh};
