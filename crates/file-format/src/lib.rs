//! Persisted scene format (version `"1.0"`) and mesh export.
//!
//! The saved JSON is exactly the snapshot object representation:
//! `{version, camera, objects: [...]}` where each object record is a
//! shape descriptor, operand trees included. Loading validates the
//! version string and rebuilds the live scene from the records.

pub mod errors;
pub mod load;
pub mod project;
pub mod save;
pub mod stl;

pub use errors::{ExportError, LoadError};
pub use load::{load_into, load_scene};
pub use project::{load_project, save_project, ProjectMetadata, ProjectRecord};
pub use save::{save_scene, SceneFile, FORMAT_VERSION};
pub use stl::{export_ascii_stl, export_binary_stl};
