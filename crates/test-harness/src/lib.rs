//! Test harness for scripting editor workflows.
//!
//! Provides the shared pieces the end-to-end tests are written against:
//!
//! - [`SceneBuilder`]: an [`editor_core::EditorSession`] paired with a
//!   deterministic engine, with shorthand for the common actions
//! - [`helpers`]: descriptor constructors and float comparison helpers

pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::SceneBuilder;
