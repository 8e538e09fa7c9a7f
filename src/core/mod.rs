// Public modules
pub mod error;
pub mod rename;
pub mod report;
pub mod scene;
pub mod scope;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use rename::RenameOp;
pub use report::{run, Message, RenameReport, RunStatus, Severity};
pub use scene::{NamedItem, ObjectKind, PoseBone, Scene, SceneObject};
pub use scope::{DataKind, OwnerRef, ScopeError, ScopeMode, ScopeQuery, TargetKind};
