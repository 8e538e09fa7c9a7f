//! Run orchestration and outcome aggregation.
//!
//! `run` wires the pipeline together: resolve owners, feed each owner's
//! collection to the rename transform, aggregate counts into a report.
//! Scope failures cancel the run before any name is touched.

use crate::rename::{apply_rename, RenameOp};
use crate::scene::Scene;
use crate::scope::{resolve_owners, OwnerRef, ScopeError, ScopeQuery, TargetKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A human-readable status message produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Message {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Message {
            severity: Severity::Warning,
            text: text.into(),
        }
    }
}

/// Aggregated outcome of one rename invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub status: RunStatus,
    /// Items whose name changed (or counted as matched, for find/replace).
    pub renamed: usize,
    /// Owners skipped because they lack the requested collection.
    pub unsupported: usize,
    pub messages: Vec<Message>,
}

impl RenameReport {
    fn cancelled(text: impl Into<String>) -> Self {
        RenameReport {
            status: RunStatus::Cancelled,
            renamed: 0,
            unsupported: 0,
            messages: vec![Message::info(text)],
        }
    }
}

/// Execute one batch rename over `scene`.
///
/// Owners that lack the requested collection are skipped and counted, never
/// fatal. A scope failure (nothing selected, no active armature) cancels
/// the whole run with zero mutations.
pub fn run(scene: &mut Scene, query: &ScopeQuery, op: &RenameOp) -> RenameReport {
    let owners = match resolve_owners(scene, query) {
        Ok(owners) => owners,
        Err(ScopeError::NoSelection) => {
            let text = match query.target {
                TargetKind::Objects => "No object(s) selected.",
                TargetKind::Bones => "No bone(s) selected.",
            };
            return RenameReport::cancelled(text);
        }
        Err(ScopeError::NoArmature) => return RenameReport::cancelled("No armature selected."),
    };

    let mut renamed = 0;
    let mut unsupported = 0;

    for owner in owners {
        let collection = match owner {
            OwnerRef::Object(i) => scene.objects[i].collection_mut(query.data),
            OwnerRef::Bone { object, bone } => {
                scene.objects[object].pose[bone].collection_mut(query.data)
            }
        };
        match collection {
            Some(items) => renamed += apply_rename(items, op),
            None => unsupported += 1,
        }
    }

    let mut messages = Vec::new();
    if renamed > 0 {
        messages.push(Message::info(format!(
            "Renamed {} {}.",
            renamed,
            query.data.label()
        )));
    }
    if renamed == 0 && unsupported > 0 {
        messages.push(Message::warning(format!(
            "No {} renamed.",
            query.data.label()
        )));
    }

    RenameReport {
        status: RunStatus::Finished,
        renamed,
        unsupported,
        messages,
    }
}
