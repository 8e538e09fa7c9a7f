//! In-memory scene model — the owner graph the rename engine operates on.
//!
//! Mirrors the host document structure: a flat list of objects, each with
//! modifier/constraint stacks, armature objects additionally carrying pose
//! bones with their own constraint stacks. The whole scene round-trips
//! through JSON so the CLI can act on scene files.

use crate::error::{Error, Result};
use crate::scope::DataKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A modifier or constraint instance. The engine only ever touches `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedItem {
    pub name: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        NamedItem { name: name.into() }
    }
}

/// Object kind, which determines what named-item collections the object
/// carries. Modifiers exist on geometry objects only; every object kind
/// has a constraint stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    Curve,
    Armature,
    Camera,
    Light,
    Empty,
}

impl ObjectKind {
    pub fn supports_modifiers(&self) -> bool {
        matches!(self, ObjectKind::Mesh | ObjectKind::Curve)
    }
}

/// A scene object. `pose` is only populated for armatures; for every other
/// kind it stays empty and is omitted from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<NamedItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<NamedItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pose: Vec<PoseBone>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        SceneObject {
            name: name.into(),
            kind,
            selected: false,
            modifiers: Vec::new(),
            constraints: Vec::new(),
            pose: Vec::new(),
        }
    }

    /// The requested collection, or `None` when this object kind does not
    /// carry it. `None` is the unsupported-collection outcome: the caller
    /// skips the owner and counts it, never errors.
    pub fn collection_mut(&mut self, data: DataKind) -> Option<&mut Vec<NamedItem>> {
        match data {
            DataKind::Modifiers if self.kind.supports_modifiers() => Some(&mut self.modifiers),
            DataKind::Modifiers => None,
            DataKind::Constraints => Some(&mut self.constraints),
        }
    }
}

/// A pose bone of an armature object. Bones carry constraints only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseBone {
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<NamedItem>,
}

impl PoseBone {
    pub fn new(name: impl Into<String>) -> Self {
        PoseBone {
            name: name.into(),
            selected: false,
            constraints: Vec::new(),
        }
    }

    pub fn collection_mut(&mut self, data: DataKind) -> Option<&mut Vec<NamedItem>> {
        match data {
            DataKind::Constraints => Some(&mut self.constraints),
            DataKind::Modifiers => None,
        }
    }
}

/// The owner graph for one invocation. `active` indexes the active object,
/// which may or may not also be selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Scene> {
        if !path.exists() {
            return Err(Error::SceneNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&content)
            .map_err(|e| Error::SceneInvalid(format!("{}: {}", path.display(), e)))?;
        if let Some(active) = scene.active {
            if active >= scene.objects.len() {
                return Err(Error::SceneInvalid(format!(
                    "{}: active index {} out of range ({} objects)",
                    path.display(),
                    active,
                    scene.objects.len()
                )));
            }
        }
        Ok(scene)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        std::fs::write(path, payload)?;
        Ok(())
    }
}
