//! Owner selection — resolves which objects or pose bones are in scope
//! for one rename invocation.

use crate::error::{Error, Result};
use crate::scene::{ObjectKind, Scene};

/// What kind of owner to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Objects,
    Bones,
}

impl TargetKind {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "objects" => Ok(TargetKind::Objects),
            "bones" => Ok(TargetKind::Bones),
            _ => Err(Error::invalid_argument(
                "target",
                format!("Unknown target '{}'. Use: objects, bones", s),
            )),
        }
    }
}

/// Selection breadth — the currently-selected owners or all eligible owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    Selected,
    All,
}

impl ScopeMode {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "selected" => Ok(ScopeMode::Selected),
            "all" => Ok(ScopeMode::All),
            _ => Err(Error::invalid_argument(
                "scope",
                format!("Unknown scope '{}'. Use: selected, all", s),
            )),
        }
    }
}

/// Which named-item collection to rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Modifiers,
    Constraints,
}

impl DataKind {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "modifiers" => Ok(DataKind::Modifiers),
            "constraints" => Ok(DataKind::Constraints),
            _ => Err(Error::invalid_argument(
                "data",
                format!("Unknown data kind '{}'. Use: modifiers, constraints", s),
            )),
        }
    }

    /// Lowercase label used in report messages ("Renamed 3 modifiers.").
    pub fn label(&self) -> &'static str {
        match self {
            DataKind::Modifiers => "modifiers",
            DataKind::Constraints => "constraints",
        }
    }
}

/// Immutable per-call scope configuration.
///
/// Bones carry no modifier stack, so `new` forces `data` to
/// `DataKind::Constraints` whenever `target` is `Bones`, regardless of what
/// the caller asked for. Downstream code never re-checks this.
#[derive(Debug, Clone, Copy)]
pub struct ScopeQuery {
    pub target: TargetKind,
    pub scope: ScopeMode,
    pub data: DataKind,
}

impl ScopeQuery {
    pub fn new(target: TargetKind, scope: ScopeMode, data: DataKind) -> Self {
        let data = match target {
            TargetKind::Bones => DataKind::Constraints,
            TargetKind::Objects => data,
        };
        ScopeQuery {
            target,
            scope,
            data,
        }
    }
}

/// Handle to an owner inside the scene. Handles keep the selector free of
/// mutable borrows; the orchestrator resolves them against `&mut Scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerRef {
    Object(usize),
    Bone { object: usize, bone: usize },
}

/// Scope resolution came up empty. Not a crate `Error` — the caller resolves
/// this to a cancelled report with an informational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeError {
    /// Selected mode resolved to zero owners.
    NoSelection,
    /// Bones + All requested but the active object is missing or not an
    /// armature.
    NoArmature,
}

/// Resolve the ordered owner list for `query`.
///
/// Scope rules:
/// - Objects + Selected: the selected object set; empty → `NoSelection`.
/// - Objects + All: every object in the scene.
/// - Bones + Selected: selected bones across every selected armature;
///   empty → `NoSelection`.
/// - Bones + All: all bones of the active armature only, even when other
///   armatures are selected. No active armature → `NoArmature`.
///
/// The Bones asymmetry (Selected scans all selected armatures, All scans
/// only the active one) is deliberate scope policy. Don't widen it.
pub fn resolve_owners(
    scene: &Scene,
    query: &ScopeQuery,
) -> std::result::Result<Vec<OwnerRef>, ScopeError> {
    match (query.target, query.scope) {
        (TargetKind::Objects, ScopeMode::Selected) => {
            let owners: Vec<OwnerRef> = scene
                .objects
                .iter()
                .enumerate()
                .filter(|(_, obj)| obj.selected)
                .map(|(i, _)| OwnerRef::Object(i))
                .collect();
            if owners.is_empty() {
                return Err(ScopeError::NoSelection);
            }
            Ok(owners)
        }
        (TargetKind::Objects, ScopeMode::All) => Ok((0..scene.objects.len())
            .map(OwnerRef::Object)
            .collect()),
        (TargetKind::Bones, ScopeMode::Selected) => {
            let mut owners = Vec::new();
            for (i, obj) in scene.objects.iter().enumerate() {
                if !obj.selected || obj.kind != ObjectKind::Armature {
                    continue;
                }
                for (j, bone) in obj.pose.iter().enumerate() {
                    if bone.selected {
                        owners.push(OwnerRef::Bone { object: i, bone: j });
                    }
                }
            }
            if owners.is_empty() {
                return Err(ScopeError::NoSelection);
            }
            Ok(owners)
        }
        (TargetKind::Bones, ScopeMode::All) => {
            let Some(active) = scene.active else {
                return Err(ScopeError::NoArmature);
            };
            let Some(obj) = scene.objects.get(active) else {
                return Err(ScopeError::NoArmature);
            };
            if obj.kind != ObjectKind::Armature {
                return Err(ScopeError::NoArmature);
            }
            Ok((0..obj.pose.len())
                .map(|j| OwnerRef::Bone {
                    object: active,
                    bone: j,
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PoseBone, SceneObject};

    fn armature(name: &str, selected: bool, bones: Vec<PoseBone>) -> SceneObject {
        let mut obj = SceneObject::new(name, ObjectKind::Armature);
        obj.selected = selected;
        obj.pose = bones;
        obj
    }

    fn bone(name: &str, selected: bool) -> PoseBone {
        let mut b = PoseBone::new(name);
        b.selected = selected;
        b
    }

    #[test]
    fn query_forces_constraints_for_bones() {
        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::All, DataKind::Modifiers);
        assert_eq!(q.data, DataKind::Constraints);

        let q = ScopeQuery::new(TargetKind::Objects, ScopeMode::All, DataKind::Modifiers);
        assert_eq!(q.data, DataKind::Modifiers);
    }

    #[test]
    fn selected_objects_in_scene_order() {
        let mut scene = Scene::default();
        for (name, sel) in [("A", true), ("B", false), ("C", true)] {
            let mut obj = SceneObject::new(name, ObjectKind::Mesh);
            obj.selected = sel;
            scene.objects.push(obj);
        }

        let q = ScopeQuery::new(TargetKind::Objects, ScopeMode::Selected, DataKind::Modifiers);
        let owners = resolve_owners(&scene, &q).unwrap();
        assert_eq!(owners, vec![OwnerRef::Object(0), OwnerRef::Object(2)]);
    }

    #[test]
    fn selected_objects_empty_is_no_selection() {
        let mut scene = Scene::default();
        scene.objects.push(SceneObject::new("A", ObjectKind::Mesh));

        let q = ScopeQuery::new(TargetKind::Objects, ScopeMode::Selected, DataKind::Modifiers);
        assert_eq!(resolve_owners(&scene, &q), Err(ScopeError::NoSelection));
    }

    #[test]
    fn all_objects_ignores_selection() {
        let mut scene = Scene::default();
        scene.objects.push(SceneObject::new("A", ObjectKind::Mesh));
        scene.objects.push(SceneObject::new("B", ObjectKind::Camera));

        let q = ScopeQuery::new(TargetKind::Objects, ScopeMode::All, DataKind::Constraints);
        assert_eq!(resolve_owners(&scene, &q).unwrap().len(), 2);
    }

    #[test]
    fn selected_bones_span_all_selected_armatures() {
        let scene = Scene {
            objects: vec![
                armature("RigA", true, vec![bone("a1", true), bone("a2", false)]),
                armature("RigB", true, vec![bone("b1", true)]),
                armature("RigC", false, vec![bone("c1", true)]),
            ],
            active: Some(0),
        };

        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::Selected, DataKind::Constraints);
        let owners = resolve_owners(&scene, &q).unwrap();
        assert_eq!(
            owners,
            vec![
                OwnerRef::Bone { object: 0, bone: 0 },
                OwnerRef::Bone { object: 1, bone: 0 },
            ]
        );
    }

    #[test]
    fn selected_bones_skip_non_armature_objects() {
        let mut mesh = SceneObject::new("Cube", ObjectKind::Mesh);
        mesh.selected = true;
        let scene = Scene {
            objects: vec![mesh],
            active: None,
        };

        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::Selected, DataKind::Constraints);
        assert_eq!(resolve_owners(&scene, &q), Err(ScopeError::NoSelection));
    }

    #[test]
    fn all_bones_only_from_active_armature() {
        // RigB is selected but not active; All must not touch it.
        let scene = Scene {
            objects: vec![
                armature("RigA", false, vec![bone("a1", false), bone("a2", false)]),
                armature("RigB", true, vec![bone("b1", true)]),
            ],
            active: Some(0),
        };

        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::All, DataKind::Constraints);
        let owners = resolve_owners(&scene, &q).unwrap();
        assert_eq!(
            owners,
            vec![
                OwnerRef::Bone { object: 0, bone: 0 },
                OwnerRef::Bone { object: 0, bone: 1 },
            ]
        );
    }

    #[test]
    fn all_bones_without_active_is_no_armature() {
        let scene = Scene {
            objects: vec![armature("Rig", true, vec![bone("a", true)])],
            active: None,
        };

        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::All, DataKind::Constraints);
        assert_eq!(resolve_owners(&scene, &q), Err(ScopeError::NoArmature));
    }

    #[test]
    fn all_bones_with_mesh_active_is_no_armature() {
        let scene = Scene {
            objects: vec![SceneObject::new("Cube", ObjectKind::Mesh)],
            active: Some(0),
        };

        let q = ScopeQuery::new(TargetKind::Bones, ScopeMode::All, DataKind::Constraints);
        assert_eq!(resolve_owners(&scene, &q), Err(ScopeError::NoArmature));
    }

    #[test]
    fn enum_from_str_rejects_unknown() {
        assert!(TargetKind::from_str("object").is_err());
        assert!(ScopeMode::from_str("every").is_err());
        assert!(DataKind::from_str("drivers").is_err());
        assert_eq!(TargetKind::from_str("bones").unwrap(), TargetKind::Bones);
        assert_eq!(ScopeMode::from_str("all").unwrap(), ScopeMode::All);
        assert_eq!(
            DataKind::from_str("constraints").unwrap(),
            DataKind::Constraints
        );
    }
}
