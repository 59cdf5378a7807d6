//! Scene objects and capability tags.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::shape::CollisionShape;

/// A single interactive capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Object can be dragged across a constrained plane.
    Draggable,
    /// Occluder removed from the interactive surface by a single click.
    Hideable,
    /// Click zone that activates a linked deformable target.
    Trigger,
}

/// Set of capabilities assigned to one scene object.
///
/// Assigned once during registry population, never inferred again during
/// picking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub draggable: bool,
    pub hideable: bool,
    pub trigger: bool,
}

impl CapabilitySet {
    /// Set with no capabilities.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, cap: Capability) -> bool {
        match cap {
            Capability::Draggable => self.draggable,
            Capability::Hideable => self.hideable,
            Capability::Trigger => self.trigger,
        }
    }

    pub fn insert(&mut self, cap: Capability) {
        match cap {
            Capability::Draggable => self.draggable = true,
            Capability::Hideable => self.hideable = true,
            Capability::Trigger => self.trigger = true,
        }
    }

    pub fn remove(&mut self, cap: Capability) {
        match cap {
            Capability::Draggable => self.draggable = false,
            Capability::Hideable => self.hideable = false,
            Capability::Trigger => self.trigger = false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.draggable || self.hideable || self.trigger)
    }
}

/// An interactive object in the scene.
///
/// The name is the lookup key. Only `position` and `visible` are mutated
/// after registration, both by the interaction layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub position: Vec3,
    /// Geometry for ray intersection; opaque to the interaction logic.
    pub shape: CollisionShape,
    pub visible: bool,
    pub caps: CapabilitySet,
    /// Deformable target activated when this object is a Trigger.
    /// A relation by name, not ownership.
    pub trigger_target: Option<String>,
}

impl SceneObject {
    /// Create a visible object with no capabilities.
    pub fn new(name: impl Into<String>, position: Vec3, shape: CollisionShape) -> Self {
        Self {
            name: name.into(),
            position,
            shape,
            visible: true,
            caps: CapabilitySet::empty(),
            trigger_target: None,
        }
    }
}

/// Typed hand-off from the asset-loading collaborator.
///
/// The loader traverses the imported model and emits one of these per
/// renderable node; capability classification happens afterwards, against
/// the externally supplied policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedObject {
    pub name: String,
    pub position: Vec3,
    pub shape: CollisionShape,
    /// Node carries morph target data and can blend toward a deformed pose.
    pub has_morph_targets: bool,
}
