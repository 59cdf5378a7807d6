//! Scene object registry.
//!
//! A flat, insertion-ordered collection of interactive objects, built once
//! at scene-ready time. Hide is a flag mutation, never a removal, so the
//! order stays stable for the whole interaction session.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::classify::ClassificationPolicy;
use crate::deformable::DeformableTarget;
use crate::object::{LoadedObject, SceneObject};

/// Registry errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),
}

/// Mapping from identifier to scene object, plus the deformable targets
/// trigger zones point at.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: Vec<SceneObject>,
    index: HashMap<String, usize>,
    deformables: Vec<DeformableTarget>,
    deformable_index: HashMap<String, usize>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object. Registration order is the pick tie-break order.
    pub fn register(&mut self, object: SceneObject) -> Result<(), RegistryError> {
        if self.index.contains_key(&object.name) {
            return Err(RegistryError::DuplicateIdentifier(object.name.clone()));
        }
        self.index.insert(object.name.clone(), self.objects.len());
        self.objects.push(object);
        Ok(())
    }

    /// Add a deformable target.
    pub fn register_deformable(&mut self, target: DeformableTarget) -> Result<(), RegistryError> {
        if self.deformable_index.contains_key(&target.name) {
            return Err(RegistryError::DuplicateIdentifier(target.name.clone()));
        }
        self.deformable_index
            .insert(target.name.clone(), self.deformables.len());
        self.deformables.push(target);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.index.get(name).map(|&i| &self.objects[i])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.index.get(name).map(|&i| &mut self.objects[i])
    }

    pub fn deformable(&self, name: &str) -> Option<&DeformableTarget> {
        self.deformable_index.get(name).map(|&i| &self.deformables[i])
    }

    pub fn deformable_mut(&mut self, name: &str) -> Option<&mut DeformableTarget> {
        self.deformable_index
            .get(name)
            .map(|&i| &mut self.deformables[i])
    }

    /// All objects in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn deformables(&self) -> impl Iterator<Item = &DeformableTarget> {
        self.deformables.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn deformable_count(&self) -> usize {
        self.deformables.len()
    }
}

/// Build a registry from the loader's typed hand-off and the scene's
/// classification policy.
///
/// Objects with morph targets are registered as deformable targets as
/// well as regular scene objects; the first one becomes the default
/// target for trigger zones whose rule names no explicit target.
pub fn populate(
    loaded: Vec<LoadedObject>,
    policy: &ClassificationPolicy,
) -> Result<SceneRegistry, RegistryError> {
    let mut registry = SceneRegistry::new();

    let mut default_target: Option<String> = None;
    for obj in &loaded {
        if obj.has_morph_targets {
            registry.register_deformable(DeformableTarget::new(&obj.name))?;
            if default_target.is_none() {
                default_target = Some(obj.name.clone());
            }
        }
    }

    for loaded_obj in loaded {
        let classification = policy.classify(&loaded_obj.name);

        let mut object = SceneObject::new(loaded_obj.name, loaded_obj.position, loaded_obj.shape);
        object.caps = classification.caps;
        if object.caps.trigger {
            object.trigger_target = classification
                .trigger_target
                .or_else(|| default_target.clone());
            debug!(
                object = %object.name,
                deformable = object.trigger_target.as_deref(),
                "trigger zone linked"
            );
        }

        registry.register(object)?;
    }

    info!(
        objects = registry.len(),
        deformables = registry.deformable_count(),
        "scene registry populated"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::classify::{ClassificationRule, NameMatch};
    use crate::object::Capability;
    use crate::shape::CollisionShape;

    fn sphere(name: &str) -> SceneObject {
        SceneObject::new(name, Vec3::ZERO, CollisionShape::Sphere { radius: 1.0 })
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = SceneRegistry::new();
        registry.register(sphere("a")).unwrap();
        assert!(registry.find("a").is_some());
        assert!(registry.find("b").is_none());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut registry = SceneRegistry::new();
        registry.register(sphere("a")).unwrap();
        let result = registry.register(sphere("a"));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateIdentifier(name)) if name == "a"
        ));
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let mut registry = SceneRegistry::new();
        for name in ["c", "a", "b"] {
            registry.register(sphere(name)).unwrap();
        }
        let names: Vec<_> = registry.all().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_deformable_rejected() {
        let mut registry = SceneRegistry::new();
        registry
            .register_deformable(DeformableTarget::new("body"))
            .unwrap();
        assert!(
            registry
                .register_deformable(DeformableTarget::new("body"))
                .is_err()
        );
    }

    fn loaded(name: &str, has_morph_targets: bool) -> LoadedObject {
        LoadedObject {
            name: name.to_string(),
            position: Vec3::ZERO,
            shape: CollisionShape::Sphere { radius: 1.0 },
            has_morph_targets,
        }
    }

    #[test]
    fn test_populate_links_trigger_to_default_deformable() {
        let policy = ClassificationPolicy {
            default_caps: vec![],
            rules: vec![ClassificationRule {
                matcher: NameMatch::Contains("Zone".to_string()),
                grant: vec![Capability::Trigger],
                deny: vec![],
                trigger_target: None,
            }],
        };

        let registry = populate(
            vec![loaded("body", true), loaded("Zone_01", false)],
            &policy,
        )
        .unwrap();

        let zone = registry.find("Zone_01").unwrap();
        assert!(zone.caps.trigger);
        assert_eq!(zone.trigger_target.as_deref(), Some("body"));
        assert!(registry.deformable("body").is_some());
    }

    #[test]
    fn test_populate_explicit_target_wins_over_default() {
        let policy = ClassificationPolicy {
            default_caps: vec![],
            rules: vec![ClassificationRule {
                matcher: NameMatch::Exact("Zone".to_string()),
                grant: vec![Capability::Trigger],
                deny: vec![],
                trigger_target: Some("second".to_string()),
            }],
        };

        let registry = populate(
            vec![
                loaded("first", true),
                loaded("second", true),
                loaded("Zone", false),
            ],
            &policy,
        )
        .unwrap();

        let zone = registry.find("Zone").unwrap();
        assert_eq!(zone.trigger_target.as_deref(), Some("second"));
    }

    #[test]
    fn test_populate_morph_object_is_also_pickable() {
        let policy = ClassificationPolicy::default();
        let registry = populate(vec![loaded("body", true)], &policy).unwrap();
        assert!(registry.find("body").is_some());
        assert!(registry.deformable("body").is_some());
    }
}
