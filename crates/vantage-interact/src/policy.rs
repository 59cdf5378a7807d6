//! One-shot visibility and trigger behaviors layered on top of picking.

use tracing::{debug, warn};
use vantage_scene::{CapabilitySet, SceneRegistry};

/// Gesture selected for the topmost hit on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Hide,
    Drag,
    Trigger,
}

/// Deterministic capability precedence: Hideable wins over Draggable,
/// Draggable wins over Trigger. Capabilities are mutually exclusive in
/// practice, but an object tagged with several still resolves the same
/// way every time.
pub fn gesture_for(caps: CapabilitySet) -> Option<Gesture> {
    if caps.hideable {
        Some(Gesture::Hide)
    } else if caps.draggable {
        Some(Gesture::Drag)
    } else if caps.trigger {
        Some(Gesture::Trigger)
    } else {
        None
    }
}

/// Hide a clicked occluder.
///
/// Permanent for the session: hidden objects are excluded from picking,
/// so this fires at most once per object.
pub fn apply_hide(name: &str, registry: &mut SceneRegistry) {
    if let Some(object) = registry.find_mut(name)
        && object.visible
    {
        object.visible = false;
        debug!(object = name, "occluder hidden");
    }
}

/// Activate the deformable target linked to a trigger zone.
///
/// Writes the terminal influence value. The trigger stays pickable and
/// re-activation has no further observable effect.
pub fn apply_trigger(name: &str, registry: &mut SceneRegistry) {
    let Some(deformable_name) = registry.find(name).and_then(|o| o.trigger_target.clone()) else {
        warn!(object = name, "trigger zone has no linked deformable target");
        return;
    };

    if let Some(deformable) = registry.deformable_mut(&deformable_name) {
        deformable.activate();
        debug!(
            trigger = name,
            deformable = %deformable_name,
            "deformable target activated"
        );
    } else {
        warn!(
            trigger = name,
            deformable = %deformable_name,
            "linked deformable target is not registered"
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use vantage_scene::{CollisionShape, DeformableTarget, SceneObject};

    use super::*;

    #[test]
    fn test_gesture_precedence() {
        let mut caps = CapabilitySet::empty();
        assert_eq!(gesture_for(caps), None);

        caps.trigger = true;
        assert_eq!(gesture_for(caps), Some(Gesture::Trigger));

        caps.draggable = true;
        assert_eq!(gesture_for(caps), Some(Gesture::Drag));

        caps.hideable = true;
        assert_eq!(gesture_for(caps), Some(Gesture::Hide));
    }

    #[test]
    fn test_apply_hide_clears_visibility() {
        let mut registry = SceneRegistry::new();
        registry
            .register(SceneObject::new(
                "cover",
                Vec3::ZERO,
                CollisionShape::Sphere { radius: 1.0 },
            ))
            .unwrap();

        apply_hide("cover", &mut registry);
        assert!(!registry.find("cover").unwrap().visible);

        // Redundant hide stays hidden
        apply_hide("cover", &mut registry);
        assert!(!registry.find("cover").unwrap().visible);
    }

    #[test]
    fn test_apply_trigger_activates_target() {
        let mut registry = SceneRegistry::new();
        registry
            .register_deformable(DeformableTarget::new("body"))
            .unwrap();
        let mut zone = SceneObject::new(
            "zone",
            Vec3::ZERO,
            CollisionShape::Sphere { radius: 1.0 },
        );
        zone.trigger_target = Some("body".to_string());
        registry.register(zone).unwrap();

        apply_trigger("zone", &mut registry);
        assert_eq!(registry.deformable("body").unwrap().influence(), 1.0);

        apply_trigger("zone", &mut registry);
        assert_eq!(registry.deformable("body").unwrap().influence(), 1.0);
    }

    #[test]
    fn test_apply_trigger_without_target_is_noop() {
        let mut registry = SceneRegistry::new();
        registry
            .register(SceneObject::new(
                "zone",
                Vec3::ZERO,
                CollisionShape::Sphere { radius: 1.0 },
            ))
            .unwrap();

        // Must not panic or mutate anything
        apply_trigger("zone", &mut registry);
        assert_eq!(registry.deformable_count(), 0);
    }
}
