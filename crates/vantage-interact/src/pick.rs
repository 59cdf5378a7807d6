//! Ray picking over the scene registry.

use glam::Vec3;
use vantage_scene::SceneRegistry;

use crate::projection::Ray;

/// A successful ray/object intersection.
#[derive(Debug, Clone)]
pub struct Hit {
    /// Identifier of the hit object.
    pub name: String,
    /// Intersection point in world space.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Intersect a ray against every visible object in the registry.
///
/// Hidden objects are never intersection-tested, so geometry behind a
/// hidden occluder becomes reachable. Hits come back nearest first; the
/// stable sort breaks distance ties by registry insertion order. An empty
/// result is the normal "clicked on nothing" case.
pub fn pick(ray: &Ray, registry: &SceneRegistry) -> Vec<Hit> {
    let mut hits: Vec<Hit> = Vec::new();

    for object in registry.all() {
        if !object.visible {
            continue;
        }
        if let Some(t) = object
            .shape
            .intersect_ray(ray.origin, ray.direction, object.position)
        {
            hits.push(Hit {
                name: object.name.clone(),
                point: ray.origin + ray.direction * t,
                distance: t,
            });
        }
    }

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
