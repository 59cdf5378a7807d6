//! Collision shapes for ray picking.
//!
//! Shapes are expressed in the owning object's local frame and placed in
//! the world by the object's translation only; the interaction core never
//! mutates rotation or scale, so neither is applied here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

const EPSILON: f32 = 1e-7;

/// Renderable shape reference, used only for ray intersection tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Sphere centered on the object position.
    Sphere { radius: f32 },
    /// Axis-aligned box centered on the object position.
    Box { half_extents: Vec3 },
    /// Indexed triangle mesh in local coordinates.
    Mesh {
        vertices: Vec<[f32; 3]>,
        indices: Vec<u32>,
    },
}

impl CollisionShape {
    /// Intersect a world-space ray with this shape placed at `position`.
    ///
    /// Returns the nearest ray parameter `t > 0` such that
    /// `origin + direction * t` lies on the shape, or `None` if the ray
    /// misses or the shape lies entirely behind the ray origin.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3, position: Vec3) -> Option<f32> {
        match self {
            Self::Sphere { radius } => ray_sphere(origin, direction, position, *radius),
            Self::Box { half_extents } => {
                ray_aabb(origin, direction, position - *half_extents, position + *half_extents)
            }
            Self::Mesh { vertices, indices } => {
                ray_mesh(origin, direction, position, vertices, indices)
            }
        }
    }
}

/// Ray-sphere intersection via the quadratic formula.
fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = direction.dot(direction);
    let b = 2.0 * direction.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-b - sqrt_d) / (2.0 * a);
    if t_near > 0.0 {
        return Some(t_near);
    }

    // Origin inside the sphere: the far root is the exit point
    let t_far = (-b + sqrt_d) / (2.0 * a);
    if t_far > 0.0 { Some(t_far) } else { None }
}

/// Ray-AABB intersection using the slab method.
fn ray_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / direction.x,
        1.0 / direction.y,
        1.0 / direction.z,
    );

    let t1 = (min.x - origin.x) * inv_dir.x;
    let t2 = (max.x - origin.x) * inv_dir.x;
    let t3 = (min.y - origin.y) * inv_dir.y;
    let t4 = (max.y - origin.y) * inv_dir.y;
    let t5 = (min.z - origin.z) * inv_dir.z;
    let t6 = (max.z - origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection.
fn ray_triangle(origin: Vec3, direction: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t > EPSILON { Some(t) } else { None }
}

/// Nearest triangle hit over an indexed mesh translated by `position`.
fn ray_mesh(
    origin: Vec3,
    direction: Vec3,
    position: Vec3,
    vertices: &[[f32; 3]],
    indices: &[u32],
) -> Option<f32> {
    let mut best: Option<f32> = None;

    for tri in indices.chunks_exact(3) {
        let v0 = Vec3::from(vertices[tri[0] as usize]) + position;
        let v1 = Vec3::from(vertices[tri[1] as usize]) + position;
        let v2 = Vec3::from(vertices[tri[2] as usize]) + position;

        if let Some(t) = ray_triangle(origin, direction, v0, v1, v2)
            && best.is_none_or(|b| t < b)
        {
            best = Some(t);
        }
    }

    best
}
