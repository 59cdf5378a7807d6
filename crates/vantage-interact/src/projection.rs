//! Camera description and pointer-to-world projection.

use glam::{Mat4, Vec3, Vec4};

/// Perspective camera description.
///
/// Owned by the surrounding application and read-only to the interaction
/// core, except for [`set_aspect`](Self::set_aspect) which the resize
/// collaborator calls with the new viewport proportions.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at `position` looking toward `target`, with Y up and
    /// common perspective defaults.
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit view direction, from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

/// Viewport dimensions in device pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A ray in world space, cast from the camera through the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// A plane in world space, `normal · p + distance = 0`.
///
/// The normal is kept unit length so intersection tests stay numerically
/// stable.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Plane through `point` with the given normal. The normal is
    /// normalized here; callers may pass any non-zero vector.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize();
        Self {
            normal: n,
            distance: -n.dot(point),
        }
    }

    /// Signed distance from a point to the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Errors rejected at the projection boundary. These are caller
/// precondition violations, never coerced into a usable ray.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("Invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("Invalid pointer coordinates: ({x}, {y})")]
    InvalidCoordinate { x: f32, y: f32 },
}

/// Convert device pixel coordinates to a world-space ray.
///
/// Pixels map to normalized device coordinates in `[-1, 1]²` with Y
/// flipped (screen Y grows downward), then the near and far NDC points
/// unproject through the camera's inverse view-projection.
pub fn pointer_to_ray(
    x: f32,
    y: f32,
    viewport: Viewport,
    camera: &Camera,
) -> Result<Ray, ProjectionError> {
    if !viewport.width.is_finite()
        || !viewport.height.is_finite()
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return Err(ProjectionError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !x.is_finite() || !y.is_finite() {
        return Err(ProjectionError::InvalidCoordinate { x, y });
    }

    let ndc_x = (2.0 * x / viewport.width) - 1.0;
    let ndc_y = 1.0 - (2.0 * y / viewport.height);

    let inv_proj = camera.projection_matrix().inverse();
    let inv_view = camera.view_matrix().inverse();

    let near_ndc = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far_ndc = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

    let near_view = inv_proj * near_ndc;
    let far_view = inv_proj * far_ndc;
    let near_view = near_view.truncate() / near_view.w;
    let far_view = far_view.truncate() / far_view.w;

    let near_world = (inv_view * near_view.extend(1.0)).truncate();
    let far_world = (inv_view * far_view.extend(1.0)).truncate();

    Ok(Ray {
        origin: near_world,
        direction: (far_world - near_world).normalize(),
    })
}

/// Intersect a ray with a plane.
///
/// Returns `None` when the ray is parallel to the plane or the
/// intersection lies behind the ray origin. Callers treat `None` as
/// "no movement this event", not as an error.
pub fn ray_plane_intersection(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = ray.direction.dot(plane.normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = -(plane.normal.dot(ray.origin) + plane.distance) / denom;
    if t < 0.0 {
        return None;
    }

    Some(ray.origin + ray.direction * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 4.0 / 3.0)
    }

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_pointer_to_ray_is_deterministic() {
        let camera = test_camera();
        let a = pointer_to_ray(123.0, 456.0, VIEWPORT, &camera).unwrap();
        let b = pointer_to_ray(123.0, 456.0, VIEWPORT, &camera).unwrap();
        assert_eq!(a.origin, b.origin);
        assert_eq!(a.direction, b.direction);
    }

    #[test]
    fn test_center_ray_points_along_view_direction() {
        let camera = test_camera();
        let ray = pointer_to_ray(400.0, 300.0, VIEWPORT, &camera).unwrap();
        let forward = camera.forward();
        assert!(ray.direction.dot(forward) > 0.999);
    }

    #[test]
    fn test_screen_y_is_flipped() {
        let camera = test_camera();
        // Above the viewport center means upward in world space
        let ray = pointer_to_ray(400.0, 100.0, VIEWPORT, &camera).unwrap();
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn test_zero_viewport_rejected() {
        let camera = test_camera();
        let result = pointer_to_ray(0.0, 0.0, Viewport::new(0.0, 600.0), &camera);
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let camera = test_camera();
        let result = pointer_to_ray(f32::NAN, 10.0, VIEWPORT, &camera);
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_ray_plane_intersection_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        let point = ray_plane_intersection(&ray, &plane).unwrap();
        assert!((point - Vec3::ZERO).length() < 1e-5);
    }

    #[test]
    fn test_ray_parallel_to_plane_misses() {
        let ray = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::X,
        };
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        assert!(ray_plane_intersection(&ray, &plane).is_none());
    }

    #[test]
    fn test_plane_behind_ray_origin_misses() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::Z,
        };
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Z);
        assert!(ray_plane_intersection(&ray, &plane).is_none());
    }

    #[test]
    fn test_plane_constructor_normalizes() {
        let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 10.0));
        assert!((plane.normal.length() - 1.0).abs() < 1e-6);
        assert!(plane.distance_to_point(Vec3::new(3.0, -2.0, 1.0)).abs() < 1e-6);
    }
}
