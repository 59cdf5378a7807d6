//! Pointer interaction core for the vantage viewer.
//!
//! Turns 2D pointer events into 3D scene manipulation: a ray is cast from
//! the camera through the cursor, picked objects are dragged across a
//! plane fixed at drag start, occluders hide on first click and trigger
//! zones activate a linked deformable target.
//!
//! The surrounding application owns the camera, the render loop and asset
//! loading; this crate only consumes a camera description and a populated
//! [`vantage_scene::SceneRegistry`] and exposes the three pointer event
//! entry points on [`DragController`].

pub mod drag;
pub mod pick;
pub mod policy;
pub mod projection;

pub use drag::{DragController, PointerButton};
pub use pick::{Hit, pick};
pub use policy::Gesture;
pub use projection::{
    Camera, Plane, ProjectionError, Ray, Viewport, pointer_to_ray, ray_plane_intersection,
};
