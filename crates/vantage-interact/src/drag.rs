//! Pointer drag state machine.

use glam::Vec3;
use tracing::{debug, trace};
use vantage_scene::SceneRegistry;

use crate::pick::pick;
use crate::policy::{self, Gesture};
use crate::projection::{
    Camera, Plane, ProjectionError, Viewport, pointer_to_ray, ray_plane_intersection,
};

/// Pointer button identifier. Only the primary button (left click or
/// single touch) drives interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Transient state of one active drag.
///
/// The plane and offset are computed once at drag start and never again,
/// which keeps the motion rigid and jump-free.
#[derive(Debug, Clone)]
struct DragSession {
    object: String,
    plane: Plane,
    offset: Vec3,
}

/// Interaction state machine: Idle or Dragging.
///
/// Each controller owns its session explicitly, so several controllers
/// (one per viewport) can coexist and tests need no global reset.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the currently dragged object, for render feedback.
    pub fn dragged_object(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.object.as_str())
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handle a pointer press.
    ///
    /// Resolves the topmost visible hit and dispatches by capability
    /// precedence: hide an occluder, start a drag, or fire a trigger.
    /// Non-primary buttons and presses during an active drag are ignored.
    pub fn on_pointer_down(
        &mut self,
        button: PointerButton,
        x: f32,
        y: f32,
        viewport: Viewport,
        camera: &Camera,
        scene: &mut SceneRegistry,
    ) -> Result<(), ProjectionError> {
        if button != PointerButton::Primary {
            return Ok(());
        }
        if self.session.is_some() {
            // A press with a live session means an up event was missed.
            // Dropping it preserves the single-session invariant.
            trace!("pointer down ignored, drag already active");
            return Ok(());
        }

        let ray = pointer_to_ray(x, y, viewport, camera)?;
        let hits = pick(&ray, scene);
        let Some(top) = hits.first() else {
            trace!("pointer down hit nothing");
            return Ok(());
        };

        let Some((caps, position)) = scene.find(&top.name).map(|o| (o.caps, o.position)) else {
            return Ok(());
        };

        match policy::gesture_for(caps) {
            Some(Gesture::Hide) => policy::apply_hide(&top.name, scene),
            Some(Gesture::Drag) => {
                let plane = Plane::from_point_normal(top.point, -camera.forward());
                let offset = top.point - position;
                debug!(object = %top.name, "drag started");
                self.session = Some(DragSession {
                    object: top.name.clone(),
                    plane,
                    offset,
                });
            }
            Some(Gesture::Trigger) => policy::apply_trigger(&top.name, scene),
            None => trace!(object = %top.name, "hit object has no interactive capability"),
        }

        Ok(())
    }

    /// Handle pointer motion.
    ///
    /// Idle is a no-op. While dragging, the new cursor ray intersects the
    /// plane stored at drag start; a parallel ray means no movement this
    /// event.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        viewport: Viewport,
        camera: &Camera,
        scene: &mut SceneRegistry,
    ) -> Result<(), ProjectionError> {
        let Some(session) = &self.session else {
            return Ok(());
        };

        let ray = pointer_to_ray(x, y, viewport, camera)?;
        if let Some(point) = ray_plane_intersection(&ray, &session.plane)
            && let Some(object) = scene.find_mut(&session.object)
        {
            object.position = point - session.offset;
            trace!(object = %session.object, "dragged object moved");
        }

        Ok(())
    }

    /// Handle a pointer release: tear down the session, if any.
    pub fn on_pointer_up(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(object = %session.object, "drag ended");
        }
    }
}
