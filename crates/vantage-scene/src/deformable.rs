//! Deformable targets.

use serde::{Deserialize, Serialize};

/// An object whose shape blends between rest and a deformed pose via a
/// scalar influence in `[0, 1]`.
///
/// The interaction core only ever writes the terminal value through
/// [`activate`](Self::activate); it never reads the influence back or
/// resets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeformableTarget {
    pub name: String,
    morph_influence: f32,
}

impl DeformableTarget {
    /// Create a target at rest (influence 0).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            morph_influence: 0.0,
        }
    }

    /// Blend fully to the deformed pose.
    ///
    /// Idempotent in effect: writing 1.0 again changes nothing observable.
    pub fn activate(&mut self) {
        self.morph_influence = 1.0;
    }

    /// Current influence, read by the render collaborator.
    pub fn influence(&self) -> f32 {
        self.morph_influence
    }
}
