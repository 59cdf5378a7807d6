//! Scene-side data model for the vantage viewer.
//!
//! Holds the interactive object registry, capability classification and
//! deformable targets. The interaction layer (`vantage-interact`) reads
//! and mutates this model; rendering and asset decoding are external
//! collaborators that only hand objects in.

pub mod classify;
pub mod deformable;
pub mod object;
pub mod registry;
pub mod shape;

pub use classify::{
    Classification, ClassificationPolicy, ClassificationRule, NameMatch, PolicyError,
};
pub use deformable::DeformableTarget;
pub use object::{Capability, CapabilitySet, LoadedObject, SceneObject};
pub use registry::{RegistryError, SceneRegistry, populate};
pub use shape::CollisionShape;
