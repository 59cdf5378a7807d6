//! Name-based capability classification.
//!
//! Scene-specific naming conventions (exact occluder names, shared family
//! tokens) live in an externally supplied policy instead of being
//! hardcoded in the interaction core, so the same core works across
//! scenes. Policies are plain serde types and load from RON.

use serde::{Deserialize, Serialize};

use crate::object::{Capability, CapabilitySet};

/// Predicate over object names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameMatch {
    /// Matches the exact object name.
    Exact(String),
    /// Matches any name containing the token (family tags).
    Contains(String),
}

impl NameMatch {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => name == expected,
            Self::Contains(token) => name.contains(token),
        }
    }
}

/// One classification rule. Rules apply in declaration order; within a
/// rule, grants apply before denies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub matcher: NameMatch,
    #[serde(default)]
    pub grant: Vec<Capability>,
    #[serde(default)]
    pub deny: Vec<Capability>,
    /// Explicit deformable target for a granted Trigger capability.
    /// When absent, registry population falls back to the scene default.
    #[serde(default)]
    pub trigger_target: Option<String>,
}

/// Resolved capabilities for one object name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub caps: CapabilitySet,
    pub trigger_target: Option<String>,
}

/// Ordered rule set applied once at registry-population time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    /// Capabilities every object starts with before rules apply.
    #[serde(default)]
    pub default_caps: Vec<Capability>,
    #[serde(default)]
    pub rules: Vec<ClassificationRule>,
}

impl ClassificationPolicy {
    /// Resolve the capability set and trigger back-reference for a name.
    pub fn classify(&self, name: &str) -> Classification {
        let mut caps = CapabilitySet::empty();
        for cap in &self.default_caps {
            caps.insert(*cap);
        }

        let mut trigger_target = None;
        for rule in &self.rules {
            if !rule.matcher.matches(name) {
                continue;
            }
            for cap in &rule.grant {
                caps.insert(*cap);
            }
            for cap in &rule.deny {
                caps.remove(*cap);
            }
            if rule.trigger_target.is_some() {
                trigger_target = rule.trigger_target.clone();
            }
        }

        if !caps.trigger {
            trigger_target = None;
        }

        Classification {
            caps,
            trigger_target,
        }
    }

    /// Load a policy from a RON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, PolicyError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PolicyError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Parse a policy from a RON string.
    pub fn from_ron_str(content: &str) -> Result<Self, PolicyError> {
        ron::from_str(content).map_err(|e| PolicyError::Deserialize(e.to_string()))
    }

    /// Serialize the policy to pretty RON.
    pub fn to_ron(&self) -> Result<String, PolicyError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| PolicyError::Serialize(e.to_string()))
    }
}

/// Policy configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
