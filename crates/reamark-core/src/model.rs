use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ATTRIBUTE_NAME: &str = "name";
pub const ATTRIBUTE_COLOR: &str = "color";

#[derive(Debug, Error, PartialEq)]
pub enum EventError {
    #[error("leaf duration is not finite: {0}")]
    NonFiniteDuration(f64),
    #[error("leaf duration is negative: {0}")]
    NegativeDuration(f64),
}

/// Atomic timed unit of the composition tree. Carries an arbitrary
/// attribute bag; the marker converter only ever reads from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeafEvent {
    pub duration_seconds: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl LeafEvent {
    #[must_use]
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }
}

/// A single leaf, or a nested ordered sequence of leaves and sub-sequences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Leaf(LeafEvent),
    Sequence(Vec<Event>),
}

impl Event {
    #[must_use]
    pub fn leaf(duration_seconds: f64) -> Self {
        Self::Leaf(LeafEvent::new(duration_seconds))
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.duration_seconds,
            Self::Sequence(children) => children.iter().map(Self::duration_seconds).sum(),
        }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Sequence(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Rejects trees a caller-supplied JSON payload could smuggle in but
    /// that no composition front-end produces. The converter itself never
    /// validates; it is infallible by contract.
    pub fn validate(&self) -> Result<(), EventError> {
        match self {
            Self::Leaf(leaf) => {
                if !leaf.duration_seconds.is_finite() {
                    return Err(EventError::NonFiniteDuration(leaf.duration_seconds));
                }
                if leaf.duration_seconds < 0.0 {
                    return Err(EventError::NegativeDuration(leaf.duration_seconds));
                }
                Ok(())
            }
            Self::Sequence(children) => {
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
        }
    }
}
