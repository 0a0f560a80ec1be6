//! Grid item records
//!
//! A `GridItem` is one embedded video in the grid. Its position is not stored:
//! it is the item's index in the sequence owned by the registry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque unique token naming a grid item for its whole lifetime
///
/// Crosses the JS boundary as its display string (`item-<hex>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridItemId(Uuid);

impl GridItemId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id previously produced by `to_string()`
    pub fn parse(s: &str) -> Option<Self> {
        let raw = s.strip_prefix("item-").unwrap_or(s);
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for GridItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0.simple())
    }
}

impl Serialize for GridItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        GridItemId::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid grid item id: {}", s)))
    }
}

/// One embedded video in the grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    id: GridItemId,

    /// Canonical video token extracted from user input
    source_ref: String,

    /// Pixel width from the most recent layout pass
    pub display_width: u32,

    /// Set while the per-item "remove this video?" prompt is showing
    pub pending_removal: bool,
}

impl GridItem {
    /// Create a new item with a freshly generated id
    pub fn new(source_ref: impl Into<String>, display_width: u32) -> Self {
        Self {
            id: GridItemId::generate(),
            source_ref: source_ref.into(),
            display_width,
            pending_removal: false,
        }
    }

    pub fn id(&self) -> GridItemId {
        self.id
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }
}
