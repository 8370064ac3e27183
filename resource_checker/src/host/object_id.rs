/// Opaque identities for host objects.

use serde::{Deserialize, Serialize};

/// Native handle of a host object (texture, material, component, node...)
///
/// Two values denote the same object iff the handles are equal. The checker
/// never dereferences a handle; it only compares, hashes and hands it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Raw handle value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A component that references a resource, plus the node it is attached to.
///
/// Identity is the component handle; `game_object` is carried along so that
/// reports can count and select distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Component handle
    pub id: ObjectId,
    /// Node (game object) owning the component
    pub game_object: ObjectId,
}

impl ComponentRef {
    /// Create a component reference
    pub fn new(id: ObjectId, game_object: ObjectId) -> Self {
        Self { id, game_object }
    }
}
