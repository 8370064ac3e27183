/// Missing-reference findings.
///
/// An empty mesh, material, sprite or clip slot (or an empty LOD) is not an
/// error, it is recorded here and surfaced in the report.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::host::ObjectId;

/// Category of a missing reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingKind {
    Mesh,
    Material,
    Sprite,
    AudioClip,
    Lod,
}

impl MissingKind {
    /// Category tag
    pub fn tag(self) -> &'static str {
        match self {
            MissingKind::Mesh => "mesh",
            MissingKind::Material => "material",
            MissingKind::Sprite => "sprite",
            MissingKind::AudioClip => "audioClip",
            MissingKind::Lod => "lod",
        }
    }
}

impl fmt::Display for MissingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A node with an empty slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingReference {
    /// Node owning the empty slot
    pub owner: ObjectId,
    pub kind: MissingKind,
    /// Node display name
    pub name: String,
}
