/// Scan configuration.
///
/// The toggles a user flips before a scan. Owned by the presentation layer
/// and passed by reference into every scan.

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// What a scan should look at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Also scan components on inactive nodes
    pub include_disabled_objects: bool,
    /// Collect sprites keyed in animator clips
    pub include_sprite_animations: bool,
    /// Walk script fields for sprites, meshes and materials
    pub include_script_references: bool,
    /// Collect UI graphics and button sprites
    pub include_gui_elements: bool,
    /// Collect baked lightmap textures
    pub include_lightmap_textures: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_disabled_objects: true,
            include_sprite_animations: true,
            include_script_references: true,
            include_gui_elements: true,
            include_lightmap_textures: true,
        }
    }
}

impl ScanConfig {
    /// Parse a configuration; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
