/// Resource descriptors supplied by the host.
///
/// These are plain snapshots of the attributes the checker needs. Identity is
/// always the `id` field; every other field is informational.

use serde::{Deserialize, Serialize};
use crate::format::{PixelFormat, TextureShape, estimate_bytes};
use super::ObjectId;

/// Texture attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Native handle
    pub id: ObjectId,
    /// Asset name
    #[serde(default)]
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Storage encoding
    pub format: PixelFormat,
    /// Host-reported mip chain length
    #[serde(default = "default_mip_count")]
    pub mip_count: u32,
    /// Plane, cube or array
    #[serde(default = "default_shape")]
    pub shape: TextureShape,
}

fn default_mip_count() -> u32 {
    1
}

fn default_shape() -> TextureShape {
    TextureShape::Plane
}

impl TextureInfo {
    /// Estimated storage in bytes (see `format::estimate_bytes`)
    pub fn estimated_bytes(&self) -> f64 {
        estimate_bytes(self.shape, self.width, self.height, self.format, self.mip_count)
    }

    /// Dimension label: `WxH`, `WxHx6` for cubemaps, `WxH[]` plus depth for arrays
    pub fn dimensions_label(&self) -> String {
        match self.shape {
            TextureShape::Plane => format!("{}x{}", self.width, self.height),
            TextureShape::Cube => format!("{}x{}x6", self.width, self.height),
            TextureShape::Array { depth } => {
                format!("{}x{}[] {} depths", self.width, self.height, depth)
            }
        }
    }
}

/// Material attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Native handle
    pub id: ObjectId,
    /// Asset name
    #[serde(default)]
    pub name: String,
    /// Render queue (draw order bucket)
    #[serde(default)]
    pub render_queue: i32,
    /// Shader name, if a shader is assigned
    #[serde(default)]
    pub shader: Option<String>,
    /// Texture bound to the main texture slot, if any
    #[serde(default)]
    pub main_texture: Option<TextureInfo>,
}

/// Mesh attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshInfo {
    /// Native handle
    pub id: ObjectId,
    /// Asset name (may be empty for procedural meshes)
    #[serde(default)]
    pub name: String,
    /// Vertex count
    pub vertex_count: u32,
}

/// Audio clip attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipInfo {
    /// Native handle
    pub id: ObjectId,
    /// Asset name
    #[serde(default)]
    pub name: String,
    /// Channel count
    #[serde(default)]
    pub channels: u16,
    /// Sample rate in Hz
    #[serde(default)]
    pub frequency: u32,
    /// Duration in seconds
    #[serde(default)]
    pub length_seconds: f32,
}

impl ClipInfo {
    /// Label like `Chs: 2 - 44100 Hz` / `1.5 s`
    pub fn label(&self) -> String {
        format!("Chs: {} - {} Hz\n{} s", self.channels, self.frequency, self.length_seconds)
    }
}

/// A sprite: a region of a texture, plus optional secondary textures
/// (normal maps, masks) packed alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    /// Texture the sprite is cut from
    pub texture: TextureInfo,
    /// Secondary textures
    #[serde(default)]
    pub secondary_textures: Vec<TextureInfo>,
}

impl SpriteInfo {
    /// Primary texture followed by every secondary texture
    pub fn textures(&self) -> impl Iterator<Item = &TextureInfo> {
        std::iter::once(&self.texture).chain(self.secondary_textures.iter())
    }
}
