/// Component descriptors returned by a `SceneSource`.
///
/// Each descriptor flattens one scene component into the slots the checker
/// inspects. `name` is the display name of the owning node, used for
/// missing-reference findings.

use serde::{Deserialize, Serialize};
use super::{ComponentRef, TextureInfo, MaterialInfo, MeshInfo, ClipInfo, SpriteInfo};

// ===== RENDERERS =====

/// What kind of renderer a `RendererComponent` is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum RendererKind {
    /// Static mesh renderer
    #[default]
    Mesh,
    /// Skinned mesh renderer (mesh slot reported separately)
    SkinnedMesh,
    /// 2D sprite renderer
    Sprite {
        /// Assigned sprite; `None` is a missing reference
        sprite: Option<SpriteInfo>,
    },
    /// Particle, line, trail...
    Other,
}

/// Any renderer and its shared material slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub name: String,
    /// Shared material slots in order; `None` for an empty slot
    #[serde(default)]
    pub materials: Vec<Option<MaterialInfo>>,
    #[serde(default)]
    pub kind: RendererKind,
}

// ===== MESHES =====

/// Mesh filter: the mesh slot of a static mesh renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshFilterComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub name: String,
    /// Shared mesh; `None` is a missing reference
    #[serde(default)]
    pub mesh: Option<MeshInfo>,
    /// Node is flagged for static batching
    #[serde(default)]
    pub static_batching: bool,
    /// A sibling mesh renderer exists and has a material assigned
    #[serde(default)]
    pub renderer_has_material: bool,
    /// Node hosts a text container, whose mesh is generated at runtime
    #[serde(default)]
    pub hosts_text_container: bool,
}

/// Skinned mesh renderer mesh slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinnedMeshRendererComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub name: String,
    /// Shared mesh; `None` is a missing reference
    #[serde(default)]
    pub mesh: Option<MeshInfo>,
    /// First material slot is assigned
    #[serde(default)]
    pub has_material: bool,
}

/// LOD group: renderer count per LOD level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodGroupComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lod_renderer_counts: Vec<usize>,
}

// ===== ANIMATION / UI / SCRIPTS =====

/// Animator: every sprite keyed by its controller's clips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub sprite_keyframes: Vec<SpriteInfo>,
}

/// UI graphic (image, raw image, text...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub main_texture: Option<TextureInfo>,
    #[serde(default)]
    pub material_for_rendering: Option<MaterialInfo>,
}

/// UI button transition sprites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub disabled_sprite: Option<SpriteInfo>,
    #[serde(default)]
    pub highlighted_sprite: Option<SpriteInfo>,
    #[serde(default)]
    pub pressed_sprite: Option<SpriteInfo>,
}

impl ButtonComponent {
    /// Assigned state sprites, in disabled / highlighted / pressed order
    pub fn state_sprites(&self) -> impl Iterator<Item = &SpriteInfo> {
        [&self.disabled_sprite, &self.highlighted_sprite, &self.pressed_sprite]
            .into_iter()
            .flatten()
    }
}

/// User script instance; its fields come from a `FieldWalker`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviourComponent {
    pub owner: ComponentRef,
}

// ===== AUDIO / LIGHTING =====

/// Audio source and its clip slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSourceComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub name: String,
    /// Assigned clip; `None` is a missing reference
    #[serde(default)]
    pub clip: Option<ClipInfo>,
}

/// Reflection probe baked cubemaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionProbeComponent {
    pub owner: ComponentRef,
    #[serde(default)]
    pub baked_texture: Option<TextureInfo>,
    #[serde(default)]
    pub custom_baked_texture: Option<TextureInfo>,
}

/// Scene-wide render settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub skybox: Option<MaterialInfo>,
    #[serde(default)]
    pub custom_reflection: Option<TextureInfo>,
}

/// One baked lightmap set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightmapData {
    #[serde(default)]
    pub color: Option<TextureInfo>,
    #[serde(default)]
    pub direction: Option<TextureInfo>,
    #[serde(default)]
    pub shadow_mask: Option<TextureInfo>,
}

impl LightmapData {
    /// Assigned lightmap textures
    pub fn textures(&self) -> impl Iterator<Item = &TextureInfo> {
        [&self.color, &self.direction, &self.shadow_mask].into_iter().flatten()
    }
}
