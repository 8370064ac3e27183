/// Collaborator traits a host implements for a scan.

use serde::{Deserialize, Serialize};
use crate::error::Result;
use super::{
    ObjectId, TextureInfo, MaterialInfo, MeshInfo, SpriteInfo,
    RendererComponent, MeshFilterComponent, SkinnedMeshRendererComponent,
    LodGroupComponent, AnimatorComponent, GraphicComponent, ButtonComponent,
    BehaviourComponent, AudioSourceComponent, ReflectionProbeComponent,
    RenderSettings, LightmapData,
};

/// Host execution mode a report was collected in
///
/// Object handles do not survive a mode switch, so a report collected in one
/// mode is discarded wholesale when the host enters the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Authoring
    #[default]
    Edit,
    /// Running the game
    Play,
}

/// Which components a scene query should return
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentQuery {
    /// Scene roots to search beneath (loaded scenes plus persistent roots)
    pub roots: Vec<ObjectId>,
    /// Also return components on inactive nodes
    pub include_disabled: bool,
}

// ===== SCENE SOURCE =====

/// Supplies component descriptors from the currently loaded scenes.
///
/// Every component query has an empty default so hosts only implement the
/// kinds they actually have. A query error aborts the scan in progress,
/// except `persistent_roots`, whose failure is logged and treated as "none".
pub trait SceneSource {
    /// Current host mode
    fn execution_mode(&self) -> ExecutionMode;

    /// Root nodes of every loaded scene
    fn loaded_scene_roots(&self) -> Result<Vec<ObjectId>>;

    /// Roots of the persistent ("don't destroy on load") scene.
    ///
    /// Only probed in `Play` mode.
    fn persistent_roots(&self) -> Result<Vec<ObjectId>> {
        Ok(Vec::new())
    }

    fn render_settings(&self) -> Result<RenderSettings> {
        Ok(RenderSettings::default())
    }

    fn lightmaps(&self) -> Result<Vec<LightmapData>> {
        Ok(Vec::new())
    }

    fn reflection_probes(&self, _query: &ComponentQuery) -> Result<Vec<ReflectionProbeComponent>> {
        Ok(Vec::new())
    }

    fn renderers(&self, _query: &ComponentQuery) -> Result<Vec<RendererComponent>> {
        Ok(Vec::new())
    }

    fn mesh_filters(&self, _query: &ComponentQuery) -> Result<Vec<MeshFilterComponent>> {
        Ok(Vec::new())
    }

    fn skinned_mesh_renderers(&self, _query: &ComponentQuery) -> Result<Vec<SkinnedMeshRendererComponent>> {
        Ok(Vec::new())
    }

    fn lod_groups(&self, _query: &ComponentQuery) -> Result<Vec<LodGroupComponent>> {
        Ok(Vec::new())
    }

    fn animators(&self, _query: &ComponentQuery) -> Result<Vec<AnimatorComponent>> {
        Ok(Vec::new())
    }

    fn graphics(&self, _query: &ComponentQuery) -> Result<Vec<GraphicComponent>> {
        Ok(Vec::new())
    }

    fn buttons(&self, _query: &ComponentQuery) -> Result<Vec<ButtonComponent>> {
        Ok(Vec::new())
    }

    fn behaviours(&self, _query: &ComponentQuery) -> Result<Vec<BehaviourComponent>> {
        Ok(Vec::new())
    }

    fn audio_sources(&self, _query: &ComponentQuery) -> Result<Vec<AudioSourceComponent>> {
        Ok(Vec::new())
    }
}

// ===== ASSET / FIELD COLLABORATORS =====

/// Resolves the textures a material depends on (beyond its main texture slot)
pub trait DependencyResolver {
    fn texture_dependencies(&self, material: ObjectId) -> Result<Vec<TextureInfo>>;
}

/// A resource held in a script's public field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Sprite(SpriteInfo),
    Mesh(MeshInfo),
    Material(MaterialInfo),
}

/// Enumerates the trackable resource fields of a script instance.
///
/// Unset fields and fields of other types are omitted.
pub trait FieldWalker {
    fn public_fields(&self, behaviour: ObjectId) -> Result<Vec<FieldValue>>;
}

/// Reports whether a host object still exists
pub trait Liveness {
    fn is_alive(&self, id: ObjectId) -> bool;
}

// ===== HOST BUNDLE =====

/// The collaborators one scan runs against
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub scene: &'a dyn SceneSource,
    pub dependencies: &'a dyn DependencyResolver,
    pub fields: &'a dyn FieldWalker,
}

impl<'a> Host<'a> {
    /// Bundle three separate collaborators
    pub fn new(
        scene: &'a dyn SceneSource,
        dependencies: &'a dyn DependencyResolver,
        fields: &'a dyn FieldWalker,
    ) -> Self {
        Self { scene, dependencies, fields }
    }

    /// Use one object that implements every collaborator trait
    pub fn from_single<H>(host: &'a H) -> Self
    where
        H: SceneSource + DependencyResolver + FieldWalker,
    {
        Self { scene: host, dependencies: host, fields: host }
    }
}
