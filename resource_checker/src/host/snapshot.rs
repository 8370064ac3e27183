/// In-memory scene snapshot.
///
/// A serializable dump of everything a scan reads from a host. It implements
/// every read-side collaborator trait, so a scene exported from an editor can
/// be audited offline, and tests can describe scenes declaratively.
///
/// Objects can be invalidated with `destroy` to model assets and components
/// that disappear between a scan and a refresh.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::checker_err;
use super::{
    ObjectId, ComponentRef, TextureInfo,
    RendererComponent, MeshFilterComponent, SkinnedMeshRendererComponent,
    LodGroupComponent, AnimatorComponent, GraphicComponent, ButtonComponent,
    BehaviourComponent, AudioSourceComponent, ReflectionProbeComponent,
    RenderSettings, LightmapData,
    ExecutionMode, ComponentQuery, SceneSource, DependencyResolver,
    FieldWalker, FieldValue, Liveness,
};

const SOURCE: &str = "rescheck::Snapshot";

// ===== DATA TYPES =====

/// A scene and its root nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotScene {
    #[serde(default)]
    pub name: String,
    /// Unloaded scenes contribute no roots
    #[serde(default = "default_true")]
    pub loaded: bool,
    #[serde(default)]
    pub roots: Vec<ObjectId>,
}

/// A scene node (game object)
///
/// Components on nodes that are not listed are treated as active and
/// reachable from every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    /// Root node this node lives under (itself for a root)
    pub root: ObjectId,
    /// Active in hierarchy
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A script instance with its trackable field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBehaviour {
    pub owner: ComponentRef,
    #[serde(default)]
    pub fields: Vec<FieldValue>,
}

/// Textures a material depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDependencies {
    pub material: ObjectId,
    #[serde(default)]
    pub textures: Vec<TextureInfo>,
}

fn default_true() -> bool {
    true
}

// ===== SNAPSHOT =====

/// Serializable scene host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSnapshot {
    pub mode: ExecutionMode,
    pub scenes: Vec<SnapshotScene>,
    /// Roots of the persistent scene; `None` in play mode means the probe fails
    pub persistent_roots: Option<Vec<ObjectId>>,
    pub nodes: Vec<SceneNode>,
    pub render_settings: RenderSettings,
    pub lightmaps: Vec<LightmapData>,
    pub reflection_probes: Vec<ReflectionProbeComponent>,
    pub renderers: Vec<RendererComponent>,
    pub mesh_filters: Vec<MeshFilterComponent>,
    pub skinned_mesh_renderers: Vec<SkinnedMeshRendererComponent>,
    pub lod_groups: Vec<LodGroupComponent>,
    pub animators: Vec<AnimatorComponent>,
    pub graphics: Vec<GraphicComponent>,
    pub buttons: Vec<ButtonComponent>,
    pub behaviours: Vec<SnapshotBehaviour>,
    pub audio_sources: Vec<AudioSourceComponent>,
    pub material_dependencies: Vec<MaterialDependencies>,
    #[serde(skip)]
    destroyed: FxHashSet<ObjectId>,
}

impl SceneSnapshot {
    /// Create an empty snapshot in the given mode
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            persistent_roots: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Parse a snapshot from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: SceneSnapshot = serde_json::from_str(json)
            .map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialize to pretty JSON (destroyed marks are not persisted)
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Check that no component handle is used twice
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let owners = self.reflection_probes.iter().map(|c| c.owner)
            .chain(self.renderers.iter().map(|c| c.owner))
            .chain(self.mesh_filters.iter().map(|c| c.owner))
            .chain(self.skinned_mesh_renderers.iter().map(|c| c.owner))
            .chain(self.lod_groups.iter().map(|c| c.owner))
            .chain(self.animators.iter().map(|c| c.owner))
            .chain(self.graphics.iter().map(|c| c.owner))
            .chain(self.buttons.iter().map(|c| c.owner))
            .chain(self.behaviours.iter().map(|c| c.owner))
            .chain(self.audio_sources.iter().map(|c| c.owner));

        for owner in owners {
            if !seen.insert(owner.id) {
                return Err(Error::InvalidSnapshot(format!(
                    "component {} is listed more than once", owner.id
                )));
            }
        }
        Ok(())
    }

    /// Invalidate an object (asset, component or node)
    pub fn destroy(&mut self, id: ObjectId) {
        self.destroyed.insert(id);
    }

    /// Whether `destroy` was called for this object
    pub fn is_destroyed(&self, id: ObjectId) -> bool {
        self.destroyed.contains(&id)
    }

    fn node(&self, id: ObjectId) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    fn matches(&self, owner: ComponentRef, query: &ComponentQuery) -> bool {
        if self.is_destroyed(owner.id) || self.is_destroyed(owner.game_object) {
            return false;
        }
        match self.node(owner.game_object) {
            Some(node) => {
                query.roots.contains(&node.root) && (query.include_disabled || node.active)
            }
            None => true,
        }
    }

    fn select<T: Clone>(
        &self,
        components: &[T],
        owner: impl Fn(&T) -> ComponentRef,
        query: &ComponentQuery,
    ) -> Result<Vec<T>> {
        Ok(components
            .iter()
            .filter(|component| self.matches(owner(component), query))
            .cloned()
            .collect())
    }
}

// ===== COLLABORATOR IMPLEMENTATIONS =====

impl SceneSource for SceneSnapshot {
    fn execution_mode(&self) -> ExecutionMode {
        self.mode
    }

    fn loaded_scene_roots(&self) -> Result<Vec<ObjectId>> {
        Ok(self.scenes
            .iter()
            .filter(|scene| scene.loaded)
            .flat_map(|scene| scene.roots.iter().copied())
            .filter(|&root| !self.is_destroyed(root))
            .collect())
    }

    fn persistent_roots(&self) -> Result<Vec<ObjectId>> {
        if self.mode == ExecutionMode::Edit {
            return Ok(Vec::new());
        }
        match &self.persistent_roots {
            Some(roots) => Ok(roots.clone()),
            None => Err(checker_err!(SOURCE, "Persistent scene is not valid")),
        }
    }

    fn render_settings(&self) -> Result<RenderSettings> {
        Ok(self.render_settings.clone())
    }

    fn lightmaps(&self) -> Result<Vec<LightmapData>> {
        Ok(self.lightmaps.clone())
    }

    fn reflection_probes(&self, query: &ComponentQuery) -> Result<Vec<ReflectionProbeComponent>> {
        self.select(&self.reflection_probes, |c| c.owner, query)
    }

    fn renderers(&self, query: &ComponentQuery) -> Result<Vec<RendererComponent>> {
        self.select(&self.renderers, |c| c.owner, query)
    }

    fn mesh_filters(&self, query: &ComponentQuery) -> Result<Vec<MeshFilterComponent>> {
        self.select(&self.mesh_filters, |c| c.owner, query)
    }

    fn skinned_mesh_renderers(&self, query: &ComponentQuery) -> Result<Vec<SkinnedMeshRendererComponent>> {
        self.select(&self.skinned_mesh_renderers, |c| c.owner, query)
    }

    fn lod_groups(&self, query: &ComponentQuery) -> Result<Vec<LodGroupComponent>> {
        self.select(&self.lod_groups, |c| c.owner, query)
    }

    fn animators(&self, query: &ComponentQuery) -> Result<Vec<AnimatorComponent>> {
        self.select(&self.animators, |c| c.owner, query)
    }

    fn graphics(&self, query: &ComponentQuery) -> Result<Vec<GraphicComponent>> {
        self.select(&self.graphics, |c| c.owner, query)
    }

    fn buttons(&self, query: &ComponentQuery) -> Result<Vec<ButtonComponent>> {
        self.select(&self.buttons, |c| c.owner, query)
    }

    fn behaviours(&self, query: &ComponentQuery) -> Result<Vec<BehaviourComponent>> {
        Ok(self.behaviours
            .iter()
            .filter(|behaviour| self.matches(behaviour.owner, query))
            .map(|behaviour| BehaviourComponent { owner: behaviour.owner })
            .collect())
    }

    fn audio_sources(&self, query: &ComponentQuery) -> Result<Vec<AudioSourceComponent>> {
        self.select(&self.audio_sources, |c| c.owner, query)
    }
}

impl DependencyResolver for SceneSnapshot {
    fn texture_dependencies(&self, material: ObjectId) -> Result<Vec<TextureInfo>> {
        Ok(self.material_dependencies
            .iter()
            .filter(|deps| deps.material == material)
            .flat_map(|deps| deps.textures.iter())
            .filter(|texture| !self.is_destroyed(texture.id))
            .cloned()
            .collect())
    }
}

impl FieldWalker for SceneSnapshot {
    fn public_fields(&self, behaviour: ObjectId) -> Result<Vec<FieldValue>> {
        Ok(self.behaviours
            .iter()
            .find(|b| b.owner.id == behaviour)
            .map(|b| b.fields.clone())
            .unwrap_or_default())
    }
}

impl Liveness for SceneSnapshot {
    fn is_alive(&self, id: ObjectId) -> bool {
        !self.is_destroyed(id)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
