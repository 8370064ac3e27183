/// Resource registry - deduplicating store for one scan's findings.
///
/// Every lookup is a linear scan comparing native handles. Collections are
/// bounded by scene size and rebuilt once per scan, so no index is kept.

use crate::checker_trace;
use crate::host::{
    ClipInfo, Liveness, MaterialInfo, MeshInfo, ObjectId, TextureInfo,
};
use super::{
    ClipRecord, MaterialRecord, MeshRecord, MissingKind, MissingReference,
    ResourceFlags, TextureRecord, compare_render_queue,
};

const SOURCE: &str = "rescheck::Registry";

/// Deduplicated textures, materials, meshes, clips and missing references
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    textures: Vec<TextureRecord>,
    materials: Vec<MaterialRecord>,
    meshes: Vec<MeshRecord>,
    clips: Vec<ClipRecord>,
    missing: Vec<MissingReference>,
    total_texture_memory_kb: f64,
    total_mesh_vertices: u64,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // ===== FIND OR CREATE =====

    /// Record for a texture, created (and sized) on first sight
    pub fn find_or_create_texture(&mut self, info: &TextureInfo) -> &mut TextureRecord {
        let index = match self.textures.iter().position(|r| r.id() == info.id) {
            Some(index) => index,
            None => {
                self.textures.push(TextureRecord::new(info.clone()));
                self.textures.len() - 1
            }
        };
        &mut self.textures[index]
    }

    /// Record for a material slot value
    ///
    /// `flags` only apply when the record is created. All empty slots share
    /// one record.
    pub fn find_or_create_material(
        &mut self,
        material: Option<&MaterialInfo>,
        flags: ResourceFlags,
    ) -> &mut MaterialRecord {
        let id = material.map(|m| m.id);
        let index = match self.materials.iter().position(|r| r.id() == id) {
            Some(index) => index,
            None => {
                self.materials.push(MaterialRecord::new(material.cloned(), flags));
                self.materials.len() - 1
            }
        };
        &mut self.materials[index]
    }

    /// Record for a mesh; `flags` only apply on creation
    pub fn find_or_create_mesh(&mut self, info: &MeshInfo, flags: ResourceFlags) -> &mut MeshRecord {
        let index = match self.meshes.iter().position(|r| r.id() == info.id) {
            Some(index) => index,
            None => {
                self.meshes.push(MeshRecord::new(info.clone(), flags));
                self.meshes.len() - 1
            }
        };
        &mut self.meshes[index]
    }

    pub fn find_or_create_clip(&mut self, info: &ClipInfo) -> &mut ClipRecord {
        let index = match self.clips.iter().position(|r| r.id() == info.id) {
            Some(index) => index,
            None => {
                self.clips.push(ClipRecord::new(info.clone()));
                self.clips.len() - 1
            }
        };
        &mut self.clips[index]
    }

    /// Record a texture reached through a material
    ///
    /// The texture inherits the material's renderer and graphic owners, and
    /// its flags are unioned with the material's.
    pub fn link_material_texture(
        &mut self,
        material: &MaterialInfo,
        texture: &TextureInfo,
    ) -> &mut TextureRecord {
        let (renderers, graphics, flags) = match self.material(Some(material.id)) {
            Some(record) => (
                record.found_in_renderers.iter().collect::<Vec<_>>(),
                record.found_in_graphics.iter().collect::<Vec<_>>(),
                record.flags,
            ),
            None => (Vec::new(), Vec::new(), ResourceFlags::empty()),
        };

        let record = self.find_or_create_texture(texture);
        record.add_material(material.id);
        record.found_in_renderers.extend(renderers);
        record.found_in_graphics.extend(graphics);
        record.flags |= flags;
        record
    }

    /// Add a missing-reference finding
    pub fn push_missing(&mut self, owner: ObjectId, kind: MissingKind, name: impl Into<String>) {
        let name = name.into();
        checker_trace!(SOURCE, "Missing {} on '{}' ({})", kind, name, owner);
        self.missing.push(MissingReference { owner, kind, name });
    }

    // ===== MAINTENANCE =====

    /// Drop records whose resource was destroyed and owners that no longer exist
    ///
    /// Empty material slots are kept. Returns the number of records removed.
    pub fn prune(&mut self, liveness: &dyn Liveness) -> usize {
        let before = self.record_count();

        self.clips.retain(|r| liveness.is_alive(r.id()));
        self.clips.iter_mut().for_each(|r| r.prune(liveness));

        self.textures.retain(|r| liveness.is_alive(r.id()));
        self.textures.iter_mut().for_each(|r| r.prune(liveness));

        self.materials.retain(|r| r.id().map_or(true, |id| liveness.is_alive(id)));
        self.materials.iter_mut().for_each(|r| r.prune(liveness));

        self.meshes.retain(|r| liveness.is_alive(r.id()));
        self.meshes.iter_mut().for_each(|r| r.prune(liveness));

        self.missing.retain(|m| liveness.is_alive(m.owner));

        before - self.record_count()
    }

    /// Recompute total texture memory and total mesh vertices
    pub fn recompute_totals(&mut self) {
        self.total_texture_memory_kb = self.textures.iter().map(|t| t.memory_kb()).sum();
        self.total_mesh_vertices = self.meshes.iter().map(|m| u64::from(m.vertex_count())).sum();
    }

    /// Textures by memory descending, meshes by vertex count descending,
    /// materials by render queue ascending with empty slots last
    pub fn sort_for_presentation(&mut self) {
        self.textures.sort_by(|a, b| b.memory_kb().total_cmp(&a.memory_kb()));
        self.meshes.sort_by(|a, b| b.vertex_count().cmp(&a.vertex_count()));
        self.materials.sort_by(compare_render_queue);
    }

    /// Remove everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn record_count(&self) -> usize {
        self.textures.len() + self.materials.len() + self.meshes.len()
            + self.clips.len() + self.missing.len()
    }

    // ===== ACCESSORS =====

    pub fn textures(&self) -> &[TextureRecord] {
        &self.textures
    }

    pub fn materials(&self) -> &[MaterialRecord] {
        &self.materials
    }

    pub fn meshes(&self) -> &[MeshRecord] {
        &self.meshes
    }

    pub fn clips(&self) -> &[ClipRecord] {
        &self.clips
    }

    pub fn missing(&self) -> &[MissingReference] {
        &self.missing
    }

    /// Whether any missing reference was found
    pub fn things_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    pub fn texture(&self, id: ObjectId) -> Option<&TextureRecord> {
        self.textures.iter().find(|r| r.id() == id)
    }

    /// Material record by handle (`None` for the empty-slot record)
    pub fn material(&self, id: Option<ObjectId>) -> Option<&MaterialRecord> {
        self.materials.iter().find(|r| r.id() == id)
    }

    pub fn mesh(&self, id: ObjectId) -> Option<&MeshRecord> {
        self.meshes.iter().find(|r| r.id() == id)
    }

    pub fn clip(&self, id: ObjectId) -> Option<&ClipRecord> {
        self.clips.iter().find(|r| r.id() == id)
    }

    /// Sum of estimated texture memory, as of the last `recompute_totals`
    pub fn total_texture_memory_kb(&self) -> f64 {
        self.total_texture_memory_kb
    }

    /// Sum of mesh vertex counts, as of the last `recompute_totals`
    pub fn total_mesh_vertices(&self) -> u64 {
        self.total_mesh_vertices
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
