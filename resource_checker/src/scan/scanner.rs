/// Scene traversal - one pass over a host into a fresh registry.
///
/// Pass order matters: the material dependency pass copies renderer and
/// graphic owners from material records, so every material discovered
/// through renderers and UI must already be recorded when it runs.

use crate::error::Result;
use crate::{checker_debug, checker_error};
use crate::host::{
    ComponentQuery, ExecutionMode, FieldValue, Host, MaterialInfo, RendererKind,
    RenderSettings, ObjectId,
};
use crate::resource::{MissingKind, ResourceFlags, ResourceRegistry, TextureUser};
use super::{ScanConfig, ScanReport};

const SOURCE: &str = "rescheck::Scanner";

pub(crate) struct Scanner<'a> {
    host: Host<'a>,
    config: &'a ScanConfig,
    query: ComponentQuery,
    registry: ResourceRegistry,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(host: Host<'a>, config: &'a ScanConfig) -> Self {
        Self {
            host,
            config,
            query: ComponentQuery::default(),
            registry: ResourceRegistry::new(),
        }
    }

    /// Run every pass and build a sorted report
    ///
    /// Any collaborator error aborts the pass; partial results are dropped
    /// with `self`.
    pub(crate) fn run(mut self) -> Result<ScanReport> {
        let mode = self.host.scene.execution_mode();
        self.query = ComponentQuery {
            roots: self.collect_roots(mode)?,
            include_disabled: self.config.include_disabled_objects,
        };
        checker_debug!(SOURCE, "Scanning beneath {} root(s)", self.query.roots.len());

        let settings = self.host.scene.render_settings()?;
        self.scan_reflections(&settings)?;
        self.scan_skybox(&settings);
        self.scan_renderers()?;
        if self.config.include_lightmap_textures {
            self.scan_lightmaps()?;
        }
        if self.config.include_gui_elements {
            self.scan_gui()?;
        }
        self.scan_material_dependencies()?;
        self.scan_mesh_filters()?;
        self.scan_skinned_meshes()?;
        self.scan_lod_groups()?;
        if self.config.include_sprite_animations {
            self.scan_animators()?;
        }
        if self.config.include_script_references {
            self.scan_scripts()?;
        }
        self.scan_audio_sources()?;

        self.registry.recompute_totals();
        self.registry.sort_for_presentation();
        Ok(ScanReport::from_registry(self.registry, mode))
    }

    /// Loaded scene roots, plus persistent roots while playing
    fn collect_roots(&self, mode: ExecutionMode) -> Result<Vec<ObjectId>> {
        let mut roots = self.host.scene.loaded_scene_roots()?;
        if mode == ExecutionMode::Play {
            match self.host.scene.persistent_roots() {
                Ok(persistent) => {
                    for root in persistent {
                        if !roots.contains(&root) {
                            roots.push(root);
                        }
                    }
                }
                Err(e) => {
                    checker_error!(SOURCE, "Persistent root probe failed, treating as empty: {}", e);
                }
            }
        }
        Ok(roots)
    }

    // ===== LIGHTING =====

    fn scan_reflections(&mut self, settings: &RenderSettings) -> Result<()> {
        for probe in self.host.scene.reflection_probes(&self.query)? {
            for texture in [&probe.baked_texture, &probe.custom_baked_texture].into_iter().flatten() {
                self.registry.find_or_create_texture(texture);
            }
        }
        if let Some(texture) = &settings.custom_reflection {
            self.registry.find_or_create_texture(texture);
        }
        Ok(())
    }

    /// The skybox slot is always recorded, assigned or not
    fn scan_skybox(&mut self, settings: &RenderSettings) {
        let record = self.registry.find_or_create_material(settings.skybox.as_ref(), ResourceFlags::SKY);
        record.flags |= ResourceFlags::SKY;
    }

    fn scan_lightmaps(&mut self) -> Result<()> {
        for lightmap in self.host.scene.lightmaps()? {
            for texture in lightmap.textures() {
                self.registry.find_or_create_texture(texture);
            }
        }
        Ok(())
    }

    // ===== RENDERERS / UI =====

    fn scan_renderers(&mut self) -> Result<()> {
        for renderer in self.host.scene.renderers(&self.query)? {
            for material in renderer.materials.iter().flatten() {
                self.registry
                    .find_or_create_material(Some(material), ResourceFlags::empty())
                    .found_in_renderers
                    .insert(renderer.owner);
            }

            if let RendererKind::Sprite { sprite } = &renderer.kind {
                match sprite {
                    Some(sprite) => {
                        for texture in sprite.textures() {
                            self.registry
                                .find_or_create_texture(texture)
                                .add_user(TextureUser::Renderer, renderer.owner);
                        }
                    }
                    None => self.registry.push_missing(
                        renderer.owner.game_object, MissingKind::Sprite, renderer.name.as_str(),
                    ),
                }
            }
        }
        Ok(())
    }

    fn scan_gui(&mut self) -> Result<()> {
        for graphic in self.host.scene.graphics(&self.query)? {
            if let Some(texture) = &graphic.main_texture {
                self.registry
                    .find_or_create_texture(texture)
                    .add_user(TextureUser::Graphic, graphic.owner);
            }
            if let Some(material) = &graphic.material_for_rendering {
                self.registry
                    .find_or_create_material(Some(material), ResourceFlags::GUI)
                    .found_in_graphics
                    .insert(graphic.owner);
            }
        }

        for button in self.host.scene.buttons(&self.query)? {
            for sprite in button.state_sprites() {
                self.registry
                    .find_or_create_texture(&sprite.texture)
                    .add_user(TextureUser::Button, button.owner);
            }
        }
        Ok(())
    }

    /// Expand every recorded material into the textures it depends on
    fn scan_material_dependencies(&mut self) -> Result<()> {
        let materials: Vec<MaterialInfo> = self.registry
            .materials()
            .iter()
            .filter_map(|record| record.material.clone())
            .collect();

        for material in &materials {
            self.link_dependencies(material)?;
        }
        Ok(())
    }

    /// Link resolver dependencies, plus the main texture when the resolver
    /// does not report it (downloaded textures)
    fn link_dependencies(&mut self, material: &MaterialInfo) -> Result<()> {
        let dependencies = self.host.dependencies.texture_dependencies(material.id)?;
        for texture in &dependencies {
            self.registry.link_material_texture(material, texture);
        }
        if let Some(main) = &material.main_texture {
            if !dependencies.iter().any(|texture| texture.id == main.id) {
                self.registry.link_material_texture(material, main);
            }
        }
        Ok(())
    }

    // ===== MESHES =====

    fn scan_mesh_filters(&mut self) -> Result<()> {
        for filter in self.host.scene.mesh_filters(&self.query)? {
            let node = filter.owner.game_object;
            match &filter.mesh {
                Some(mesh) => {
                    let record = self.registry.find_or_create_mesh(mesh, ResourceFlags::empty());
                    record.found_in_mesh_filters.insert(filter.owner);
                    if filter.static_batching {
                        record.static_batching.insert(node);
                    }
                }
                // Text containers generate their mesh at runtime
                None if filter.hosts_text_container => {}
                None => self.registry.push_missing(node, MissingKind::Mesh, filter.name.as_str()),
            }
            if !filter.renderer_has_material {
                self.registry.push_missing(node, MissingKind::Material, filter.name.as_str());
            }
        }
        Ok(())
    }

    fn scan_skinned_meshes(&mut self) -> Result<()> {
        for skinned in self.host.scene.skinned_mesh_renderers(&self.query)? {
            let node = skinned.owner.game_object;
            match &skinned.mesh {
                Some(mesh) => {
                    self.registry
                        .find_or_create_mesh(mesh, ResourceFlags::empty())
                        .found_in_skinned_mesh_renderers
                        .insert(skinned.owner);
                }
                None => self.registry.push_missing(node, MissingKind::Mesh, skinned.name.as_str()),
            }
            if !skinned.has_material {
                self.registry.push_missing(node, MissingKind::Material, skinned.name.as_str());
            }
        }
        Ok(())
    }

    /// One finding per LOD level without renderers
    fn scan_lod_groups(&mut self) -> Result<()> {
        for group in self.host.scene.lod_groups(&self.query)? {
            for _ in group.lod_renderer_counts.iter().filter(|&&count| count == 0) {
                self.registry.push_missing(group.owner.game_object, MissingKind::Lod, group.name.as_str());
            }
        }
        Ok(())
    }

    // ===== ANIMATION / SCRIPTS / AUDIO =====

    fn scan_animators(&mut self) -> Result<()> {
        for animator in self.host.scene.animators(&self.query)? {
            for sprite in &animator.sprite_keyframes {
                self.registry
                    .find_or_create_texture(&sprite.texture)
                    .add_user(TextureUser::Animator, animator.owner);
            }
        }
        Ok(())
    }

    /// Resources held directly in script fields are tagged as instances
    fn scan_scripts(&mut self) -> Result<()> {
        for behaviour in self.host.scene.behaviours(&self.query)? {
            for field in self.host.fields.public_fields(behaviour.owner.id)? {
                match field {
                    FieldValue::Sprite(sprite) => {
                        self.registry
                            .find_or_create_texture(&sprite.texture)
                            .add_user(TextureUser::Script, behaviour.owner);
                    }
                    FieldValue::Mesh(mesh) => {
                        self.registry.find_or_create_mesh(&mesh, ResourceFlags::INSTANCE);
                    }
                    FieldValue::Material(material) => {
                        self.registry.find_or_create_material(Some(&material), ResourceFlags::INSTANCE);
                        if let Some(main) = &material.main_texture {
                            self.registry.find_or_create_texture(main);
                        }
                        for texture in self.host.dependencies.texture_dependencies(material.id)? {
                            self.registry.link_material_texture(&material, &texture);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn scan_audio_sources(&mut self) -> Result<()> {
        for source in self.host.scene.audio_sources(&self.query)? {
            match &source.clip {
                Some(clip) => {
                    self.registry
                        .find_or_create_clip(clip)
                        .found_in_audio_sources
                        .insert(source.owner);
                }
                None => self.registry.push_missing(
                    source.owner.game_object, MissingKind::AudioClip, source.name.as_str(),
                ),
            }
        }
        Ok(())
    }
}
