/// Texture usage record.
///
/// Estimated memory is computed once, when the record is created, and kept
/// for the lifetime of the record.

use crate::checker_debug;
use crate::host::{ComponentRef, Liveness, ObjectId, TextureInfo};
use super::{OwnerSet, ResourceFlags};

/// Component category a texture was found through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureUser {
    Renderer,
    Animator,
    Script,
    Graphic,
    Button,
}

/// One distinct texture and everything it was found in
#[derive(Debug, Clone)]
pub struct TextureRecord {
    /// Descriptor captured at first discovery
    pub info: TextureInfo,
    memory_kb: f64,
    pub flags: ResourceFlags,
    /// Materials depending on this texture
    pub found_in_materials: OwnerSet<ObjectId>,
    pub found_in_renderers: OwnerSet<ComponentRef>,
    pub found_in_animators: OwnerSet<ComponentRef>,
    pub found_in_scripts: OwnerSet<ComponentRef>,
    pub found_in_graphics: OwnerSet<ComponentRef>,
    pub found_in_buttons: OwnerSet<ComponentRef>,
}

impl TextureRecord {
    /// Create a record and estimate its memory
    pub fn new(info: TextureInfo) -> Self {
        if !info.format.is_sized() {
            checker_debug!(
                "rescheck::Texture",
                "No size table entry for {:?} ({}), memory reported as 0",
                info.format, info.name
            );
        }
        let memory_kb = info.estimated_bytes() / 1024.0;
        Self {
            info,
            memory_kb,
            flags: ResourceFlags::empty(),
            found_in_materials: OwnerSet::new(),
            found_in_renderers: OwnerSet::new(),
            found_in_animators: OwnerSet::new(),
            found_in_scripts: OwnerSet::new(),
            found_in_graphics: OwnerSet::new(),
            found_in_buttons: OwnerSet::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.info.id
    }

    /// Estimated memory in kilobytes
    pub fn memory_kb(&self) -> f64 {
        self.memory_kb
    }

    /// Owner set for a user category
    pub fn users(&self, user: TextureUser) -> &OwnerSet<ComponentRef> {
        match user {
            TextureUser::Renderer => &self.found_in_renderers,
            TextureUser::Animator => &self.found_in_animators,
            TextureUser::Script => &self.found_in_scripts,
            TextureUser::Graphic => &self.found_in_graphics,
            TextureUser::Button => &self.found_in_buttons,
        }
    }

    /// Record a component using this texture. Returns false on a repeat owner.
    pub fn add_user(&mut self, user: TextureUser, owner: ComponentRef) -> bool {
        let set = match user {
            TextureUser::Renderer => &mut self.found_in_renderers,
            TextureUser::Animator => &mut self.found_in_animators,
            TextureUser::Script => &mut self.found_in_scripts,
            TextureUser::Graphic => &mut self.found_in_graphics,
            TextureUser::Button => &mut self.found_in_buttons,
        };
        set.insert(owner)
    }

    pub fn add_material(&mut self, material: ObjectId) -> bool {
        self.found_in_materials.insert(material)
    }

    /// Distinct nodes owning any user of this texture
    pub fn found_in_game_objects(&self) -> Vec<ObjectId> {
        let mut nodes = OwnerSet::new();
        nodes.extend(
            self.found_in_renderers.iter()
                .chain(self.found_in_animators.iter())
                .chain(self.found_in_graphics.iter())
                .chain(self.found_in_buttons.iter())
                .chain(self.found_in_scripts.iter())
                .map(|owner| owner.game_object),
        );
        nodes.iter().collect()
    }

    /// Drop owners that no longer exist
    pub fn prune(&mut self, liveness: &dyn Liveness) {
        self.found_in_materials.retain(|&material| liveness.is_alive(material));
        for set in [
            &mut self.found_in_renderers,
            &mut self.found_in_animators,
            &mut self.found_in_scripts,
            &mut self.found_in_graphics,
            &mut self.found_in_buttons,
        ] {
            set.retain(|owner| owner_alive(liveness, owner));
        }
    }
}

/// A component owner survives while both it and its node exist
pub(crate) fn owner_alive(liveness: &dyn Liveness, owner: &ComponentRef) -> bool {
    liveness.is_alive(owner.id) && liveness.is_alive(owner.game_object)
}
