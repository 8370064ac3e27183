/// Mesh usage record.

use crate::host::{ComponentRef, Liveness, MeshInfo, ObjectId};
use super::texture::owner_alive;
use super::{OwnerSet, ResourceFlags};

#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub info: MeshInfo,
    pub flags: ResourceFlags,
    pub found_in_mesh_filters: OwnerSet<ComponentRef>,
    pub found_in_skinned_mesh_renderers: OwnerSet<ComponentRef>,
    /// Nodes flagged for static batching
    pub static_batching: OwnerSet<ObjectId>,
}

impl MeshRecord {
    pub fn new(info: MeshInfo, flags: ResourceFlags) -> Self {
        Self {
            info,
            flags,
            found_in_mesh_filters: OwnerSet::new(),
            found_in_skinned_mesh_renderers: OwnerSet::new(),
            static_batching: OwnerSet::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.info.id
    }

    pub fn vertex_count(&self) -> u32 {
        self.info.vertex_count
    }

    /// Distinct nodes of every mesh filter and skinned renderer
    pub fn found_in_game_objects(&self) -> Vec<ObjectId> {
        let mut nodes = OwnerSet::new();
        nodes.extend(
            self.found_in_mesh_filters.iter()
                .chain(self.found_in_skinned_mesh_renderers.iter())
                .map(|owner| owner.game_object),
        );
        nodes.iter().collect()
    }

    pub fn prune(&mut self, liveness: &dyn Liveness) {
        self.found_in_mesh_filters.retain(|owner| owner_alive(liveness, owner));
        self.found_in_skinned_mesh_renderers.retain(|owner| owner_alive(liveness, owner));
        self.static_batching.retain(|&node| liveness.is_alive(node));
    }
}
