/// Material usage record.

use std::cmp::Ordering;
use crate::host::{ComponentRef, Liveness, MaterialInfo, ObjectId};
use super::texture::owner_alive;
use super::{OwnerSet, ResourceFlags};

/// One distinct material slot value
///
/// `material` is `None` for the skybox slot when no skybox is assigned.
#[derive(Debug, Clone)]
pub struct MaterialRecord {
    pub material: Option<MaterialInfo>,
    pub flags: ResourceFlags,
    pub found_in_renderers: OwnerSet<ComponentRef>,
    pub found_in_graphics: OwnerSet<ComponentRef>,
}

impl MaterialRecord {
    pub fn new(material: Option<MaterialInfo>, flags: ResourceFlags) -> Self {
        Self {
            material,
            flags,
            found_in_renderers: OwnerSet::new(),
            found_in_graphics: OwnerSet::new(),
        }
    }

    /// Native handle, `None` for an empty slot
    pub fn id(&self) -> Option<ObjectId> {
        self.material.as_ref().map(|m| m.id)
    }

    pub fn render_queue(&self) -> Option<i32> {
        self.material.as_ref().map(|m| m.render_queue)
    }

    /// Distinct nodes of every renderer and graphic using this material
    pub fn found_in_game_objects(&self) -> Vec<ObjectId> {
        let mut nodes = OwnerSet::new();
        nodes.extend(
            self.found_in_renderers.iter()
                .chain(self.found_in_graphics.iter())
                .map(|owner| owner.game_object),
        );
        nodes.iter().collect()
    }

    pub fn prune(&mut self, liveness: &dyn Liveness) {
        self.found_in_renderers.retain(|owner| owner_alive(liveness, owner));
        self.found_in_graphics.retain(|owner| owner_alive(liveness, owner));
    }
}

/// Presentation order: ascending render queue, empty slots last
pub fn compare_render_queue(a: &MaterialRecord, b: &MaterialRecord) -> Ordering {
    match (a.render_queue(), b.render_queue()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
