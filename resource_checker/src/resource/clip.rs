/// Audio clip usage record.

use crate::host::{ClipInfo, ComponentRef, Liveness, ObjectId};
use super::texture::owner_alive;
use super::OwnerSet;

#[derive(Debug, Clone)]
pub struct ClipRecord {
    pub info: ClipInfo,
    pub found_in_audio_sources: OwnerSet<ComponentRef>,
}

impl ClipRecord {
    pub fn new(info: ClipInfo) -> Self {
        Self { info, found_in_audio_sources: OwnerSet::new() }
    }

    pub fn id(&self) -> ObjectId {
        self.info.id
    }

    pub fn found_in_game_objects(&self) -> Vec<ObjectId> {
        let mut nodes = OwnerSet::new();
        nodes.extend(self.found_in_audio_sources.iter().map(|owner| owner.game_object));
        nodes.iter().collect()
    }

    pub fn prune(&mut self, liveness: &dyn Liveness) {
        self.found_in_audio_sources.retain(|owner| owner_alive(liveness, owner));
    }
}
