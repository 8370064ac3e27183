//! Aggregated resource records
//!
//! One record per distinct native handle, each carrying the owners it was
//! found in. The registry performs the find-or-create lookups, pruning,
//! rollups and presentation ordering.

mod owner_set;
mod flags;
pub mod texture;
pub mod material;
pub mod mesh;
pub mod clip;
pub mod missing;
mod registry;

pub use owner_set::OwnerSet;
pub use flags::ResourceFlags;
pub use texture::{TextureRecord, TextureUser};
pub use material::{MaterialRecord, compare_render_queue};
pub use mesh::MeshRecord;
pub use clip::ClipRecord;
pub use missing::{MissingReference, MissingKind};
pub use registry::ResourceRegistry;
