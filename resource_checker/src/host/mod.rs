//! Host collaborator contracts
//!
//! The checker never walks a scene graph itself. A host (editor, runtime,
//! offline dump) supplies component descriptors through these traits, and
//! the scan aggregates them.

mod object_id;
mod descriptors;
mod components;
mod scene_source;
mod selection;
mod snapshot;

pub use object_id::{ObjectId, ComponentRef};
pub use descriptors::{TextureInfo, MaterialInfo, MeshInfo, ClipInfo, SpriteInfo};
pub use components::{
    RendererComponent, RendererKind, MeshFilterComponent, SkinnedMeshRendererComponent,
    LodGroupComponent, AnimatorComponent, GraphicComponent, ButtonComponent,
    BehaviourComponent, AudioSourceComponent, ReflectionProbeComponent,
    RenderSettings, LightmapData,
};
pub use scene_source::{
    ExecutionMode, ComponentQuery, SceneSource, DependencyResolver,
    FieldWalker, FieldValue, Liveness, Host,
};
pub use selection::{SelectionSink, SelectionSet};
pub use snapshot::{
    SceneSnapshot, SnapshotScene, SceneNode, SnapshotBehaviour, MaterialDependencies,
};
