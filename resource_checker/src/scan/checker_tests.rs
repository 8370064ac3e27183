/// Unit tests for checker.rs and the scanner passes

use super::*;
use crate::error::Error;
use crate::format::{PixelFormat, TextureShape};
use crate::host::{
    AnimatorComponent, AudioSourceComponent, BehaviourComponent, ButtonComponent, ClipInfo,
    ComponentQuery, FieldValue, GraphicComponent, LightmapData, LodGroupComponent,
    MaterialDependencies, MaterialInfo, MeshFilterComponent, MeshInfo, ReflectionProbeComponent,
    RendererComponent, RendererKind, SceneSnapshot, SceneSource, SelectionSet,
    SkinnedMeshRendererComponent, SnapshotBehaviour, SnapshotScene, SpriteInfo, TextureInfo,
};
use crate::resource::{MissingKind, ResourceFlags};

// ============================================================================
// Helper Functions
// ============================================================================

const ROOT: ObjectId = ObjectId(1);

fn texture(id: u64) -> TextureInfo {
    TextureInfo {
        id: ObjectId(id),
        name: format!("tex{}", id),
        width: 64,
        height: 64,
        format: PixelFormat::RGBA32,
        mip_count: 1,
        shape: TextureShape::Plane,
    }
}

fn material(id: u64, queue: i32) -> MaterialInfo {
    MaterialInfo {
        id: ObjectId(id),
        name: format!("mat{}", id),
        render_queue: queue,
        shader: None,
        main_texture: None,
    }
}

fn sprite(texture_id: u64) -> SpriteInfo {
    SpriteInfo { texture: texture(texture_id), secondary_textures: Vec::new() }
}

fn owner(component: u64, node: u64) -> ComponentRef {
    ComponentRef::new(ObjectId(component), ObjectId(node))
}

fn scene() -> SceneSnapshot {
    let mut snapshot = SceneSnapshot::new(ExecutionMode::Edit);
    snapshot.scenes.push(SnapshotScene { name: "main".into(), loaded: true, roots: vec![ROOT] });
    snapshot
}

fn renderer(component: u64, node: u64, materials: Vec<Option<MaterialInfo>>) -> RendererComponent {
    RendererComponent {
        owner: owner(component, node),
        name: format!("node{}", node),
        materials,
        kind: RendererKind::Mesh,
    }
}

fn scan(snapshot: &SceneSnapshot, config: &ScanConfig) -> ResourceChecker {
    let checker = ResourceChecker::new();
    let outcome = checker.check_resources(Host::from_single(snapshot), config).unwrap();
    assert_eq!(outcome, ScanOutcome::Completed);
    checker
}

fn missing_kinds(checker: &ResourceChecker) -> Vec<MissingKind> {
    checker.report().registry().missing().iter().map(|m| m.kind).collect()
}

/// Scene source whose renderer query always fails
struct BrokenRenderers;

impl SceneSource for BrokenRenderers {
    fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::Edit
    }

    fn loaded_scene_roots(&self) -> crate::error::Result<Vec<ObjectId>> {
        Ok(vec![ROOT])
    }

    fn renderers(&self, _query: &ComponentQuery) -> crate::error::Result<Vec<RendererComponent>> {
        Err(Error::HostFailure("renderer query failed".to_string()))
    }
}

// ============================================================================
// Tests: Roots and skybox
// ============================================================================

#[test]
fn test_empty_scene_has_only_skybox_slot() {
    let checker = scan(&scene(), &ScanConfig::default());
    let report = checker.report();

    assert_eq!(report.registry().materials().len(), 1);
    let sky = &report.registry().materials()[0];
    assert!(sky.material.is_none());
    assert!(sky.flags.contains(ResourceFlags::SKY));
    assert!(!report.things_missing());
}

#[test]
fn test_assigned_skybox_is_flagged_and_expanded() {
    let mut snapshot = scene();
    snapshot.render_settings.skybox = Some(material(50, 1000));
    snapshot.material_dependencies.push(MaterialDependencies {
        material: ObjectId(50),
        textures: vec![texture(51)],
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();

    let texture = report.registry().texture(ObjectId(51)).unwrap();
    assert!(texture.flags.contains(ResourceFlags::SKY));
    assert!(texture.found_in_materials.contains(&ObjectId(50)));
}

#[test]
fn test_persistent_roots_are_scanned_in_play_mode() {
    let mut snapshot = scene();
    snapshot.mode = ExecutionMode::Play;
    snapshot.persistent_roots = Some(vec![ObjectId(2)]);
    snapshot.nodes.push(crate::host::SceneNode {
        id: ObjectId(20), name: "music".into(), root: ObjectId(2), active: true,
    });
    snapshot.audio_sources.push(AudioSourceComponent {
        owner: owner(21, 20),
        name: "music".into(),
        clip: Some(ClipInfo {
            id: ObjectId(22), name: "theme".into(), channels: 2, frequency: 48000, length_seconds: 90.0,
        }),
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(checker.report().registry().clips().len(), 1);
    assert_eq!(checker.report().collected_in(), ExecutionMode::Play);
}

#[test]
fn test_persistent_probe_failure_does_not_abort_scan() {
    let mut snapshot = scene();
    snapshot.mode = ExecutionMode::Play;
    snapshot.persistent_roots = None;
    snapshot.renderers.push(renderer(10, 100, vec![Some(material(5, 2000))]));

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(checker.report().registry().materials().len(), 2);
}

// ============================================================================
// Tests: Renderers, sprites, UI
// ============================================================================

#[test]
fn test_null_material_slots_are_skipped() {
    let mut snapshot = scene();
    snapshot.renderers.push(renderer(10, 100, vec![None, Some(material(5, 2000))]));

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    let record = report.registry().material(Some(ObjectId(5))).unwrap();
    assert_eq!(record.found_in_renderers.len(), 1);
    // Only the skybox slot has no material
    assert_eq!(report.registry().materials().iter().filter(|m| m.material.is_none()).count(), 1);
}

#[test]
fn test_sprite_renderer_records_primary_and_secondary_textures() {
    let mut snapshot = scene();
    let mut with_normal_map = sprite(30);
    with_normal_map.secondary_textures.push(texture(31));
    let mut sprite_renderer = renderer(10, 100, Vec::new());
    sprite_renderer.kind = RendererKind::Sprite { sprite: Some(with_normal_map) };
    snapshot.renderers.push(sprite_renderer);

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    for id in [30, 31] {
        let record = report.registry().texture(ObjectId(id)).unwrap();
        assert!(record.found_in_renderers.contains(&owner(10, 100)));
    }
}

#[test]
fn test_empty_sprite_is_missing() {
    let mut snapshot = scene();
    let mut sprite_renderer = renderer(10, 100, Vec::new());
    sprite_renderer.kind = RendererKind::Sprite { sprite: None };
    snapshot.renderers.push(sprite_renderer);

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(missing_kinds(&checker), vec![MissingKind::Sprite]);
    assert_eq!(checker.report().registry().missing()[0].owner, ObjectId(100));
}

#[test]
fn test_gui_material_textures_inherit_graphic_owner() {
    let mut snapshot = scene();
    let mut ui_material = material(60, 3000);
    ui_material.main_texture = Some(texture(61));
    snapshot.graphics.push(GraphicComponent {
        owner: owner(70, 700),
        main_texture: Some(texture(62)),
        material_for_rendering: Some(ui_material),
    });
    snapshot.buttons.push(ButtonComponent {
        owner: owner(71, 701),
        disabled_sprite: Some(sprite(63)),
        highlighted_sprite: None,
        pressed_sprite: Some(sprite(63)),
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    let registry = report.registry();

    assert!(registry.material(Some(ObjectId(60))).unwrap().flags.contains(ResourceFlags::GUI));
    // Main texture not reported by the resolver is still linked
    let main = registry.texture(ObjectId(61)).unwrap();
    assert!(main.found_in_graphics.contains(&owner(70, 700)));
    assert!(main.flags.contains(ResourceFlags::GUI));
    assert!(registry.texture(ObjectId(62)).unwrap().found_in_graphics.contains(&owner(70, 700)));
    assert_eq!(registry.texture(ObjectId(63)).unwrap().found_in_buttons.len(), 1);
}

#[test]
fn test_gui_disabled_skips_graphics_and_buttons() {
    let mut snapshot = scene();
    snapshot.graphics.push(GraphicComponent {
        owner: owner(70, 700),
        main_texture: Some(texture(62)),
        material_for_rendering: None,
    });
    let config = ScanConfig { include_gui_elements: false, ..ScanConfig::default() };

    let checker = scan(&snapshot, &config);
    assert!(checker.report().registry().textures().is_empty());
}

#[test]
fn test_lightmaps_and_reflections() {
    let mut snapshot = scene();
    snapshot.lightmaps.push(LightmapData {
        color: Some(texture(80)),
        direction: Some(texture(81)),
        shadow_mask: None,
    });
    snapshot.reflection_probes.push(ReflectionProbeComponent {
        owner: owner(82, 820),
        baked_texture: Some(texture(83)),
        custom_baked_texture: None,
    });
    snapshot.render_settings.custom_reflection = Some(texture(84));

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(checker.report().registry().textures().len(), 4);

    let config = ScanConfig { include_lightmap_textures: false, ..ScanConfig::default() };
    let checker = scan(&snapshot, &config);
    assert_eq!(checker.report().registry().textures().len(), 2);
}

// ============================================================================
// Tests: Meshes and LODs
// ============================================================================

#[test]
fn test_mesh_filter_static_batching_and_missing_material() {
    let mut snapshot = scene();
    let quad = MeshInfo { id: ObjectId(90), name: "quad".into(), vertex_count: 4 };
    snapshot.mesh_filters.push(MeshFilterComponent {
        owner: owner(91, 910),
        name: "Floor".into(),
        mesh: Some(quad.clone()),
        static_batching: true,
        renderer_has_material: false,
        hosts_text_container: false,
    });
    snapshot.skinned_mesh_renderers.push(SkinnedMeshRendererComponent {
        owner: owner(92, 920),
        name: "Hero".into(),
        mesh: Some(quad),
        has_material: true,
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    let mesh = report.registry().mesh(ObjectId(90)).unwrap();

    assert_eq!(mesh.found_in_mesh_filters.len(), 1);
    assert_eq!(mesh.found_in_skinned_mesh_renderers.len(), 1);
    assert!(mesh.static_batching.contains(&ObjectId(910)));
    assert_eq!(report.total_mesh_vertices(), 4);
    assert_eq!(missing_kinds(&checker), vec![MissingKind::Material]);
}

#[test]
fn test_text_container_without_mesh_is_not_missing() {
    let mut snapshot = scene();
    snapshot.mesh_filters.push(MeshFilterComponent {
        owner: owner(91, 910),
        name: "Label".into(),
        mesh: None,
        static_batching: false,
        renderer_has_material: true,
        hosts_text_container: true,
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    assert!(!checker.report().things_missing());
}

#[test]
fn test_skinned_mesh_without_mesh_or_material() {
    let mut snapshot = scene();
    snapshot.skinned_mesh_renderers.push(SkinnedMeshRendererComponent {
        owner: owner(92, 920),
        name: "Hero".into(),
        mesh: None,
        has_material: false,
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(missing_kinds(&checker), vec![MissingKind::Mesh, MissingKind::Material]);
}

#[test]
fn test_one_missing_record_per_empty_lod() {
    let mut snapshot = scene();
    snapshot.lod_groups.push(LodGroupComponent {
        owner: owner(93, 930),
        name: "Tree".into(),
        lod_renderer_counts: vec![2, 0, 1, 0],
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    assert_eq!(missing_kinds(&checker), vec![MissingKind::Lod, MissingKind::Lod]);
}

// ============================================================================
// Tests: Animators, scripts, audio
// ============================================================================

#[test]
fn test_animator_sprites_respect_toggle() {
    let mut snapshot = scene();
    snapshot.animators.push(AnimatorComponent {
        owner: owner(94, 940),
        sprite_keyframes: vec![sprite(95), sprite(96), sprite(95)],
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    assert_eq!(report.registry().textures().len(), 2);
    assert_eq!(report.registry().texture(ObjectId(95)).unwrap().found_in_animators.len(), 1);
    drop(report);

    let config = ScanConfig { include_sprite_animations: false, ..ScanConfig::default() };
    let checker = scan(&snapshot, &config);
    assert!(checker.report().registry().textures().is_empty());
}

#[test]
fn test_script_fields_are_instances() {
    let mut snapshot = scene();
    let mut field_material = material(100, 2500);
    field_material.main_texture = Some(texture(101));
    snapshot.behaviours.push(SnapshotBehaviour {
        owner: owner(102, 1020),
        fields: vec![
            FieldValue::Sprite(sprite(103)),
            FieldValue::Mesh(MeshInfo { id: ObjectId(104), name: "gen".into(), vertex_count: 12 }),
            FieldValue::Material(field_material),
        ],
    });
    snapshot.material_dependencies.push(MaterialDependencies {
        material: ObjectId(100),
        textures: vec![texture(105)],
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    let registry = report.registry();

    assert!(registry.texture(ObjectId(103)).unwrap().found_in_scripts.contains(&owner(102, 1020)));
    assert!(registry.mesh(ObjectId(104)).unwrap().flags.contains(ResourceFlags::INSTANCE));
    assert!(registry.material(Some(ObjectId(100))).unwrap().flags.contains(ResourceFlags::INSTANCE));
    assert!(registry.texture(ObjectId(101)).is_some());
    let dependency = registry.texture(ObjectId(105)).unwrap();
    assert!(dependency.flags.contains(ResourceFlags::INSTANCE));
    assert!(dependency.found_in_materials.contains(&ObjectId(100)));
}

#[test]
fn test_script_toggle_off() {
    let mut snapshot = scene();
    snapshot.behaviours.push(SnapshotBehaviour {
        owner: owner(102, 1020),
        fields: vec![FieldValue::Sprite(sprite(103))],
    });
    let config = ScanConfig { include_script_references: false, ..ScanConfig::default() };

    let checker = scan(&snapshot, &config);
    assert!(checker.report().registry().textures().is_empty());
}

#[test]
fn test_audio_source_without_clip_is_missing() {
    let mut snapshot = scene();
    snapshot.audio_sources.push(AudioSourceComponent {
        owner: owner(110, 1100),
        name: "Speaker".into(),
        clip: None,
    });

    let checker = scan(&snapshot, &ScanConfig::default());
    let report = checker.report();
    assert_eq!(report.registry().missing()[0].kind, MissingKind::AudioClip);
    assert_eq!(report.registry().missing()[0].name, "Speaker");
}

// ============================================================================
// Tests: Faults, refresh, selection
// ============================================================================

#[test]
fn test_failed_scan_keeps_previous_report() {
    let mut snapshot = scene();
    snapshot.renderers.push(renderer(10, 100, vec![Some(material(5, 2000))]));
    let checker = scan(&snapshot, &ScanConfig::default());

    let broken = BrokenRenderers;
    let host = Host::new(&broken, &snapshot, &snapshot);
    match checker.check_resources(host, &ScanConfig::default()) {
        Err(Error::HostFailure(msg)) => assert!(msg.contains("renderer")),
        other => panic!("expected host failure, got {:?}", other),
    }

    assert!(!checker.is_scanning());
    assert!(checker.report().registry().material(Some(ObjectId(5))).is_some());
}

#[test]
fn test_scan_while_report_is_borrowed_is_an_error() {
    let snapshot = scene();
    let checker = ResourceChecker::new();
    let _held = checker.report();

    let result = checker.check_resources(Host::from_single(&snapshot), &ScanConfig::default());
    assert!(matches!(result, Err(Error::HostFailure(_))));
    assert!(!checker.is_scanning());
}

#[test]
fn test_refresh_prunes_and_clears_on_mode_change() {
    let mut snapshot = scene();
    snapshot.renderers.push(renderer(10, 100, vec![Some(material(5, 2000))]));
    let checker = scan(&snapshot, &ScanConfig::default());

    assert_eq!(checker.refresh(ExecutionMode::Edit, &snapshot), RefreshOutcome::Pruned(0));

    snapshot.destroy(ObjectId(5));
    assert_eq!(checker.refresh(ExecutionMode::Edit, &snapshot), RefreshOutcome::Pruned(1));
    assert!(checker.report().registry().material(Some(ObjectId(5))).is_none());

    assert_eq!(checker.refresh(ExecutionMode::Play, &snapshot), RefreshOutcome::Cleared);
    assert!(checker.report().registry().materials().is_empty());
    assert_eq!(checker.report().collected_in(), ExecutionMode::Play);
}

#[test]
fn test_refresh_while_report_is_borrowed_is_skipped() {
    let checker = ResourceChecker::new();
    let snapshot = scene();
    let _held = checker.report();
    assert_eq!(checker.refresh(ExecutionMode::Edit, &snapshot), RefreshOutcome::AlreadyRunning);
}

#[test]
fn test_selection_helpers() {
    let mut snapshot = scene();
    let mut shared = material(5, 2000);
    shared.main_texture = Some(texture(6));
    snapshot.renderers.push(renderer(10, 100, vec![Some(shared.clone())]));
    snapshot.renderers.push(renderer(11, 101, vec![Some(shared)]));
    snapshot.audio_sources.push(AudioSourceComponent {
        owner: owner(12, 102),
        name: "Speaker".into(),
        clip: Some(ClipInfo {
            id: ObjectId(13), name: "beep".into(), channels: 1, frequency: 22050, length_seconds: 0.2,
        }),
    });
    let checker = scan(&snapshot, &ScanConfig::default());
    let mut selection = SelectionSet::new();

    assert!(checker.select_texture_users(ObjectId(6), &mut selection, false));
    assert_eq!(selection.objects(), &[ObjectId(100), ObjectId(101)]);

    assert!(checker.select_texture_materials(ObjectId(6), &mut selection, false));
    assert_eq!(selection.objects(), &[ObjectId(5)]);

    assert!(checker.select_clip_users(ObjectId(13), &mut selection, true));
    assert_eq!(selection.objects(), &[ObjectId(5), ObjectId(102)]);

    assert!(checker.select_material_users(Some(ObjectId(5)), &mut selection, false));
    assert_eq!(selection.len(), 2);

    checker.select_all_textures(&mut selection, false);
    assert_eq!(selection.objects(), &[ObjectId(6)]);

    assert!(!checker.select_mesh_users(ObjectId(999), &mut selection, false));
    assert!(!checker.select_skinned_mesh_users(ObjectId(999), &mut selection, false));
    assert_eq!(selection.objects(), &[ObjectId(6)]);
}

#[test]
fn test_behaviour_component_is_exposed_by_snapshot() {
    let mut snapshot = scene();
    snapshot.behaviours.push(SnapshotBehaviour { owner: owner(1, 2), fields: Vec::new() });
    let query = ComponentQuery { roots: vec![ROOT], include_disabled: true };
    assert_eq!(snapshot.behaviours(&query).unwrap(), vec![BehaviourComponent { owner: owner(1, 2) }]);
}
