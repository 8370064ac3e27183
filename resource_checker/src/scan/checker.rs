/// ResourceChecker - owner of the current scan report.
///
/// All entry points take `&self`: a host callback may re-enter the checker
/// while a scan or refresh is still on the stack, and the re-entrant call
/// must be rejected rather than alias the report.

use std::cell::{Ref, RefCell};
use crate::error::Result;
use crate::{checker_err, checker_error, checker_info, checker_trace, checker_warn};
use crate::host::{ComponentRef, ExecutionMode, Host, Liveness, ObjectId, SelectionSink};
use crate::resource::OwnerSet;
use super::scanner::Scanner;
use super::{ReentryFlag, ScanConfig, ScanReport};

const SOURCE: &str = "rescheck::Checker";

/// Result of a scan request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The report was replaced
    Completed,
    /// Another scan was in progress; nothing changed
    AlreadyRunning,
}

/// Result of a refresh pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Destroyed records and owners were removed (count of records removed)
    Pruned(usize),
    /// The execution mode changed; the report was discarded
    Cleared,
    /// Another refresh was in progress, or the report is borrowed
    AlreadyRunning,
}

/// Scene resource checker
///
/// # Example
///
/// ```no_run
/// use resource_checker::rescheck::host::{Host, SceneSnapshot};
/// use resource_checker::rescheck::scan::{ResourceChecker, ScanConfig};
///
/// # fn main() -> resource_checker::rescheck::Result<()> {
/// let snapshot = SceneSnapshot::from_json(r#"{ "scenes": [{ "name": "main", "roots": [1] }] }"#)?;
/// let checker = ResourceChecker::new();
/// checker.check_resources(Host::from_single(&snapshot), &ScanConfig::default())?;
/// println!("{}", checker.report().summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ResourceChecker {
    report: RefCell<ScanReport>,
    scanning: ReentryFlag,
    refreshing: ReentryFlag,
}

impl ResourceChecker {
    /// Create a checker with an empty edit-mode report
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the host and replace the report
    ///
    /// Rejected with `AlreadyRunning` while another scan is in progress. On
    /// error the previous report is kept untouched.
    pub fn check_resources(&self, host: Host<'_>, config: &ScanConfig) -> Result<ScanOutcome> {
        let Some(_guard) = self.scanning.try_acquire() else {
            checker_warn!(SOURCE, "Scan requested while a scan is running, ignored");
            return Ok(ScanOutcome::AlreadyRunning);
        };

        checker_info!(SOURCE, "Checking resources ({:?} mode)", host.scene.execution_mode());
        let report = match Scanner::new(host, config).run() {
            Ok(report) => report,
            Err(e) => {
                checker_error!(SOURCE, "Scan aborted, previous report kept: {}", e);
                return Err(e);
            }
        };

        let Ok(mut current) = self.report.try_borrow_mut() else {
            return Err(checker_err!(SOURCE, "Report is borrowed, scan results discarded"));
        };
        checker_info!(SOURCE, "Scan finished: {}", report.summary());
        *current = report;
        Ok(ScanOutcome::Completed)
    }

    /// Update pass: drop destroyed records, or everything after a mode change
    pub fn refresh(&self, mode: ExecutionMode, liveness: &dyn Liveness) -> RefreshOutcome {
        let Some(_guard) = self.refreshing.try_acquire() else {
            checker_trace!(SOURCE, "Refresh re-entered, skipped");
            return RefreshOutcome::AlreadyRunning;
        };
        let Ok(mut report) = self.report.try_borrow_mut() else {
            checker_warn!(SOURCE, "Report is borrowed, refresh skipped");
            return RefreshOutcome::AlreadyRunning;
        };

        if report.collected_in() != mode {
            checker_info!(
                SOURCE,
                "Execution mode changed ({:?} -> {:?}), discarding report",
                report.collected_in(), mode
            );
            *report = ScanReport::new(mode);
            return RefreshOutcome::Cleared;
        }

        let registry = report.registry_mut();
        let removed = registry.prune(liveness);
        registry.recompute_totals();
        if removed > 0 {
            checker_trace!(SOURCE, "Pruned {} destroyed record(s)", removed);
        }
        RefreshOutcome::Pruned(removed)
    }

    /// Current report
    ///
    /// Drop the returned guard before calling `check_resources` or `refresh`.
    pub fn report(&self) -> Ref<'_, ScanReport> {
        self.report.borrow()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning.is_busy()
    }

    // ===== SELECTION =====

    /// Select the nodes using a texture. Returns false for an unknown texture.
    pub fn select_texture_users(&self, texture: ObjectId, sink: &mut dyn SelectionSink, append: bool) -> bool {
        let report = self.report.borrow();
        match report.registry().texture(texture) {
            Some(record) => {
                sink.select_objects(&record.found_in_game_objects(), append);
                true
            }
            None => false,
        }
    }

    /// Select the materials a texture was found in
    pub fn select_texture_materials(&self, texture: ObjectId, sink: &mut dyn SelectionSink, append: bool) -> bool {
        let report = self.report.borrow();
        match report.registry().texture(texture) {
            Some(record) => {
                let materials: Vec<_> = record.found_in_materials.iter().collect();
                sink.select_objects(&materials, append);
                true
            }
            None => false,
        }
    }

    /// Select every texture in the report
    pub fn select_all_textures(&self, sink: &mut dyn SelectionSink, append: bool) {
        let report = self.report.borrow();
        let textures: Vec<_> = report.registry().textures().iter().map(|t| t.id()).collect();
        sink.select_objects(&textures, append);
    }

    /// Select the nodes using a material (`None` for the empty skybox slot)
    pub fn select_material_users(
        &self,
        material: Option<ObjectId>,
        sink: &mut dyn SelectionSink,
        append: bool,
    ) -> bool {
        let report = self.report.borrow();
        match report.registry().material(material) {
            Some(record) => {
                sink.select_objects(&record.found_in_game_objects(), append);
                true
            }
            None => false,
        }
    }

    /// Select the nodes of the mesh filters using a mesh
    pub fn select_mesh_users(&self, mesh: ObjectId, sink: &mut dyn SelectionSink, append: bool) -> bool {
        let report = self.report.borrow();
        match report.registry().mesh(mesh) {
            Some(record) => {
                sink.select_objects(&nodes_of(&record.found_in_mesh_filters), append);
                true
            }
            None => false,
        }
    }

    /// Select the nodes of the skinned mesh renderers using a mesh
    pub fn select_skinned_mesh_users(&self, mesh: ObjectId, sink: &mut dyn SelectionSink, append: bool) -> bool {
        let report = self.report.borrow();
        match report.registry().mesh(mesh) {
            Some(record) => {
                sink.select_objects(&nodes_of(&record.found_in_skinned_mesh_renderers), append);
                true
            }
            None => false,
        }
    }

    /// Select the nodes of the audio sources playing a clip
    pub fn select_clip_users(&self, clip: ObjectId, sink: &mut dyn SelectionSink, append: bool) -> bool {
        let report = self.report.borrow();
        match report.registry().clip(clip) {
            Some(record) => {
                sink.select_objects(&record.found_in_game_objects(), append);
                true
            }
            None => false,
        }
    }
}

fn nodes_of(owners: &OwnerSet<ComponentRef>) -> Vec<ObjectId> {
    let mut nodes = OwnerSet::new();
    nodes.extend(owners.iter().map(|owner| owner.game_object));
    nodes.iter().collect()
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
