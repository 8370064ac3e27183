/// Scan report - the result of the last successful scan.

use crate::format::format_size_kb;
use crate::host::ExecutionMode;
use crate::resource::ResourceRegistry;

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A banner to show above the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

/// Collected records plus the mode they were collected in
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    registry: ResourceRegistry,
    collected_in: ExecutionMode,
}

impl ScanReport {
    /// Empty report for a mode
    pub fn new(collected_in: ExecutionMode) -> Self {
        Self { registry: ResourceRegistry::new(), collected_in }
    }

    pub(crate) fn from_registry(registry: ResourceRegistry, collected_in: ExecutionMode) -> Self {
        Self { registry, collected_in }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut ResourceRegistry {
        &mut self.registry
    }

    /// Host mode the records were collected in
    pub fn collected_in(&self) -> ExecutionMode {
        self.collected_in
    }

    pub fn things_missing(&self) -> bool {
        self.registry.things_missing()
    }

    pub fn total_texture_memory_kb(&self) -> f64 {
        self.registry.total_texture_memory_kb()
    }

    pub fn total_mesh_vertices(&self) -> u64 {
        self.registry.total_mesh_vertices()
    }

    /// Banners for the current findings, most severe first
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.things_missing() {
            notices.push(Notice {
                level: NoticeLevel::Error,
                message: "Some GameObjects are missing elements.",
            });
        }
        if self.registry.textures().iter().any(|t| t.info.format.is_crunched()) {
            notices.push(Notice {
                level: NoticeLevel::Warning,
                message: "Crunched formats use VRAM as uncrunched ones.",
            });
        }
        notices.push(Notice {
            level: NoticeLevel::Info,
            message: "It always checks GOs in opened scenes.",
        });
        notices
    }

    /// One-line overview of counts and totals
    pub fn summary(&self) -> String {
        let registry = &self.registry;
        let mut line = format!(
            "Textures {} - {} | Materials {} | Meshes {} - {} verts | Audio Clips {}",
            registry.textures().len(),
            format_size_kb(registry.total_texture_memory_kb()),
            registry.materials().len(),
            registry.meshes().len(),
            registry.total_mesh_vertices(),
            registry.clips().len(),
        );
        if self.things_missing() {
            line.push_str(&format!(" | Missing {}", registry.missing().len()));
        }
        line
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
