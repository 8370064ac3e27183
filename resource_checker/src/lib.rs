/*!
# Resource Checker

Scene resource auditing: estimates texture memory, tracks which materials,
meshes and audio clips a scene uses and where, and records missing
references (empty mesh, material, sprite and clip slots, empty LODs).

The crate never walks a scene itself. A host implements the collaborator
traits in [`rescheck::host`] (or loads a [`rescheck::host::SceneSnapshot`])
and a [`rescheck::scan::ResourceChecker`] aggregates what it reports.

## Architecture

- **format**: bits-per-pixel table and texture memory estimation
- **host**: collaborator traits, descriptors and the in-memory snapshot host
- **resource**: deduplicated records and the registry that merges them
- **scan**: traversal, single-flight scanning and the report
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod format;
pub mod host;
pub mod resource;
pub mod scan;

// Main rescheck namespace module
pub mod rescheck {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger owner
    pub use crate::diagnostics::Diagnostics;

    // Checker entry point
    pub use crate::scan::ResourceChecker;

    // Logging sub-module (types only; checker_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod format {
        pub use crate::format::*;
    }

    pub mod host {
        pub use crate::host::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod scan {
        pub use crate::scan::*;
    }
}
