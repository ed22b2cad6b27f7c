//! Modgen Core - Shared library for scaffolding modular Swift packages
//!
//! This library renders the fixed package skeletons used by the modular iOS
//! codebase and writes them to disk without ever overwriting an existing file.
//! The `create-module` binary is a thin clap front end over it.
//!
//! # Architecture
//!
//! - **Naming** - Normalizes free-text names into package identifiers
//! - **Templates** - Pure functions producing `(path, content)` artifacts per module kind
//! - **Writer** - Create-once file writes with a fail-fast collision check
//! - **Scaffolder** - Plans and writes the artifacts for one module under a root directory
//!
//! # Example Usage
//!
//! ```no_run
//! use modgen_core::{ModuleKind, ModuleName, Scaffolder};
//!
//! let name = ModuleName::parse("health-kit")?;
//! let scaffolder = Scaffolder::new("Packages");
//! let created = scaffolder.create(ModuleKind::Domain, &name)?;
//! assert_eq!(created.len(), 2);
//! # Ok::<(), modgen_core::ScaffoldError>(())
//! ```

pub mod error;
pub mod kind;
pub mod naming;
pub mod scaffolder;
pub mod templates;
pub mod writer;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use kind::ModuleKind;
pub use naming::{normalize_name, ModuleName};
pub use scaffolder::Scaffolder;
pub use templates::Artifact;
pub use writer::write_new_file;

/// Default directory, relative to the working directory, that modules are created under
pub const DEFAULT_ROOT: &str = "Packages";
