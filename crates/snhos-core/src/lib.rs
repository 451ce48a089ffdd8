//! # snhos-core - Core Domain Types
//!
//! Foundation crate for SNH_OS. Provides the compiled-in portfolio content,
//! the virtual file system built from it, the `calc` evaluator, shared enums,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and no terminal dependency.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`ContentCatalog`] - Borrowed view over the personal info, jobs, projects,
//!   education, skills and certifications
//!
//! ### Virtual File System (`vfs`)
//! - [`VirtualFs`] - Read-only tree with `list`, `read`, `child_dir` and `grep`
//! - [`VfsNode`] - Directory / File tagged union
//! - [`VfsError`] - Path resolution failures
//!
//! ### Arithmetic (`calc`)
//! - [`calc::evaluate()`] - Allow-list check plus recursive-descent evaluation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use snhos_core::prelude::*;
//! ```

pub mod calc;
pub mod content;
pub mod error;
pub mod logging;
pub mod types;
pub mod vfs;

/// Prelude for common imports used throughout all SNH_OS crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use calc::CalcError;
pub use content::{ContentCatalog, Education, Job, PersonalInfo, Project, SkillCategory};
pub use error::{Error, Result, ResultExt};
pub use types::{Severity, Theme, UnknownTheme};
pub use vfs::{DirEntry, GrepHit, VfsError, VfsNode, VirtualFs};
