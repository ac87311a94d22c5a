//! Bob Core Library
//!
//! This is the core library for bob, a tool that runs the recommended command for
//! a task ("test", "checkstyle", ...) inside a container, based on the kind of
//! project found in the current directory.
//!
//! ## Architecture
//!
//! - [`project_manager`] - High-level interface used by the CLI
//! - [`resolver`] - Configuration layering, default versioning and project detection
//! - [`assembler`] - Container run argument assembly and `@homeDir` substitution
//! - [`configs`] - Configuration documents and the compiled-in default
//! - [`context`] - Home, working and config directories as an explicit value
//! - [`results`] - Result types for manager operations
//! - [`types`] - Error type and result alias
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bob_core::{BobContext, ProjectManager, ProjectManagerConfig};
//!
//! # fn example() -> bob_core::BobResult<()> {
//! let manager = ProjectManager::new(ProjectManagerConfig {
//!     context: BobContext::from_env()?,
//! })?;
//!
//! let plan = manager.resolve_command("test")?;
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod configs;
pub mod context;
pub mod project_manager;
pub mod resolver;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use context::BobContext;
pub use project_manager::{ProjectManager, ProjectManagerConfig};
pub use types::{BobError, BobResult};
