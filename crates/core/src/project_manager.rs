//! High-level project management interface
//!
//! This module provides the [`ProjectManager`] which serves as the primary interface
//! for the CLI. It loads the effective configuration once and answers detection,
//! listing and command assembly questions against it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bob_core::context::BobContext;
//! use bob_core::project_manager::{ProjectManager, ProjectManagerConfig};
//!
//! # fn example() -> bob_core::types::BobResult<()> {
//! let manager = ProjectManager::new(ProjectManagerConfig {
//!     context: BobContext::from_env()?,
//! })?;
//!
//! let plan = manager.resolve_command("test")?;
//! println!("docker {}", plan.args.join(" "));
//! # Ok(())
//! # }
//! ```

use crate::assembler::CommandAssembler;
use crate::configs::{Config, ProjectConfig};
use crate::context::{BobContext, ConfigPaths};
use crate::resolver::{select_project_config, ConfigResolver};
use crate::results::{ProjectInfo, ProjectListResult, RunPlan};
use crate::types::{BobError, BobResult};

/// High-level manager holding the effective configuration for one invocation
pub struct ProjectManager {
    context: BobContext,
    paths: ConfigPaths,
    config: Config,
}

/// Configuration for initializing a project manager
pub struct ProjectManagerConfig {
    pub context: BobContext,
}

impl ProjectManager {
    /// Load the effective configuration for the given context
    pub fn new(config: ProjectManagerConfig) -> BobResult<Self> {
        let resolver = ConfigResolver::new(&config.context);
        let effective = resolver.load_effective_config()?;
        let paths = resolver.paths().clone();

        Ok(Self {
            context: config.context,
            paths,
            config: effective,
        })
    }

    pub fn context(&self) -> &BobContext {
        &self.context
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// The effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Project type of the working directory
    pub fn detect_project(&self) -> BobResult<&ProjectConfig> {
        select_project_config(&self.config, &self.context.working_dir)
    }

    /// Assemble the container invocation for `task` in the working directory
    pub fn resolve_command(&self, task: &str) -> BobResult<RunPlan> {
        if task.trim().is_empty() {
            return Err(BobError::EmptyTask);
        }

        let project = self.detect_project()?;
        let args = CommandAssembler::new(&self.context).assemble(project, task)?;

        Ok(RunPlan {
            project_type: project.project_type.clone(),
            task: task.to_string(),
            image: project.docker_image.clone(),
            args,
        })
    }

    /// All configured project types in precedence order
    pub fn list_projects(&self) -> ProjectListResult {
        let detected = self
            .config
            .projects
            .iter()
            .position(|p| p.is_present_in(&self.context.working_dir));

        let projects = self
            .config
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectInfo {
                project_type: p.project_type.clone(),
                identifier: p.identifier.clone(),
                image: p.docker_image.clone(),
                tasks: p.task_names(),
                is_detected: detected == Some(i),
            })
            .collect();

        ProjectListResult { projects }
    }
}
