//! Result types for project manager operations
//!
//! This module contains the result types returned by [`ProjectManager`](crate::ProjectManager)
//! operations, providing a centralized location for output structures.

/// A fully assembled container invocation for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub project_type: String,
    pub task: String,
    pub image: String,
    /// Arguments for the container binary, without the binary name itself
    pub args: Vec<String>,
}

/// Information about a configured project type
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_type: String,
    pub identifier: String,
    pub image: String,
    pub tasks: Vec<String>,
    /// Whether this is the project type selected for the working directory
    pub is_detected: bool,
}

/// Result of listing configured project types
#[derive(Debug)]
pub struct ProjectListResult {
    /// In detection precedence order
    pub projects: Vec<ProjectInfo>,
}

impl ProjectListResult {
    pub fn detected(&self) -> Option<&ProjectInfo> {
        self.projects.iter().find(|p| p.is_detected)
    }
}
