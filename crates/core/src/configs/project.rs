use std::collections::BTreeMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::configs::nullable::null_as_default;

/// One recognized project type.
///
/// A directory is of this type when it contains a file named `identifier`.
/// The keys of `commands` are the only tasks bob can run for the type.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    pub project_type: String,
    pub identifier: String,
    pub docker_image: String,
    /// Values may contain the `@homeDir` placeholder.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "BTreeMap<String, String>")]
    pub environment: BTreeMap<String, String>,
    /// Host path to container path. Both sides may contain `@homeDir`.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "BTreeMap<String, String>")]
    pub volumes: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "BTreeMap<String, Vec<String>>")]
    pub commands: BTreeMap<String, Vec<String>>,
}

impl ProjectConfig {
    /// Whether `dir` holds this type's identifier, as a file or any other entry
    pub fn is_present_in(&self, dir: &Path) -> bool {
        dir.join(&self.identifier).exists()
    }

    /// Command tokens for `task`, if this project type knows it
    pub fn command_for(&self, task: &str) -> Option<&[String]> {
        self.commands.get(task).map(Vec::as_slice)
    }

    /// Known task names in sorted order
    pub fn task_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}
