//! Translation of a project type and task into container run arguments
//!
//! The produced argument list has a fixed shape:
//!
//! ```text
//! run --rm -w /workdir [-e KEY=VALUE]... [-v HOST:CONTAINER]... IMAGE COMMAND...
//! ```
//!
//! Environment and volume entries start from built-in defaults (`HOME`, the
//! working directory mounted at `/workdir`, the home directory mounted at
//! itself) and are then overridden by the project's configuration in key
//! order. The binary name itself is left to the caller.

use std::collections::BTreeMap;

use crate::configs::ProjectConfig;
use crate::context::BobContext;
use crate::types::{BobError, BobResult};

pub const CONTAINER_WORKDIR: &str = "/workdir";
pub const HOME_DIR_PLACEHOLDER: &str = "@homeDir";

/// Replace every `@homeDir` in `value` with `home`. No other placeholders
/// exist and the result is not expanded again.
pub fn substitute(value: &str, home: &str) -> String {
    value.replace(HOME_DIR_PLACEHOLDER, home)
}

pub struct CommandAssembler<'a> {
    context: &'a BobContext,
}

impl<'a> CommandAssembler<'a> {
    pub fn new(context: &'a BobContext) -> Self {
        Self { context }
    }

    /// Assemble the run arguments for `task`.
    ///
    /// Fails without producing anything when the project type has no such task.
    pub fn assemble(&self, project: &ProjectConfig, task: &str) -> BobResult<Vec<String>> {
        let command = project
            .command_for(task)
            .ok_or_else(|| BobError::UnknownTask {
                task: task.to_string(),
                project_type: project.project_type.clone(),
                available: project.task_names(),
            })?;

        let mut arguments = vec![
            "run".to_string(),
            "--rm".to_string(),
            "-w".to_string(),
            CONTAINER_WORKDIR.to_string(),
        ];
        for (key, value) in self.environment(project)? {
            arguments.push("-e".to_string());
            arguments.push(format!("{}={}", key, value));
        }
        for (host, container) in self.volumes(project)? {
            arguments.push("-v".to_string());
            arguments.push(format!("{}:{}", host, container));
        }
        arguments.push(project.docker_image.clone());
        arguments.extend(command.iter().cloned());

        Ok(arguments)
    }

    /// `HOME` first, then configured variables with placeholders expanded.
    pub fn environment(&self, project: &ProjectConfig) -> BobResult<Vec<(String, String)>> {
        let home = self.context.home()?;
        let mut envs = vec![("HOME".to_string(), home.to_string())];
        overlay(&mut envs, &project.environment, |key| key.to_string(), home);
        Ok(envs)
    }

    /// Working directory and home mounts first, then configured volumes with
    /// placeholders expanded on both sides.
    pub fn volumes(&self, project: &ProjectConfig) -> BobResult<Vec<(String, String)>> {
        let home = self.context.home()?;
        let mut volumes = vec![
            (
                self.context.working()?.to_string(),
                CONTAINER_WORKDIR.to_string(),
            ),
            (home.to_string(), home.to_string()),
        ];
        overlay(&mut volumes, &project.volumes, |key| substitute(key, home), home);
        Ok(volumes)
    }
}

/// Set each configured entry, replacing an existing entry with the same key
/// in place rather than adding a second one.
fn overlay(
    entries: &mut Vec<(String, String)>,
    configured: &BTreeMap<String, String>,
    expand_key: impl Fn(&str) -> String,
    home: &str,
) {
    for (key, value) in configured {
        let key = expand_key(key);
        let value = substitute(value, home);
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }
}
