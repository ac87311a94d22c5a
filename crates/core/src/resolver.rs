//! Configuration layering and project detection
//!
//! The effective configuration is rebuilt on every run from three layers:
//!
//! 1. the persisted default (`bob_default.yaml`), regenerated from the
//!    compiled-in default when missing or older than [`DEFAULT_CONFIG_VERSION`]
//! 2. the global override (`bob.yaml`) next to it, if present
//! 3. the local override (`.bob.yaml`) in the working directory, if present
//!
//! Each override replaces the top-level fields it names wholesale.

use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::configs::{
    default_config, merge, parse_config, parse_overlay, Config, ProjectConfig,
    DEFAULT_CONFIG_VERSION,
};
use crate::context::{BobContext, ConfigPaths};
use crate::types::{BobError, BobResult};

/// Only the version of a persisted default, read before the full document so
/// that defaults written by an older schema can still be migrated.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: u32,
}

pub struct ConfigResolver<'a> {
    context: &'a BobContext,
    paths: ConfigPaths,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(context: &'a BobContext) -> Self {
        Self {
            paths: context.paths(),
            context,
        }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Build the effective configuration: default, then global, then local.
    pub fn load_effective_config(&self) -> BobResult<Config> {
        let mut config = self.load_default_config()?;

        for overlay_path in [&self.paths.global_config_file, &self.paths.local_config_file] {
            if !overlay_path.exists() {
                continue;
            }
            tracing::debug!(config = %overlay_path.display(), "found override config file");
            let content = read_file(overlay_path)?;
            let overlay =
                parse_overlay(&content).map_err(|e| BobError::config_parse(overlay_path, e))?;
            config = merge(config, overlay);
        }

        Ok(config)
    }

    /// Load the persisted default, writing or migrating it as needed.
    ///
    /// A stale default is rewritten and reread at most once.
    pub fn load_default_config(&self) -> BobResult<Config> {
        let path = &self.paths.default_config_file;
        if !path.exists() {
            self.write_default_config()?;
        }

        let content = read_file(path)?;
        let stored_version = probe_version(path, &content)?;
        if stored_version >= DEFAULT_CONFIG_VERSION {
            return parse_config(&content).map_err(|e| BobError::config_parse(path, e));
        }

        tracing::debug!(
            stored = stored_version,
            current = DEFAULT_CONFIG_VERSION,
            "version mismatch in default config, updating it"
        );
        self.write_default_config()?;

        let content = read_file(path)?;
        let config = parse_config(&content).map_err(|e| BobError::config_parse(path, e))?;
        if config.version != DEFAULT_CONFIG_VERSION {
            return Err(BobError::DefaultConfigCorrupted {
                path: path.clone(),
                found: config.version,
                expected: DEFAULT_CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Serialize the compiled-in default to its persisted location,
    /// creating parent directories as needed.
    ///
    /// The file is written next to its destination and renamed into place, so
    /// a concurrent run reads either the old or the new document in full.
    pub fn write_default_config(&self) -> BobResult<()> {
        let path = &self.paths.default_config_file;
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| BobError::config_io(parent, e))?;

        let content = serde_yaml::to_string(&default_config()).map_err(|e| {
            BobError::ConfigSerialize {
                path: path.clone(),
                source: e,
            }
        })?;
        let mut staged =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| BobError::config_io(parent, e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| BobError::config_io(staged.path(), e))?;
        staged
            .persist(path)
            .map_err(|e| BobError::config_io(path, e.error))?;

        tracing::debug!(config = %path.display(), "wrote default config");
        Ok(())
    }

    /// Pick the project matching the context's working directory.
    pub fn select_project_config<'c>(&self, config: &'c Config) -> BobResult<&'c ProjectConfig> {
        select_project_config(config, &self.context.working_dir)
    }
}

/// First project, in configured order, whose identifier exists in `dir`.
pub fn select_project_config<'c>(config: &'c Config, dir: &Path) -> BobResult<&'c ProjectConfig> {
    let project = config
        .projects
        .iter()
        .find(|p| p.is_present_in(dir))
        .ok_or_else(|| BobError::ProjectNotDetected {
            dir: dir.to_path_buf(),
        })?;

    tracing::info!(
        "project identified as {} due to presence of {}",
        project.project_type,
        project.identifier
    );
    Ok(project)
}

fn read_file(path: &Path) -> BobResult<String> {
    std::fs::read_to_string(path).map_err(|e| BobError::config_io(path, e))
}

fn probe_version(path: &Path, content: &str) -> BobResult<u32> {
    if content.trim().is_empty() {
        return Ok(0);
    }
    serde_yaml::from_str::<VersionProbe>(content)
        .map(|probe| probe.version)
        .map_err(|e| BobError::config_parse(path, e))
}
