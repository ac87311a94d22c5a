use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::configs::nullable::present;
use crate::configs::project::ProjectConfig;

/// The whole configuration document.
///
/// `projects` is ordered: when several identifiers match a directory the
/// earliest project wins.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub version: u32,
    pub projects: Vec<ProjectConfig>,
}

/// A global or local override document.
///
/// The outer `Option` records whether the key appears in the file at all; the
/// inner one is `None` when it is set to null. A present null clears the field.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverlay {
    #[serde(default, deserialize_with = "present")]
    pub version: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub projects: Option<Option<Vec<ProjectConfig>>>,
}

/// Lay `overlay` over `base`.
///
/// Fields present in the overlay replace the base field wholesale; there is
/// no element-wise merging of `projects`.
pub fn merge(base: Config, overlay: ConfigOverlay) -> Config {
    Config {
        version: match overlay.version {
            Some(version) => version.unwrap_or_default(),
            None => base.version,
        },
        projects: match overlay.projects {
            Some(projects) => projects.unwrap_or_default(),
            None => base.projects,
        },
    }
}

pub fn parse_config(yaml_str: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(yaml_str)
}

/// Parse an override document. A blank file is an overlay with no fields.
pub fn parse_overlay(yaml_str: &str) -> Result<ConfigOverlay, serde_yaml::Error> {
    if yaml_str.trim().is_empty() {
        return Ok(ConfigOverlay::default());
    }
    serde_yaml::from_str(yaml_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn project(project_type: &str, identifier: &str) -> ProjectConfig {
        ProjectConfig {
            project_type: project_type.to_string(),
            identifier: identifier.to_string(),
            docker_image: format!("docker.io/library/{}", project_type),
            environment: BTreeMap::new(),
            volumes: BTreeMap::new(),
            commands: BTreeMap::new(),
        }
    }

    fn base() -> Config {
        Config {
            version: 2,
            projects: vec![project("maven", "pom.xml"), project("node", "package.json")],
        }
    }

    #[test]
    fn test_overlay_projects_replace_base_projects() {
        let overlay = parse_overlay(
            r#"
projects:
  - projectType: gradle
    identifier: build.gradle
    dockerImage: docker.io/library/gradle
"#,
        )
        .unwrap();

        let merged = merge(base(), overlay.clone());

        assert_eq!(merged.projects, overlay.projects.flatten().unwrap());
        assert_eq!(merged.projects.len(), 1);
        assert_eq!(merged.version, 2, "version is untouched when absent");
    }

    #[test]
    fn test_overlay_without_projects_keeps_base() {
        let overlay = parse_overlay("version: 7\n").unwrap();
        let merged = merge(base(), overlay);

        assert_eq!(merged.version, 7);
        assert_eq!(merged.projects, base().projects);
    }

    #[test]
    fn test_explicit_empty_projects_is_not_absence() {
        let overlay = parse_overlay("projects: []\n").unwrap();
        assert_eq!(overlay.projects, Some(Some(Vec::new())));

        let merged = merge(base(), overlay);
        assert!(merged.projects.is_empty());
    }

    #[test]
    fn test_null_projects_clears_base() {
        for yaml in ["projects: ~\n", "projects: null\n", "projects:\n"] {
            let overlay = parse_overlay(yaml).unwrap();
            assert_eq!(overlay.projects, Some(None), "{yaml:?} sets projects");

            let merged = merge(base(), overlay);
            assert!(merged.projects.is_empty(), "{yaml:?} should clear projects");
            assert_eq!(merged.version, 2);
        }
    }

    #[test]
    fn test_null_version_resets_version() {
        let overlay = parse_overlay("version: ~\n").unwrap();
        assert_eq!(overlay.version, Some(None));

        let merged = merge(base(), overlay);
        assert_eq!(merged.version, 0);
        assert_eq!(merged.projects, base().projects);
    }

    #[test]
    fn test_blank_overlay_is_noop() {
        let overlay = parse_overlay("  \n").unwrap();
        assert_eq!(overlay, ConfigOverlay::default());
        assert_eq!(merge(base(), overlay), base());
    }

    #[test]
    fn test_overlay_project_environment_is_not_inherited() {
        let mut with_env = base();
        with_env.projects[0]
            .environment
            .insert("_JAVA_OPTIONS".to_string(), "-Duser.home=@homeDir".to_string());

        let overlay = parse_overlay(
            r#"
projects:
  - projectType: maven
    identifier: pom.xml
    dockerImage: docker.io/library/maven:3
"#,
        )
        .unwrap();

        let merged = merge(with_env, overlay);
        assert!(
            merged.projects[0].environment.is_empty(),
            "overlay projects are taken as written, not deep-merged"
        );
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = base();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("projectType: maven"));
        assert!(yaml.contains("dockerImage: docker.io/library/node"));
        assert_eq!(parse_config(&yaml).unwrap(), config);
    }

    #[test]
    fn test_malformed_overlay_is_an_error() {
        assert!(parse_overlay("projects: not-a-list\n").is_err());
    }
}
