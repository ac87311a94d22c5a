//! The compiled-in default configuration.
//!
//! Bump [`DEFAULT_CONFIG_VERSION`] whenever [`default_config`] changes so that
//! persisted copies on user machines are regenerated.

use std::collections::BTreeMap;

use crate::configs::document::Config;
use crate::configs::project::ProjectConfig;

pub const DEFAULT_CONFIG_VERSION: u32 = 2;

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

pub fn default_config() -> Config {
    Config {
        version: DEFAULT_CONFIG_VERSION,
        projects: vec![
            ProjectConfig {
                project_type: "maven".to_string(),
                identifier: "pom.xml".to_string(),
                docker_image: "docker.io/library/maven".to_string(),
                environment: BTreeMap::from([(
                    "_JAVA_OPTIONS".to_string(),
                    "-Duser.home=@homeDir".to_string(),
                )]),
                volumes: BTreeMap::new(),
                commands: BTreeMap::from([
                    ("test".to_string(), strings(&["mvn", "clean", "verify"])),
                    ("checkstyle".to_string(), strings(&["mvn", "checkstyle:check"])),
                ]),
            },
            ProjectConfig {
                project_type: "node".to_string(),
                identifier: "package.json".to_string(),
                docker_image: "docker.io/library/node".to_string(),
                environment: BTreeMap::new(),
                volumes: BTreeMap::new(),
                commands: BTreeMap::from([
                    ("test".to_string(), strings(&["yarn", "test"])),
                    ("checkstyle".to_string(), strings(&["yarn", "lint"])),
                ]),
            },
        ],
    }
}
