use std::path::PathBuf;

use thiserror::Error;

/// The main error type for bob operations
#[derive(Debug, Error)]
pub enum BobError {
    #[error("Failed to access config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize default config for {}: {source}", path.display())]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "Default config {} still reports version {found} after being rewritten (expected {expected})",
        path.display()
    )]
    DefaultConfigCorrupted {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("No configuration found for the current project ({})", dir.display())]
    ProjectNotDetected { dir: PathBuf },

    #[error(
        "Unfortunately bob doesn't know what to do about '{task}' for projects of type '{project_type}' (known tasks: {})",
        available.join(", ")
    )]
    UnknownTask {
        task: String,
        project_type: String,
        available: Vec<String>,
    },

    #[error("You must provide a task")]
    EmptyTask,

    #[error("Path {} is not valid UTF-8 and cannot be passed to the container", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("Could not determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

impl BobError {
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for bob operations
pub type BobResult<T> = Result<T, BobError>;
