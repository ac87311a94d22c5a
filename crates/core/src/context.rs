//! Ambient process facts threaded explicitly through resolution and assembly.

use std::path::{Path, PathBuf};

use crate::types::{BobError, BobResult};

pub const DEFAULT_CONFIG_FILE: &str = "bob_default.yaml";
pub const GLOBAL_CONFIG_FILE: &str = "bob.yaml";
pub const LOCAL_CONFIG_FILE: &str = ".bob.yaml";

/// The invoking user's home directory, the working directory and the
/// per-user configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BobContext {
    pub home_dir: PathBuf,
    pub working_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl BobContext {
    pub fn new(home_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        let config_dir = home_dir.join(".config");
        Self {
            home_dir,
            working_dir: working_dir.into(),
            config_dir,
        }
    }

    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    /// Resolve the context from the running process.
    ///
    /// The config directory is `$XDG_CONFIG_HOME` when set, otherwise
    /// `~/.config`.
    pub fn from_env() -> BobResult<Self> {
        let home_dir = dirs::home_dir().ok_or(BobError::HomeDirNotFound)?;
        let working_dir = std::env::current_dir().map_err(BobError::WorkingDir)?;
        let config_dir = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir.join(".config"));

        tracing::debug!(
            home_dir = %home_dir.display(),
            working_dir = %working_dir.display(),
            config_dir = %config_dir.display(),
            "resolved context"
        );

        Ok(Self {
            home_dir,
            working_dir,
            config_dir,
        })
    }

    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths {
            default_config_file: self.config_dir.join(DEFAULT_CONFIG_FILE),
            global_config_file: self.config_dir.join(GLOBAL_CONFIG_FILE),
            local_config_file: self.working_dir.join(LOCAL_CONFIG_FILE),
        }
    }

    /// Home directory rendered for use in container arguments
    pub fn home(&self) -> BobResult<&str> {
        path_str(&self.home_dir)
    }

    pub fn working(&self) -> BobResult<&str> {
        path_str(&self.working_dir)
    }
}

/// Locations of the three configuration layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Persisted copy of the compiled-in default
    pub default_config_file: PathBuf,
    /// Optional user-wide override
    pub global_config_file: PathBuf,
    /// Optional project-local override
    pub local_config_file: PathBuf,
}

/// Container arguments are strings; a path that cannot be represented
/// exactly is an error rather than a lossy mount.
fn path_str(path: &Path) -> BobResult<&str> {
    path.to_str().ok_or_else(|| BobError::NonUtf8Path {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_context() {
        let context = BobContext::new("/home/alice", "/src/app");
        let paths = context.paths();

        assert_eq!(
            paths.default_config_file,
            PathBuf::from("/home/alice/.config/bob_default.yaml")
        );
        assert_eq!(
            paths.global_config_file,
            PathBuf::from("/home/alice/.config/bob.yaml")
        );
        assert_eq!(paths.local_config_file, PathBuf::from("/src/app/.bob.yaml"));
    }

    #[test]
    fn test_custom_config_dir() {
        let context = BobContext::new("/home/alice", "/src/app").with_config_dir("/etc/xdg");
        assert_eq!(
            context.paths().global_config_file,
            PathBuf::from("/etc/xdg/bob.yaml")
        );
        assert_eq!(context.home().unwrap(), "/home/alice");
        assert_eq!(context.working().unwrap(), "/src/app");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_home_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let home = PathBuf::from(OsStr::from_bytes(b"/home/\xffalice"));
        let context = BobContext::new(home.clone(), "/src/app");

        match context.home() {
            Err(BobError::NonUtf8Path { path }) => assert_eq!(path, home),
            other => panic!("expected non-UTF-8 error, got {other:?}"),
        }
        assert_eq!(context.working().unwrap(), "/src/app");
    }
}
