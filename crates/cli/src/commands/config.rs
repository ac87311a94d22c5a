use anyhow::{Context, Result};
use bob_core::project_manager::ProjectManager;
use colored::*;

pub fn execute(manager: &ProjectManager) -> Result<()> {
    let paths = manager.paths();
    for (label, path) in [
        ("default", &paths.default_config_file),
        ("global", &paths.global_config_file),
        ("local", &paths.local_config_file),
    ] {
        let state = if path.exists() {
            "found".green()
        } else {
            "absent".dimmed()
        };
        println!("# {:<8} {} ({})", label, path.display(), state);
    }

    let yaml = serde_yaml::to_string(manager.config())
        .context("Failed to serialize effective configuration")?;
    print!("{}", yaml);

    Ok(())
}
