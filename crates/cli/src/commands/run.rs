use anyhow::{Context, Result};
use bob_core::project_manager::ProjectManager;
use colored::*;
use tokio::process::Command;

/// Container binary, overridable with `BOB_DOCKER_BIN` (e.g. `podman`)
pub fn resolve_docker_binary() -> String {
    std::env::var("BOB_DOCKER_BIN")
        .ok()
        .filter(|bin| !bin.trim().is_empty())
        .unwrap_or_else(|| "docker".to_string())
}

/// Run the task's container and return its exit code
pub async fn execute(manager: &ProjectManager, task: &str) -> Result<i32> {
    let plan = manager.resolve_command(task)?;
    let docker_bin = resolve_docker_binary();

    tracing::info!("Running {} {}", docker_bin, plan.args.join(" "));

    // stdout and stderr are inherited so the container output streams straight through
    let status = Command::new(&docker_bin)
        .args(&plan.args)
        .status()
        .await
        .with_context(|| format!("Failed to execute '{}'", docker_bin))?;

    if status.success() {
        return Ok(0);
    }

    let code = status.code().unwrap_or(1);
    eprintln!(
        "{} {}",
        "✗".red().bold(),
        format!("Task '{}' failed with exit code {}", plan.task, code).red()
    );
    Ok(code)
}
