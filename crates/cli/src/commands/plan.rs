use anyhow::Result;
use bob_core::project_manager::ProjectManager;
use colored::*;

use crate::commands::run::resolve_docker_binary;

pub fn execute(manager: &ProjectManager, task: &str) -> Result<()> {
    let plan = manager.resolve_command(task)?;

    println!(
        "{} {} {}",
        "Execution plan for".bold(),
        plan.task.cyan(),
        format!("({} project)", plan.project_type).dimmed()
    );
    println!("  {}: {}", "Image".bold(), plan.image);
    println!(
        "  {}: {} {}",
        "Command".bold(),
        resolve_docker_binary(),
        plan.args.join(" ")
    );

    Ok(())
}
