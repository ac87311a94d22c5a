use anyhow::Result;
use bob_core::project_manager::ProjectManager;
use colored::*;

pub fn execute(manager: &ProjectManager) -> Result<()> {
    let result = manager.list_projects();

    println!("{}", "Project types".bold().underline());

    if result.projects.is_empty() {
        println!("  {}", "No project types configured".dimmed());
        return Ok(());
    }

    for project in &result.projects {
        let name = if project.is_detected {
            format!("{} {}", project.project_type.blue().bold(), "[detected]".green())
        } else {
            project.project_type.cyan().to_string()
        };
        println!(
            "{} {}",
            name,
            format!("({} -> {})", project.identifier, project.image).dimmed()
        );

        if project.tasks.is_empty() {
            println!("  {}", "no tasks".dimmed());
        } else {
            println!("  tasks: {}", project.tasks.join(", "));
        }
    }

    if result.detected().is_none() {
        println!();
        println!(
            "{}",
            "No project type matches the current directory".yellow()
        );
    }

    Ok(())
}
