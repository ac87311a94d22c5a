use anyhow::Result;
use bob_core::{BobContext, ProjectManager, ProjectManagerConfig};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// bob - run the recommended tool for the project you're in, using docker
#[derive(Parser)]
#[command(name = "bob")]
#[command(about = "Runs the recommended tools based on the project you're working on")]
#[command(
    long_about = "bob finds out what kind of project the current directory holds and runs the \
                  command configured for the given task inside a container.\n\n\
                  Example:\n  bob test -> finds pom.xml -> docker run --rm -w /workdir \
                  -v $(pwd):/workdir -v $HOME:$HOME docker.io/library/maven mvn clean verify"
)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Task to run, e.g. "test" or "checkstyle"
    task: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a task in a container
    Run {
        /// Task name, e.g. "test"
        task: String,
    },
    /// Show the container command for a task without running it
    Plan {
        /// Task name, e.g. "test"
        task: String,
    },
    /// List configured project types and their tasks
    List,
    /// Print the effective configuration
    Config,
    /// Print the JSON schema of the configuration file
    Schema,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a tracing subscriber was already installed");
    }
}

async fn run(cli: Cli) -> Result<i32> {
    // The schema does not depend on any configuration layer
    if matches!(cli.command, Some(Commands::Schema)) {
        commands::schema::execute()?;
        return Ok(0);
    }

    let command = match (cli.command, cli.task) {
        (Some(command), _) => command,
        (None, Some(task)) => Commands::Run { task },
        (None, None) => anyhow::bail!("you must provide a task (see `bob --help`)"),
    };

    // Initialize project manager with all business logic
    let manager = ProjectManager::new(ProjectManagerConfig {
        context: BobContext::from_env()?,
    })?;

    // Execute command (CLI layer only handles presentation and process execution)
    match command {
        Commands::Run { task } => commands::run::execute(&manager, &task).await,
        Commands::Plan { task } => commands::plan::execute(&manager, &task).map(|_| 0),
        Commands::List => commands::list::execute(&manager).map(|_| 0),
        Commands::Config => commands::config::execute(&manager).map(|_| 0),
        Commands::Schema => commands::schema::execute().map(|_| 0),
    }
}
