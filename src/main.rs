use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use railsmith::cli::RunMode;
use railsmith::{ExecError, Result};
use std::io;

#[derive(Parser)]
#[command(name = "railsmith")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive Rails application scaffolder", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new Rails application, then apply the template to it
    New {
        /// Print the plan instead of executing it
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print the plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Apply the template to the Rails application in the current directory
    Apply {
        /// Print the plan instead of executing it
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print the plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        // A failing external command hands its exit code back to the shell
        let code = e
            .downcast_ref::<ExecError>()
            .map(ExecError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { dry_run, json } => {
            railsmith::cli::new::run(RunMode::from_flags(dry_run, json)).await?;
        }

        Commands::Apply { dry_run, json } => {
            railsmith::cli::apply::run(RunMode::from_flags(dry_run, json)).await?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "railsmith", &mut io::stdout());
        }
    }

    Ok(())
}
