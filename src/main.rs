//! run-header CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{Parser, Subcommand};
use run_header::commands::{
    config_display_command, icon_command, preview_command, render_command, InputArgs,
};
use run_header::config::{load_config, Config, OutputFormat};
use run_header::output::{print_error, print_warning};
use run_header::RunHeaderPresenter;

#[derive(Parser)]
#[command(name = "run-header")]
#[command(
    version,
    about = "Render the header of a pipeline run detail view",
    after_help = "EXAMPLES:
    # Render a run from a JSON file
    run-header render run.json

    # Pipe input and print the view model as JSON
    cat run.json | run-header render - --format json

    # Build the input from flags
    run-header render --pipeline build --run build-run-1 --status True --reason Succeeded

    # Which icon does a condition get?
    run-header icon --status False --reason TaskRunCancelled"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the run header as text or JSON
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Resolve the status icon for a condition
    Icon {
        /// Condition reason
        #[arg(long)]
        reason: Option<String>,

        /// Condition status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show the run header in the terminal UI (q/Esc to quit)
    Preview {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the config file location and effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config = load_config().unwrap_or_else(|e| {
        print_warning(&format!("{}. Using default configuration.", e));
        Config::default()
    });
    let presenter = RunHeaderPresenter::new(config.routes());

    let result = match cli.command {
        Commands::Render {
            input,
            format,
            no_color,
        } => input.resolve().and_then(|input| {
            render_command(
                &presenter,
                &input,
                format.unwrap_or(config.format),
                config.color && !no_color,
            )
        }),
        Commands::Icon { reason, status } => icon_command(reason.as_deref(), status.as_deref()),
        Commands::Preview { input } => input
            .resolve()
            .and_then(|input| preview_command(&presenter.present(&input))),
        Commands::Config => config_display_command(&config),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
