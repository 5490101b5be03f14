use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_expense_command, handle_profile_command, handle_report_command, handle_task_command,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::storage::Store;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Command-line personal expense and budget-task tracker",
    long_about = "fintrack keeps per-profile expense records and budget tasks in \
                  local JSON storage, and summarizes spending by category from \
                  the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    #[command(subcommand)]
    Profile(fintrack::cli::ProfileCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(fintrack::cli::ExpenseCommands),

    /// Budget task management commands
    #[command(subcommand)]
    Task(fintrack::cli::TaskCommands),

    /// Reports over recorded expenses
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = Store::open(&paths)?;

    match cli.command {
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&store, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Task(cmd)) => {
            handle_task_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            // Write the defaults on first run so there is a file to edit
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }

            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency prefix: {}", settings.currency_prefix);
            println!("  Date format:     {}", settings.date_format);
            println!();
            println!("Edit {} to change settings.", paths.settings_file().display());
        }
        None => {
            println!("fintrack - personal expense and budget-task tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack profile create <email> <name>' to get started.");
        }
    }

    Ok(())
}
