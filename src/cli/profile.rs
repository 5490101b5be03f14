//! Profile CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::services::ProfileService;
use crate::storage::Store;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a new profile and make it active
    Create {
        /// Contact email address
        email: String,
        /// Display name
        name: String,
    },
    /// List all profiles
    List,
    /// Switch the active profile
    Switch {
        /// Profile email or ID
        profile: String,
    },
    /// Show the active profile
    Current,
}

/// Handle a profile command
pub fn handle_profile_command(store: &Store, cmd: ProfileCommands) -> TrackerResult<()> {
    let service = ProfileService::new(store);

    match cmd {
        ProfileCommands::Create { email, name } => {
            let user = service.create(&email, &name)?;
            println!("Created profile {} ({})", user, user.id);
        }
        ProfileCommands::List => {
            let users = service.list()?;
            if users.is_empty() {
                println!("No profiles yet. Run 'fintrack profile create <email> <name>'.");
            } else {
                let current = store.users.current()?;
                for user in users {
                    let marker = if current.as_ref().map(|c| c.id) == Some(user.id) {
                        "*"
                    } else {
                        " "
                    };
                    println!("{} {} {}", marker, user.id, user);
                }
            }
        }
        ProfileCommands::Switch { profile } => {
            let user = service.switch(&profile)?;
            println!("Switched to profile {}", user);
        }
        ProfileCommands::Current => {
            let user = service.current()?;
            println!("{} ({})", user, user.id);
        }
    }

    Ok(())
}
