use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::json::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file holding the contacts
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Run a single operation instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email address, dropped if it is not a valid address
        #[arg(long)]
        email: Option<String>,
    },
    /// Search contacts by name or part of a name
    Search {
        #[arg(long)]
        name: String,
    },
    /// Update the phone or email of an existing contact
    /// Provide the exact contact name followed by the fields to change
    Update {
        /// Exact contact name
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address, ignored if it is not a valid address
        #[arg(long)]
        email: Option<String>,
    },
}
