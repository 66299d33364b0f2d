//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - password: check a password against the password policy
//! - user: check a user record and classify it
//! - classify: map an age to its user type
//! - order: validate an order file and price it
//! - rules: list the rules each validator applies

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Verdict - rule-based validation that reports every failure at once
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check password strength
    Password {
        /// Password to check
        password: String,
    },

    /// Validate a user record
    User(UserArgs),

    /// Classify an age into a user type
    Classify {
        /// Age to classify
        #[arg(allow_hyphen_values = true)]
        age: i64,
    },

    /// Validate and price an order read from a YAML file
    Order {
        /// YAML file with a list of order items
        file: PathBuf,
    },

    /// List the rules applied by each validator
    Rules,
}

/// User fields, given inline or through a YAML file
#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// YAML file with name, email and age
    #[arg(short, long, conflicts_with_all = ["name", "email", "age"])]
    pub file: Option<PathBuf>,

    /// User's full name
    #[arg(short, long)]
    pub name: Option<String>,

    /// User's email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// User's age in years
    #[arg(short, long, allow_hyphen_values = true)]
    pub age: Option<i64>,
}
