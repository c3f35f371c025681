use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
/// CLI time clock: punch work and breaks, reconcile daily timesheets, compute wages
#[derive(Parser, Debug)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A CLI time clock: punch work and breaks, reconcile daily timesheets and compute wages",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of `current_user` from the configuration
    #[arg(global = true, long = "user")]
    pub user: Option<i64>,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors on stderr
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing configuration fields with defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a punch at the current instant
    Punch {
        /// start-work, end-work, start-break or end-break
        #[arg(value_name = "TYPE")]
        kind: String,
    },

    /// Record a manual correction at a chosen date and time
    Add {
        /// Date of the punch (YYYY-MM-DD)
        date: String,

        /// Local time of the punch (HH:MM)
        time: String,

        /// start-work, end-work, start-break or end-break
        #[arg(value_name = "TYPE")]
        kind: String,
    },

    /// Delete the most recent punch (only shortly after recording it)
    Del {
        #[arg(long = "id", help = "Punch id to delete (defaults to the most recent one)")]
        id: Option<i64>,
    },

    /// Show the current working status and today's punches
    Status,

    /// Show the daily timesheet with wages
    Report {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "as-of", help = "Reference 'today' date (YYYY-MM-DD)")]
        as_of: Option<String>,

        #[arg(long = "rate", help = "Hourly rate override")]
        rate: Option<i64>,

        #[arg(long = "unit", help = "Minute unit override for wage truncation")]
        unit: Option<i64>,
    },

    /// Export daily summaries or raw punches
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all'")]
        range: Option<String>,

        #[arg(long = "events", help = "Export raw punches instead of daily summaries")]
        events: bool,

        #[arg(long = "as-of", help = "Reference 'today' date (YYYY-MM-DD)")]
        as_of: Option<String>,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new user
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// List registered users
    List,

    /// Change a user's name or e-mail
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a user without punch records
    Remove { id: i64 },
}
