use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBillLog
/// CLI application to log daily billable items with SQLite
#[derive(Parser)]
#[command(
    name = "rbilllog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple billing log CLI: record daily item counts, compute billings and review them by work week",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the pricing catalog
    Catalog,

    /// Record the item counts billed on a day
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Item count as KEY=COUNT (repeatable)
        #[arg(
            long = "item",
            short = 'i',
            value_name = "KEY=COUNT",
            help = "Item count as KEY=COUNT, e.g. consult_b_90035=3 (repeatable)"
        )]
        items: Vec<String>,
    },

    /// Show the line items and totals of a day
    Show {
        /// Date of the day (YYYY-MM-DD)
        date: String,
    },

    /// List saved days grouped by work week
    List {
        /// Filter by period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges of the same
        /// format (start:end). `all` shows the entire archive.
        ///
        /// If omitted, the current month is shown.
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete the record of a day
    Del {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'f', help = "Delete without asking for confirmation")]
        force: bool,
    },

    /// Manage monthly budgets
    Budget {
        #[command(subcommand)]
        action: BudgetAction,
    },

    /// Monthly dashboard: billings vs budget
    Summary,

    /// Export saved days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(
            long,
            value_name = "DATE",
            conflicts_with = "range",
            help = "Export a single day (YYYY-MM-DD)"
        )]
        date: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Set (or replace) the budget of a month
    Set {
        /// Month (YYYY-MM)
        month: String,

        /// Budget amount (>= 0)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget of a month, or all budgets
    Show {
        /// Month (YYYY-MM)
        month: Option<String>,
    },
}
