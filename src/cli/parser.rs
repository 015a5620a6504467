use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFortnight
/// CLI application to log shifts, expenses and advances and compute fortnightly pay
#[derive(Parser)]
#[command(
    name = "rfortnight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work shifts, expenses and advances; compute fortnightly pay and expense-fund balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use the local JSON store at this path instead of SQLite
    #[arg(global = true, long = "local", conflicts_with = "db")]
    pub local: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, $VISUAL, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show or change pay settings of the current user
    Settings {
        #[arg(long = "rate", help = "Hourly rate for regular hours")]
        rate: Option<f64>,

        #[arg(long = "overtime-rate", help = "Hourly rate for overtime hours")]
        overtime_rate: Option<f64>,

        #[arg(long = "limit", help = "Regular hours per day before overtime starts")]
        limit: Option<f64>,

        #[arg(long = "fund", help = "Fixed expense fund per fortnight")]
        fund: Option<f64>,

        #[arg(long = "currency", help = "Currency code (EUR, BRL, USD, GBP, ...)")]
        currency: Option<String>,

        #[arg(long = "name", help = "Display name used in reports")]
        name: Option<String>,
    },

    /// Record a work shift
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start of the shift (HH:MM)")]
        start: String,

        #[arg(long = "lunch-out", help = "Start of the lunch break (HH:MM)")]
        lunch_out: String,

        #[arg(long = "lunch-in", help = "End of the lunch break (HH:MM)")]
        lunch_in: String,

        #[arg(
            long = "dinner-out",
            requires = "dinner_in",
            help = "Start of the optional dinner break (HH:MM)"
        )]
        dinner_out: Option<String>,

        #[arg(
            long = "dinner-in",
            requires = "dinner_out",
            help = "End of the optional dinner break (HH:MM)"
        )]
        dinner_in: Option<String>,

        #[arg(long = "out", help = "End of the shift (HH:MM)")]
        end: String,

        #[arg(long = "desc", default_value = "", help = "What was done")]
        desc: String,

        #[arg(
            long = "holiday",
            conflicts_with = "no_holiday",
            help = "Weekend or holiday: every hour is overtime"
        )]
        holiday: bool,

        #[arg(long = "no-holiday", help = "Regular working day, even on a weekend")]
        no_holiday: bool,
    },

    /// Record an expense paid from the expense fund
    Expense {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Amount (> 0)
        amount: f64,

        #[arg(
            long = "category",
            default_value = "misc",
            help = "breakfast, lunch, dinner, fuel, transport or misc"
        )]
        category: String,

        #[arg(long = "desc", default_value = "")]
        desc: String,

        #[arg(long = "ref", help = "Receipt / reference number")]
        reference: Option<String>,
    },

    /// Record an advance on pay
    Advance {
        /// Date of the advance (YYYY-MM-DD)
        date: String,

        /// Amount (> 0)
        amount: f64,

        #[arg(long = "desc")]
        desc: Option<String>,
    },

    /// Delete a shift, expense or advance by id
    Del {
        #[arg(long = "time", group = "target", help = "Id of the shift to delete")]
        time: Option<String>,

        #[arg(long = "expense", group = "target", help = "Id of the expense to delete")]
        expense: Option<String>,

        #[arg(long = "advance", group = "target", help = "Id of the advance to delete")]
        advance: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List shifts (or expenses / advances) of a fortnight
    List {
        #[arg(long, short, help = "Period id, e.g. 2025-1-2 (default: current)")]
        period: Option<String>,

        #[arg(long = "expenses", conflicts_with = "advances", help = "List expenses")]
        expenses: bool,

        #[arg(long = "advances", help = "List advances")]
        advances: bool,

        #[arg(long = "category", requires = "expenses", help = "Filter expenses by category")]
        category: Option<String>,

        #[arg(long = "ref", requires = "expenses", help = "Filter expenses by reference")]
        reference: Option<String>,
    },

    /// List the fortnight catalog
    Periods,

    /// Totals, per-day and per-category series of a fortnight
    Summary {
        #[arg(long, short, help = "Period id, e.g. 2025-1-2 (default: current)")]
        period: Option<String>,
    },

    /// Export a fortnight to CSV, JSON, XLSX or PDF
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, help = "Absolute path of the output file")]
        file: String,

        #[arg(long, short, help = "Period id, e.g. 2025-1-2 (default: current)")]
        period: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Ask the narrative service for an analysis of a fortnight
    Report {
        #[arg(long, short, help = "Period id, e.g. 2025-1-2 (default: current)")]
        period: Option<String>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user (admin only)
    Add {
        username: String,

        #[arg(long = "name", default_value = "")]
        name: String,

        #[arg(long = "admin", help = "Grant the admin role")]
        admin: bool,
    },

    /// List users
    List,

    /// Delete a user (admin only)
    Del { username: String },
}
