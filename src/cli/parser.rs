use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for kitledger
/// CLI to compute kit numbers, generate Cellcard phone numbers and
/// browse per-user history
#[derive(Parser)]
#[command(
    name = "kitledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Kit number calculator and phone number generator with per-user history",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding baseline, overlay and
    /// session files (useful for tests or portable setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum HistoryKind {
    /// Kit calculation history
    Kit,
    /// Phone generation history
    Phone,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, config file and baseline document
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Create an account and log in
    Register {
        /// Username (letters, digits, '.', '_' or '-')
        username: String,

        #[arg(long, help = "Password (at least 4 characters)")]
        password: String,

        #[arg(long, help = "Password confirmation, must match --password")]
        confirm: String,
    },

    /// Log in as an existing user
    Login {
        username: String,

        #[arg(long, help = "Password for the account")]
        password: String,
    },

    /// Log out and clear the session
    Logout,

    /// Show the logged-in user, history counts and recent activity
    Status,

    /// Compute a kit number and record the calculation
    Kit {
        /// Kit number in 0-9,999,999,999
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Generate random Cellcard phone numbers
    Phone {
        #[arg(
            long = "allow-duplicates",
            help = "Allow numbers already generated this session"
        )]
        allow_duplicates: bool,

        #[arg(long, default_value_t = 1, help = "How many numbers to generate (1-100)")]
        count: u32,
    },

    /// Show a history table with search, column filter and paging
    History {
        /// Which history to show
        #[arg(value_enum)]
        kind: HistoryKind,

        #[arg(long, help = "Keep entries where any field contains this text")]
        search: Option<String>,

        #[arg(
            long,
            help = "Filter column (kit: input, raw, result; phone: number, prefix)"
        )]
        column: Option<String>,

        #[arg(long, help = "Value the filter column must contain")]
        value: Option<String>,

        #[arg(long, default_value_t = 1, help = "Page to show (1-based)")]
        page: usize,

        #[arg(long = "per-page", help = "Entries per page (default from config)")]
        per_page: Option<usize>,
    },

    /// Export the full user database as a pretty-printed XML file
    Export {
        #[arg(long, help = "Output file path")]
        file: String,

        #[arg(long, help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Clear history for the logged-in user
    Clear {
        #[arg(long, help = "Clear the kit calculation history")]
        kit: bool,

        #[arg(long, help = "Clear the phone generation history")]
        phone: bool,

        #[arg(long, help = "Clear both histories and duplicate tracking")]
        all: bool,

        #[arg(long, help = "Confirm: clearing cannot be undone")]
        yes: bool,
    },

    /// Delete all locally persisted demo state and log out
    Reset {
        #[arg(long, help = "Confirm: resetting cannot be undone")]
        yes: bool,
    },
}
