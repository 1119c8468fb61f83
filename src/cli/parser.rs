use clap::{Parser, Subcommand};

/// Command-line interface definition for classbook
/// Daily class attendance with a text archive, a CSV log and a PDF report
#[derive(Parser)]
#[command(
    name = "classbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record daily check-ins, query the archive and build a PDF report",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second class)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
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
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record the attendance of one day
    Record {
        /// Date of the session (YYYY-MM-DD or 'today'; default today)
        #[arg(long)]
        date: Option<String>,

        /// Present student as NAME=TIME (repeatable); prompts when omitted
        #[arg(long = "entry", short = 'e', value_name = "NAME=TIME")]
        entries: Vec<String>,

        /// Total class strength; prompts when omitted
        #[arg(long, short = 's')]
        strength: Option<usize>,
    },

    /// Show archived attendance for a date or a range
    Query {
        /// Date to look up (YYYY-MM-DD or 'today'; default today)
        date: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Year, month, day or a custom A:B range (e.g. 2025-11 or 2025-11-01:2025-11-15)"
        )]
        range: Option<String>,

        #[arg(long, help = "Write the found records to the export file")]
        export: bool,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },

    /// Manage the class roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Build the date-wise PDF attendance report
    Report {
        #[arg(long, value_name = "FILE", help = "Output PDF (default: full_date_list.pdf in the data dir)")]
        file: Option<String>,

        #[arg(long, help = "Also print the report tables to the terminal")]
        print: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print the entries of the activity log")]
        print: bool,

        #[arg(
            long = "op",
            value_name = "OPERATION",
            help = "Only show one operation (record, roster, report, export, contacts, init, error)"
        )]
        operation: Option<String>,
    },

    /// Manage the contact book
    Contacts {
        #[command(subcommand)]
        action: ContactAction,
    },
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// List the roster
    List,

    /// Add students to the roster
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove students from the roster
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Replace the whole roster
    Replace { names: Vec<String> },

    /// Merge a one-name-per-line file into the roster
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add a contact
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// List all contacts
    List,

    /// Show one contact by name
    Search { name: String },

    /// Change the phone and/or email of a contact
    Update {
        name: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by name
    Delete { name: String },

    /// Write the contact book to contacts.json
    ExportJson,

    /// Load and display contacts from contacts.json
    ImportJson,
}
