use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "A lean help-desk ticketing CLI")]
#[command(version)]
pub struct Cli {
    /// Directory holding local storage (defaults to the nearest .helpdesk)
    #[arg(long, env = "HELPDESK_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override every simulated request delay, in milliseconds
    #[arg(long, env = "HELPDESK_LATENCY_MS", global = true)]
    pub latency_ms: Option<u64>,

    /// Emit logs as JSON
    #[arg(long, env = "HELPDESK_LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Line grammar for the interactive shell: the same commands without the
/// program name or global flags.
#[derive(Parser)]
#[command(name = "helpdesk", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a .helpdesk directory here
    Init,

    /// Log in with one of the demo accounts
    Login {
        /// Account email
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long, env = "HELPDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log out and forget the saved session
    Logout,

    /// Show the logged in user
    Whoami,

    /// Ticket statistics and the most recent tickets
    Dashboard,

    /// List tickets
    List {
        /// Case-insensitive text to look for in title, description or id
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (all, open, in_progress, resolved, closed)
        #[arg(long, default_value = "all")]
        status: String,
        /// Filter by priority (all, low, medium, high)
        #[arg(short, long, default_value = "all")]
        priority: String,
        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page: 5, 10 or 25 (defaults to the tickets_per_page setting)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show ticket details and comments
    Show {
        /// Ticket ID
        id: String,
    },

    /// Create a new ticket
    Create {
        /// Ticket title
        title: String,
        /// Ticket description
        #[arg(short, long)]
        description: Option<String>,
        /// Priority (low, medium, high); defaults to the default_priority setting
        #[arg(short, long)]
        priority: Option<String>,
        /// Assignee; defaults to the auto-assignment setting
        #[arg(short, long)]
        assign: Option<String>,
    },

    /// Edit a ticket
    Edit {
        /// Ticket ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New status
        #[arg(short, long)]
        status: Option<String>,
        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Assign a ticket
    Assign {
        /// Ticket ID
        id: String,
        /// Who to assign it to
        assignee: String,
    },

    /// Remove the assignee from a ticket
    Unassign {
        /// Ticket ID
        id: String,
    },

    /// Add a comment to a ticket
    Comment {
        /// Ticket ID
        id: String,
        /// Comment text
        text: String,
        /// Attach a file (at most 1 MB)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Work with comment attachments
    Attachment {
        #[command(subcommand)]
        action: AttachmentCommands,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Interactive session that keeps tickets in memory between commands
    Shell,
}

#[derive(Subcommand)]
pub enum AttachmentCommands {
    /// Write a comment's attachment to disk
    Save {
        /// Ticket ID
        ticket: String,
        /// Comment ID
        comment: String,
        /// Destination path (a directory keeps the original file name)
        dest: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the current settings
    Show,
    /// Change one setting
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
    /// Restore the defaults
    Reset,
}
