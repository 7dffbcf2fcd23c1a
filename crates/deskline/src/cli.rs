//! Clap derive structures for the `deskline` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// deskline -- command-line client for the Deskline helpdesk server
#[derive(Debug, Parser)]
#[command(
    name = "deskline",
    version,
    about = "Manage Deskline helpdesk data from the command line",
    long_about = "A CLI for administering a Deskline helpdesk server.\n\n\
        Talks to the same REST API the admin web UI uses: tickets, users,\n\
        admins, channels, clients, actions, and the audit log.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "DESKLINE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server base URL (overrides profile)
    #[arg(long, short = 's', env = "DESKLINE_SERVER", global = true)]
    pub server: Option<String>,

    /// Admin email to sign in as (overrides profile)
    #[arg(long, env = "DESKLINE_EMAIL", global = true)]
    pub email: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DESKLINE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "DESKLINE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "DESKLINE_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, sign out, and inspect the current session
    Auth(AuthArgs),

    /// Manage support tickets
    #[command(alias = "t")]
    Tickets(TicketsArgs),

    /// Manage ticket tags
    Tags(TagsArgs),

    /// Manage end users (ticket requesters)
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Manage admin accounts
    Admins(AdminsArgs),

    /// Manage intake channels
    #[command(alias = "ch")]
    Channels(ChannelsArgs),

    /// Manage client organizations
    #[command(alias = "cl")]
    Clients(ClientsArgs),

    /// Manage automation actions and their fields
    Actions(ActionsArgs),

    /// Browse the audit log
    Audit(AuditArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared filtering and pagination arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Substring search on the entity's primary text fields
    #[arg(long, short = 'S')]
    pub search: Option<String>,

    /// Show archived records instead of active ones
    #[arg(long, short = 'a')]
    pub archived: bool,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and persist the session
    Login {
        /// Admin email (prompted if omitted and not configured)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and discard the persisted session
    Logout,

    /// Show the currently signed-in admin
    Whoami,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TICKETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub command: TicketsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TicketsCommand {
    /// List tickets (one page)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Fetch every page of tickets matching a filter
    Export(ListArgs),

    /// Get ticket details
    Get {
        /// Ticket ID
        id: String,
    },

    /// Create a new ticket
    Create {
        /// Ticket subject line
        #[arg(long)]
        subject: String,

        /// Requesting user ID
        #[arg(long)]
        user: String,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Intake channel ID
        #[arg(long)]
        channel: Option<String>,
    },

    /// Update an existing ticket
    Update {
        /// Ticket ID
        id: String,

        /// New subject line
        #[arg(long)]
        subject: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status
        #[arg(long, value_enum)]
        status: Option<TicketStatusArg>,
    },

    /// Archive a ticket (soft delete)
    Archive {
        /// Ticket ID
        id: String,
    },

    /// Restore an archived ticket
    Restore {
        /// Ticket ID
        id: String,
    },

    /// List the admins assigned to a ticket
    Assignments {
        /// Ticket ID
        ticket: String,
    },

    /// Assign an admin to a ticket
    Assign {
        /// Ticket ID
        ticket: String,

        /// Admin ID to assign
        #[arg(long)]
        admin: String,
    },

    /// Remove an assignment from a ticket
    Unassign {
        /// Ticket ID
        ticket: String,

        /// Assignment ID to remove
        #[arg(long)]
        assignment: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TicketStatusArg {
    Open,
    Pending,
    Resolved,
    Closed,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TAGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TagsCommand {
    /// List ticket tags
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get tag details
    Get {
        /// Tag ID
        id: String,
    },

    /// Create a new tag
    Create {
        /// Tag name
        #[arg(long)]
        name: String,

        /// Display color (hex, e.g. "#ff8800")
        #[arg(long)]
        color: Option<String>,
    },

    /// Update an existing tag
    Update {
        /// Tag ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New display color
        #[arg(long)]
        color: Option<String>,
    },

    /// Archive a tag (soft delete)
    Archive {
        /// Tag ID
        id: String,
    },

    /// Restore an archived tag
    Restore {
        /// Tag ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List end users
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get user details
    Get {
        /// User ID
        id: String,
    },

    /// Create a new user
    Create {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Update an existing user
    Update {
        /// User ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Archive a user (soft delete)
    Archive {
        /// User ID
        id: String,
    },

    /// Restore an archived user
    Restore {
        /// User ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADMINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdminsArgs {
    #[command(subcommand)]
    pub command: AdminsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminsCommand {
    /// List admin accounts
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get admin details
    Get {
        /// Admin ID
        id: String,
    },

    /// Create a new admin (super admin only)
    Create {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role to grant
        #[arg(long, value_enum, default_value = "agent")]
        role: AdminRoleArg,
    },

    /// Update an existing admin (super admin only)
    Update {
        /// Admin ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New role
        #[arg(long, value_enum)]
        role: Option<AdminRoleArg>,
    },

    /// Deactivate an admin account (super admin only)
    Deactivate {
        /// Admin ID
        id: String,
    },

    /// Reactivate a deactivated admin account (super admin only)
    Activate {
        /// Admin ID
        id: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum AdminRoleArg {
    /// Full access, including admin management
    SuperAdmin,
    /// Regular agent
    Agent,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CHANNELS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ChannelsArgs {
    #[command(subcommand)]
    pub command: ChannelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChannelsCommand {
    /// List intake channels
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get channel details
    Get {
        /// Channel ID
        id: String,
    },

    /// Create a new channel
    Create {
        /// Channel name
        #[arg(long)]
        name: String,
    },

    /// Rename an existing channel
    Update {
        /// Channel ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,
    },

    /// Archive a channel (soft delete)
    Archive {
        /// Channel ID
        id: String,
    },

    /// Restore an archived channel
    Restore {
        /// Channel ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CLIENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    /// List client organizations
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get client details
    Get {
        /// Client ID
        id: String,
    },

    /// Create a new client organization
    Create {
        /// Organization name
        #[arg(long)]
        name: String,

        /// Email domain (e.g. "example.com")
        #[arg(long)]
        domain: Option<String>,
    },

    /// Update an existing client organization
    Update {
        /// Client ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email domain
        #[arg(long)]
        domain: Option<String>,
    },

    /// Archive a client organization (soft delete)
    Archive {
        /// Client ID
        id: String,
    },

    /// Restore an archived client organization
    Restore {
        /// Client ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ACTIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ActionsArgs {
    #[command(subcommand)]
    pub command: ActionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActionsCommand {
    /// List automation actions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get action details
    Get {
        /// Action ID
        id: String,
    },

    /// Create a new action
    Create {
        /// Action name
        #[arg(long)]
        name: String,

        /// What this action does
        #[arg(long)]
        description: Option<String>,
    },

    /// Update an existing action
    Update {
        /// Action ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Deactivate an action
    Deactivate {
        /// Action ID
        id: String,
    },

    /// Reactivate a deactivated action
    Activate {
        /// Action ID
        id: String,
    },

    /// List the input fields of an action
    Fields {
        /// Action ID
        action: String,
    },

    /// Add an input field to an action
    AddField {
        /// Action ID
        action: String,

        /// Field label shown to agents
        #[arg(long)]
        label: String,

        /// Field type (e.g. "text", "number", "select")
        #[arg(long = "type")]
        field_type: String,

        /// Whether the field must be filled in
        #[arg(long)]
        required: bool,

        /// Sort position within the form
        #[arg(long, default_value = "0")]
        position: u32,
    },

    /// Remove an input field from an action
    RemoveField {
        /// Action ID
        action: String,

        /// Field ID to remove
        #[arg(long)]
        field: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUDIT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuditArgs {
    #[command(subcommand)]
    pub command: AuditCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// List audit log entries
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the field-level changes recorded for an entry
    Values {
        /// Audit log entry ID
        entry: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
