//! Clap derive structures for the `rackview` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rackview -- terminal dashboard for the server inventory backend
#[derive(Debug, Parser)]
#[command(
    name = "rackview",
    version,
    about = "Browse and manage the server inventory from the command line",
    long_about = "A terminal client for the server inventory backend.\n\n\
        Sign in once with `rackview login`; the session is persisted and\n\
        reused until it expires or you run `rackview logout`.",
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
    /// Backend root URL (overrides the config file)
    #[arg(long, short = 'b', env = "RACKVIEW_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RACKVIEW_OUTPUT",
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
    #[arg(long, short = 'k', env = "RACKVIEW_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, env = "RACKVIEW_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
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
    /// Sign in to the backend and persist the session
    Login(LoginArgs),

    /// Drop the persisted session
    Logout,

    /// Show the signed-in user and role
    Whoami,

    /// Browse and manage the server inventory
    #[command(alias = "srv", alias = "s")]
    Servers(ServersArgs),

    /// View the audit log (admin only)
    Logs,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LOGIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long, short = 'u', env = "RACKVIEW_USERNAME")]
    pub username: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServersArgs {
    #[command(subcommand)]
    pub command: ServersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServersCommand {
    /// List the server inventory
    #[command(alias = "ls")]
    List,

    /// Add a server record (admin only)
    Add(ServerAddArgs),

    /// Delete a server record (admin only)
    #[command(alias = "rm")]
    Delete {
        /// Server id
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct ServerAddArgs {
    /// Hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// Operating system family (e.g., Linux, Windows)
    #[arg(long)]
    pub os_type: Option<String>,

    /// Operating system version
    #[arg(long)]
    pub os_version: Option<String>,

    /// Provisioning type: physical, virtual, or cloud
    #[arg(long)]
    pub server_type: Option<String>,

    /// Private IPv4 address
    #[arg(long)]
    pub private_ip: Option<String>,

    /// Public IPv4 address
    #[arg(long)]
    pub public_ip: Option<String>,

    /// Primary owner
    #[arg(long)]
    pub primary_owner: Option<String>,

    /// Secondary owner
    #[arg(long)]
    pub secondary_owner: Option<String>,

    /// Datacenter identifier
    #[arg(long)]
    pub datacenter: Option<String>,

    /// Deployment environment: production, staging, development, testing
    #[arg(long)]
    pub environment: Option<String>,
}
