//! `tourmarket-rbac` — inspect the marketplace access-control table.
//!
//! Every command prints JSON to stdout; logs go to stderr.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter (default `info`)
//! - `TOURMARKET_LOG_FORMAT`: `json` (default) or `pretty`

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tourmarket_auth::Permission;

#[derive(Parser, Debug)]
#[command(name = "tourmarket-rbac")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every role with its permissions
    Roles,

    /// List every permission with the roles granting it
    Permissions,

    /// Explain whether a role holds a permission
    Check {
        /// Role tag as stored in user metadata; unknown tags are treated as no role
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        permission: Permission,
    },

    /// Show the admin sidebar a role would see
    Sidebar {
        #[arg(long)]
        role: Option<String>,

        /// Pending tour approvals shown as a badge
        #[arg(long, default_value_t = 0)]
        pending: u32,
    },

    /// Evaluate the route guard for a path
    Guard {
        #[arg(long)]
        path: String,

        /// Signed-in role tag; omit for an anonymous visitor
        #[arg(long)]
        role: Option<String>,

        /// Simulate the session-restore window
        #[arg(long, conflicts_with = "role")]
        loading: bool,
    },

    /// Check the role table for drift between hand-maintained rows
    Lint,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tourmarket_observability::init_from_env(|config| {
        if args.debug {
            config.with_filter("debug")
        } else {
            config
        }
    });

    let output = commands::run(&args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
