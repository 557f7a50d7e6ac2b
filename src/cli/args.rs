//! CLI argument definitions using clap
//!
//! Flags keep the names operators already type:
//! `-type`, `-status`, `-filters`, `-fields`, `-redisAddr`, `-quiet`, `-debug`.
//! Single-dash long flags are rewritten to their double-dash form before
//! clap parses them, so `-type pipeline` and `--type pipeline` are the same.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Lists the longest running executions in a Redis workflow store
#[derive(Parser, Debug, Default)]
#[command(name = "execscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution type: orchestration or pipeline [default: orchestration]
    #[arg(long = "type", value_name = "TYPE")]
    pub execution_type: Option<String>,

    /// The execution status to filter on [default: RUNNING]
    #[arg(long)]
    pub status: Option<String>,

    /// Extra filters in comma-delimited Key=Value format
    #[arg(long)]
    pub filters: Option<String>,

    /// Extra hash fields to display, comma-delimited
    #[arg(long)]
    pub fields: Option<String>,

    /// Redis address, host:port or redis:// URL [default: localhost:6379]
    #[arg(long = "redisAddr", value_name = "ADDR")]
    pub redis_addr: Option<String>,

    /// Redis password
    #[arg(long = "redisPassword", value_name = "PASSWORD")]
    pub redis_password: Option<String>,

    /// Redis database index [default: 0]
    #[arg(long = "redisDb", value_name = "DB")]
    pub redis_db: Option<i64>,

    /// JSON configuration file; flags override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set if you do not want logging enabled
    #[arg(long)]
    pub quiet: bool,

    /// Set if you want debug level logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-name` and `-name=value` to `--name...` for every long flag
/// the CLI knows. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let mut known: Vec<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(str::to_string))
        .collect();
    known.push("help".to_string());
    known.push("version".to_string());

    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if is_single_dash_long(s, &known) => Some(OsString::from(format!("-{}", s))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn is_single_dash_long(arg: &str, known: &[String]) -> bool {
    if !arg.starts_with('-') || arg.starts_with("--") {
        return false;
    }
    let name = arg[1..].split('=').next().unwrap_or_default();
    known.iter().any(|k| k == name)
}
