//! Command-line adapter over the IAM metadata query engine.
//!
//! This binary collects validated option values, opens the metadata
//! store for the duration of one invocation, hands the filter set to
//! the core resolver, and serializes the result. No query logic lives
//! here.

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use iam_metadata_query_core::{
    resolve_action_query, resolve_arn_query, resolve_condition_query, ActionQueryFilters,
    ArnQueryFilters, ConditionQueryFilters, Datastore, QueryOutput,
};
use render::OutputFormat;
use std::path::PathBuf;

const ACCESS_LEVEL_LABELS: [&str; 5] =
    ["read", "write", "list", "tagging", "permissions-management"];

#[derive(Parser)]
#[command(
    name = "iam-metadata-query",
    version,
    about = "Query IAM permission metadata: actions, resource ARN formats, and condition keys"
)]
struct Cli {
    /// Logging verbosity for this invocation.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Path to an alternate metadata dataset file. Defaults to the
    /// dataset embedded in the binary.
    #[arg(long, global = true, value_name = "FILE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the IAM metadata tables.
    #[command(subcommand)]
    Query(QueryCommand),
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Query the action table by access level, condition key, or
    /// wildcard-only support.
    ActionTable {
        /// AWS service prefix, or "all" for every service.
        #[arg(long)]
        service: String,
        /// Action name, e.g. "ListUsers" for iam:ListUsers.
        #[arg(long)]
        name: Option<String>,
        /// CRUD-style access level.
        #[arg(long = "access-level", value_parser = ACCESS_LEVEL_LABELS)]
        access_level: Option<String>,
        /// Condition key; lists the actions that support it.
        #[arg(long)]
        condition: Option<String>,
        /// Only actions that cannot be scoped to a resource ARN.
        #[arg(long = "wildcard-only")]
        wildcard_only: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        fmt: OutputFormat,
    },
    /// Query the ARN table for raw ARN templates or ARN type names.
    ArnTable {
        /// AWS service prefix.
        #[arg(long)]
        service: String,
        /// ARN type short name, e.g. "bucket" under s3.
        #[arg(long)]
        name: Option<String>,
        /// List (short name, raw ARN) pairs instead of raw ARNs only.
        #[arg(long = "list-arn-types")]
        list_arn_types: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        fmt: OutputFormat,
    },
    /// Query the condition key table.
    ConditionTable {
        /// AWS service prefix.
        #[arg(long)]
        service: String,
        /// Condition key name; omit to list every key for the service.
        #[arg(long)]
        name: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        fmt: OutputFormat,
    },
}

/// Logging verbosity, passed in explicitly rather than read from the
/// environment.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level.filter())
        .init();

    // The store is opened once per invocation and dropped on return,
    // including early error returns.
    let store = match &cli.database {
        Some(path) => Datastore::connect_path(path)?,
        None => Datastore::connect()?,
    };

    let Command::Query(query) = cli.command;
    let (output, fmt) = run_query(&store, query)?;
    print!("{}", render::render(&output, fmt)?);
    Ok(())
}

fn run_query(store: &Datastore, command: QueryCommand) -> Result<(QueryOutput, OutputFormat)> {
    match command {
        QueryCommand::ActionTable {
            service,
            name,
            access_level,
            condition,
            wildcard_only,
            fmt,
        } => {
            let filters = ActionQueryFilters {
                service,
                name,
                access_level,
                condition,
                wildcard_only,
            };
            Ok((resolve_action_query(store, &filters)?, fmt))
        }
        QueryCommand::ArnTable {
            service,
            name,
            list_arn_types,
            fmt,
        } => {
            let filters = ArnQueryFilters {
                service,
                name,
                list_arn_types,
            };
            Ok((resolve_arn_query(store, &filters)?, fmt))
        }
        QueryCommand::ConditionTable { service, name, fmt } => {
            let filters = ConditionQueryFilters { service, name };
            Ok((resolve_condition_query(store, &filters)?, fmt))
        }
    }
}
