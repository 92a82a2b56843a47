//! Command line arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use counselflow_data::models::NewContract;

/// CounselFlow - legal operations data from the command line
///
/// Reads tenant-scoped records from the hosted backend (or the built-in
/// sample data) and prints them as JSON on stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "counselflow")]
#[command(about = "Query CounselFlow legal operations data")]
pub struct Args {
    /// Serve the built-in sample data instead of the hosted backend
    #[arg(long, default_value = "false")]
    pub demo: bool,

    /// YAML file with backend settings (url, anon_key, ...); environment
    /// variables are used when absent
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pin the tenant instead of asking the backend
    #[arg(long, value_name = "ID")]
    pub tenant: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every row of a resource
    List {
        #[arg(value_enum)]
        resource: ResourceKind,
    },
    /// Print calendar events between two dates (inclusive)
    Calendar {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
    /// Print the dashboard stat cards
    Stats,
    /// Print an aggregate over one resource
    Summary {
        #[arg(value_enum)]
        kind: SummaryKind,
    },
    /// Create a contract in the current tenant
    CreateContract(CreateContractArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Contracts,
    Disputes,
    IpAssets,
    Entities,
    People,
    BoardPacks,
    BoardMeetings,
    Deals,
    KnowledgeEntries,
    TrendingTopics,
    SearchSuggestions,
    KnowledgeInsights,
    Clauses,
    Templates,
    Matters,
    Risks,
    Policies,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Pipeline,
    Ip,
    Knowledge,
    Clauses,
    Templates,
    Risks,
    Matters,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CreateContractArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub contract_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub value: Option<f64>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub entity_id: Option<String>,
    #[arg(long)]
    pub counterparty_id: Option<String>,
}

impl From<CreateContractArgs> for NewContract {
    fn from(args: CreateContractArgs) -> Self {
        NewContract {
            title: args.title,
            contract_type: args.contract_type,
            status: args.status,
            value: args.value,
            currency: args.currency,
            start_date: args.start_date,
            end_date: args.end_date,
            entity_id: args.entity_id,
            counterparty_id: args.counterparty_id,
        }
    }
}
