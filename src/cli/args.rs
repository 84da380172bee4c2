//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Default sources, the record endpoints the original exercise ran against.
pub const DEFAULT_COMPANIES_SOURCE: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/companies";
pub const DEFAULT_TRAVELS_SOURCE: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/travels";

/// Rebuilds a company hierarchy from flat records and rolls up travel costs
#[derive(Parser, Debug)]
#[command(name = "travelcost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch records, build the hierarchy and print the cost report
    Run {
        /// Source for company records (URL or local JSON file)
        #[arg(long, env = "TRAVELCOST_COMPANIES", default_value = DEFAULT_COMPANIES_SOURCE)]
        companies: String,

        /// Source for travel records (URL or local JSON file)
        #[arg(long, env = "TRAVELCOST_TRAVELS", default_value = DEFAULT_TRAVELS_SOURCE)]
        travels: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print elapsed wall time to stderr
        #[arg(long)]
        timing: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// How the rolled-up tree is rendered.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    Json,
    /// ASCII tree with one `name (cost)` line per company
    Tree,
}
