use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pipeboard",
    version,
    about = "Searchable, filterable reports over verification pipeline summaries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the filtered summary table to the terminal
    Show(ShowArgs),
    /// Write the filtered summary as a standalone dashboard page
    Html(HtmlArgs),
    /// Write the filtered summary as CSV
    Csv(CsvArgs),
    Version,
}

#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Path to the summary.json document
    #[arg(long, default_value = "results/summary.json")]
    pub summary: PathBuf,

    /// Fetch the summary over HTTP instead of reading --summary
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Case-insensitive substring match on the design name
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// Restrict the status filter to one pipeline step
    /// (vhd2vl|yosys_prep|sby|v2c|esbmc)
    #[arg(long, default_value = "")]
    pub step: String,

    /// Keep records matching this derived status (OK|SKIP|FAIL)
    #[arg(long, default_value = "")]
    pub status: String,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Exit non-zero if any displayed record has a failing step
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Clone)]
pub struct HtmlArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(long, default_value = "dashboard.html")]
    pub out: PathBuf,

    /// Page title
    #[arg(long, default_value = "Verification pipeline summary")]
    pub title: String,

    /// Path segment after which stored artifact paths become browser-relative
    #[arg(long, default_value = "task04/")]
    pub link_marker: String,

    /// Relative prefix substituted for the stripped part of artifact paths
    #[arg(long, default_value = "../")]
    pub link_prefix: String,
}

#[derive(Args, Clone)]
pub struct CsvArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(long, default_value = "summary.csv")]
    pub out: PathBuf,
}
