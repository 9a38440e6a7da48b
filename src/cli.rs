use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "woomadoc",
    version,
    about = "Inventory report extraction and Wooma import tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Inventory(InventoryArgs),
    Parse(ParseArgs),
    Sections(SectionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {
    #[arg(long, default_value = ".cache/woomadoc")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Plain-text extraction of the inspection report.
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub user_id: String,

    #[arg(long)]
    pub property_id: String,

    #[arg(long)]
    pub report_type_id: String,

    /// Destination for the Wooma import document. Defaults to the input
    /// path with a `.wooma.json` extension.
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = ".cache/woomadoc")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub parse_manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SectionsArgs {
    #[arg(long)]
    pub input: PathBuf,
}
