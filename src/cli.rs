use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hcdoc",
    version,
    about = "Structural and content linter for HC documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more HC documents (directories expand to their .html files)
    Validate(ValidateArgs),
    /// Print the format constants the validator enforces
    Rules(RulesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// Only print reports for documents that did not pass cleanly
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
