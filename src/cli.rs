//! Command-line definitions.

use crate::config::{DEFAULT_DOCS_DIR, FILE_ENV};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Simple CLI IPAM Tool
#[derive(Parser, Debug)]
#[command(name = "simple-ipam", version, disable_help_subcommand = true)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Initialize an empty IPAM file
    Init(InitArgs),
    /// Add a subnet to an IPAM file
    Add(AddArgs),
    /// Delete a subnet from an IPAM file
    Delete(DeleteArgs),
    /// Print the subnet hierarchy of an IPAM file
    Show(ShowArgs),
    /// Generate Markdown documentation for every command
    #[command(hide = true)]
    Gendocs(GenDocsArgs),
}

impl Command {
    /// Subcommand name, for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init(_) => "init",
            Command::Add(_) => "add",
            Command::Delete(_) => "delete",
            Command::Show(_) => "show",
            Command::Gendocs(_) => "gendocs",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Root IPAM file to create (".yaml" is appended)
    #[arg(short, long)]
    pub file: String,

    /// Root IPAM file description
    #[arg(short, long)]
    pub description: String,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Subnet to add, in canonical CIDR notation
    #[arg(short, long)]
    pub subnet: String,

    /// IPAM file
    #[arg(short, long, env = FILE_ENV)]
    pub file: PathBuf,

    /// Description of the subnet
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Tags to add to the subnet (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Subnet to delete
    #[arg(short, long)]
    pub subnet: String,

    /// IPAM file
    #[arg(short, long, env = FILE_ENV)]
    pub file: PathBuf,

    /// Delete a CIDR and all subnets under it
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// IPAM file
    #[arg(short, long, env = FILE_ENV)]
    pub file: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenDocsArgs {
    /// Output directory
    #[arg(long, default_value = DEFAULT_DOCS_DIR)]
    pub dir: PathBuf,
}
