//! Command handlers, one per subcommand.
//!
//! Each handler validates its input first, loads the file, mutates the tree
//! in memory and saves only after the mutation succeeded.

pub mod add;
pub mod delete;
pub mod gendocs;
pub mod init;
pub mod show;

use crate::cli::Command;
use crate::error::Result;

/// Run a parsed subcommand.
pub fn run(command: &Command) -> Result<()> {
    log::debug!("run({})", command.name());
    match command {
        Command::Init(args) => init::init(args).map(|_| ()),
        Command::Add(args) => add::add(args),
        Command::Delete(args) => delete::delete(args).map(|_| ()),
        Command::Show(args) => show::show(args),
        Command::Gendocs(args) => gendocs::gendocs(args).map(|_| ()),
    }
}
