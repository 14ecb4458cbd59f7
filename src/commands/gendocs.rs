//! `gendocs`: write Markdown documentation for the CLI.
//!
//! One page per visible command, named after its full invocation
//! (`simple-ipam_add.md`), plus `simple-ipam.md` as the index.

use crate::cli::{Cli, GenDocsArgs};
use crate::error::{IpamError, Result};
use clap::CommandFactory;
use std::fs;
use std::path::PathBuf;

fn page_name(cmd: &clap::Command) -> String {
    let bin = cmd.get_bin_name().unwrap_or_else(|| cmd.get_name());
    format!("{}.md", bin.replace(' ', "_"))
}

fn about(cmd: &clap::Command) -> String {
    cmd.get_about().map(|a| a.to_string()).unwrap_or_default()
}

fn render_page(cmd: &clap::Command, parent: Option<&clap::Command>) -> String {
    let title = cmd.get_bin_name().unwrap_or_else(|| cmd.get_name());
    let mut page = format!("## {title}\n\n{}\n\n", about(cmd));

    let help = cmd.clone().render_long_help().to_string();
    page.push_str(&format!("### Usage\n\n```\n{}\n```\n\n", help.trim_end()));

    let visible: Vec<&clap::Command> = cmd.get_subcommands().filter(|c| !c.is_hide_set()).collect();
    if parent.is_some() || !visible.is_empty() {
        page.push_str("### SEE ALSO\n\n");
    }
    if let Some(parent) = parent {
        page.push_str(&format!(
            "* [{}]({})\t - {}\n",
            parent.get_bin_name().unwrap_or_else(|| parent.get_name()),
            page_name(parent),
            about(parent)
        ));
    }
    for sub in visible {
        page.push_str(&format!(
            "* [{}]({})\t - {}\n",
            sub.get_bin_name().unwrap_or_else(|| sub.get_name()),
            page_name(sub),
            about(sub)
        ));
    }
    page
}

/// Render all pages as `(file name, content)` pairs.
pub fn render_pages() -> Vec<(String, String)> {
    let mut root = Cli::command();
    let bin_name = root.get_name().to_string();
    root.set_bin_name(bin_name);
    root.build();

    let mut pages = vec![(page_name(&root), render_page(&root, None))];
    for sub in root.get_subcommands().filter(|c| !c.is_hide_set()) {
        pages.push((page_name(sub), render_page(sub, Some(&root))));
    }
    pages
}

/// Write the pages into `args.dir`, creating it if needed. Returns the files written.
pub fn gendocs(args: &GenDocsArgs) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&args.dir)
        .map_err(|e| IpamError::io(format!("error creating {}", args.dir.display()), e))?;

    let mut written = Vec::new();
    for (name, content) in render_pages() {
        let path = args.dir.join(name);
        fs::write(&path, content)
            .map_err(|e| IpamError::io(format!("error writing {}", path.display()), e))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
