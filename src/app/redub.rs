//! Tree walk that rewrites contents and renames entries in place.
//!
//! Within one directory the work happens in three passes over a single
//! listing snapshot:
//!
//! 1. rewrite the contents of every file,
//! 2. rename every file,
//! 3. for each subdirectory, recurse under its original name, then rename it.
//!
//! A path is never rebuilt from a name that may already have changed. The
//! first error stops the walk; nothing done before it is undone.

use crate::app::error::Result;
use crate::app::models::{Config, Event};
use crate::app::scanner::Scanner;
use crate::app::{renamer, rewriter};
use std::path::Path;

/// Runs a full redub of `config.root`, reporting progress through `emit`.
pub fn run<F>(config: &Config, emit: &mut F) -> anyhow::Result<()>
where
    F: FnMut(Event),
{
    let scanner = Scanner::new(&config.ignore)?;
    process(
        &scanner,
        &config.root,
        &config.old_token,
        &config.new_token,
        emit,
    )?;
    Ok(())
}

pub fn process<F>(scanner: &Scanner, path: &Path, old: &str, new: &str, emit: &mut F) -> Result<()>
where
    F: FnMut(Event),
{
    log::debug!("Entering {:?}", path);
    let listing = scanner.list(path)?;

    for name in &listing.skipped {
        emit(Event::Skipped {
            name: name.to_string_lossy().into_owned(),
        });
    }

    for file in &listing.files {
        let file_path = path.join(&file.name);
        log::debug!("Inspecting {:?}", file_path);
        let lines = rewriter::rewrite(&file_path, old, new)?;
        if lines > 0 {
            emit(Event::ContentRewritten {
                path: file_path,
                lines,
            });
        }
    }

    for file in &listing.files {
        renamer::rename(path, file, old, new, emit)?;
    }

    for dir in &listing.dirs {
        process(scanner, &path.join(&dir.name), old, new, emit)?;
        renamer::rename(path, dir, old, new, emit)?;
    }

    Ok(())
}
