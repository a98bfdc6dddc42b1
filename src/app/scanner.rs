use crate::app::error::{RedubError, Result};
use crate::app::models::{Entry, Listing};
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;

/// Lists one directory at a time and decides which children take part in the run.
pub struct Scanner {
    ignore_set: GlobSet,
}

impl Scanner {
    pub fn new(ignore: &[String]) -> anyhow::Result<Self> {
        Ok(Self {
            ignore_set: build_globset(ignore)?,
        })
    }

    /// Reads the immediate children of `path`.
    ///
    /// Only directories are filtered: a hidden directory or one whose name
    /// matches an ignore pattern lands in `skipped`. Files always pass, hidden
    /// or not. Order is whatever the filesystem returns.
    pub fn list(&self, path: &Path) -> Result<Listing> {
        let unavailable = |source: std::io::Error| RedubError::PathUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let mut listing = Listing::default();

        for result in fs::read_dir(path).map_err(unavailable)? {
            let dir_entry = result.map_err(unavailable)?;
            let is_dir = dir_entry.file_type().map_err(unavailable)?.is_dir();
            let entry = Entry {
                name: dir_entry.file_name(),
                is_dir,
            };

            if !is_dir {
                listing.files.push(entry);
            } else if self.is_excluded(&entry) {
                log::debug!("Excluding directory {:?}", path.join(&entry.name));
                listing.skipped.push(entry.name);
            } else {
                listing.dirs.push(entry);
            }
        }

        Ok(listing)
    }

    fn is_excluded(&self, entry: &Entry) -> bool {
        let hidden = entry.name.as_encoded_bytes().first() == Some(&b'.');

        hidden || self.ignore_set.is_match(Path::new(&entry.name))
    }
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid ignore pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
