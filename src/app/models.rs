use std::ffi::OsString;
use std::path::PathBuf;

/// Represents the final configuration after merging settings, CLI args and prompts.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub old_token: String,
    pub new_token: String,
    /// Directory names (glob patterns) that are never entered.
    pub ignore: Vec<String>,
}

/// A single child of a directory, captured at listing time.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

/// One directory listing, already split by the exclusion rule.
#[derive(Debug, Default)]
pub struct Listing {
    pub files: Vec<Entry>,
    pub dirs: Vec<Entry>,
    pub skipped: Vec<OsString>,
}

/// Progress notifications emitted while a run walks the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Skipped {
        name: String,
    },
    ContentRewritten {
        path: PathBuf,
        lines: usize,
    },
    Renamed {
        from: PathBuf,
        to: PathBuf,
        is_dir: bool,
    },
}
