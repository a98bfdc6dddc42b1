use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename a project in a hurry: replace a name in file contents, file names and directory names"
)]
pub struct Cli {
    /// Path to the project (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Current project name (prompted for when omitted)
    pub old: Option<String>,

    /// New project name (prompted for when omitted)
    pub new: Option<String>,

    /// Confirmation, must be "yes" to proceed (prompted for when omitted)
    pub confirm: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Directory name or glob never to enter, in addition to the configured ones (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Log every directory and file visited
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
