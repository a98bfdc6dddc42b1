use crate::app::models::Event;
use owo_colors::OwoColorize;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BANNER: &str = r"
██████╗ ███████╗██████╗ ██╗   ██╗██████╗ ██╗
██╔══██╗██╔════╝██╔══██╗██║   ██║██╔══██╗██║
██████╔╝█████╗  ██║  ██║██║   ██║██████╔╝██║
██╔══██╗██╔══╝  ██║  ██║██║   ██║██╔══██╗╚═╝
██║  ██║███████╗██████╔╝╚██████╔╝██████╔╝██╗
╚═╝  ╚═╝╚══════╝╚═════╝  ╚═════╝ ╚═════╝ ╚═╝

A simple tool for renaming projects in a hurry, because who has time for
tedious manual renaming? Not you, that's who.";

pub const WARNING: &str = "
Redub operates with all the subtlety of a bull in a china shop and the precision of a blindfolded dart thrower. Use at your own risk. You have been warned.
";

/// Turns run events and outcomes into terminal lines.
pub struct OutputGenerator {
    root: PathBuf,
}

impl OutputGenerator {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn banner() -> String {
        format!("{}\n{}", BANNER.blue().bold(), WARNING.yellow().bold())
    }

    pub fn prompt(message: &str) -> String {
        format!("{}: ", message.blue().bold())
    }

    /// Plain text for one event, paths relative to the run root when possible.
    pub fn describe(&self, event: &Event) -> String {
        match event {
            Event::Skipped { name } => format!("Skipping {}", name),
            Event::ContentRewritten { path, lines } => {
                format!("Redubbed {} occurrences in {}", lines, self.display(path))
            }
            Event::Renamed { from, to, is_dir } => {
                let kind = if *is_dir { "directory" } else { "file" };
                format!(
                    "Redubbed {} from {} to {}",
                    kind,
                    self.display(from),
                    self.display(to)
                )
            }
        }
    }

    pub fn render(&self, event: &Event) -> String {
        self.describe(event).dimmed().to_string()
    }

    pub fn completed(elapsed: Duration) -> String {
        format!("Redub completed in {:?}.", elapsed)
            .green()
            .bold()
            .to_string()
    }

    pub fn failed(err: &anyhow::Error) -> String {
        format!("{:#}", err).red().bold().to_string()
    }

    fn display(&self, path: &Path) -> String {
        diff_paths(path, &self.root)
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_events_relative_to_root() {
        let out = OutputGenerator::new(Path::new("/work/proj"));

        assert_eq!(
            out.describe(&Event::ContentRewritten {
                path: PathBuf::from("/work/proj/src/old.rs"),
                lines: 3,
            }),
            "Redubbed 3 occurrences in src/old.rs"
        );
        assert_eq!(
            out.describe(&Event::Renamed {
                from: PathBuf::from("/work/proj/old"),
                to: PathBuf::from("/work/proj/new"),
                is_dir: true,
            }),
            "Redubbed directory from old to new"
        );
        assert_eq!(
            out.describe(&Event::Skipped {
                name: ".git".to_string()
            }),
            "Skipping .git"
        );
    }

    #[test]
    fn file_renames_say_file() {
        let out = OutputGenerator::new(Path::new("/p"));
        let line = out.describe(&Event::Renamed {
            from: PathBuf::from("/p/a_old"),
            to: PathBuf::from("/p/a_new"),
            is_dir: false,
        });

        assert_eq!(line, "Redubbed file from a_old to a_new");
    }
}
