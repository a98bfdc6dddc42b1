use crate::app::cli::Cli;
use crate::app::formatter::OutputGenerator;
use crate::app::models::Config;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_IGNORE: &[&str] = &["node_modules"];

/// Contents of `~/.config/redub/config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Replaces the default ignore list when present.
    pub ignore: Option<Vec<String>>,
    #[serde(default)]
    pub assume_yes: bool,
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("redub").join("config.toml"))
}

pub fn load_settings() -> Result<Settings> {
    let Some(config_path) = settings_path() else {
        return Ok(Settings::default());
    };

    if !config_path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_settings(&content).context(format!("Failed to parse {:?}", config_path))
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Settings list first, then CLI additions, without duplicates.
fn merge_ignore(settings: Option<Vec<String>>, cli: Vec<String>) -> Vec<String> {
    let mut combined =
        settings.unwrap_or_else(|| DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect());
    combined.extend(cli);
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Fills the gaps left by the command line from `input`, validates, and asks for confirmation.
pub fn resolve_config<R, W>(
    cli: Cli,
    settings: Settings,
    input: &mut R,
    output: &mut W,
) -> Result<Config>
where
    R: BufRead,
    W: Write,
{
    let root = match cli.path {
        Some(path) => path,
        None => PathBuf::from(prompt(input, output, "Enter the path to the project")?),
    };
    validate_root(&root)?;

    let old_token = match cli.old {
        Some(old) => old,
        None => prompt(input, output, "Enter the current project name")?,
    };
    if old_token.is_empty() {
        bail!("The current project name must not be empty.");
    }

    let new_token = match cli.new {
        Some(new) => new,
        None => prompt(input, output, "Enter the new project name")?,
    };
    if new_token == old_token {
        bail!("Nothing to do: the new name is the same as the current one.");
    }

    let confirmed = if cli.yes || settings.assume_yes {
        true
    } else {
        let answer = match cli.confirm {
            Some(answer) => answer,
            None => prompt(input, output, "Are you sure you want to proceed? (yes/no)")?,
        };
        answer == "yes"
    };
    if !confirmed {
        bail!("Operation cancelled.");
    }

    Ok(Config {
        root,
        old_token,
        new_token,
        ignore: merge_ignore(settings.ignore, cli.ignore),
    })
}

fn validate_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root)
        .map_err(|_| anyhow::anyhow!("Path {} does not exist.", root.display()))?;
    if !meta.is_dir() {
        bail!("Path {} is not a directory.", root.display());
    }
    Ok(())
}

fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", OutputGenerator::prompt(message))?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("redub").chain(args.iter().copied()))
    }

    fn resolve(cli: Cli, settings: Settings, input: &str) -> Result<Config> {
        let mut output = Vec::new();
        resolve_config(cli, settings, &mut Cursor::new(input), &mut output)
    }

    #[test]
    fn positional_arguments_need_no_prompting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap();

        let config = resolve(cli(&[path, "old", "new", "yes"]), Settings::default(), "").unwrap();

        assert_eq!(config.root, tmp.path());
        assert_eq!(config.old_token, "old");
        assert_eq!(config.new_token, "new");
        assert_eq!(config.ignore, vec!["node_modules"]);
    }

    #[test]
    fn missing_values_are_prompted_for() {
        let tmp = TempDir::new().unwrap();
        let input = format!("{}\nacme\nzenith\nyes\n", tmp.path().display());

        let config = resolve(cli(&[]), Settings::default(), &input).unwrap();

        assert_eq!(config.root, tmp.path());
        assert_eq!(config.old_token, "acme");
        assert_eq!(config.new_token, "zenith");
    }

    #[test]
    fn anything_but_yes_cancels() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap();

        let err = resolve(cli(&[path, "old", "new", "y"]), Settings::default(), "").unwrap_err();

        assert_eq!(err.to_string(), "Operation cancelled.");
    }

    #[test]
    fn yes_flag_skips_confirmation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap();

        assert!(resolve(cli(&["-y", path, "old", "new"]), Settings::default(), "").is_ok());
    }

    #[test]
    fn missing_path_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let err = resolve(
            cli(&[missing.to_str().unwrap(), "old", "new", "yes"]),
            Settings::default(),
            "",
        )
        .unwrap_err();

        assert!(err.to_string().ends_with("does not exist."));
    }

    #[test]
    fn file_as_root_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "").unwrap();

        let err = resolve(
            cli(&[file.to_str().unwrap(), "old", "new", "yes"]),
            Settings::default(),
            "",
        )
        .unwrap_err();

        assert!(err.to_string().ends_with("is not a directory."));
    }

    #[test]
    fn empty_old_name_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let input = format!("{}\n\n", tmp.path().display());

        let err = resolve(cli(&[]), Settings::default(), &input).unwrap_err();

        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn identical_names_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap();

        assert!(resolve(cli(&[path, "same", "same", "yes"]), Settings::default(), "").is_err());
    }

    #[test]
    fn settings_replace_default_ignore_and_cli_appends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let settings =
            parse_settings("ignore = [\"target\", \"vendor\"]\nassume_yes = true\n").unwrap();

        let config = resolve(
            cli(&["--ignore", "dist", "--ignore", "target", path, "old", "new"]),
            settings,
            "",
        )
        .unwrap();

        assert_eq!(config.ignore, vec!["target", "vendor", "dist"]);
    }

    #[test]
    fn unknown_settings_keys_fail_to_parse() {
        assert!(parse_settings("ignored = []").is_err());
    }
}
