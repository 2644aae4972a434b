use std::path::PathBuf;

use super::error::AppError;

pub const USAGE: &str = "Usage: ingest [--verbose] users <file.csv> | ingest [--verbose] media <dir> [--selected]";

/// What the command line asked to plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Users { path: PathBuf },
    Media { dir: PathBuf, selected: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub verbose: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut verbose = false;
        let mut selected = false;
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "--selected" => selected = true,
                flag if flag.starts_with('-') => {
                    return Err(AppError::InvalidArguments(format!("unknown flag {flag}")));
                }
                _ => positional.push(arg),
            }
        }

        let command = match positional.as_slice() {
            [kind, path] if kind == "users" && !selected => Command::Users {
                path: PathBuf::from(path),
            },
            [kind, dir] if kind == "media" => Command::Media {
                dir: PathBuf::from(dir),
                selected,
            },
            _ => return Err(AppError::InvalidArguments(USAGE.to_string())),
        };

        Ok(Self { command, verbose })
    }
}
