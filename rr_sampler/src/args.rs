/**
 * Command line handling.
 */

use std::path::PathBuf;
use rr_regex_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing value after {0}")]
    MissingValue(&'static str),

    #[error("Invalid number '{value}' for {flag}")]
    InvalidNumber{ flag: &'static str, value: String },

    #[error("Could not read pattern file {}: {source}", .path.display())]
    ReadPattern{ path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Where the pattern comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Inline(String),
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub source: Source,
    pub ignore_case: bool,
    pub seed: Option<u64>,
    pub count: Option<usize>,
}

fn number<T>(flag: &'static str, value: Option<String>) -> Result<T, CliError> where T : std::str::FromStr {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value.parse().map_err(|_| CliError::InvalidNumber{ flag, value })
}

/// Flags come first. The first argument that is not a flag starts the
/// pattern, and everything from there on is joined by spaces. After `--file`
/// the rest is the path of the pattern file.
pub fn parse_args<I>(args: I) -> Result<Args, CliError> where I : IntoIterator<Item = String> {
    let mut result = Args{ source: Source::Prompt, ignore_case: false, seed: None, count: None };
    let mut rest = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-i" | "--ignore-case" => result.ignore_case = true,
            "--seed" => result.seed = Some(number("--seed", args.next())?),
            "--count" => result.count = Some(number("--count", args.next())?),
            "--file" => {
                let path: Vec<String> = args.by_ref().collect();
                if path.is_empty() {
                    return Err(CliError::MissingValue("--file"));
                }
                result.source = Source::File(PathBuf::from(path.join(" ")));
                return Ok(result);
            },
            "--" => {
                rest.extend(args.by_ref());
                break;
            },
            _ => {
                rest.push(arg);
                rest.extend(args.by_ref());
                break;
            },
        }
    }

    if !rest.is_empty() {
        result.source = Source::Inline(rest.join(" "));
    }
    Ok(result)
}

// Tests ///////////////////////////////////////////////////////////////////////
