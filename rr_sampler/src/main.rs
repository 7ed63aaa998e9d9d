extern crate rr_regex_parse;
extern crate rand;

mod args;
mod rnd;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::exit;
use rr_confmt::{Capabilities, Col, Fmt, paint};
use rr_regex_parse::{ParseOptions, Pattern};
use tracing_subscriber::EnvFilter;
use args::{Args, CliError, Source};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints the prompt and reads one line, without the line ending. End of
/// input reads as an empty line.
fn prompt(text: &str) -> Result<String, CliError> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn read_source(source: &Source) -> Result<String, CliError> {
    match source {
        Source::File(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|source| CliError::ReadPattern{ path: path.clone(), source })?;
            Ok(text.trim_end_matches(&['\r', '\n'][..]).to_string())
        },
        Source::Inline(text) => Ok(text.clone()),
        Source::Prompt => prompt("Regex> "),
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let source = read_source(&args.source)?;
    let options = ParseOptions::new().case_sensitive(!args.ignore_case);
    let pattern = Pattern::with_options(&source, &options)?;

    let (seed, mut rng) = rnd::make_rng(args.seed);
    tracing::info!(seed, "seeded sample generator");

    let interactive = args.count.is_none() && io::stdin().is_terminal();
    if !interactive {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for _ in 0..args.count.unwrap_or(1) {
            writeln!(out, "{}", pattern.render(&mut rng))?;
        }
        return Ok(());
    }

    loop {
        println!("Sample: {}", pattern.render(&mut rng));
        let answer = prompt("Generate another? (y/n) ")?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => {},
            _ => return Ok(()),
        }
    }
}

fn main() {
    init_logging();
    let caps = Capabilities::detect();

    let result = args::parse_args(std::env::args().skip(1)).and_then(|args| run(&args));
    match result {
        Ok(()) => {},
        Err(CliError::Parse(err)) => {
            eprintln!("{}", err.diagnostic(&caps));
            exit(1);
        },
        Err(err) => {
            eprintln!("{}", paint(&err.to_string(), Fmt::fg(Col::Red).bold(), caps.color));
            exit(1);
        },
    }
}
