//! Joins positional arguments with a separator.
//!
//! This is the library half of the `joinargs` binary. Its own command line is
//! classified by argsift-core rather than clap.

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use argsift_core::error::{Error, Result};
use argsift_core::{OptionDefinition, ParseResult, Parser};
use itertools::Itertools;
use log::{debug, info, LevelFilter};

/// Separator used when `--sep` is not given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// The options `joinargs` understands.
#[must_use]
pub fn parser() -> Parser {
    Parser::new(vec![
        OptionDefinition::new("help", ["-h", "--help"], "displays help information", 0),
        OptionDefinition::new("verbose", ["-v", "--verbose"], "increases verbosity", 0),
        OptionDefinition::new("sep", ["-s", "--sep"], "separator (default ',')", 1),
        OptionDefinition::new(
            "output",
            ["-o", "--output"],
            "output filename (stdout if not specified)",
            1,
        ),
    ])
}

/// Usage text shown above the option listing.
#[must_use]
pub fn usage(program: &str) -> String {
    format!(
        "Joins all positional arguments together with a separator\n\nUsage: {program} [options] ARG [ARG...]\n\n"
    )
}

/// What a `joinargs` invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub help: bool,
    /// How many times `-v` was given.
    pub verbosity: usize,
    pub separator: String,
    pub output: Option<String>,
    pub arguments: Vec<String>,
}

impl JoinRequest {
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] if `result` was not produced by
    /// [`parser`].
    pub fn from_result(result: &ParseResult) -> Result<Self> {
        let output = result.get("output")?;
        Ok(Self {
            help: result.has_option("help"),
            verbosity: result.get("verbose")?.count(),
            separator: result
                .get("sep")?
                .as_value_or(DEFAULT_SEPARATOR.to_string())?,
            output: if output.occurred() {
                Some(output.as_value()?)
            } else {
                None
            },
            arguments: result.positionals.clone(),
        })
    }
}

/// Maps the number of `-v` flags to a log level.
#[must_use]
pub fn verbosity_filter(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[must_use]
pub fn join(arguments: &[String], separator: &str) -> String {
    arguments.iter().join(separator)
}

/// Writes the joined arguments and a newline to the requested output: the
/// named file, or `stdout` when none was given.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_joined<W: Write>(request: &JoinRequest, stdout: W) -> Result<()> {
    let joined = join(&request.arguments, &request.separator);

    match &request.output {
        Some(path) => {
            info!("outputting to file at '{path}'");
            File::create(path)
                .and_then(|file| write_line(file, &joined))
                .map_err(|e| Error::io_error("output".to_string(), path.clone(), e))
        }
        None => {
            info!("outputting to stdout");
            Ok(write_line(stdout, &joined)?)
        }
    }
}

fn write_line<W: Write>(mut writer: W, line: &str) -> std::io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}

/// How a `joinargs` invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Joined,
    ShowedHelp,
    NotEnoughArguments,
    InvalidArguments,
}

impl Outcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Joined | Self::ShowedHelp)
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs `joinargs` on `argv`, whose first item is the program name.
///
/// Usage and help go to `stderr`: after `--help`, when there is nothing to
/// join, and together with the error when `argv` cannot be classified. The
/// joined line goes to `stdout` unless `--output` names a file.
///
/// # Errors
///
/// Returns an error if writing to `stderr` or to the output fails.
pub fn run<O, E>(argv: &[String], stdout: O, mut stderr: E) -> Result<Outcome>
where
    O: Write,
    E: Write,
{
    let parser = parser();
    let program = argv.first().map_or("joinargs", String::as_str);
    let usage = usage(program);

    let request = match parser
        .parse(argv)
        .and_then(|result| JoinRequest::from_result(&result))
    {
        Ok(request) => request,
        Err(e) => {
            writeln!(
                stderr,
                "{usage}{parser}\nEncountered error while parsing arguments: {e}"
            )?;
            return Ok(Outcome::InvalidArguments);
        }
    };

    if request.help {
        write!(stderr, "{usage}{parser}")?;
        return Ok(Outcome::ShowedHelp);
    }

    // Only the first run in a process can install the logger.
    if env_logger::Builder::from_default_env()
        .filter_level(verbosity_filter(request.verbosity))
        .try_init()
        .is_err()
    {
        debug!("logger already installed");
    }

    info!("verbose log level: {}", request.verbosity);
    info!("set separator to '{}'", request.separator);

    if request.arguments.is_empty() {
        writeln!(stderr, "{usage}{parser}\nNot enough arguments")?;
        return Ok(Outcome::NotEnoughArguments);
    }

    debug!("joining {} arguments", request.arguments.len());

    write_joined(&request, stdout)?;
    Ok(Outcome::Joined)
}
