//! The `argsift` probe: classify an argument list against a definition file
//! and print what the classifier made of it.

use std::io::Write;

use argsift_core::config::{get_definitions_path, DEFAULT_PROGRAM_NAME};
use argsift_core::error::Result;
use argsift_core::file_handling::{load_definitions, write_result};
use argsift_core::Parser;
use log::{debug, info};

use crate::cli_args::Args;

/// Runs the probe, writing either the option listing or the YAML parse
/// result to `out`.
///
/// # Errors
///
/// Returns an error if the definitions cannot be loaded or are invalid, if
/// the arguments cannot be classified, or if writing fails.
pub fn run<W: Write>(args: &Args, mut out: W) -> Result<()> {
    let definitions_path = get_definitions_path(args.definitions.as_deref());
    debug!("Definitions path: `{}`", definitions_path);

    let parser = Parser::new(load_definitions(&definitions_path)?).compile()?;

    if args.list {
        write!(out, "{parser}")?;
        return Ok(());
    }

    let program = args.program.as_deref().unwrap_or(DEFAULT_PROGRAM_NAME);
    let argv = std::iter::once(program).chain(args.args.iter().map(String::as_str));
    let result = parser.parse(argv)?;

    info!(
        "Classified {} arguments into {} positionals",
        args.args.len(),
        result.count()
    );

    write_result(out, &result)
}
