//! Reading definition sets from YAML and writing parse results as YAML.

use std::fs::File;
use std::io::Write;

use log::debug;

use crate::definition::OptionDefinition;
use crate::error::{Error, Result};
use crate::result::ParseResult;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads option definitions from a YAML file.
///
/// The file holds a list of definitions:
///
/// ```yaml
/// - name: verbose
///   flags: ["-v", "--verbose"]
///   help: be verbose
/// - name: output
///   flags: ["-o", "--output"]
///   arity: 1
/// ```
///
/// Flags are not validated here; that happens when the definitions are parsed
/// against or compiled.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or doesn't match the expected structure
/// - The file holds no definitions
pub fn load_definitions(path: &str) -> Result<Vec<OptionDefinition>> {
    let reader = get_reader("definitions", path)?;

    let definitions: Vec<OptionDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "definitions".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if definitions.is_empty() {
        return Err(Error::EmptyDefinitionFile {
            path: path.to_string(),
        });
    }

    debug!("Loaded {} definitions from `{}`", definitions.len(), path);

    Ok(definitions)
}

/// Writes a parse result as YAML.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_result<W: Write>(writer: W, result: &ParseResult) -> Result<()> {
    serde_yaml::to_writer(writer, result).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "parse result".to_string(),
            "<output>".to_string(),
            e,
        )
    })
}
