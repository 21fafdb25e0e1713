//! Path defaults for definition files.
//!
//! Shell expansions like `~` are resolved with `shellexpand`.

/// Default path for the option definitions file
const DEFAULT_DEFINITIONS_PATH: &str = "~/.argsift/definitions.yml";

/// Program name used when none is given.
pub const DEFAULT_PROGRAM_NAME: &str = "argsift";

/// Resolves the definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definitions path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argsift_core::config::get_definitions_path;
///
/// let default_path = get_definitions_path(None);
/// assert!(default_path.ends_with("definitions.yml"));
///
/// let custom_path = get_definitions_path(Some("/path/to/defs.yml"));
/// assert_eq!(custom_path, "/path/to/defs.yml");
/// ```
#[must_use]
pub fn get_definitions_path(definitions_path_arg: Option<&str>) -> String {
    let definitions_path = definitions_path_arg.unwrap_or(DEFAULT_DEFINITIONS_PATH);

    shellexpand::tilde(definitions_path).to_string()
}
