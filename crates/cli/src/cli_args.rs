//! Command-line arguments of the `argsift` probe.
//!
//! The probe's own flags are handled by `clap`; everything after them is
//! handed untouched to the argsift classifier.

use clap::Parser;

/// Command-line arguments for the `argsift` probe.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argsift_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argsift", "-d", "defs.yml", "--", "-v", "file"]);
/// assert_eq!(args.args, vec!["-v", "file"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the option definitions YAML file.
    ///
    /// If not provided, defaults to `~/.argsift/definitions.yml`.
    #[arg(long, short = 'd')]
    pub definitions: Option<String>,

    /// Program name reported as the first classified argument.
    ///
    /// Defaults to `argsift`.
    #[arg(long, short = 'p')]
    pub program: Option<String>,

    /// Print the option listing of the definitions instead of classifying.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Arguments to classify.
    ///
    /// Put them after `--` so that their flags reach the classifier instead
    /// of this tool.
    ///
    /// # Examples
    /// ```bash
    /// argsift -d defs.yml -- -vo out.txt input.txt
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["argsift"]);

        assert!(args.definitions.is_none());
        assert!(args.program.is_none());
        assert!(!args.list);
        assert!(args.args.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["argsift", "-d", "/custom/defs.yml", "-p", "cc", "-l"]);

        assert_eq!(args.definitions, Some("/custom/defs.yml".to_string()));
        assert_eq!(args.program, Some("cc".to_string()));
        assert!(args.list);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "argsift",
            "--definitions",
            "/custom/defs.yml",
            "--program",
            "cc",
            "--list",
        ]);

        assert_eq!(args.definitions, Some("/custom/defs.yml".to_string()));
        assert_eq!(args.program, Some("cc".to_string()));
        assert!(args.list);
    }

    #[test]
    fn test_args_after_terminator_are_kept_verbatim() {
        let args = Args::parse_from(["argsift", "-d", "defs.yml", "--", "-v", "--", "-p", "x"]);

        assert_eq!(args.definitions, Some("defs.yml".to_string()));
        assert!(args.program.is_none());
        assert_eq!(args.args, vec!["-v", "--", "-p", "x"]);
    }

    #[test]
    fn test_args_trailing_positionals() {
        let args = Args::parse_from(["argsift", "input.txt", "-v"]);
        assert_eq!(args.args, vec!["input.txt", "-v"]);
    }
}
