//! The argument classifier.
//!
//! [`Parser`] owns a caller-editable list of definitions and re-indexes it on
//! every [`Parser::parse`]. [`Parser::compile`] snapshots the definitions into
//! a [`CompiledParser`] that indexes once and can then classify any number of
//! argument lists.

use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::definition::OptionDefinition;
use crate::error::Error::{
    NonAlphanumericFlag, OptionLacksArgument, UnexpectedArgument, UnexpectedOption,
};
use crate::error::Result;
use crate::flags::{cmd_line_arg_is_option_flag, flag_form, FlagForm};
use crate::index::FlagIndex;
use crate::result::{OptionOccurrence, OptionOccurrences, ParseResult};

/// The token that makes every following token positional.
const END_OF_FLAGS: &str = "--";

/// A list of option definitions used to classify command line arguments.
///
/// ```
/// use argsift_core::{OptionDefinition, Parser};
///
/// let parser = Parser::new(vec![
///     OptionDefinition::new("verbose", ["-v", "--verbose"], "be verbose", 0),
///     OptionDefinition::new("output", ["-o", "--output"], "output filename", 1),
/// ]);
///
/// let result = parser.parse(["prog", "-vofile.txt", "input"])?;
/// assert!(result.has_option("verbose"));
/// assert_eq!(result.get("output")?.as_value::<String>()?, "file.txt");
/// assert_eq!(result.positionals, vec!["input"]);
/// # Ok::<(), argsift_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    pub definitions: Vec<OptionDefinition>,
}

impl Parser {
    #[must_use]
    pub fn new(definitions: Vec<OptionDefinition>) -> Self {
        Self { definitions }
    }

    /// Validates the current definitions and indexes them into an immutable
    /// parser. Later edits to `self.definitions` do not affect it.
    ///
    /// # Errors
    ///
    /// Returns the indexing errors described on [`FlagIndex::build`].
    pub fn compile(&self) -> Result<CompiledParser> {
        CompiledParser::new(self.definitions.clone())
    }

    /// Classifies `args`, where the first item is the program name.
    ///
    /// The definitions are validated and indexed on every call.
    ///
    /// # Errors
    ///
    /// Returns the first definition or classification error encountered.
    pub fn parse<I, S>(&self, args: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = FlagIndex::build(&self.definitions)?;
        scan(&self.definitions, &index, args)
    }
}

impl Display for Parser {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write_help(formatter, &self.definitions)
    }
}

/// A validated, indexed snapshot of a definition set.
#[derive(Debug, Clone)]
pub struct CompiledParser {
    definitions: Vec<OptionDefinition>,
    index: FlagIndex,
}

impl CompiledParser {
    /// # Errors
    ///
    /// Returns the indexing errors described on [`FlagIndex::build`].
    pub fn new(definitions: Vec<OptionDefinition>) -> Result<Self> {
        let index = FlagIndex::build(&definitions)?;
        Ok(Self { definitions, index })
    }

    #[must_use]
    pub fn definitions(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    /// Classifies `args`, where the first item is the program name.
    ///
    /// # Errors
    ///
    /// Returns the first classification error encountered.
    pub fn parse<I, S>(&self, args: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scan(&self.definitions, &self.index, args)
    }
}

impl Display for CompiledParser {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write_help(formatter, &self.definitions)
    }
}

fn write_help(formatter: &mut Formatter<'_>, definitions: &[OptionDefinition]) -> std::fmt::Result {
    for definition in definitions {
        write!(formatter, "{definition}")?;
    }
    Ok(())
}

/// Whether the scanner owes tokens to an option instance.
#[derive(Debug)]
enum ScanState {
    Idle,
    Awaiting {
        option: usize,
        occurrence: usize,
        remaining: usize,
        flag: String,
    },
}

struct Scanner<'a> {
    definitions: &'a [OptionDefinition],
    index: &'a FlagIndex,
    occurrences: Vec<OptionOccurrences>,
    positionals: Vec<String>,
    state: ScanState,
    ignore_flags: bool,
}

fn scan<I, S>(definitions: &[OptionDefinition], index: &FlagIndex, args: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|program| program.as_ref().to_string())
        .unwrap_or_default();

    let mut scanner = Scanner::new(definitions, index);
    for arg in args {
        scanner.scan_token(arg.as_ref())?;
    }

    scanner.finish(program)
}

impl<'a> Scanner<'a> {
    fn new(definitions: &'a [OptionDefinition], index: &'a FlagIndex) -> Self {
        Self {
            definitions,
            index,
            occurrences: vec![OptionOccurrences::default(); definitions.len()],
            positionals: Vec::new(),
            state: ScanState::Idle,
            ignore_flags: false,
        }
    }

    fn scan_token(&mut self, token: &str) -> Result<()> {
        // A pending option takes the token whatever it looks like, `--` included.
        if let ScanState::Awaiting {
            option,
            occurrence,
            remaining,
            flag,
        } = &mut self.state
        {
            trace!("`{token}` is a value for `{flag}`");
            self.occurrences[*option].all[*occurrence]
                .values
                .push(token.to_string());
            *remaining -= 1;
            if *remaining == 0 {
                self.state = ScanState::Idle;
            }
            return Ok(());
        }

        if self.ignore_flags || !cmd_line_arg_is_option_flag(token) {
            if token == END_OF_FLAGS && !self.ignore_flags {
                debug!("End of flags marker found, remaining arguments are positional");
                self.ignore_flags = true;
                return Ok(());
            }

            trace!("`{token}` is positional");
            self.positionals.push(token.to_string());
            return Ok(());
        }

        match flag_form(token) {
            FlagForm::Long => self.scan_long(token),
            FlagForm::Short => self.scan_short(token),
        }
    }

    /// Handles `--name` and `--name=value`.
    fn scan_long(&mut self, token: &str) -> Result<()> {
        let definitions = self.definitions;
        let (flag, inline) = match token.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (token, None),
        };

        let option = self
            .index
            .long(flag)
            .ok_or_else(|| UnexpectedOption {
                flag: flag.to_string(),
                token: token.to_string(),
            })?;
        let definition = &definitions[option];

        if inline.is_some() && definition.wants_no_arguments() {
            return Err(UnexpectedArgument(token.to_string()));
        }

        trace!("`{flag}` matched option `{}`", definition.name);
        let occurrence = self.push_occurrence(option);

        if definition.requires_arguments() {
            match inline {
                Some(value) => self.push_value(option, occurrence, value),
                None => self.await_values(option, occurrence, definition.arity, token),
            }
        }

        Ok(())
    }

    /// Handles `-a`, groups like `-abc` and inline values like `-I/usr/include`.
    fn scan_short(&mut self, token: &str) -> Result<()> {
        let definitions = self.definitions;
        let group = &token[1..];

        for (offset, flag) in group.char_indices() {
            if !flag.is_ascii_alphanumeric() {
                return Err(NonAlphanumericFlag {
                    character: flag,
                    group: token.to_string(),
                });
            }

            let option = self
                .index
                .short(flag)
                .ok_or_else(|| UnexpectedOption {
                    flag: format!("-{flag}"),
                    token: token.to_string(),
                })?;
            let definition = &definitions[option];

            trace!("`-{flag}` matched option `{}`", definition.name);
            let occurrence = self.push_occurrence(option);

            if definition.wants_no_arguments() {
                continue;
            }

            // Flag characters are ASCII, so the rest starts one byte later.
            let rest = &group[offset + 1..];
            if rest.is_empty() {
                self.await_values(option, occurrence, definition.arity, token);
            } else {
                self.push_value(option, occurrence, rest);
            }
            break;
        }

        Ok(())
    }

    fn push_occurrence(&mut self, option: usize) -> usize {
        let occurrences = &mut self.occurrences[option].all;
        occurrences.push(OptionOccurrence::default());
        occurrences.len() - 1
    }

    fn push_value(&mut self, option: usize, occurrence: usize, value: &str) {
        self.occurrences[option].all[occurrence]
            .values
            .push(value.to_string());
    }

    fn await_values(&mut self, option: usize, occurrence: usize, arity: usize, flag: &str) {
        self.state = ScanState::Awaiting {
            option,
            occurrence,
            remaining: arity,
            flag: flag.to_string(),
        };
    }

    fn finish(self, program: String) -> Result<ParseResult> {
        if let ScanState::Awaiting { flag, .. } = self.state {
            return Err(OptionLacksArgument(flag));
        }

        let options = self
            .definitions
            .iter()
            .map(|definition| definition.name.clone())
            .zip(self.occurrences)
            .collect();

        debug!(
            "Parsed {} positional arguments for `{program}`",
            self.positionals.len()
        );

        Ok(ParseResult {
            program,
            options,
            positionals: self.positionals,
        })
    }
}
