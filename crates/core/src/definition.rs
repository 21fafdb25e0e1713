//! Option definitions: the names, flags and arities a parser classifies by.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What an option is: its name, the flags that spell it, its help text and
/// how many argument tokens each occurrence consumes.
///
/// Definitions are plain data. Their flags are only validated when a
/// [`Parser`](crate::parser::Parser) is asked to parse or compile.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Results are keyed by this name.
    pub name: String,
    /// Fully hyphenated spellings such as `-v` or `--verbose`.
    pub flags: Vec<String>,
    #[serde(default)]
    pub help: String,
    /// 0 for a boolean flag, otherwise the number of values per occurrence.
    #[serde(default)]
    pub arity: usize,
}

impl OptionDefinition {
    pub fn new<I, S>(name: &str, flags: I, help: &str, arity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            flags: flags.into_iter().map(Into::into).collect(),
            help: help.to_string(),
            arity,
        }
    }

    #[must_use]
    pub fn wants_no_arguments(&self) -> bool {
        self.arity == 0
    }

    #[must_use]
    pub fn requires_arguments(&self) -> bool {
        self.arity > 0
    }
}

impl Display for OptionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "    {}", self.flags.iter().join(", "))?;
        writeln!(formatter, "        {}", self.help)
    }
}
