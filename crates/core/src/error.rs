use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a definition set was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFlagKind {
    /// The definition lists no flags at all.
    NoFlags,
    /// The spelling is not `-c` or `--name`.
    Malformed { flag: String },
    /// Another definition already registered this spelling.
    Duplicate { flag: String, existing: String },
}

impl Display for InvalidFlagKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFlags => write!(formatter, "has no flag definitions"),
            Self::Malformed { flag } => write!(formatter, "specifies invalid flag \"{flag}\""),
            Self::Duplicate { flag, existing } => write!(
                formatter,
                "specifies flag \"{flag}\" already used by option \"{existing}\""
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Option \"{}\" {}", .option, .kind)]
    InvalidFlag {
        option: String,
        kind: InvalidFlagKind,
    },

    #[error("Found a non-unique option name: `{}`", .0)]
    DuplicateName(String),

    /// `flag` is the unregistered spelling, `token` the argument it came
    /// from (`--bogus=1`, or `-vx` for an unknown `x` in a group).
    #[error("Found unexpected flag \"{}\" in argument \"{}\"", .flag, .token)]
    UnexpectedOption { flag: String, token: String },

    #[error("Found non-alphanumeric character '{}' in flag group '{}'", .character, .group)]
    NonAlphanumericFlag { character: char, group: String },

    #[error("Found argument for option not expecting an argument: {}", .0)]
    UnexpectedArgument(String),

    #[error(
        "Last option \"{}\" expects an argument but the parser ran out of command line arguments to parse",
        .0
    )]
    OptionLacksArgument(String),

    #[error("Option has no argument")]
    MissingArgument,

    #[error("No option arguments to convert")]
    NoOccurrences,

    #[error("No option named `{}` is defined", .0)]
    UnknownOption(String),

    #[error("Positional argument {} requested but only {} present", .index, .count)]
    PositionalOutOfRange { index: usize, count: usize },

    #[error("Cannot convert `{}` to {}: {}", .value, .target, .reason)]
    Conversion {
        value: String,
        target: &'static str,
        reason: String,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No option definitions were found in `{}`. Is it empty?", .path)]
    EmptyDefinitionFile { path: String },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_flag(option: &str, kind: InvalidFlagKind) -> Self {
        Self::InvalidFlag {
            option: option.to_string(),
            kind,
        }
    }

    pub fn conversion(value: &str, target: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::Conversion {
            value: value.to_string(),
            target,
            reason: reason.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
