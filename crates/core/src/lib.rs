//! Argsift Core Library
//!
//! This crate classifies a raw command line into options and positional
//! arguments, following POSIX-like conventions:
//!
//! - **Short flags** (`-v`), grouped short flags (`-abc`) and inline short
//!   values (`-I/usr/include`)
//! - **Long flags** (`--verbose`) with separate (`--output file`) or inline
//!   (`--output=file`) values
//! - **Terminator**: every token after a bare `--` is positional
//!
//! Options are described by [`OptionDefinition`]s. A [`Parser`] validates and
//! indexes them on each parse; [`Parser::compile`] produces a reusable
//! [`CompiledParser`]. Results come back as a [`ParseResult`], and argument
//! strings are converted to typed values explicitly through
//! [`convert::FromArg`].
//!
//! # Examples
//!
//! ```
//! use argsift_core::{OptionDefinition, Parser};
//!
//! let parser = Parser::new(vec![
//!     OptionDefinition::new("help", ["-h", "--help"], "print help", 0),
//!     OptionDefinition::new("jobs", ["-j", "--jobs"], "parallel jobs", 1),
//! ]);
//!
//! let result = parser.parse(["make", "--jobs=4", "all"])?;
//! assert!(!result.has_option("help"));
//! assert_eq!(result.get("jobs")?.as_value::<u32>()?, 4);
//! assert_eq!(result.positionals, vec!["all"]);
//! # Ok::<(), argsift_core::Error>(())
//! ```

pub mod config;
pub mod convert;
pub mod definition;
pub mod error;
pub mod file_handling;
pub mod flags;
pub mod index;
pub mod parser;
pub mod result;

pub use definition::OptionDefinition;
pub use error::{Error, InvalidFlagKind, Result};
pub use parser::{CompiledParser, Parser};
pub use result::{OptionOccurrence, OptionOccurrences, ParseResult};
