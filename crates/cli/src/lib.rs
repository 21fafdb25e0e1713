//! Argsift CLI Library
//!
//! This crate holds the programs built on argsift-core:
//!
//! - [`cli_args`] and [`probe`]: the `argsift` tool, which loads a definition
//!   file and prints how a command line is classified against it
//! - [`joinargs`]: a small program whose own command line is classified by
//!   argsift-core
//!
//! # Examples
//!
//! ```bash
//! # Show the options a definition file declares
//! argsift --definitions defs.yml --list
//!
//! # Classify a command line and print the result as YAML
//! argsift --definitions defs.yml --program cc -- -vI/usr/include main.c
//!
//! # Join arguments with a custom separator
//! joinargs -s : a b c
//! ```

pub mod cli_args;
pub mod joinargs;
pub mod probe;
