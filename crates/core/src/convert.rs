//! Explicit conversion of argument strings into typed values.
//!
//! Nothing here is applied implicitly. Callers pick a target type through
//! [`FromArg`], either directly or via the `as_value` helpers on
//! [`OptionOccurrence`](crate::result::OptionOccurrence),
//! [`OptionOccurrences`](crate::result::OptionOccurrences) and
//! [`ParseResult`](crate::result::ParseResult).

use serde::Serialize;

use crate::error::{Error, Result};

/// A type that can be built from a single argument string.
pub trait FromArg: Sized {
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if `arg` does not describe a value of
    /// this type.
    fn from_arg(arg: &str) -> Result<Self>;
}

/// Splits an integer literal into sign, digits and radix.
///
/// The radix follows C's `strtol` with base 0: `0x`/`0X` is hexadecimal, a
/// leading `0` is octal and anything else is decimal.
fn split_radix(arg: &str) -> (bool, &str, u32) {
    let (negative, unsigned) = match arg.as_bytes().first() {
        Some(b'-') => (true, &arg[1..]),
        Some(b'+') => (false, &arg[1..]),
        _ => (false, arg),
    };

    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (negative, hex, 16)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (negative, &unsigned[1..], 8)
    } else {
        (negative, unsigned, 10)
    }
}

macro_rules! impl_from_arg_for_integer {
    ($($target:ty),* $(,)?) => {
        $(
            impl FromArg for $target {
                fn from_arg(arg: &str) -> Result<Self> {
                    let (negative, digits, radix) = split_radix(arg);

                    // The sign has already been consumed.
                    if digits.starts_with(['+', '-']) {
                        return Err(Error::conversion(arg, stringify!($target), "misplaced sign"));
                    }

                    let parsed = if negative {
                        <$target>::from_str_radix(&format!("-{digits}"), radix)
                    } else {
                        <$target>::from_str_radix(digits, radix)
                    };

                    parsed.map_err(|e| Error::conversion(arg, stringify!($target), e))
                }
            }
        )*
    };
}

impl_from_arg_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromArg for f32 {
    fn from_arg(arg: &str) -> Result<Self> {
        arg.parse().map_err(|e| Error::conversion(arg, "f32", e))
    }
}

impl FromArg for f64 {
    fn from_arg(arg: &str) -> Result<Self> {
        arg.parse().map_err(|e| Error::conversion(arg, "f64", e))
    }
}

impl FromArg for String {
    fn from_arg(arg: &str) -> Result<Self> {
        Ok(arg.to_string())
    }
}

impl FromArg for bool {
    fn from_arg(arg: &str) -> Result<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(Error::conversion(arg, "bool", "expected true/false, yes/no, on/off or 1/0")),
        }
    }
}

/// A comma separated list such as `alice,bob`. Empty components are kept,
/// so `""` is one empty string and `a,,b` has three components.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommaSeparatedStrings {
    pub values: Vec<String>,
}

impl FromArg for CommaSeparatedStrings {
    fn from_arg(arg: &str) -> Result<Self> {
        Ok(Self {
            values: arg.split(',').map(String::from).collect(),
        })
    }
}
