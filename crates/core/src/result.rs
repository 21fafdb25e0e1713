use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use crate::convert::FromArg;
use crate::error::{Error, Result};

/// One matched instance of an option.
///
/// `values` holds every token consumed for this instance in order. Boolean
/// options never have values; an option of arity N has N values, or a single
/// one when it was given inline (`--output=x`, `-ox`).
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOccurrence {
    pub values: Vec<String>,
}

impl OptionOccurrence {
    /// The argument of this instance: the last token it consumed.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.values.is_empty()
    }

    /// Converts the argument of this instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if there is no argument, or the
    /// conversion error from [`FromArg`].
    pub fn as_value<T: FromArg>(&self) -> Result<T> {
        self.value()
            .ok_or(Error::MissingArgument)
            .and_then(T::from_arg)
    }

    /// Converts the argument of this instance, falling back to `default` when
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns the conversion error from [`FromArg`].
    pub fn as_value_or<T: FromArg>(&self, default: T) -> Result<T> {
        match self.value() {
            Some(value) => T::from_arg(value),
            None => Ok(default),
        }
    }

    /// Converts every consumed token of this instance.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn values_as<T: FromArg>(&self) -> Result<Vec<T>> {
        self.values.iter().map(|value| T::from_arg(value)).collect()
    }
}

/// Every instance of one option, in command line order. Empty when the
/// option never appeared.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct OptionOccurrences {
    pub all: Vec<OptionOccurrence>,
}

impl OptionOccurrences {
    /// Number of times the option showed up.
    #[must_use]
    pub fn count(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn occurred(&self) -> bool {
        !self.all.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&OptionOccurrence> {
        self.all.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionOccurrence> {
        self.all.iter()
    }

    /// Converts the argument of the LAST instance, so `-n 1 -n 2 -n 3` gives 3.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOccurrences`] if the option never appeared, otherwise
    /// whatever [`OptionOccurrence::as_value`] returns.
    pub fn as_value<T: FromArg>(&self) -> Result<T> {
        self.last()
            .ok_or(Error::NoOccurrences)
            .and_then(OptionOccurrence::as_value)
    }

    /// Like [`as_value`](Self::as_value) but returns `default` when the option
    /// never appeared or its last instance has no argument.
    ///
    /// # Errors
    ///
    /// Returns the conversion error from [`FromArg`].
    pub fn as_value_or<T: FromArg>(&self, default: T) -> Result<T> {
        match self.last() {
            Some(occurrence) => occurrence.as_value_or(default),
            None => Ok(default),
        }
    }

    /// Converts the argument of every instance.
    ///
    /// # Errors
    ///
    /// Returns the first missing argument or conversion error.
    pub fn all_as<T: FromArg>(&self) -> Result<Vec<T>> {
        self.all.iter().map(OptionOccurrence::as_value).collect()
    }
}

impl Index<usize> for OptionOccurrences {
    type Output = OptionOccurrence;

    fn index(&self, index: usize) -> &Self::Output {
        &self.all[index]
    }
}

impl<'a> IntoIterator for &'a OptionOccurrences {
    type Item = &'a OptionOccurrence;
    type IntoIter = std::slice::Iter<'a, OptionOccurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}

/// Everything a parse produced.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// The first raw argument.
    pub program: String,
    /// One entry per defined option, in definition order, even if it never
    /// appeared.
    pub options: IndexMap<String, OptionOccurrences>,
    /// Tokens that were neither flags nor flag values, in command line order.
    pub positionals: Vec<String>,
}

impl ParseResult {
    /// Whether the named option appeared at least once.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options
            .get(name)
            .is_some_and(OptionOccurrences::occurred)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] if no option with this name was
    /// defined.
    pub fn get(&self, name: &str) -> Result<&OptionOccurrences> {
        self.options
            .get(name)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn count(&self) -> usize {
        self.positionals.len()
    }

    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// Converts one positional argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionalOutOfRange`] or the conversion error.
    pub fn positional_as<T: FromArg>(&self, index: usize) -> Result<T> {
        let positional = self
            .positional(index)
            .ok_or(Error::PositionalOutOfRange {
                index,
                count: self.count(),
            })?;
        T::from_arg(positional)
    }

    /// Converts every positional argument.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn all_positionals_as<T: FromArg>(&self) -> Result<Vec<T>> {
        self.positionals.iter().map(|arg| T::from_arg(arg)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(values: &[&str]) -> OptionOccurrence {
        OptionOccurrence {
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_occurrence_value_is_last_token() {
        let pair = occurrence(&["1", "2"]);
        assert_eq!(pair.value(), Some("2"));
        assert_eq!(pair.values(), ["1", "2"]);
        assert_eq!(pair.values_as::<i32>().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_occurrence_without_value() {
        let flag = occurrence(&[]);
        assert!(!flag.has_value());
        assert!(matches!(
            flag.as_value::<String>().unwrap_err(),
            Error::MissingArgument
        ));
        assert_eq!(flag.as_value_or(5_i32).unwrap(), 5);
    }

    #[test]
    fn test_occurrences_convert_last() {
        let numbers = OptionOccurrences {
            all: vec![occurrence(&["1"]), occurrence(&["2"]), occurrence(&["3"])],
        };
        assert_eq!(numbers.count(), 3);
        assert_eq!(numbers.as_value::<i32>().unwrap(), 3);
        assert_eq!(numbers.all_as::<i32>().unwrap(), vec![1, 2, 3]);
        assert_eq!(numbers[0].value(), Some("1"));
    }

    #[test]
    fn test_empty_occurrences() {
        let none = OptionOccurrences::default();
        assert!(!none.occurred());
        assert!(matches!(
            none.as_value::<i32>().unwrap_err(),
            Error::NoOccurrences
        ));
        assert_eq!(none.as_value_or(",".to_string()).unwrap(), ",");
        assert!(none.all_as::<i32>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_result_lookups() {
        let mut options = IndexMap::new();
        options.insert("verbose".to_string(), OptionOccurrences::default());
        options.insert(
            "output".to_string(),
            OptionOccurrences {
                all: vec![occurrence(&["out.txt"])],
            },
        );
        let result = ParseResult {
            program: "test".to_string(),
            options,
            positionals: vec!["1".to_string(), "two".to_string()],
        };

        assert!(!result.has_option("verbose"));
        assert!(result.has_option("output"));
        assert!(!result.has_option("missing"));
        assert!(matches!(
            result.get("missing").unwrap_err(),
            Error::UnknownOption(_)
        ));
        assert_eq!(result.count(), 2);
        assert_eq!(result.positional_as::<u8>(0).unwrap(), 1);
        assert!(result.positional_as::<u8>(1).is_err());
        assert!(matches!(
            result.positional_as::<u8>(2).unwrap_err(),
            Error::PositionalOutOfRange { index: 2, count: 2 }
        ));
        assert_eq!(
            result.all_positionals_as::<String>().unwrap(),
            vec!["1", "two"]
        );
    }
}
