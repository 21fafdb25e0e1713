//! Lookup tables from flag spellings to option definitions.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::definition::OptionDefinition;
use crate::error::Error::DuplicateName;
use crate::error::{Error, InvalidFlagKind, Result};
use crate::flags::{flag_form, is_valid_flag_definition, FlagForm};

/// Short flags are single ASCII characters, so one slot per code point.
const SHORT_TABLE_SIZE: usize = 128;

/// Maps every registered flag to the position of its definition.
///
/// Built from a definition slice and only meaningful for that slice. Each
/// short character and each long spelling resolves to at most one
/// definition.
#[derive(Debug, Clone)]
pub struct FlagIndex {
    short: [Option<usize>; SHORT_TABLE_SIZE],
    long: HashMap<String, usize>,
}

impl FlagIndex {
    /// Validates `definitions` and indexes their flags.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A definition has no flags
    /// - A flag spelling is malformed (see [`is_valid_flag_definition`])
    /// - Two different definitions share a flag spelling
    /// - Two definitions share a name
    pub fn build(definitions: &[OptionDefinition]) -> Result<Self> {
        let mut index = Self {
            short: [None; SHORT_TABLE_SIZE],
            long: HashMap::new(),
        };
        let mut names = HashSet::new();

        for (position, definition) in definitions.iter().enumerate() {
            if definition.flags.is_empty() {
                return Err(Error::invalid_flag(
                    &definition.name,
                    InvalidFlagKind::NoFlags,
                ));
            }

            for flag in &definition.flags {
                if !is_valid_flag_definition(flag) {
                    return Err(Error::invalid_flag(
                        &definition.name,
                        InvalidFlagKind::Malformed { flag: flag.clone() },
                    ));
                }

                let existing = match flag_form(flag) {
                    FlagForm::Short => {
                        let slot = &mut index.short[usize::from(flag.as_bytes()[1])];
                        *slot.get_or_insert(position)
                    }
                    FlagForm::Long => *index.long.entry(flag.clone()).or_insert(position),
                };

                if existing != position {
                    return Err(Error::invalid_flag(
                        &definition.name,
                        InvalidFlagKind::Duplicate {
                            flag: flag.clone(),
                            existing: definitions[existing].name.clone(),
                        },
                    ));
                }
            }

            if !names.insert(definition.name.as_str()) {
                return Err(DuplicateName(definition.name.clone()));
            }
        }

        debug!(
            "Indexed {} definitions ({} long flags)",
            definitions.len(),
            index.long.len()
        );

        Ok(index)
    }

    /// Definition position for a short flag character, if registered.
    #[must_use]
    pub fn short(&self, flag: char) -> Option<usize> {
        if !flag.is_ascii() {
            return None;
        }
        self.short[flag as usize]
    }

    /// Definition position for a full long spelling such as `--output`.
    #[must_use]
    pub fn long(&self, flag: &str) -> Option<usize> {
        self.long.get(flag).copied()
    }
}
