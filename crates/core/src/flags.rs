//! Lexical checks on flag spellings.
//!
//! Two related predicates live here. [`is_valid_flag_definition`] decides
//! whether a spelling may be registered on an option definition, while
//! [`cmd_line_arg_is_option_flag`] decides whether a raw command line token
//! looks enough like a flag to be handed to the classifier.
//!
//! Flag characters are restricted to ASCII alphanumerics (plus `-` inside long
//! flags). Anything outside that set never forms a flag.

/// The two shapes a flag can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagForm {
    /// A single hyphen followed by one character, e.g. `-v`.
    Short,
    /// Two hyphens followed by a name, e.g. `--verbose`.
    Long,
}

/// Splits a hyphen-prefixed string into its form and the name after the
/// hyphens. Returns `None` for anything shorter than two bytes, anything not
/// starting with `-`, and the bare `--` terminator.
fn split_flag(s: &str) -> Option<(FlagForm, &str)> {
    // The shortest possible flag is a hyphen and one alphanumeric character.
    if s.len() < 2 || !s.starts_with('-') {
        return None;
    }

    let (form, name) = match s.strip_prefix("--") {
        Some(name) => (FlagForm::Long, name),
        None => (FlagForm::Short, &s[1..]),
    };

    if name.is_empty() {
        return None;
    }

    Some((form, name))
}

fn starts_alphanumeric(name: &str) -> bool {
    name.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric())
}

/// Checks whether a flag spelling is acceptable in an option definition.
///
/// Short flags are a hyphen plus exactly one alphanumeric character. Long
/// flags are two hyphens, an alphanumeric character and then any mix of
/// alphanumerics and hyphens.
///
/// ```
/// use argsift_core::flags::is_valid_flag_definition;
///
/// assert!(is_valid_flag_definition("-v"));
/// assert!(is_valid_flag_definition("--dry-run"));
/// assert!(!is_valid_flag_definition("-vx"));
/// assert!(!is_valid_flag_definition("---a"));
/// ```
#[must_use]
pub fn is_valid_flag_definition(s: &str) -> bool {
    let Some((form, name)) = split_flag(s) else {
        return false;
    };

    if !starts_alphanumeric(name) {
        return false;
    }

    match form {
        FlagForm::Short => name.len() == 1,
        FlagForm::Long => name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-'),
    }
}

/// Checks whether a raw command line token should be classified as a flag.
///
/// This is looser than [`is_valid_flag_definition`]: long flags may carry an
/// `=value` suffix, and short tokens may be a group (`-abc`) or carry an
/// inline argument (`-I/usr/include`). Which of those a short token is
/// depends on the registered flags, so only its first character is checked
/// here.
#[must_use]
pub fn cmd_line_arg_is_option_flag(s: &str) -> bool {
    let Some((form, name)) = split_flag(s) else {
        return false;
    };

    if !starts_alphanumeric(name) {
        return false;
    }

    match form {
        FlagForm::Short => true,
        FlagForm::Long => name
            .bytes()
            .take_while(|&b| b != b'=')
            .all(|b| b.is_ascii_alphanumeric() || b == b'-'),
    }
}

/// Tests whether a valid flag is short. Assumes `s` already passed
/// [`is_valid_flag_definition`] or [`cmd_line_arg_is_option_flag`].
#[must_use]
pub fn flag_is_short(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'-' && bytes[1].is_ascii_alphanumeric()
}

/// Returns the form of a valid flag.
#[must_use]
pub fn flag_form(s: &str) -> FlagForm {
    if flag_is_short(s) {
        FlagForm::Short
    } else {
        FlagForm::Long
    }
}
