//! Typed error taxonomy for every fallible entry point in the crate.
//!
//! Nothing in this crate panics on malformed user input; every failure mode below is a value,
//! not a side effect. Internal invariant violations (an out-of-range state index surviving a
//! combinator, for instance) are programming errors and are allowed to panic.

/// Failure while parsing ABNF source text into a [`crate::abnf::tree::Rulelist`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("ABNF parse error at byte offset {index}")]
pub struct ParseError {
    /// Byte offset of the first unmatched position in the input.
    pub index: usize,
}

/// Failures that can occur while dereferencing a rulelist against a catalog loader, or while
/// compiling a dereferenced rulelist down to a DFA.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulelistError {
    #[error("unknown rule referenced: {name}")]
    UnknownRule { name: String },
    #[error("unknown rule `{rulename}` imported from `{filename}`")]
    UnknownImport { filename: String, rulename: String },
    #[error("circular import: {}", path.join(" -> "))]
    CircularImport { path: Vec<String> },
    #[error("failed to load catalog file `{filename}`: {cause}")]
    ImportError { filename: String, cause: String },
    #[error("rule depends on a recursive cycle: {}", cycle.join(" -> "))]
    NotRegular { cycle: Vec<String> },
    #[error("rule `{rulename}` contains a prose-val or other non-mechanizable element")]
    NotMechanizable { rulename: String },
}

/// Failure constructing a DFA operation that requires an explicit universe (complement, inverse)
/// but none was supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation requires an explicit alphabet universe")]
pub struct AlphabetUnspecified;
