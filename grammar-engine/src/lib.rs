//! # grammar-engine
//!
//! `grammar-engine` compiles ABNF (RFC 5234) grammars into deterministic finite automata over
//! closed-range symbol classes, and provides the DFA algebra needed to analyse, minimize, and
//! re-render those languages.
//!
//! ## Usage
//!
//! ```rust
//! use grammar_engine::abnf::{compile_rulelist, parse_rulelist};
//!
//! fn main() {
//!     let source = "\
//!         greeting = (\"hi\" / \"hello\") 1*SP name\r\n\
//!         name = 1*ALPHA\r\n\
//!     ";
//!     let rulelist = parse_rulelist(source).unwrap();
//!     let compiled = compile_rulelist(&rulelist, None).unwrap();
//!     let greeting = compiled.get("greeting").unwrap();
//!     let ascii = |s: &str| s.bytes().map(|b| b as u32).collect::<Vec<_>>();
//!     assert!(greeting.contains(&ascii("hello world")));
//!     assert!(!greeting.contains(&ascii("hello")));
//! }
//! ```
//!
//! ## Module overview
//!
//! * [`alphabet`] — closed-range symbol classes, the alphabet every DFA transition is labelled
//!   with.
//! * [`dfa`] — the core `Dfa` type and its algebra: union, intersection, difference, symmetric
//!   difference, concatenation, star, repetition, complement, reverse, minimization,
//!   normalization, derivative and dock operations, and equivalence checking.
//! * [`abnf`] — parsing ABNF source into a syntax tree, dependency analysis, catalog-backed import
//!   resolution, and compiling a rulelist down to DFAs.
//! * [`regex`] — synthesizing a regular expression from a DFA via state elimination, and
//!   rendering it in a choice of concrete dialects.
//! * [`iterate`] — deterministic, length-ascending enumeration of the strings a DFA accepts.
//! * [`ambiguity`] — concatenation-ambiguity analysis: whether two DFAs glued together can be
//!   split at more than one point.
//! * [`error`] — the crate's typed error taxonomy.
//!
//! This crate performs no logging of its own (see the `grammar-engine-cli` binary for the
//! logging-equipped command line front end) and touches no filesystem: callers that need
//! ABNF imports resolved from files implement [`abnf::CatalogLoader`] themselves.

pub mod abnf;
pub mod alphabet;
pub mod ambiguity;
pub mod dfa;
pub mod error;
pub mod iterate;
mod nfa;
pub mod regex;

#[cfg(test)]
mod proptests;
