//! Regex synthesis: turning a [`Dfa`](crate::dfa::Dfa) into an equivalent regular expression, in a
//! choice of concrete dialects.
pub mod dialect;
pub mod synth;
pub mod tree;

pub use dialect::{emit, Dialect};
pub use synth::synthesize;
pub use tree::RegexTree;
