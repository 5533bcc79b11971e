//! The ABNF (RFC 5234) syntax tree: a faithful, lossless-enough-to-round-trip-meaning
//! representation of a parsed rulelist, plus the rule-level import extension (`rulename =
//! <import file.abnf rule>`) used by the resolver.
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A parsed ABNF document: an ordered list of rule definitions. Order is preserved because
/// `=/` incremental alternatives must attach to the most recently defined rule of that name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rulelist {
    pub rules: Vec<Rule>,
}

impl Rulelist {
    /// Every distinct rule name, in definition order, compared case-insensitively: a rule's
    /// `=/` increments don't introduce a second entry.
    pub fn rule_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = vec![];
        for rule in &self.rules {
            if seen.insert(rule.name.to_ascii_lowercase()) {
                names.push(rule.name.clone());
            }
        }
        names
    }

    /// Lowercased rule name to its definition, with every `=`/`=/` increment of a name folded
    /// into one combined alternation in source order.
    pub fn dictionary(&self) -> HashMap<String, Rule> {
        let mut dict: HashMap<String, Rule> = HashMap::new();
        for rule in &self.rules {
            let key = rule.name.to_ascii_lowercase();
            match dict.get_mut(&key) {
                Some(existing) => existing
                    .alternation
                    .concatenations
                    .extend(rule.alternation.concatenations.iter().cloned()),
                None => {
                    dict.insert(key, rule.clone());
                }
            }
        }
        dict
    }

    /// Every rulename referenced anywhere in the rulelist's definitions (local, builtin, import,
    /// or undefined alike), lowercased. Does not distinguish what kind of name each one is; see
    /// [`super::deps::analyse`] for that classification.
    pub fn referenced_rules(&self) -> HashSet<String> {
        let mut names = HashSet::new();
        for rule in &self.rules {
            collect_referenced(&rule.alternation, &mut names);
        }
        names
    }
}

fn collect_referenced(alt: &Alternation, out: &mut HashSet<String>) {
    for conc in &alt.concatenations {
        for rep in &conc.repetitions {
            match &rep.element {
                Element::Rulename(name) => {
                    out.insert(name.to_ascii_lowercase());
                }
                Element::Group(a) | Element::Option(a) => collect_referenced(a, out),
                Element::Import { rulename, .. } => {
                    out.insert(rulename.to_ascii_lowercase());
                }
                Element::CharVal(_) | Element::NumVal(_) | Element::ProseVal(_) => {}
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub defined_as: DefinedAs,
    pub alternation: Alternation,
}

/// `=` starts a fresh definition; `=/` appends another alternative to an existing rule (and, per
/// RFC 5234 §3.3, is associative — repeated `=/` for the same rule all fold into one flat
/// alternation in definition order).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinedAs {
    Define,
    IncrementalAlternative,
}

/// `/`-separated list of concatenations. A single concatenation is represented as a
/// one-element `Alternation` rather than a special case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alternation {
    pub concatenations: Vec<Concatenation>,
}

/// Space-separated list of repeated elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Concatenation {
    pub repetitions: Vec<Repetition>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repetition {
    pub repeat: Repeat,
    pub element: Element,
}

/// `min*max` repetition count. Both bounds default per RFC 5234: a bare element is `1*1`; `*`
/// alone is `0*inf`; `n*` is `n*inf`; `*n` is `0*n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Repeat {
    pub min: usize,
    pub max: Option<usize>,
}

impl Repeat {
    pub const EXACTLY_ONE: Repeat = Repeat { min: 1, max: Some(1) };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Rulename(String),
    /// Parenthesized group: `(alternation)`.
    Group(Box<Alternation>),
    /// `[alternation]`, sugar for `*1(alternation)`.
    Option(Box<Alternation>),
    CharVal(CharVal),
    NumVal(NumVal),
    ProseVal(String),
    /// `<import path rule>`: an import of `rule` from the catalog entry `path`. Not part of strict
    /// RFC 5234 grammar; recognised as an extension atop `prose-val`'s angle-bracket syntax.
    Import { rulename: String, filename: String },
}

/// `%s"..."` (case-sensitive) or `%i"..."`/bare `"..."` (case-insensitive, the RFC 5234 default).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharVal {
    pub text: String,
    pub case_sensitive: bool,
}

/// `%b`/`%d`/`%x` numeric value: either a single sequence of symbols (`%d13.10`) or a closed
/// range (`%x30-39`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumVal {
    Sequence(Vec<u32>),
    Range(u32, u32),
}

impl fmt::Display for Rulelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::abnf::print::print_rulelist(self, f)
    }
}
