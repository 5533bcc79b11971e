//! Pretty-printer producing valid ABNF text from a [`Rulelist`](super::tree::Rulelist) — not
//! necessarily byte-identical to whatever was originally parsed (comments and exact whitespace
//! are not retained in the tree), but round-trip equivalent in meaning: reparsing the output
//! yields a tree that compiles to the same language.
use super::tree::*;
use std::fmt::{self, Write};

pub fn print_rulelist(rulelist: &Rulelist, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for rule in &rulelist.rules {
        print_rule(rule, f)?;
    }
    Ok(())
}

fn print_rule(rule: &Rule, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let op = match rule.defined_as {
        DefinedAs::Define => "=",
        DefinedAs::IncrementalAlternative => "=/",
    };
    write!(f, "{} {} ", rule.name, op)?;
    print_alternation(&rule.alternation, f)?;
    writeln!(f)
}

fn print_alternation(alt: &Alternation, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, conc) in alt.concatenations.iter().enumerate() {
        if i > 0 {
            write!(f, " / ")?;
        }
        print_concatenation(conc, f)?;
    }
    Ok(())
}

fn print_concatenation(conc: &Concatenation, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, rep) in conc.repetitions.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        print_repetition(rep, f)?;
    }
    Ok(())
}

fn print_repetition(rep: &Repetition, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    print_repeat(&rep.repeat, f)?;
    print_element(&rep.element, f)
}

fn print_repeat(repeat: &Repeat, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if repeat.min == 1 && repeat.max == Some(1) {
        return Ok(());
    }
    match (repeat.min, repeat.max) {
        (0, None) => write!(f, "*"),
        (min, None) => write!(f, "{min}*"),
        (0, Some(max)) => write!(f, "*{max}"),
        (min, Some(max)) if min == max => write!(f, "{min}"),
        (min, Some(max)) => write!(f, "{min}*{max}"),
    }
}

fn print_element(element: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match element {
        Element::Rulename(name) => write!(f, "{name}"),
        Element::Group(alt) => {
            write!(f, "(")?;
            print_alternation(alt, f)?;
            write!(f, ")")
        }
        Element::Option(alt) => {
            write!(f, "[")?;
            print_alternation(alt, f)?;
            write!(f, "]")
        }
        Element::CharVal(cv) => {
            if cv.case_sensitive {
                write!(f, "%s")?;
            }
            write!(f, "\"{}\"", cv.text)
        }
        Element::NumVal(nv) => print_num_val(nv, f),
        Element::ProseVal(text) => write!(f, "<{text}>"),
        Element::Import { rulename, filename } => write!(f, "<import {filename} {rulename}>"),
    }
}

fn print_num_val(nv: &NumVal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match nv {
        NumVal::Sequence(seq) => {
            write!(f, "%x")?;
            let mut first = true;
            for v in seq {
                if !first {
                    write!(f, ".")?;
                }
                first = false;
                write!(f, "{v:X}")?;
            }
            Ok(())
        }
        NumVal::Range(lo, hi) => write!(f, "%x{lo:X}-{hi:X}"),
    }
}

/// Renders a single element to a standalone `String`, used by diagnostics that need to quote a
/// piece of grammar without formatting the whole rulelist.
pub fn element_to_string(element: &Element) -> String {
    struct Wrapper<'a>(&'a Element);
    impl fmt::Display for Wrapper<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            print_element(self.0, f)
        }
    }
    let mut s = String::new();
    let _ = write!(s, "{}", Wrapper(element));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::parser::parse_rulelist;

    #[test]
    fn round_trips_through_reparse() {
        let doc = "digit = %x30-39\r\ngreeting = (\"hi\" / \"hello\") 1*SP digit\r\n";
        let parsed = parse_rulelist(doc).unwrap();
        let printed = parsed.to_string();
        let reparsed = parse_rulelist(&printed).unwrap();
        assert_eq!(parsed, reparsed);
    }
}
