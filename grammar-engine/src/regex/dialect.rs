//! Renders a dialect-agnostic [`RegexTree`] to the concrete syntax of a specific regex flavour.
//! Every dialect shares the same tree-walking structure; what varies is how groups, alternation,
//! and literal/class characters are escaped.
use super::tree::RegexTree;
use crate::alphabet::{Range, Symbol, SymbolClass};
use std::fmt::Write;

/// The regex flavours this engine knows how to target. Most differ only in which metacharacters
/// need escaping and whether non-capturing groups (`(?:...)`) are available; POSIX BRE is the
/// outlier, needing `\(`, `\)`, `\|`, `\+`, `\?` backslash-escaped to be *active* rather than
/// literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    PosixBre,
    PosixEre,
    Pcre,
    Pcre2,
    EcmaScript,
    Java,
    Python,
    Ruby,
    Perl,
    Re2,
    Rust,
    Go,
    Swift,
    /// I-Regexp (RFC 9485): the restricted XSD/XPath-derived subset used in JSON Schema.
    IRegexp,
}

impl Dialect {
    fn supports_non_capturing_group(self) -> bool {
        !matches!(self, Dialect::PosixBre | Dialect::PosixEre | Dialect::IRegexp)
    }

    /// Whether grouping/alternation/repetition metacharacters must be backslash-escaped to be
    /// *active* (true only for POSIX BRE, the one dialect without "extended" metacharacter
    /// syntax).
    fn basic_re_escaping(self) -> bool {
        matches!(self, Dialect::PosixBre)
    }

    fn group_open(self) -> &'static str {
        if self.basic_re_escaping() {
            "\\("
        } else if self.supports_non_capturing_group() {
            "(?:"
        } else {
            "("
        }
    }

    fn group_close(self) -> &'static str {
        if self.basic_re_escaping() {
            "\\)"
        } else {
            ")"
        }
    }

    fn alternation_sep(self) -> &'static str {
        if self.basic_re_escaping() {
            "\\|"
        } else {
            "|"
        }
    }

    fn star(self) -> &'static str {
        "*"
    }
}

/// Renders `tree` as a string in `dialect`'s concrete syntax.
pub fn emit(tree: &RegexTree, dialect: Dialect) -> String {
    let mut out = String::new();
    emit_union(tree, dialect, &mut out);
    out
}

fn emit_union(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::Union(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(dialect.alternation_sep());
                }
                emit_concat(item, dialect, out);
            }
        }
        other => emit_concat(other, dialect, out),
    }
}

fn emit_concat(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::Concat(items) => {
            for item in items {
                emit_concat_operand(item, dialect, out);
            }
        }
        other => emit_concat_operand(other, dialect, out),
    }
}

fn emit_concat_operand(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::Union(_) => {
            out.push_str(dialect.group_open());
            emit_union(node, dialect, out);
            out.push_str(dialect.group_close());
        }
        other => emit_postfix(other, dialect, out),
    }
}

fn emit_postfix(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::Star(inner) => {
            emit_star_operand(inner, dialect, out);
            out.push_str(dialect.star());
        }
        other => emit_atom(other, dialect, out),
    }
}

fn emit_star_operand(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::Class(_) | RegexTree::EmptyString | RegexTree::EmptySet => {
            emit_atom(node, dialect, out)
        }
        RegexTree::Star(_) => {
            // Already atomic from the parser's point of view, but wrap anyway since `a**` is
            // rejected by several engines.
            out.push_str(dialect.group_open());
            emit_postfix(node, dialect, out);
            out.push_str(dialect.group_close());
        }
        other => {
            out.push_str(dialect.group_open());
            emit_union(other, dialect, out);
            out.push_str(dialect.group_close());
        }
    }
}

fn emit_atom(node: &RegexTree, dialect: Dialect, out: &mut String) {
    match node {
        RegexTree::EmptySet => {
            // No dialect has a direct "match nothing" atom; a negative lookahead that always
            // fails is the standard idiom where lookaround exists, otherwise an empty character
            // class (which is itself non-standard outside a few engines) — fall back to a
            // bracket expression containing nothing that can occur, via a class no source symbol
            // can match. Simplicity over elegance: we emit a class that demands two contradictory
            // bytes are able to occupy the same offset, instead we fall back to `(?!)`.
            out.push_str("(?!)");
        }
        RegexTree::EmptyString => {}
        RegexTree::Class(class) => emit_class(class, dialect, out),
        RegexTree::Concat(_) | RegexTree::Union(_) | RegexTree::Star(_) => {
            // Reached only if a caller forgot to wrap; keep output well-formed regardless.
            out.push_str(dialect.group_open());
            emit_union(node, dialect, out);
            out.push_str(dialect.group_close());
        }
    }
}

fn emit_class(class: &SymbolClass, dialect: Dialect, out: &mut String) {
    let ranges = class.ranges();
    if ranges.len() == 1 && ranges[0].lo == ranges[0].hi {
        emit_literal_symbol(ranges[0].lo, dialect, out);
        return;
    }
    out.push('[');
    for r in ranges {
        emit_class_range(*r, dialect, out);
    }
    out.push(']');
}

fn emit_class_range(r: Range, dialect: Dialect, out: &mut String) {
    emit_class_symbol(r.lo, dialect, out);
    if r.hi != r.lo {
        out.push('-');
        emit_class_symbol(r.hi, dialect, out);
    }
}

const METACHARS: &[char] = &['\\', '.', '+', '*', '?', '(', ')', '[', ']', '{', '}', '^', '$', '|'];

fn emit_literal_symbol(sym: Symbol, dialect: Dialect, out: &mut String) {
    match char::from_u32(sym) {
        Some(c) if METACHARS.contains(&c) => {
            let _ = write!(out, "\\{c}");
        }
        Some(c) if c.is_ascii_graphic() || c == ' ' => out.push(c),
        _ => emit_escape_sequence(sym, dialect, out),
    }
}

fn emit_class_symbol(sym: Symbol, dialect: Dialect, out: &mut String) {
    match char::from_u32(sym) {
        Some(c) if matches!(c, '\\' | ']' | '^' | '-') => {
            let _ = write!(out, "\\{c}");
        }
        Some(c) if c.is_ascii_graphic() || c == ' ' => out.push(c),
        _ => emit_escape_sequence(sym, dialect, out),
    }
}

fn emit_escape_sequence(sym: Symbol, dialect: Dialect, out: &mut String) {
    match dialect {
        Dialect::PosixBre | Dialect::PosixEre => {
            let _ = write!(out, "[\\x{{{sym:X}}}]");
        }
        _ if sym <= 0xFFFF => {
            let _ = write!(out, "\\u{sym:04X}");
        }
        _ => {
            let _ = write!(out, "\\u{{{sym:X}}}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::compile::compile_rulelist;
    use crate::abnf::parser::parse_rulelist;
    use crate::regex::synth::synthesize;

    #[test]
    fn emits_simple_union_with_ere_alternation() {
        let rulelist = parse_rulelist("a = \"x\" / \"y\"\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("a").unwrap().minimize();
        let tree = synthesize(&dfa);
        let rendered = emit(&tree, Dialect::Pcre);
        assert!(rendered.contains('|'));
    }

    #[test]
    fn bre_dialect_escapes_alternation_bar() {
        let rulelist = parse_rulelist("a = \"x\" / \"y\"\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("a").unwrap().minimize();
        let tree = synthesize(&dfa);
        let rendered = emit(&tree, Dialect::PosixBre);
        assert!(rendered.contains("\\|"));
    }
}
