//! The regex syntax tree produced by state elimination: an alphabet-level algebraic expression
//! (union / concatenation / star, plus empty-set and empty-string leaves) over
//! [`SymbolClass`](crate::alphabet::SymbolClass) atoms, dialect-agnostic until
//! [`crate::regex::dialect`] renders it to text.
use crate::alphabet::SymbolClass;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegexTree {
    /// Matches nothing — the empty language. Only ever appears as a whole tree, never nested,
    /// since state elimination simplifies it away from any larger expression.
    EmptySet,
    /// Matches the empty string only.
    EmptyString,
    /// Matches any single symbol in the class.
    Class(SymbolClass),
    Concat(Vec<RegexTree>),
    Union(Vec<RegexTree>),
    Star(Box<RegexTree>),
}

impl RegexTree {
    pub fn concat(a: RegexTree, b: RegexTree) -> RegexTree {
        match (a, b) {
            (RegexTree::EmptySet, _) | (_, RegexTree::EmptySet) => RegexTree::EmptySet,
            (RegexTree::EmptyString, x) | (x, RegexTree::EmptyString) => x,
            (RegexTree::Concat(mut xs), RegexTree::Concat(ys)) => {
                xs.extend(ys);
                RegexTree::Concat(xs)
            }
            (RegexTree::Concat(mut xs), y) => {
                xs.push(y);
                RegexTree::Concat(xs)
            }
            (x, RegexTree::Concat(ys)) => {
                let mut xs = vec![x];
                xs.extend(ys);
                RegexTree::Concat(xs)
            }
            (x, y) => RegexTree::Concat(vec![x, y]),
        }
    }

    pub fn union(a: RegexTree, b: RegexTree) -> RegexTree {
        match (a, b) {
            (RegexTree::EmptySet, x) | (x, RegexTree::EmptySet) => x,
            (RegexTree::Union(mut xs), RegexTree::Union(ys)) => {
                xs.extend(ys);
                RegexTree::Union(xs)
            }
            (RegexTree::Union(mut xs), y) => {
                xs.push(y);
                RegexTree::Union(xs)
            }
            (x, RegexTree::Union(ys)) => {
                let mut xs = vec![x];
                xs.extend(ys);
                RegexTree::Union(xs)
            }
            (x, y) if x == y => x,
            (x, y) => RegexTree::Union(vec![x, y]),
        }
    }

    pub fn star(a: RegexTree) -> RegexTree {
        match a {
            RegexTree::EmptySet | RegexTree::EmptyString => RegexTree::EmptyString,
            RegexTree::Star(inner) => RegexTree::Star(inner),
            other => RegexTree::Star(Box::new(other)),
        }
    }
}
