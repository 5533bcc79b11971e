//! Closed-range symbol classes over an ordered alphabet of code points.
//!
//! A [`SymbolClass`] is the label on a single DFA transition: a canonical, sorted, disjoint,
//! non-adjacent sequence of inclusive [`Range`]s. All set algebra in this module is a merge-sweep
//! over sorted ranges, in the spirit of the crate's other canonical-form structures.
use std::cmp::Ordering;

/// A symbol is a single code point. The alphabet is typically Unicode scalar values, but nothing
/// here assumes validity as a `char` — surrogate and out-of-range values are allowed so that raw
/// ABNF numeric ranges (which are not scope-checked against Unicode) round-trip faithfully.
pub type Symbol = u32;

/// A non-empty closed interval `[lo, hi]`, `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub lo: Symbol,
    pub hi: Symbol,
}

impl Range {
    pub fn new(lo: Symbol, hi: Symbol) -> Self {
        assert!(lo <= hi, "range lo must be <= hi");
        Range { lo, hi }
    }

    pub fn single(sym: Symbol) -> Self {
        Range { lo: sym, hi: sym }
    }

    pub fn contains(&self, sym: Symbol) -> bool {
        self.lo <= sym && sym <= self.hi
    }

    /// Whether two ranges touch or overlap, i.e. could be merged into one contiguous range.
    fn adjacent_or_overlapping(&self, other: &Range) -> bool {
        !(self.hi.saturating_add(1) < other.lo || other.hi.saturating_add(1) < self.lo)
    }
}

/// A set of symbols, stored in canonical form: sorted by `lo`, pairwise disjoint, and with no two
/// consecutive ranges adjacent (adjacent ranges are always merged).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolClass {
    ranges: Vec<Range>,
}

impl SymbolClass {
    pub fn empty() -> Self {
        SymbolClass { ranges: vec![] }
    }

    pub fn single(sym: Symbol) -> Self {
        SymbolClass {
            ranges: vec![Range::single(sym)],
        }
    }

    pub fn range(lo: Symbol, hi: Symbol) -> Self {
        SymbolClass {
            ranges: vec![Range::new(lo, hi)],
        }
    }

    /// Builds a canonical class from an arbitrary (possibly overlapping, unsorted) set of ranges.
    pub fn from_ranges(mut ranges: Vec<Range>) -> Self {
        ranges.sort_by(|a, b| a.lo.cmp(&b.lo).then(a.hi.cmp(&b.hi)));
        let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
        for r in ranges {
            match merged.last_mut() {
                Some(last) if last.adjacent_or_overlapping(&r) => {
                    last.hi = last.hi.max(r.hi);
                }
                _ => merged.push(r),
            }
        }
        SymbolClass { ranges: merged }
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The lowest symbol in this class, used as the deterministic representative witness value
    /// for enumeration and as the sort key for normalized transition ordering.
    pub fn first_symbol(&self) -> Option<Symbol> {
        self.ranges.first().map(|r| r.lo)
    }

    pub fn contains(&self, sym: Symbol) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if sym < r.lo {
                    Ordering::Greater
                } else if sym > r.hi {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn union(&self, other: &SymbolClass) -> SymbolClass {
        let mut ranges = self.ranges.clone();
        ranges.extend(other.ranges.iter().copied());
        SymbolClass::from_ranges(ranges)
    }

    pub fn intersection(&self, other: &SymbolClass) -> SymbolClass {
        let mut out = vec![];
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let a = self.ranges[i];
            let b = other.ranges[j];
            let lo = a.lo.max(b.lo);
            let hi = a.hi.min(b.hi);
            if lo <= hi {
                out.push(Range::new(lo, hi));
            }
            if a.hi < b.hi {
                i += 1;
            } else {
                j += 1;
            }
        }
        SymbolClass::from_ranges(out)
    }

    pub fn difference(&self, other: &SymbolClass) -> SymbolClass {
        let mut out = vec![];
        for &a in &self.ranges {
            let mut lo = a.lo;
            for &b in &other.ranges {
                if b.hi < lo || b.lo > a.hi {
                    continue;
                }
                if b.lo > lo {
                    out.push(Range::new(lo, b.lo - 1));
                }
                if b.hi >= a.hi {
                    lo = a.hi;
                    lo = lo.saturating_add(1);
                    break;
                }
                lo = b.hi + 1;
            }
            if lo <= a.hi {
                out.push(Range::new(lo, a.hi));
            }
        }
        SymbolClass::from_ranges(out)
    }

    pub fn complement(&self, universe: &SymbolClass) -> SymbolClass {
        universe.difference(self)
    }

    /// Splits `universe` at every boundary implied by `classes`, producing the finest set of
    /// disjoint atoms such that each input class is a union of whole atoms. Used to build a
    /// common refinement of two DFAs' transition labels before a product construction, and to
    /// compute the alphabet partition exposed to callers (§4.1).
    pub fn partition(universe: &SymbolClass, classes: &[&SymbolClass]) -> Vec<SymbolClass> {
        let mut boundaries = std::collections::BTreeSet::new();
        for r in universe.ranges() {
            boundaries.insert(r.lo);
            boundaries.insert(r.hi.saturating_add(1));
        }
        for class in classes {
            for r in class.ranges() {
                boundaries.insert(r.lo);
                boundaries.insert(r.hi.saturating_add(1));
            }
        }
        let mut sorted: Vec<Symbol> = boundaries.into_iter().collect();
        sorted.sort_unstable();

        let mut atoms = vec![];
        for w in sorted.windows(2) {
            let (lo, next) = (w[0], w[1]);
            if next == 0 {
                continue;
            }
            let hi = next - 1;
            if lo > hi {
                continue;
            }
            let atom = SymbolClass::range(lo, hi);
            if atom.intersection(universe).is_empty() {
                continue;
            }
            atoms.push(atom);
        }
        atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_adjacent_ranges() {
        let class = SymbolClass::from_ranges(vec![Range::new(1, 3), Range::new(4, 6)]);
        assert_eq!(class.ranges(), &[Range::new(1, 6)]);
    }

    #[test]
    fn union_intersection_difference() {
        let a = SymbolClass::range(0, 10);
        let b = SymbolClass::range(5, 15);
        assert_eq!(a.union(&b).ranges(), &[Range::new(0, 15)]);
        assert_eq!(a.intersection(&b).ranges(), &[Range::new(5, 10)]);
        assert_eq!(a.difference(&b).ranges(), &[Range::new(0, 4)]);
    }

    #[test]
    fn complement_over_universe() {
        let universe = SymbolClass::range(0, 127);
        let digits = SymbolClass::range(b'0' as u32, b'9' as u32);
        let comp = digits.complement(&universe);
        assert!(!comp.contains(b'5' as u32));
        assert!(comp.contains(b'a' as u32));
    }

    #[test]
    fn partition_splits_on_all_boundaries() {
        let universe = SymbolClass::range(0, 20);
        let a = SymbolClass::range(0, 9);
        let b = SymbolClass::range(5, 15);
        let atoms = SymbolClass::partition(&universe, &[&a, &b]);
        let total: u64 = atoms
            .iter()
            .flat_map(|c| c.ranges())
            .map(|r| (r.hi - r.lo + 1) as u64)
            .sum();
        assert_eq!(total, 21);
        for pair in atoms.windows(2) {
            assert!(pair[0].ranges().last().unwrap().hi < pair[1].ranges().first().unwrap().lo);
        }
    }
}
