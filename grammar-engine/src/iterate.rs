//! Deterministic string enumeration ("iterate") over a [`Dfa`](crate::dfa::Dfa): every accepted
//! string, shortest first, breaking ties lexicographically by symbol. A transition labelled by a
//! range is expanded to every symbol it covers rather than collapsed to a single representative,
//! so e.g. a `[0x30-0x39]` edge yields all ten digits, not just `'0'`.
use crate::alphabet::Symbol;
use crate::dfa::Dfa;
use std::collections::VecDeque;

/// Breadth-first enumeration of the strings accepted by `dfa`, in length-then-lexicographic
/// order. Every symbol covered by a transition's class is its own branch (see the module docs).
pub struct Iterate<'a> {
    dfa: &'a Dfa,
    queue: VecDeque<(usize, Vec<Symbol>)>,
}

impl<'a> Iterate<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((dfa.initial_state_index(), vec![]));
        Iterate { dfa, queue }
    }
}

impl<'a> Iterator for Iterate<'a> {
    type Item = Vec<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((state, prefix)) = self.queue.pop_front() {
            let mut transitions: Vec<_> = self.dfa.states()[state].transitions().to_vec();
            transitions.sort_by_key(|(class, _)| class.first_symbol());
            for (class, target) in transitions {
                // A class's ranges are themselves stored sorted and disjoint, so walking them in
                // order and every symbol within a range in order visits the whole class ascending.
                for range in class.ranges() {
                    for sym in range.lo..=range.hi {
                        let mut next_prefix = prefix.clone();
                        next_prefix.push(sym);
                        self.queue.push_back((target, next_prefix));
                    }
                }
            }
            if self.dfa.states()[state].is_accepting() {
                return Some(prefix);
            }
        }
        None
    }
}

/// Convenience entry point mirroring the engine's other top-level operations: `iterate(dfa)`
/// yields every accepted string exactly once, shortest first.
pub fn iterate(dfa: &Dfa) -> Iterate<'_> {
    Iterate::new(dfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SymbolClass;
    use crate::dfa::{Dfa, DfaState};

    fn digit_dfa() -> Dfa {
        // accepts "0" or "1"
        Dfa::from_parts(
            vec![
                DfaState::new(false, vec![(SymbolClass::range(b'0' as u32, b'1' as u32), 1)]),
                DfaState::new(true, vec![]),
            ],
            0,
        )
    }

    #[test]
    fn enumerates_shortest_first() {
        let dfa = digit_dfa().star();
        let first_three: Vec<Vec<Symbol>> = iterate(&dfa).take(3).collect();
        assert_eq!(first_three[0], Vec::<Symbol>::new());
        assert_eq!(first_three[1], vec![b'0' as u32]);
        assert_eq!(first_three[2], vec![b'1' as u32]);
    }

    #[test]
    fn empty_language_yields_nothing() {
        assert_eq!(iterate(&Dfa::empty()).next(), None);
    }

    #[test]
    fn expands_a_range_transition_to_every_symbol_it_covers() {
        // DIGIT = %x30-39: a single edge labelled [0x30-0x39] should yield all ten digits,
        // not just its low witness '0'.
        let dfa = Dfa::range(b'0' as u32, b'9' as u32);
        let words: Vec<Vec<Symbol>> = iterate(&dfa).collect();
        let rendered: Vec<String> = words
            .iter()
            .map(|w| w.iter().map(|&s| s as u8 as char).collect())
            .collect();
        assert_eq!(
            rendered,
            vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]
        );
    }
}
