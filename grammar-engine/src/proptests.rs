//! Property-based tests over randomly generated DFAs, checking the algebra's equivalences
//! hold for inputs no hand-written test case would think to try.
use crate::alphabet::{Symbol, SymbolClass};
use crate::dfa::{Dfa, DfaState};
use crate::iterate::iterate;
use proptest::prelude::*;
use std::collections::HashSet;

const ALPHABET_SIZE: Symbol = 4;

fn universe() -> SymbolClass {
    SymbolClass::range(0, ALPHABET_SIZE - 1)
}

/// Builds a DFA with `num_states` states over symbols `0..ALPHABET_SIZE`, every state having
/// exactly one outgoing edge per symbol (so the generated automaton is already total, with no
/// implicit oblivion transitions to speak of).
fn arb_dfa(max_states: usize) -> impl Strategy<Value = Dfa> {
    (2..=max_states).prop_flat_map(|num_states| {
        let accepting = prop::collection::vec(any::<bool>(), num_states);
        let transitions = prop::collection::vec(
            prop::collection::vec(0..num_states, ALPHABET_SIZE as usize),
            num_states,
        );
        let initial = 0..num_states;
        (accepting, transitions, initial).prop_map(move |(accepting, transitions, initial)| {
            let states = accepting
                .into_iter()
                .zip(transitions)
                .map(|(acc, targets)| {
                    let edges = targets
                        .into_iter()
                        .enumerate()
                        .map(|(sym, target)| (SymbolClass::single(sym as Symbol), target))
                        .collect();
                    DfaState::new(acc, edges)
                })
                .collect();
            Dfa::from_parts(states, initial)
        })
    })
}

fn arb_word(max_len: usize) -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::vec(0..ALPHABET_SIZE, 0..=max_len)
}

proptest! {
    #[test]
    fn minimize_preserves_equivalence(dfa in arb_dfa(12)) {
        let minimized = dfa.minimize();
        prop_assert!(dfa.equals(&minimized));
    }

    #[test]
    fn minimize_is_idempotent(dfa in arb_dfa(12)) {
        let once = dfa.minimize();
        let twice = once.minimize();
        prop_assert_eq!(once.states().len(), twice.states().len());
    }

    #[test]
    fn union_intersection_difference_tautologies(
        a in arb_dfa(8),
        b in arb_dfa(8),
        words in prop::collection::vec(arb_word(6), 20),
    ) {
        let union = a.union(&b);
        let intersection = a.intersection(&b);
        let difference = a.difference(&b);
        let sym_diff = a.symmetric_difference(&b);
        for word in &words {
            let ra = a.contains(word);
            let rb = b.contains(word);
            prop_assert_eq!(union.contains(word), ra || rb);
            prop_assert_eq!(intersection.contains(word), ra && rb);
            prop_assert_eq!(difference.contains(word), ra && !rb);
            prop_assert_eq!(sym_diff.contains(word), ra != rb);
        }
    }

    #[test]
    fn self_union_and_intersection_are_identity(dfa in arb_dfa(8)) {
        prop_assert!(dfa.union(&dfa).equals(&dfa));
        prop_assert!(dfa.intersection(&dfa).equals(&dfa));
    }

    #[test]
    fn complement_is_involutive(dfa in arb_dfa(8)) {
        let u = universe();
        let complemented_twice = dfa.complement(Some(&u)).unwrap().complement(Some(&u)).unwrap();
        prop_assert!(dfa.equals(&complemented_twice));
    }

    #[test]
    fn de_morgans_laws_hold(a in arb_dfa(6), b in arb_dfa(6)) {
        let u = universe();
        let not_a = a.complement(Some(&u)).unwrap();
        let not_b = b.complement(Some(&u)).unwrap();

        let lhs = a.union(&b).complement(Some(&u)).unwrap();
        let rhs = not_a.intersection(&not_b);
        prop_assert!(lhs.equals(&rhs));

        let lhs = a.intersection(&b).complement(Some(&u)).unwrap();
        let rhs = not_a.union(&not_b);
        prop_assert!(lhs.equals(&rhs));
    }

    #[test]
    fn reverse_is_involutive(dfa in arb_dfa(8)) {
        prop_assert!(dfa.reverse().reverse().equals(&dfa));
    }

    #[test]
    fn iterate_yields_distinct_words_in_nondecreasing_length(dfa in arb_dfa(6)) {
        let words: Vec<_> = iterate(&dfa).take(200).collect();
        let mut seen = HashSet::new();
        let mut last_len = 0;
        for word in &words {
            prop_assert!(seen.insert(word.clone()), "iterate repeated {word:?}");
            prop_assert!(word.len() >= last_len);
            last_len = word.len();
        }
    }

    #[test]
    fn iterate_only_yields_accepted_words(dfa in arb_dfa(6)) {
        for word in iterate(&dfa).take(50) {
            prop_assert!(dfa.contains(&word));
        }
    }

    #[test]
    fn dock_of_self_always_accepts_empty_restart(dfa in arb_dfa(6)) {
        // dock(self, other) marks a state accepting when `other`'s whole language is already a
        // sub-language of what's reachable from that state. At self's own initial state that's
        // `self <= self`, trivially true -- so dock(self, self) always accepts the empty word,
        // independent of whether `dfa` itself does.
        let docked = dfa.dock(&dfa);
        prop_assert!(docked.contains(&[]));
    }
}
