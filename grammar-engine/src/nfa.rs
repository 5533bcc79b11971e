//! A minimal epsilon-NFA used only as an intermediate construction for combinators that cannot be
//! expressed as a direct DFA product (concatenation, star, repetition, reversal, and the
//! generalized language-derivative used by the ambiguity analyser). Every public entry point into
//! this module returns a [`Dfa`](crate::dfa::Dfa) — the NFA itself never escapes the crate.
use crate::alphabet::SymbolClass;
use crate::dfa::{Dfa, DfaState};
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Clone, Debug)]
pub(crate) struct NfaState {
    pub(crate) accepting: bool,
    pub(crate) epsilon: Vec<usize>,
    pub(crate) transitions: Vec<(SymbolClass, usize)>,
}

#[derive(Clone, Debug)]
pub(crate) struct Nfa {
    pub(crate) states: Vec<NfaState>,
    pub(crate) initial_states: Vec<usize>,
}

impl Nfa {
    pub(crate) fn from_dfa(dfa: &Dfa) -> Self {
        let states = dfa
            .states()
            .iter()
            .map(|s| NfaState {
                accepting: s.is_accepting(),
                epsilon: vec![],
                transitions: s.transitions().to_vec(),
            })
            .collect();
        Nfa {
            states,
            initial_states: vec![dfa.initial_state_index()],
        }
    }

    /// Rebinds which states are considered initial without touching the transition structure —
    /// used to restrict a reversed or self-referential NFA to a chosen set of starting points.
    pub(crate) fn with_initial_states(mut self, initial_states: Vec<usize>) -> Self {
        self.initial_states = initial_states;
        self
    }

    fn epsilon_closure(&self, seeds: impl IntoIterator<Item = usize>) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut stack: Vec<usize> = seeds.into_iter().collect();
        stack.iter().for_each(|&s| {
            seen.insert(s);
        });
        while let Some(s) = stack.pop() {
            for &next in &self.states[s].epsilon {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Builds `concatenate(a, b)` as an epsilon-NFA: every final of `a` gets an epsilon edge into
    /// every initial state of `b`; only `b`'s finals remain accepting.
    pub(crate) fn concatenate(a: &Dfa, b: &Dfa) -> Nfa {
        let mut a_nfa = Nfa::from_dfa(a);
        let offset = a_nfa.states.len();
        let b_nfa = Nfa::from_dfa(b);
        let a_finals: Vec<usize> = a_nfa
            .states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.accepting)
            .map(|(i, _)| i)
            .collect();
        for s in a_nfa.states.iter_mut() {
            s.accepting = false;
        }
        for state in b_nfa.states {
            a_nfa.states.push(NfaState {
                accepting: state.accepting,
                epsilon: state.epsilon.iter().map(|e| e + offset).collect(),
                transitions: state
                    .transitions
                    .into_iter()
                    .map(|(c, t)| (c, t + offset))
                    .collect(),
            });
        }
        let b_initial_shifted: Vec<usize> =
            b_nfa.initial_states.iter().map(|i| i + offset).collect();
        for &f in &a_finals {
            a_nfa.states[f].epsilon.extend(b_initial_shifted.iter());
        }
        a_nfa
    }

    /// Builds `star(a)`: a fresh accepting initial state epsilon-linked to `a`'s initial states,
    /// with every final of `a` looping an epsilon edge back to the fresh state.
    pub(crate) fn star(a: &Dfa) -> Nfa {
        let mut nfa = Nfa::from_dfa(a);
        let new_start = nfa.states.len();
        let old_initial = nfa.initial_states.clone();
        nfa.states.push(NfaState {
            accepting: true,
            epsilon: old_initial,
            transitions: vec![],
        });
        let finals: Vec<usize> = nfa
            .states
            .iter()
            .enumerate()
            .filter(|(i, s)| s.accepting && *i != new_start)
            .map(|(i, _)| i)
            .collect();
        for f in finals {
            nfa.states[f].epsilon.push(new_start);
        }
        nfa.initial_states = vec![new_start];
        nfa
    }

    /// Reverses every edge and swaps initial/final roles: the new initial states are `a`'s old
    /// finals (collapsed under one fresh accepting root epsilon-linked to all of them is not
    /// needed, since subset construction already supports multiple initial states directly), and
    /// the new accepting states are `a`'s old initial states.
    pub(crate) fn reverse(a: &Dfa) -> Nfa {
        let n = a.states().len();
        let mut states: Vec<NfaState> = (0..n)
            .map(|i| NfaState {
                accepting: i == a.initial_state_index(),
                epsilon: vec![],
                transitions: vec![],
            })
            .collect();
        for (from, state) in a.states().iter().enumerate() {
            for (class, to) in state.transitions() {
                states[*to].transitions.push((class.clone(), from));
            }
        }
        let initial_states: Vec<usize> = a
            .states()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_accepting())
            .map(|(i, _)| i)
            .collect();
        Nfa {
            states,
            initial_states,
        }
    }

    /// Subset construction: converts this epsilon-NFA into an equivalent DFA. States are keyed by
    /// their sorted set of underlying NFA state indices so exploration order (and therefore state
    /// numbering before normalization) is deterministic.
    pub(crate) fn to_dfa(&self) -> Dfa {
        let start_set = {
            let mut v = self.epsilon_closure(self.initial_states.iter().copied());
            v.sort_unstable();
            v
        };

        let mut set_to_idx: HashMap<Vec<usize>, usize> = HashMap::new();
        set_to_idx.insert(start_set.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(start_set.clone());

        let mut transitions_by_set: HashMap<Vec<usize>, Vec<(SymbolClass, Vec<usize>)>> =
            HashMap::new();

        while let Some(set) = queue.pop_front() {
            let classes: Vec<&SymbolClass> = set
                .iter()
                .flat_map(|&s| self.states[s].transitions.iter().map(|(c, _)| c))
                .collect();
            if classes.is_empty() {
                transitions_by_set.insert(set.clone(), vec![]);
                continue;
            }
            let universe = classes
                .iter()
                .fold(SymbolClass::empty(), |acc, c| acc.union(c));
            let atoms = SymbolClass::partition(&universe, &classes);

            let mut out = vec![];
            for atom in atoms {
                let sym = atom.first_symbol().expect("non-empty atom");
                let mut targets = vec![];
                for &s in &set {
                    for (class, to) in &self.states[s].transitions {
                        if class.contains(sym) {
                            targets.push(*to);
                        }
                    }
                }
                if targets.is_empty() {
                    continue;
                }
                let mut target_set = self.epsilon_closure(targets);
                target_set.sort_unstable();
                if !set_to_idx.contains_key(&target_set) {
                    let idx = set_to_idx.len();
                    set_to_idx.insert(target_set.clone(), idx);
                    queue.push_back(target_set.clone());
                }
                out.push((atom, target_set));
            }
            transitions_by_set.insert(set, out);
        }

        let mut ordered_sets = vec![Vec::new(); set_to_idx.len()];
        for (set, idx) in &set_to_idx {
            ordered_sets[*idx] = set.clone();
        }

        let states = ordered_sets
            .iter()
            .enumerate()
            .map(|(idx, set)| {
                let is_accepting = set.iter().any(|&s| self.states[s].accepting);
                let transitions = transitions_by_set
                    .get(set)
                    .map(|v| {
                        v.iter()
                            .map(|(class, target_set)| (class.clone(), set_to_idx[target_set]))
                            .collect()
                    })
                    .unwrap_or_default();
                let _ = idx;
                DfaState::new(is_accepting, transitions)
            })
            .collect();

        Dfa::from_parts(states, 0)
    }
}
