//! # Deterministic finite automaton over symbol-class transitions
//!
//! A [`Dfa`] is the central data structure of the engine: states, a total transition function
//! induced by looking a symbol up in a state's sorted [`SymbolClass`] edges, an implicit
//! **oblivion** state for symbols not covered by any edge, and the algebra (union, intersection,
//! concatenation, star, repetition, complement, reverse) needed to compile ABNF alternations and
//! analyse the resulting languages.
//!
//! DFAs are immutable values: every combinator takes `&self` and returns a new, minimized,
//! normalized `Dfa`. There is no interior mutability and no in-place mutation exposed publicly.
use crate::alphabet::{Symbol, SymbolClass};
use crate::error::AlphabetUnspecified;
use crate::nfa::Nfa;
use std::collections::{HashMap, HashSet, VecDeque};

pub mod eval;
pub use eval::DfaEvaluator;

/// A single state: whether it accepts, and its out-edges as `(label, target)` pairs. Labels are
/// pairwise disjoint; a symbol not covered by any label transitions to the implicit oblivion
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DfaState {
    accepting: bool,
    transitions: Vec<(SymbolClass, usize)>,
}

impl DfaState {
    pub(crate) fn new(accepting: bool, mut transitions: Vec<(SymbolClass, usize)>) -> Self {
        transitions.sort_by(|a, b| a.0.cmp(&b.0));
        DfaState {
            accepting,
            transitions,
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn transitions(&self) -> &[(SymbolClass, usize)] {
        &self.transitions
    }
}

/// A deterministic finite automaton over closed-range symbol classes. See the module
/// documentation for the invariants it upholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    initial_state: usize,
}

impl Dfa {
    pub(crate) fn from_parts(states: Vec<DfaState>, initial_state: usize) -> Self {
        Dfa {
            states,
            initial_state,
        }
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn initial_state_index(&self) -> usize {
        self.initial_state
    }

    pub fn initial_state(&self) -> &DfaState {
        &self.states[self.initial_state]
    }

    // ---- construction primitives (§4.2.1) ----

    /// The DFA accepting no strings at all.
    pub fn empty() -> Self {
        Dfa {
            states: vec![DfaState::new(false, vec![])],
            initial_state: 0,
        }
    }

    /// The DFA accepting exactly the empty string.
    pub fn epsilon() -> Self {
        Dfa {
            states: vec![DfaState::new(true, vec![])],
            initial_state: 0,
        }
    }

    /// The DFA accepting exactly the one-symbol string `[s]`.
    pub fn symbol(s: Symbol) -> Self {
        Self::range(s, s)
    }

    /// The DFA accepting any one-symbol string `[c]` with `lo <= c <= hi`.
    pub fn range(lo: Symbol, hi: Symbol) -> Self {
        Dfa {
            states: vec![
                DfaState::new(false, vec![(SymbolClass::range(lo, hi), 1)]),
                DfaState::new(true, vec![]),
            ],
            initial_state: 0,
        }
    }

    /// The DFA accepting exactly the given sequence of symbols.
    pub fn from_sequence(seq: &[Symbol]) -> Self {
        if seq.is_empty() {
            return Self::epsilon();
        }
        let states = seq
            .iter()
            .enumerate()
            .map(|(i, &sym)| {
                DfaState::new(false, vec![(SymbolClass::single(sym), i + 1)])
            })
            .chain(std::iter::once(DfaState::new(true, vec![])))
            .collect();
        Dfa {
            states,
            initial_state: 0,
        }
    }

    // ---- queries (§4.2.4) ----

    pub fn evaluator(&self) -> DfaEvaluator<'_> {
        self.into()
    }

    /// Looks up the transition from `state` on `symbol`. `None` is the oblivion marker.
    pub fn next_state(&self, state: usize, symbol: Symbol) -> Option<usize> {
        self.states[state]
            .transitions
            .iter()
            .find(|(class, _)| class.contains(symbol))
            .map(|(_, target)| *target)
    }

    /// Follows `seq` from `state`, oblivion-absorbing. Mirrors [`Dfa::next_state`] but for a whole
    /// sequence.
    pub fn next_state_seq(&self, state: usize, seq: &[Symbol]) -> Option<usize> {
        seq.iter()
            .try_fold(state, |s, &sym| self.next_state(s, sym))
    }

    pub fn contains(&self, seq: &[Symbol]) -> bool {
        self.next_state_seq(self.initial_state, seq)
            .is_some_and(|s| self.states[s].accepting)
    }

    /// Whether any final state is reachable from the initial state.
    pub fn is_empty(&self) -> bool {
        !self
            .reachable_state_idx()
            .into_iter()
            .any(|i| self.states[i].accepting)
    }

    /// Bisimulation-based equivalence check: explores paired reachable states of `self` and
    /// `other` and fails as soon as one pair disagrees on acceptance. Far cheaper than building
    /// the full symmetric difference.
    pub fn equals(&self, other: &Dfa) -> bool {
        let mut to_explore = vec![(self.initial_state, other.initial_state)];
        let mut explored: HashSet<(usize, usize)> = HashSet::from([(self.initial_state, other.initial_state)]);
        while let Some((s1, s2)) = to_explore.pop() {
            if self.states[s1].accepting != other.states[s2].accepting {
                return false;
            }
            let classes: Vec<&SymbolClass> = self.states[s1]
                .transitions
                .iter()
                .map(|(c, _)| c)
                .chain(other.states[s2].transitions.iter().map(|(c, _)| c))
                .collect();
            if classes.is_empty() {
                continue;
            }
            let universe = classes
                .iter()
                .fold(SymbolClass::empty(), |acc, c| acc.union(c));
            for atom in SymbolClass::partition(&universe, &classes) {
                let sym = atom.first_symbol().expect("non-empty atom");
                let t1 = self.next_state(s1, sym);
                let t2 = other.next_state(s2, sym);
                match (t1, t2) {
                    (None, None) => {}
                    (Some(a), Some(b)) => {
                        if explored.insert((a, b)) {
                            to_explore.push((a, b));
                        }
                    }
                    _ => return false,
                }
            }
        }
        true
    }

    pub fn reachable_state_idx(&self) -> HashSet<usize> {
        let mut reachable = HashSet::from([self.initial_state]);
        let mut frontier = reachable.clone();
        while !frontier.is_empty() {
            frontier = frontier
                .iter()
                .flat_map(|&s| self.states[s].transitions.iter().map(|(_, t)| *t))
                .filter(|t| reachable.insert(*t))
                .collect();
        }
        reachable
    }

    /// A state from which no final state is reachable: a dead end, indistinguishable from
    /// oblivion from the acceptance point of view.
    fn live_state_idx(&self) -> HashSet<usize> {
        // Backward BFS from every accepting state over the reversed transition relation.
        let mut predecessors: HashMap<usize, Vec<usize>> = HashMap::new();
        for (from, state) in self.states.iter().enumerate() {
            for (_, to) in &state.transitions {
                predecessors.entry(*to).or_default().push(from);
            }
        }
        let mut live: HashSet<usize> = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.accepting)
            .map(|(i, _)| i)
            .collect();
        let mut frontier: Vec<usize> = live.iter().copied().collect();
        while let Some(s) = frontier.pop() {
            if let Some(preds) = predecessors.get(&s) {
                for &p in preds {
                    if live.insert(p) {
                        frontier.push(p);
                    }
                }
            }
        }
        live
    }

    /// DFA whose initial state is `nextState(q0, prefix)` — the left quotient by one concrete
    /// string. Returns [`Dfa::empty`] if `prefix` leads to oblivion (there is no live state to
    /// start from).
    pub fn derive_by(&self, prefix: &[Symbol]) -> Dfa {
        match self.next_state_seq(self.initial_state, prefix) {
            Some(s) => Dfa {
                states: self.states.clone(),
                initial_state: s,
            }
            .minimize(),
            None => Dfa::empty(),
        }
    }

    /// `dock(self, other)`: the largest language `P` such that `P . other ⊆ self`. A state `q` of
    /// `self` is included in `P`'s acceptance iff the language of `self` rooted at `q` is a
    /// superset of `other`'s language, i.e. `other`'s language is fully contained no matter where
    /// `other` "resumes" matching.
    pub fn dock(&self, other: &Dfa) -> Dfa {
        let accepting: Vec<bool> = (0..self.states.len())
            .map(|q| {
                let rooted = Dfa {
                    states: self.states.clone(),
                    initial_state: q,
                };
                other.difference(&rooted).is_empty()
            })
            .collect();
        let states = self
            .states
            .iter()
            .enumerate()
            .map(|(i, s)| DfaState::new(accepting[i], s.transitions.clone()))
            .collect();
        Dfa {
            states,
            initial_state: self.initial_state,
        }
        .minimize()
    }

    /// Generalized language-derivative: the union, over every string `w` accepted by `other`, of
    /// `self.derive_by(w)`. Implemented by stepping `self` and `other` in lockstep; whenever the
    /// `other` side lands on one of its accepting states, the paired `self` state becomes a
    /// candidate initial state of the result (an NFA with multiple initial states, then
    /// determinised).
    ///
    /// Resolves the source's asymmetric "dock"/"derive" pair by following §4.7's literal formula
    /// (`A.dock(A)`, `B.derive(B)`) rather than the alternate swapped pairing mentioned in the
    /// design notes — see DESIGN.md.
    pub fn derive_lang(&self, other: &Dfa) -> Dfa {
        let mut candidates = HashSet::new();
        let mut to_explore = vec![(self.initial_state, other.initial_state)];
        let mut explored: HashSet<(usize, usize)> = HashSet::from([(self.initial_state, other.initial_state)]);
        if other.states[other.initial_state].accepting {
            candidates.insert(self.initial_state);
        }
        while let Some((s1, s2)) = to_explore.pop() {
            let classes: Vec<&SymbolClass> = self.states[s1]
                .transitions
                .iter()
                .map(|(c, _)| c)
                .chain(other.states[s2].transitions.iter().map(|(c, _)| c))
                .collect();
            if classes.is_empty() {
                continue;
            }
            let universe = classes
                .iter()
                .fold(SymbolClass::empty(), |acc, c| acc.union(c));
            for atom in SymbolClass::partition(&universe, &classes) {
                let sym = atom.first_symbol().expect("non-empty atom");
                if let (Some(a), Some(b)) = (self.next_state(s1, sym), other.next_state(s2, sym)) {
                    if other.states[b].accepting {
                        candidates.insert(a);
                    }
                    if explored.insert((a, b)) {
                        to_explore.push((a, b));
                    }
                }
            }
        }

        let nfa = Nfa::from_dfa(self).with_initial_states(candidates.into_iter().collect());
        nfa.to_dfa().minimize()
    }

    /// `equivalentInputs(seq)`: if `seq` leads to a live state `q`, the DFA of strings that reach
    /// `q` from the initial state (every input behaviourally identical to `seq`). If `seq` leads
    /// to oblivion or a dead (non-live) state, returns [`Dfa::empty`] as the "non-live" marker.
    pub fn equivalent_inputs(&self, seq: &[Symbol]) -> Dfa {
        let live = self.live_state_idx();
        match self.next_state_seq(self.initial_state, seq) {
            Some(q) if live.contains(&q) => {
                // `reverse(self)` has edges pointing the other way and accepts iff a path leads
                // back to `self`'s own initial state; restricting its initial state to `q` and
                // determinising yields the *reverse* of every string that reaches `q`. Reversing
                // once more restores forward orientation.
                let restricted = Nfa::reverse(self).with_initial_states(vec![q]);
                restricted.to_dfa().reverse()
            }
            _ => Dfa::empty(),
        }
    }

    // ---- combinators (§4.2.2) ----

    fn product(&self, other: &Dfa, combinator: impl Fn(bool, bool) -> bool) -> Dfa {
        // Keys are (Option<self-state>, Option<other-state>); `None` denotes that side's oblivion.
        type Key = (Option<usize>, Option<usize>);
        let start: Key = (Some(self.initial_state), Some(other.initial_state));
        let mut index: HashMap<Key, usize> = HashMap::new();
        index.insert(start, 0);
        let mut queue = VecDeque::from([start]);
        let mut built: Vec<(bool, Vec<(SymbolClass, Key)>)> = vec![];

        while let Some(key) = queue.pop_front() {
            let (k1, k2) = key;
            let accepting = combinator(
                k1.map_or(false, |s| self.states[s].accepting),
                k2.map_or(false, |s| other.states[s].accepting),
            );
            if k1.is_none() && k2.is_none() {
                // Both sides permanently oblivious: an absorbing state with no transitions (if
                // rejecting, it is simply never referenced further by real output edges; if
                // accepting, callers still get a correct, if non-minimal, automaton here — the
                // final minimize() pass folds it together with any other dead accepting sink).
                built.push((accepting, vec![]));
                continue;
            }
            let classes: Vec<&SymbolClass> = k1
                .map(|s| self.states[s].transitions.iter().map(|(c, _)| c))
                .into_iter()
                .flatten()
                .chain(
                    k2.map(|s| other.states[s].transitions.iter().map(|(c, _)| c))
                        .into_iter()
                        .flatten(),
                )
                .collect();
            let mut edges = vec![];
            if !classes.is_empty() {
                let universe = classes
                    .iter()
                    .fold(SymbolClass::empty(), |acc, c| acc.union(c));
                for atom in SymbolClass::partition(&universe, &classes) {
                    let sym = atom.first_symbol().expect("non-empty atom");
                    let t1 = k1.and_then(|s| self.next_state(s, sym));
                    let t2 = k2.and_then(|s| other.next_state(s, sym));
                    let target_key = (t1, t2);
                    if target_key == (None, None) && !combinator(false, false) {
                        continue;
                    }
                    if !index.contains_key(&target_key) {
                        let idx = index.len();
                        index.insert(target_key, idx);
                        queue.push_back(target_key);
                    }
                    edges.push((atom, target_key));
                }
            }
            built.push((accepting, edges));
        }

        let states = built
            .into_iter()
            .map(|(accepting, edges)| {
                let transitions = edges
                    .into_iter()
                    .map(|(class, key)| (class, index[&key]))
                    .collect();
                DfaState::new(accepting, transitions)
            })
            .collect();
        Dfa {
            states,
            initial_state: 0,
        }
        .minimize()
    }

    pub fn union(&self, other: &Dfa) -> Dfa {
        self.product(other, |a, b| a || b)
    }

    pub fn intersection(&self, other: &Dfa) -> Dfa {
        self.product(other, |a, b| a && b)
    }

    pub fn difference(&self, other: &Dfa) -> Dfa {
        self.product(other, |a, b| a && !b)
    }

    pub fn symmetric_difference(&self, other: &Dfa) -> Dfa {
        self.product(other, |a, b| a != b)
    }

    pub fn concatenate(&self, other: &Dfa) -> Dfa {
        Nfa::concatenate(self, other).to_dfa().minimize()
    }

    pub fn star(&self) -> Dfa {
        Nfa::star(self).to_dfa().minimize()
    }

    /// `repeat(self, min, max)`: `min` mandatory copies followed by `max - min` optional copies,
    /// or a trailing star if `max` is `None` (unbounded).
    pub fn repeat(&self, min: usize, max: Option<usize>) -> Dfa {
        if let Some(max) = max {
            assert!(min <= max, "repeat: min must be <= max");
        }
        let mut result = Dfa::epsilon();
        for _ in 0..min {
            result = result.concatenate(self);
        }
        match max {
            None => result.concatenate(&self.star()),
            Some(max) => {
                let optional = self.union(&Dfa::epsilon());
                for _ in 0..(max - min) {
                    result = result.concatenate(&optional);
                }
                result
            }
        }
    }

    /// Completes the transition relation over `universe` by materializing an explicit oblivion
    /// ("trap") state and routing every previously-missing edge into it.
    fn complete(&self, universe: &SymbolClass) -> Dfa {
        let trap = self.states.len();
        let mut states: Vec<DfaState> = self
            .states
            .iter()
            .map(|s| {
                let covered = s
                    .transitions
                    .iter()
                    .fold(SymbolClass::empty(), |acc, (c, _)| acc.union(c));
                let missing = universe.difference(&covered);
                let mut transitions = s.transitions.clone();
                if !missing.is_empty() {
                    transitions.push((missing, trap));
                }
                DfaState::new(s.accepting, transitions)
            })
            .collect();
        states.push(DfaState::new(false, vec![(universe.clone(), trap)]));
        Dfa {
            states,
            initial_state: self.initial_state,
        }
    }

    /// `complement(self, universe)`: completes the transition relation over `universe`, then
    /// swaps every state's acceptance bit (including the materialized trap, which becomes an
    /// accepting absorbing state — correct, since falling into the trap under `self` means `self`
    /// can never accept any continuation, so the complement must accept all of them).
    pub fn complement(&self, universe: Option<&SymbolClass>) -> Result<Dfa, AlphabetUnspecified> {
        let universe = universe.ok_or(AlphabetUnspecified)?;
        let completed = self.complete(universe);
        let states = completed
            .states
            .into_iter()
            .map(|s| DfaState::new(!s.accepting, s.transitions))
            .collect();
        Ok(Dfa {
            states,
            initial_state: completed.initial_state,
        }
        .minimize())
    }

    /// Classic reversal followed by determinisation: swaps initial/final roles and inverts every
    /// edge. Used standalone and as the inner step of Brzozowski-style double reversal, though
    /// this crate's own [`Dfa::minimize`] uses Hopcroft partition refinement instead.
    pub fn reverse(&self) -> Dfa {
        Nfa::reverse(self).to_dfa().minimize()
    }

    // ---- minimization & normalization (§4.2.3) ----

    /// Removes unreachable states (pure graph reachability, independent of symbol-class
    /// structure) and merges Hopcroft-equivalent states, then normalizes. The result is the
    /// unique minimal, normalized DFA for the language.
    pub fn minimize(&self) -> Dfa {
        self.remove_unreachable_states().merge_equivalent_states().normalize()
    }

    fn remove_unreachable_states(&self) -> Dfa {
        let reachable = self.reachable_state_idx();
        let mut sorted: Vec<usize> = reachable.into_iter().collect();
        sorted.sort_unstable();
        let remap: HashMap<usize, usize> = sorted
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();
        let states = sorted
            .iter()
            .map(|&old| {
                let s = &self.states[old];
                let transitions = s
                    .transitions
                    .iter()
                    .filter(|(_, t)| remap.contains_key(t))
                    .map(|(c, t)| (c.clone(), remap[t]))
                    .collect();
                DfaState::new(s.accepting, transitions)
            })
            .collect();
        Dfa {
            states,
            initial_state: remap[&self.initial_state],
        }
    }

    /// Hopcroft partition refinement, adapted to operate over a per-DFA atom partition (the
    /// finest common refinement of every transition label) instead of a small discrete alphabet,
    /// reusing the classic worklist/partition bookkeeping.
    fn merge_equivalent_states(&self) -> Dfa {
        let n = self.states.len();
        if n <= 1 {
            return self.clone();
        }
        let classes: Vec<&SymbolClass> = self
            .states
            .iter()
            .flat_map(|s| s.transitions.iter().map(|(c, _)| c))
            .collect();
        if classes.is_empty() {
            // No transitions anywhere: states differ only by acceptance.
            let (finals, nonfinals): (HashSet<usize>, HashSet<usize>) =
                (0..n).partition(|&i| self.states[i].accepting);
            let blocks: Vec<HashSet<usize>> =
                [finals, nonfinals].into_iter().filter(|b| !b.is_empty()).collect();
            return self.merge_by_partition(blocks);
        }
        let universe = classes
            .iter()
            .fold(SymbolClass::empty(), |acc, c| acc.union(c));
        let atoms = SymbolClass::partition(&universe, &classes);
        // trap = an extra virtual destination representing oblivion, so the transition function
        // below is total over `atoms` and standard Hopcroft applies unmodified.
        let trap = n;
        let flat: Vec<Vec<usize>> = self
            .states
            .iter()
            .map(|s| {
                atoms
                    .iter()
                    .map(|atom| {
                        let sym = atom.first_symbol().expect("non-empty atom");
                        s.transitions
                            .iter()
                            .find(|(c, _)| c.contains(sym))
                            .map(|(_, t)| *t)
                            .unwrap_or(trap)
                    })
                    .collect()
            })
            .chain(std::iter::once(vec![trap; atoms.len()]))
            .collect();

        let (finals, nonfinals): (HashSet<usize>, HashSet<usize>) =
            (0..=n).partition(|&i| i != trap && self.states[i].accepting);
        let mut p = if finals.is_empty() {
            vec![nonfinals]
        } else if nonfinals.is_empty() {
            vec![finals]
        } else {
            vec![finals, nonfinals]
        };
        let mut w = p.clone();

        while let Some(a) = w.pop() {
            for c in 0..atoms.len() {
                let x: HashSet<usize> = (0..flat.len()).filter(|&i| a.contains(&flat[i][c])).collect();
                p = p
                    .into_iter()
                    .flat_map(|y| {
                        let inter: HashSet<usize> = x.intersection(&y).copied().collect();
                        let diff: HashSet<usize> = y.difference(&x).copied().collect();
                        if !inter.is_empty() && !diff.is_empty() {
                            if let Some(idx) = w.iter().position(|hs| hs == &y) {
                                w.swap_remove(idx);
                                w.push(inter.clone());
                                w.push(diff.clone());
                            } else if inter.len() <= diff.len() {
                                w.push(inter.clone());
                            } else {
                                w.push(diff.clone());
                            }
                            vec![inter, diff]
                        } else {
                            vec![y]
                        }
                    })
                    .collect();
            }
        }

        // Drop the trap's own singleton block (if it survived as its own class, it carries no
        // real state and must not be emitted).
        let p: Vec<HashSet<usize>> = p
            .into_iter()
            .map(|mut block| {
                block.remove(&trap);
                block
            })
            .filter(|b| !b.is_empty())
            .collect();
        self.merge_by_partition(p)
    }

    fn merge_by_partition(&self, classes: Vec<HashSet<usize>>) -> Dfa {
        // Deterministic representative: the smallest original index in each class.
        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut reps: Vec<usize> = vec![];
        for class in &classes {
            let rep = *class.iter().min().expect("equivalence classes are non-empty");
            reps.push(rep);
            for &member in class {
                remap.insert(member, rep);
            }
        }
        let mut rep_list: Vec<usize> = reps;
        rep_list.sort_unstable();
        rep_list.dedup();
        let rep_idx: HashMap<usize, usize> = rep_list
            .iter()
            .enumerate()
            .map(|(i, &r)| (r, i))
            .collect();

        let states = rep_list
            .iter()
            .map(|&rep| {
                let s = &self.states[rep];
                let transitions = s
                    .transitions
                    .iter()
                    .map(|(c, t)| (c.clone(), rep_idx[&remap[t]]))
                    .collect();
                DfaState::new(s.accepting, transitions)
            })
            .collect();
        Dfa {
            states,
            initial_state: rep_idx[&remap[&self.initial_state]],
        }
    }

    /// Renumbers states by breadth-first visit order from the initial state and sorts each
    /// state's outgoing edges by the lexicographic order of their label's first range, so
    /// structurally identical languages produce byte-identical values.
    pub fn normalize(&self) -> Dfa {
        let mut order = vec![self.initial_state];
        let mut seen: HashSet<usize> = HashSet::from([self.initial_state]);
        let mut i = 0;
        while i < order.len() {
            let current = order[i];
            i += 1;
            // `transitions` is already kept sorted by label (see `DfaState::new`); enqueuing in
            // that order, not by target index, is what makes two differently-constructed but
            // equivalent minimal DFAs normalize to byte-identical state numbering.
            for (_, t) in &self.states[current].transitions {
                if seen.insert(*t) {
                    order.push(*t);
                }
            }
        }
        let new_idx: HashMap<usize, usize> = order
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();
        let states = order
            .iter()
            .map(|&old| {
                let s = &self.states[old];
                let mut transitions: Vec<(SymbolClass, usize)> = s
                    .transitions
                    .iter()
                    .map(|(c, t)| (c.clone(), new_idx[t]))
                    .collect();
                transitions.sort_by(|a, b| a.0.cmp(&b.0));
                DfaState::new(s.accepting, transitions)
            })
            .collect();
        Dfa {
            states,
            initial_state: 0,
        }
    }

    /// The alphabet partition (§4.1): the finest set of disjoint symbol classes such that every
    /// transition in this DFA labels its edge with a union of whole classes.
    pub fn alphabet(&self) -> Vec<SymbolClass> {
        let classes: Vec<&SymbolClass> = self
            .states
            .iter()
            .flat_map(|s| s.transitions.iter().map(|(c, _)| c))
            .collect();
        if classes.is_empty() {
            return vec![];
        }
        let universe = classes
            .iter()
            .fold(SymbolClass::empty(), |acc, c| acc.union(c));
        SymbolClass::partition(&universe, &classes)
    }
}
