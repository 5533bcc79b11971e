//! Stepping a [`Dfa`] symbol by symbol without committing to an acceptance verdict until the
//! caller asks for one — mirrors the crate's evaluator-based approach to word acceptance, adapted
//! from a single fixed alphabet to symbol-class lookup.
use super::Dfa;
use crate::alphabet::Symbol;

/// Tracks the current state of a [`Dfa`] while consuming symbols one at a time. `None` means the
/// evaluator has fallen into the oblivion state: no further symbol can bring it back to life.
#[derive(Clone, Debug)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current: Option<usize>,
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(dfa: &'a Dfa) -> Self {
        DfaEvaluator {
            dfa,
            current: Some(dfa.initial_state_index()),
        }
    }
}

impl<'a> DfaEvaluator<'a> {
    /// Steps the evaluator on one symbol, returning the new current state if live.
    pub fn step(&mut self, symbol: Symbol) -> Option<&'a super::DfaState> {
        self.current = self
            .current
            .and_then(|idx| self.dfa.next_state(idx, symbol));
        self.current_state()
    }

    pub fn step_multiple(&mut self, symbols: &[Symbol]) {
        for &s in symbols {
            if self.current.is_none() {
                break;
            }
            self.step(s);
        }
    }

    pub fn current_state(&self) -> Option<&'a super::DfaState> {
        self.current.map(|idx| &self.dfa.states()[idx])
    }

    pub fn current_state_idx(&self) -> Option<usize> {
        self.current
    }

    pub fn is_accepting(&self) -> bool {
        self.current_state().map_or(false, |s| s.is_accepting())
    }
}
