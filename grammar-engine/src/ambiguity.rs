//! Concatenation-ambiguity analysis (§4.7): given two DFAs `a` and `b`, decides whether a string
//! accepted by `a.concatenate(b)` can be split into `(prefix, suffix)` in more than one way, and
//! if so produces the overlap language witnessing it.
use crate::dfa::Dfa;

/// The result of analysing `a . b` for split-point ambiguity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcatAmbiguity {
    /// Non-empty iff the concatenation is ambiguous: the language of strings that are
    /// simultaneously a valid *non-trivial* suffix-continuation of `a` and a valid
    /// self-prefix-continuation of `b`.
    pub overlap: Dfa,
}

impl ConcatAmbiguity {
    pub fn is_ambiguous(&self) -> bool {
        !self.overlap.is_empty()
    }
}

/// Decides whether `a.concatenate(b)` has more than one valid split point, following the
/// formula `overlap := a.dock(a) ∩ b.derive(b)`: `a.dock(a)` is the language of strings `a`
/// could still accept after having already matched a copy of itself (i.e. `a` restarting inside
/// its own acceptance), and `b.derive(b)` is the generalized derivative of `b` with respect to
/// itself (every continuation reachable by re-entering `b` from one of `b`'s own accepting
/// states). Their intersection is exactly the set of strings that can be read as "the tail of one
/// match of `a` and simultaneously the head of another match of `b`" — a witness that the split
/// point between `a` and `b` is not unique.
pub fn analyse_concat_ambiguity(a: &Dfa, b: &Dfa) -> ConcatAmbiguity {
    let a_restart = a.dock(a);
    let b_restart = b.derive_lang(b);
    ConcatAmbiguity {
        overlap: a_restart.intersection(&b_restart),
    }
}

/// `equivalentInputs` convenience wrapper matching the engine's top-level operation naming: all
/// inputs behaviourally identical to `seq` under `dfa`.
pub fn equivalent_inputs(dfa: &Dfa, seq: &[crate::alphabet::Symbol]) -> Dfa {
    dfa.equivalent_inputs(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::Dfa;

    fn ascii(s: &str) -> Vec<crate::alphabet::Symbol> {
        s.bytes().map(|b| b as u32).collect()
    }

    #[test]
    fn unambiguous_fixed_length_concat() {
        // "ab" . "cd": no way to reassign characters between the two fixed strings.
        let a = Dfa::from_sequence(&ascii("ab"));
        let b = Dfa::from_sequence(&ascii("cd"));
        let result = analyse_concat_ambiguity(&a, &b);
        assert!(!result.is_ambiguous());
    }

    #[test]
    fn ambiguous_when_a_suffix_overlaps_b_prefix() {
        // a = "fo"|"foo", b = "o"|"obar": "foo" . "obar" also reads as "fo" . "oobar"? Use a
        // clean classic case instead: a = (a)* , b = (a)* — every split point is equally valid.
        let unit = Dfa::symbol('a' as u32);
        let a = unit.star();
        let b = unit.star();
        let result = analyse_concat_ambiguity(&a, &b);
        assert!(result.is_ambiguous());
    }
}
