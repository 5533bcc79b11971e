//! DFA-to-regex synthesis by state elimination (the classic Brzozowski–McCluskey / Kleene
//! algorithm): a fresh start state epsilon-linked to the DFA's initial state and a fresh final
//! state epsilon-linked from every accepting state are added to a transition matrix of
//! [`RegexTree`]s, then every original state is eliminated one at a time, folding its self-loop
//! and through-paths into the labels of its neighbours, until only the start/final edge remains.
use super::tree::RegexTree;
use crate::dfa::Dfa;

/// Synthesizes a regex tree equivalent to `dfa`'s language. The result is dialect-agnostic; pass
/// it to [`crate::regex::dialect::emit`] to render concrete syntax.
pub fn synthesize(dfa: &Dfa) -> RegexTree {
    let n = dfa.states().len();
    let start = n;
    let finish = n + 1;
    let size = n + 2;

    let mut r = vec![vec![RegexTree::EmptySet; size]; size];
    r[start][dfa.initial_state_index()] = RegexTree::EmptyString;
    for (i, state) in dfa.states().iter().enumerate() {
        if state.is_accepting() {
            r[i][finish] = RegexTree::union(r[i][finish].clone(), RegexTree::EmptyString);
        }
        for (class, target) in state.transitions() {
            r[i][*target] = RegexTree::union(r[i][*target].clone(), RegexTree::Class(class.clone()));
        }
    }

    for k in 0..n {
        let loop_through_k = RegexTree::star(r[k][k].clone());
        for i in 0..size {
            if i == k || matches!(r[i][k], RegexTree::EmptySet) {
                continue;
            }
            for j in 0..size {
                if j == k || matches!(r[k][j], RegexTree::EmptySet) {
                    continue;
                }
                let via_k = RegexTree::concat(
                    RegexTree::concat(r[i][k].clone(), loop_through_k.clone()),
                    r[k][j].clone(),
                );
                r[i][j] = RegexTree::union(r[i][j].clone(), via_k);
            }
        }
    }

    r[start][finish].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SymbolClass;

    #[test]
    fn single_symbol_dfa_synthesizes_to_one_class() {
        let dfa = Dfa::symbol(b'a' as u32);
        let tree = synthesize(&dfa);
        assert_eq!(tree, RegexTree::Class(SymbolClass::single(b'a' as u32)));
    }

    #[test]
    fn star_of_symbol_synthesizes_with_a_star_node() {
        let dfa = Dfa::symbol(b'a' as u32).star();
        let tree = synthesize(&dfa);
        assert!(matches!(tree, RegexTree::Star(_)));
    }

    #[test]
    fn empty_language_synthesizes_to_empty_set() {
        assert_eq!(synthesize(&Dfa::empty()), RegexTree::EmptySet);
    }
}
