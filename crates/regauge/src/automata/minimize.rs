//! # DFA Minimization
//!
//! Partition refinement over language-equivalence classes. The initial
//! partition splits accepting from non-accepting states; classes are then
//! refined on transition signatures until a fixed point. A missing
//! transition behaves as one implicit "undefined" class shared by every
//! state lacking it, so partial automata minimize soundly.

use std::collections::{BTreeMap, BTreeSet};

use crate::alphabet::Symbol;
use crate::automata::dfa::Dfa;
use crate::types::StateId;

/// Minimize `dfa`: merge language-equivalent states, drop unreachable ones.
///
/// Idempotent: minimizing a minimized automaton changes nothing. The
/// completion-alphabet record, if any, is preserved (totality survives
/// merging, the dead state being its own equivalence class).
pub fn minimize(dfa: &Dfa) -> Dfa {
    if dfa.num_states() == 0 {
        return dfa.clone();
    }

    let reachable = reachable_states(dfa);

    let mut class: BTreeMap<StateId, usize> = BTreeMap::new();
    for &state in &reachable {
        class.insert(state, usize::from(dfa.is_accepting(state)));
    }

    loop {
        let mut buckets: BTreeMap<(usize, Vec<(Symbol, usize)>), Vec<StateId>> = BTreeMap::new();
        for &state in &reachable {
            let signature: Vec<(Symbol, usize)> = dfa
                .transitions_from(state)
                .map(|(symbol, destination)| (symbol, class[&destination]))
                .collect();
            buckets
                .entry((class[&state], signature))
                .or_default()
                .push(state);
        }

        let class_count = class.values().collect::<BTreeSet<_>>().len();
        if buckets.len() == class_count {
            break;
        }
        for (next_class, (_, members)) in buckets.into_iter().enumerate() {
            for state in members {
                class.insert(state, next_class);
            }
        }
    }

    // One representative per class; classes numbered by lowest member so the
    // rebuilt automaton is reproducible.
    let mut representative: BTreeMap<usize, StateId> = BTreeMap::new();
    for (&state, &class_id) in &class {
        representative
            .entry(class_id)
            .and_modify(|rep| *rep = (*rep).min(state))
            .or_insert(state);
    }
    let mut ordered: Vec<(StateId, usize)> = representative
        .iter()
        .map(|(&class_id, &rep)| (rep, class_id))
        .collect();
    ordered.sort_unstable();

    let mut minimized = Dfa::new();
    let mut new_id: BTreeMap<usize, StateId> = BTreeMap::new();
    for &(_, class_id) in &ordered {
        let fresh = minimized.add_state();
        new_id.insert(class_id, fresh);
    }
    for &(rep, class_id) in &ordered {
        let id = new_id[&class_id];
        if dfa.is_accepting(rep) {
            minimized.add_accepting(id);
        }
        for (symbol, destination) in dfa.transitions_from(rep) {
            minimized.add_transition(id, symbol, new_id[&class[&destination]]);
        }
    }
    minimized.set_start(new_id[&class[&dfa.start()]]);

    if let Some(alphabet) = dfa.completed_over() {
        minimized.set_completed_over(alphabet.clone());
    }
    minimized
}

fn reachable_states(dfa: &Dfa) -> BTreeSet<StateId> {
    let mut reachable = BTreeSet::new();
    let mut stack = vec![dfa.start()];
    while let Some(state) = stack.pop() {
        if !reachable.insert(state) {
            continue;
        }
        for (_, destination) in dfa.transitions_from(state) {
            if !reachable.contains(&destination) {
                stack.push(destination);
            }
        }
    }
    reachable
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_merges_equivalent_states() {
        // 0 -a-> 1 -b-> 3(F), 0 -b-> 2 -b-> 4(F): {1,2} and {3,4} merge.
        let mut dfa = Dfa::new();
        for _ in 0..5 {
            dfa.add_state();
        }
        dfa.set_start(0);
        dfa.add_accepting(3);
        dfa.add_accepting(4);
        dfa.add_transition(0, Symbol::Char('a'), 1);
        dfa.add_transition(0, Symbol::Char('b'), 2);
        dfa.add_transition(1, Symbol::Char('b'), 3);
        dfa.add_transition(2, Symbol::Char('b'), 4);

        let minimized = minimize(&dfa);
        assert_eq!(minimized.num_states(), 3);
        assert!(minimized.accepts("ab"));
        assert!(minimized.accepts("bb"));
        assert!(!minimized.accepts("a"));
        assert!(!minimized.accepts("abb"));
    }

    #[test]
    fn test_drops_unreachable_states() {
        let mut dfa = Dfa::new();
        for _ in 0..3 {
            dfa.add_state();
        }
        dfa.set_start(0);
        dfa.add_accepting(1);
        dfa.add_transition(0, Symbol::Char('a'), 1);
        // State 2 is an island.
        dfa.add_transition(2, Symbol::Char('a'), 2);

        let minimized = minimize(&dfa);
        assert_eq!(minimized.num_states(), 2);
        assert!(minimized.accepts("a"));
    }

    #[test]
    fn test_missing_transitions_distinguish_states() {
        // Both non-accepting, but only one can still reach acceptance.
        let mut dfa = Dfa::new();
        for _ in 0..3 {
            dfa.add_state();
        }
        dfa.set_start(0);
        dfa.add_accepting(2);
        dfa.add_transition(0, Symbol::Char('a'), 1);
        dfa.add_transition(1, Symbol::Char('a'), 2);

        let minimized = minimize(&dfa);
        assert_eq!(minimized.num_states(), 3);
        assert!(minimized.accepts("aa"));
        assert!(!minimized.accepts("a"));
    }

    fn short_strings(symbols: &[char], max_len: usize) -> Vec<String> {
        let mut all = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for prefix in &frontier {
                for &c in symbols {
                    let mut extended = prefix.clone();
                    extended.push(c);
                    next.push(extended.clone());
                    all.push(extended);
                }
            }
            frontier = next;
        }
        all
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn minimization_preserves_language_and_is_idempotent(
            num_states in 1u32..6,
            targets in proptest::collection::vec(proptest::option::of(0u32..6), 15),
            accepting_bits in proptest::collection::vec(proptest::bool::ANY, 5),
        ) {
            let symbols = ['a', 'b', 'c'];
            let mut dfa = Dfa::new();
            for _ in 0..num_states {
                dfa.add_state();
            }
            dfa.set_start(0);
            for (state, bit) in accepting_bits.iter().enumerate().take(num_states as usize) {
                if *bit {
                    dfa.add_accepting(state as StateId);
                }
            }
            for state in 0..num_states {
                for (offset, &symbol) in symbols.iter().enumerate() {
                    let slot = (state as usize) * symbols.len() + offset;
                    if let Some(Some(target)) = targets.get(slot) {
                        dfa.add_transition(state, Symbol::Char(symbol), target % num_states);
                    }
                }
            }

            let minimized = minimize(&dfa);
            prop_assert!(minimized.num_states() <= dfa.num_states());

            for input in short_strings(&symbols, 3) {
                prop_assert_eq!(
                    dfa.accepts(&input),
                    minimized.accepts(&input),
                    "input {:?}",
                    input
                );
            }

            let again = minimize(&minimized);
            prop_assert_eq!(again.num_states(), minimized.num_states());
        }
    }
}
