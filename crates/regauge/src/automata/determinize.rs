//! # Subset Construction
//!
//! NFA to DFA conversion. Each DFA state is the ε-closure of the NFA states
//! reachable on some input history; transitions exist only for symbols with
//! at least one move, so the result is generally partial.

use std::collections::{BTreeSet, VecDeque};

use crate::automata::dfa::Dfa;
use crate::automata::nfa::Nfa;
use crate::errors::{RGResult, RegaugeError};
use crate::types::{RGHashMap, StateId};

/// Convert an ε-NFA into an equivalent, generally partial, DFA.
///
/// Fails with [`RegaugeError::StateLimitExceeded`] if the construction would
/// allocate more than `state_limit` subset states.
pub fn determinize(nfa: &Nfa, state_limit: usize) -> RGResult<Dfa> {
    let mut dfa = Dfa::new();

    if nfa.num_states() == 0 {
        let start = dfa.add_state();
        dfa.set_start(start);
        return Ok(dfa);
    }

    let mut index: RGHashMap<Vec<StateId>, StateId> = RGHashMap::new();
    let mut worklist: VecDeque<(StateId, BTreeSet<StateId>)> = VecDeque::new();

    let start_set = nfa.epsilon_closure(&BTreeSet::from([nfa.start()]));
    let start = dfa.add_state();
    dfa.set_start(start);
    if start_set.iter().any(|s| nfa.accepting().contains(s)) {
        dfa.add_accepting(start);
    }
    index.insert(start_set.iter().copied().collect(), start);
    worklist.push_back((start, start_set));

    while let Some((dfa_state, nfa_set)) = worklist.pop_front() {
        for symbol in nfa.symbols_from(&nfa_set) {
            let next_set = nfa.epsilon_closure(&nfa.move_on(&nfa_set, symbol));
            if next_set.is_empty() {
                continue;
            }
            let key: Vec<StateId> = next_set.iter().copied().collect();
            let next = match index.get(&key) {
                Some(&existing) => existing,
                None => {
                    if dfa.num_states() >= state_limit {
                        return Err(RegaugeError::StateLimitExceeded { limit: state_limit });
                    }
                    let fresh = dfa.add_state();
                    if next_set.iter().any(|s| nfa.accepting().contains(s)) {
                        dfa.add_accepting(fresh);
                    }
                    index.insert(key, fresh);
                    worklist.push_back((fresh, next_set));
                    fresh
                }
            };
            dfa.add_transition(dfa_state, symbol, next);
        }
    }

    Ok(dfa)
}
