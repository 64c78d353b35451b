//! # Epsilon NFA
//!
//! Nondeterministic automaton over a flat state arena. Transition tables are
//! ordered so iteration is reproducible; ε-cycles from quantifier loops are
//! ordinary edges between indices, never an ownership concern.

use std::collections::{BTreeMap, BTreeSet};

use crate::alphabet::Symbol;
use crate::types::StateId;

/// Outgoing edges of a single state.
#[derive(Debug, Clone, Default)]
struct NfaState {
    by_symbol: BTreeMap<Symbol, BTreeSet<StateId>>,
    epsilon: BTreeSet<StateId>,
}

/// An ε-nondeterministic finite automaton.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    accepting: BTreeSet<StateId>,
}

impl Nfa {
    /// Create an automaton with no states.
    ///
    /// The start handle defaults to the first allocated state until
    /// reassigned with [`Nfa::set_start`].
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: 0,
            accepting: BTreeSet::new(),
        }
    }

    /// Allocate a fresh state.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::default());
        id
    }

    /// Number of states in the arena.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Reassign the start state.
    pub fn set_start(&mut self, state: StateId) {
        self.start = state;
    }

    /// Mark `state` accepting.
    pub fn add_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// The accepting states.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Add a `source --symbol--> destination` transition.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        self.states[source as usize]
            .by_symbol
            .entry(symbol)
            .or_default()
            .insert(destination);
    }

    /// Add an ε-transition.
    pub fn add_epsilon(&mut self, source: StateId, destination: StateId) {
        self.states[source as usize].epsilon.insert(destination);
    }

    /// The ε-closure of a state set: everything reachable via ε-edges alone.
    pub fn epsilon_closure(&self, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();
        while let Some(state) = stack.pop() {
            for &next in &self.states[state as usize].epsilon {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Symbols with at least one transition out of `states`.
    pub fn symbols_from(&self, states: &BTreeSet<StateId>) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        for &state in states {
            symbols.extend(self.states[state as usize].by_symbol.keys().copied());
        }
        symbols
    }

    /// States reachable from `states` on `symbol`, without closure.
    pub fn move_on(&self, states: &BTreeSet<StateId>, symbol: Symbol) -> BTreeSet<StateId> {
        let mut reached = BTreeSet::new();
        for &state in states {
            if let Some(destinations) = self.states[state as usize].by_symbol.get(&symbol) {
                reached.extend(destinations.iter().copied());
            }
        }
        reached
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_closure_follows_chains_and_cycles() {
        let mut nfa = Nfa::new();
        let s0 = nfa.add_state();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();
        nfa.add_epsilon(s0, s1);
        nfa.add_epsilon(s1, s2);
        nfa.add_epsilon(s2, s0);

        let closure = nfa.epsilon_closure(&BTreeSet::from([s0]));
        assert_eq!(closure, BTreeSet::from([s0, s1, s2]));
    }

    #[test]
    fn test_move_on_collects_all_destinations() {
        let mut nfa = Nfa::new();
        let s0 = nfa.add_state();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();
        nfa.add_transition(s0, Symbol::Char('a'), s1);
        nfa.add_transition(s0, Symbol::Char('a'), s2);

        let reached = nfa.move_on(&BTreeSet::from([s0]), Symbol::Char('a'));
        assert_eq!(reached, BTreeSet::from([s1, s2]));
        assert!(nfa.move_on(&BTreeSet::from([s0]), Symbol::Char('b')).is_empty());
    }

    #[test]
    fn test_symbols_from_is_ordered() {
        let mut nfa = Nfa::new();
        let s0 = nfa.add_state();
        let s1 = nfa.add_state();
        nfa.add_transition(s0, Symbol::Char('z'), s1);
        nfa.add_transition(s0, Symbol::Char('a'), s1);
        nfa.add_transition(s1, Symbol::Char('m'), s0);

        let symbols: Vec<Symbol> = nfa
            .symbols_from(&BTreeSet::from([s0, s1]))
            .into_iter()
            .collect();
        assert_eq!(
            symbols,
            vec![Symbol::Char('a'), Symbol::Char('m'), Symbol::Char('z')]
        );
    }
}
