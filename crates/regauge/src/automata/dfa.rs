//! # DFA
//!
//! Deterministic automaton over a flat state arena with ordered per-state
//! adjacency maps. A DFA is partial until run through the completer, which
//! records the alphabet it was totalized over.

use std::collections::{BTreeMap, BTreeSet};

use crate::alphabet::{Alphabet, Symbol};
use crate::types::StateId;

/// A deterministic finite automaton.
#[derive(Debug, Clone)]
pub struct Dfa {
    transitions: Vec<BTreeMap<Symbol, StateId>>,
    start: StateId,
    accepting: BTreeSet<StateId>,
    completed_over: Option<Alphabet>,
}

impl Dfa {
    /// Create an automaton with no states.
    ///
    /// The start handle defaults to the first allocated state until
    /// reassigned with [`Dfa::set_start`].
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            start: 0,
            accepting: BTreeSet::new(),
            completed_over: None,
        }
    }

    /// Allocate a fresh state.
    pub fn add_state(&mut self) -> StateId {
        let id = self.transitions.len() as StateId;
        self.transitions.push(BTreeMap::new());
        id
    }

    /// Number of states in the arena.
    pub fn num_states(&self) -> usize {
        self.transitions.len()
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

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The accepting states.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Add (or overwrite) the `source --symbol--> destination` transition.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        self.transitions[source as usize].insert(symbol, destination);
    }

    /// The transition out of `source` on `symbol`, if defined.
    pub fn transition(&self, source: StateId, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(source as usize)?.get(&symbol).copied()
    }

    /// Ordered view of a state's outgoing transitions.
    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.transitions
            .get(state as usize)
            .into_iter()
            .flatten()
            .map(|(&symbol, &destination)| (symbol, destination))
    }

    /// Total number of transitions in the automaton.
    pub fn transition_count(&self) -> usize {
        self.transitions.iter().map(BTreeMap::len).sum()
    }

    /// The alphabet this automaton was completed over, if any.
    pub fn completed_over(&self) -> Option<&Alphabet> {
        self.completed_over.as_ref()
    }

    pub(crate) fn set_completed_over(&mut self, alphabet: Alphabet) {
        self.completed_over = Some(alphabet);
    }

    /// Whether the automaton accepts `input` as a whole string.
    ///
    /// A missing transition rejects, so this is sound on partial automata.
    pub fn accepts(&self, input: &str) -> bool {
        if self.transitions.is_empty() {
            return false;
        }
        let mut state = self.start;
        for c in input.chars() {
            match self.transition(state, Symbol::Char(c)) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}
