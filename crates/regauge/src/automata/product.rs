//! # Product Construction
//!
//! Synchronized product of two total DFAs, recognizing the intersection of
//! their languages.

use std::collections::VecDeque;

use crate::alphabet::Symbol;
use crate::automata::dfa::Dfa;
use crate::errors::{RGResult, RegaugeError};
use crate::types::{RGHashMap, StateId};

/// Intersect two DFAs completed over the identical alphabet.
///
/// Pair states are explored from `(start_a, start_b)` with
/// `transition((a, b), sym) = (trans_a(a, sym), trans_b(b, sym))` and
/// accepting pairs where both components accept. The pair graph is then
/// trimmed to useful states (pairs on some path from the start to an
/// accepting pair), so the result carries no dead padding; the recognized
/// language is unchanged. An empty intersection yields a single-state
/// automaton with no transitions.
///
/// Fails with [`RegaugeError::AlphabetMismatch`] if either operand was not
/// completed, or the completion alphabets differ; with
/// [`RegaugeError::StateLimitExceeded`] if more than `state_limit` pairs
/// would be explored.
pub fn intersect(a: &Dfa, b: &Dfa, state_limit: usize) -> RGResult<Dfa> {
    let (Some(alphabet), Some(alphabet_b)) = (a.completed_over(), b.completed_over()) else {
        return Err(RegaugeError::AlphabetMismatch);
    };
    if alphabet != alphabet_b {
        return Err(RegaugeError::AlphabetMismatch);
    }

    // Forward exploration of reachable pairs.
    let mut index: RGHashMap<(StateId, StateId), usize> = RGHashMap::new();
    let mut pairs: Vec<(StateId, StateId)> = Vec::new();
    let mut edges: Vec<Vec<(Symbol, usize)>> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    index.insert((a.start(), b.start()), 0);
    pairs.push((a.start(), b.start()));
    edges.push(Vec::new());
    queue.push_back(0);

    while let Some(current) = queue.pop_front() {
        let (state_a, state_b) = pairs[current];
        let mut outgoing = Vec::new();
        for symbol in alphabet.symbols() {
            let (Some(next_a), Some(next_b)) =
                (a.transition(state_a, symbol), b.transition(state_b, symbol))
            else {
                continue;
            };
            let target = match index.get(&(next_a, next_b)) {
                Some(&existing) => existing,
                None => {
                    if pairs.len() >= state_limit {
                        return Err(RegaugeError::StateLimitExceeded { limit: state_limit });
                    }
                    let fresh = pairs.len();
                    index.insert((next_a, next_b), fresh);
                    pairs.push((next_a, next_b));
                    edges.push(Vec::new());
                    queue.push_back(fresh);
                    fresh
                }
            };
            outgoing.push((symbol, target));
        }
        edges[current] = outgoing;
    }

    // Trim to useful pairs: those reaching an accepting pair.
    let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); pairs.len()];
    for (source, outgoing) in edges.iter().enumerate() {
        for &(_, target) in outgoing {
            reverse[target].push(source);
        }
    }
    let mut useful = vec![false; pairs.len()];
    let mut stack: Vec<usize> = pairs
        .iter()
        .enumerate()
        .filter(|&(_, &(pa, pb))| a.is_accepting(pa) && b.is_accepting(pb))
        .map(|(id, _)| id)
        .collect();
    while let Some(id) = stack.pop() {
        if useful[id] {
            continue;
        }
        useful[id] = true;
        for &source in &reverse[id] {
            if !useful[source] {
                stack.push(source);
            }
        }
    }

    let mut product = Dfa::new();
    if !useful[0] {
        // The intersection is empty.
        let start = product.add_state();
        product.set_start(start);
        return Ok(product);
    }

    let mut new_id: Vec<Option<StateId>> = vec![None; pairs.len()];
    for (id, &keep) in useful.iter().enumerate() {
        if keep {
            new_id[id] = Some(product.add_state());
        }
    }
    for (id, &(pair_a, pair_b)) in pairs.iter().enumerate() {
        let Some(source) = new_id[id] else { continue };
        if a.is_accepting(pair_a) && b.is_accepting(pair_b) {
            product.add_accepting(source);
        }
        for &(symbol, target) in &edges[id] {
            if let Some(destination) = new_id[target] {
                product.add_transition(source, symbol, destination);
            }
        }
    }
    product.set_start(0);
    Ok(product)
}
