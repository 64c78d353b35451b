//! # Finite Automata
//!
//! Arena-based ε-NFA and DFA machinery with the textbook pipeline: Thompson
//! construction, subset construction, partition-refinement minimization,
//! dead-state completion, and synchronized product.

mod complete;
mod determinize;
mod dfa;
mod minimize;
mod nfa;
mod product;
mod thompson;

pub use complete::{complete, complete_minimal};
pub use determinize::determinize;
pub use dfa::Dfa;
pub use minimize::minimize;
pub use nfa::Nfa;
pub use product::intersect;
pub use thompson::{WorkingDomain, compile_nfa};
