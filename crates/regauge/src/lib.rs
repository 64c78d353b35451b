//! # `regauge` Pattern Helpfulness Scoring
//!
//! `regauge` measures how conservative or liberal a regular-expression
//! pattern is relative to the minimal pattern implied by known-positive
//! example strings, by finite-automaton comparison rather than string
//! sampling.
//!
//! See:
//! * [`scoring`] to compute helpfulness scores.
//! * [`pattern`] for normalization and parsing of the restricted dialect.
//! * [`alphabet`] for the example-derived working symbol set.
//! * [`automata`] for the underlying NFA/DFA machinery.
//!
//! ## Scoring
//!
//! A candidate pattern is rewritten into a regular-only dialect, compiled to
//! an ε-NFA by Thompson construction, determinized, and totalized (without
//! minimization) over the alphabet of the example strings. The positive
//! examples, taken as literal alternatives, yield a minimal total reference
//! automaton over the same alphabet. The fraction of the candidate's
//! transitions covered by the intersection of the two maps linearly to a
//! score in `[-1, 1]`: +1 is maximally conservative, -1 maximally liberal.
//!
//! ```rust
//! use regauge::helpfulness_score;
//!
//! let liberal = helpfulness_score(".*", &["ab", "cd"], &["x"])?;
//! let conservative = helpfulness_score("ab|cd", &["ab", "cd"], &["x"])?;
//! assert!(liberal < conservative);
//! # Ok::<(), regauge::RegaugeError>(())
//! ```
//!
//! Every scoring call is a pure function over its inputs: automata are
//! built and dropped within the call, nothing is cached or shared, and
//! there are no internal suspension points. Callers needing a timeout must
//! enforce one externally; a state cap ([`ScoreOptions`]) bounds memory on
//! pathological patterns.
#![warn(missing_docs, unused)]

pub mod alphabet;
pub mod automata;
pub mod errors;
pub mod pattern;
pub mod scoring;
pub mod types;

pub use alphabet::{Alphabet, Symbol};
pub use errors::{ConstructKind, RGResult, RegaugeError};
pub use scoring::{DEFAULT_STATE_LIMIT, ScoreOptions, Scorer, helpfulness_score};
