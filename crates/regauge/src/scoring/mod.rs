//! # Helpfulness Scoring
//!
//! The comparison pipeline: a candidate pattern is compiled to a raw
//! determinized automaton totalized over the working alphabet; the positive
//! examples are compiled to a minimal literal-union reference automaton; the
//! fraction of candidate transitions covered by the intersection of the two
//! maps to a score in `[-1, 1]`.

use crate::alphabet::Alphabet;
use crate::automata::{Dfa, WorkingDomain, compile_nfa, complete, complete_minimal, determinize, intersect};
use crate::errors::RGResult;
use crate::pattern::{normalize, parse};

/// Default cap on per-automaton state count.
pub const DEFAULT_STATE_LIMIT: usize = 10_000;

/// Tuning knobs for a [`Scorer`].
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    /// Hard cap on the state count of any single automaton built during a
    /// scoring call. Pathological patterns (deeply nested bounded
    /// quantifiers) can blow up subset construction exponentially; the cap
    /// turns that into [`crate::RegaugeError::StateLimitExceeded`] instead
    /// of unbounded memory growth.
    pub state_limit: usize,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            state_limit: DEFAULT_STATE_LIMIT,
        }
    }
}

/// Computes helpfulness scores for candidate patterns.
///
/// Each call is a pure function over its inputs: all automata are built
/// inside the call and dropped on return, so a scorer is freely shareable
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    options: ScoreOptions,
}

impl Scorer {
    /// Create a scorer with `options`.
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Score how conservative or liberal `pattern` is relative to the
    /// minimal pattern implied by `positive`.
    ///
    /// Let `candidate` be the raw (unminimized) candidate automaton
    /// totalized over the working alphabet, and `reference` the minimal
    /// total automaton of the positive examples as literal alternatives.
    /// With `R = min(|T(candidate)|, |T(candidate ∩ reference)|) /
    /// |T(candidate)|` (0 when the candidate has no transitions), the score
    /// is `1 - 2R`: a maximally liberal candidate such as `.*` is driven
    /// toward -1, a candidate hugging the literal positive set toward +1.
    ///
    /// The `min` clamp is load-bearing: the candidate is unminimized while
    /// the reference is minimized, so the intersection is not guaranteed to
    /// be the smaller automaton.
    pub fn score<S: AsRef<str>>(
        &self,
        pattern: &str,
        positive: &[S],
        negative: &[S],
    ) -> RGResult<f64> {
        let alphabet = Alphabet::from_examples(positive, negative);
        log::debug!("working alphabet: {} symbols", alphabet.len());

        let adapted = normalize(pattern)?;
        log::debug!("adapted candidate pattern: {adapted:?}");

        let candidate = self.pattern_dfa(&adapted, &alphabet, false)?;
        let candidate_trans = candidate.transition_count();

        let conservative = conservative_pattern(positive);
        let reference = self.pattern_dfa(&conservative, &alphabet, true)?;

        let product = intersect(&candidate, &reference, self.options.state_limit)?;
        let intersect_trans = product.transition_count();
        log::debug!(
            "candidate transitions: {candidate_trans}, intersection transitions: {intersect_trans}"
        );

        let ratio = if candidate_trans > 0 {
            candidate_trans.min(intersect_trans) as f64 / candidate_trans as f64
        } else {
            0.0
        };
        let score = 1.0 - 2.0 * ratio;
        log::debug!("covered ratio: {ratio}, score: {score}");
        Ok(score)
    }

    /// Compile a pattern to a DFA completed over `alphabet`; `minimal`
    /// selects the complete-then-minimize reference path over the
    /// raw-size-preserving candidate path.
    fn pattern_dfa(&self, pattern: &str, alphabet: &Alphabet, minimal: bool) -> RGResult<Dfa> {
        let ast = parse(pattern)?;
        let domain = WorkingDomain::new(alphabet, &ast);
        let nfa = compile_nfa(&ast, &domain, self.options.state_limit)?;
        let dfa = determinize(&nfa, self.options.state_limit)?;
        Ok(if minimal {
            complete_minimal(&dfa, alphabet)
        } else {
            complete(&dfa, alphabet)
        })
    }
}

/// The alternation of the positive examples as escaped literal disjuncts.
///
/// Each example is a literal alternative, never reinterpreted as a pattern.
/// A join that degenerates to a bare `|` (exactly two empty examples)
/// becomes the empty pattern, which matches only the empty string.
fn conservative_pattern<S: AsRef<str>>(positive: &[S]) -> String {
    let joined = positive
        .iter()
        .map(|example| regex::escape(example.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    if joined == "|" { String::new() } else { joined }
}

/// Compute the helpfulness score for `pattern` with default options.
///
/// See [`Scorer::score`] for the definition of the score.
pub fn helpfulness_score<S: AsRef<str>>(
    pattern: &str,
    positive: &[S],
    negative: &[S],
) -> RGResult<f64> {
    Scorer::default().score(pattern, positive, negative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conservative_pattern_escapes_metacharacters() {
        assert_eq!(
            conservative_pattern(&["a.b", "(x)"]),
            r"a\.b|\(x\)"
        );
    }

    #[test]
    fn test_conservative_pattern_degenerate_join() {
        assert_eq!(conservative_pattern(&[] as &[&str]), "");
        assert_eq!(conservative_pattern(&["", ""]), "");
        assert_eq!(conservative_pattern(&["", "a"]), "|a");
    }

    #[test]
    fn test_reference_matches_positives_literally() {
        // `1.3` must be treated as the three characters, not "1 any 3".
        let scorer = Scorer::default();
        let alphabet = Alphabet::from_examples(&["1.3"], &["123"]);
        let reference = scorer
            .pattern_dfa(&conservative_pattern(&["1.3"]), &alphabet, true)
            .unwrap();
        assert!(reference.accepts("1.3"));
        assert!(!reference.accepts("123"));
    }

    #[test]
    fn test_candidate_counts_completion_fill() {
        // `[a-c]` raw: 2 states, 3 transitions; completed over 4 symbols
        // with a dead state: 3 states, 12 transitions.
        let scorer = Scorer::default();
        let alphabet = Alphabet::from_examples(&["a", "b", "c"], &["d"]);
        let candidate = scorer.pattern_dfa("[a-c]", &alphabet, false).unwrap();
        assert_eq!(candidate.num_states(), 3);
        assert_eq!(candidate.transition_count(), 12);
    }
}
