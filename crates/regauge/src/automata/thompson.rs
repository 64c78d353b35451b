//! # Thompson Construction
//!
//! Structural compilation of a pattern [`Ast`] into an ε-NFA. Class and dot
//! expansion ranges over a finite working domain: the alphabet's characters
//! plus every character appearing explicitly in the pattern, so negated
//! classes stay finite and automata built against the same examples stay
//! comparable.

use std::collections::BTreeSet;

use crate::alphabet::{Alphabet, Symbol};
use crate::automata::nfa::Nfa;
use crate::errors::{RGResult, RegaugeError};
use crate::pattern::Ast;
use crate::types::StateId;

/// The character domain automata are expanded over.
#[derive(Debug, Clone)]
pub struct WorkingDomain {
    chars: Vec<char>,
}

impl WorkingDomain {
    /// Build the domain for `ast` against `alphabet`.
    ///
    /// The alphabet's escaped-hyphen marker is not a character and takes no
    /// part in expansion.
    pub fn new(alphabet: &Alphabet, ast: &Ast) -> Self {
        let mut chars: BTreeSet<char> = alphabet.chars().collect();
        ast.literal_chars(&mut chars);
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// The domain characters, in ascending order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// A sub-automaton under construction: one entry, one exit.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

struct Builder<'a> {
    nfa: Nfa,
    domain: &'a WorkingDomain,
    state_limit: usize,
}

/// Compile `ast` into an ε-NFA whose class and dot expansions range over
/// `domain`. Fails with [`RegaugeError::StateLimitExceeded`] if construction
/// would allocate more than `state_limit` states.
pub fn compile_nfa(ast: &Ast, domain: &WorkingDomain, state_limit: usize) -> RGResult<Nfa> {
    let mut builder = Builder {
        nfa: Nfa::new(),
        domain,
        state_limit,
    };
    let fragment = builder.fragment(ast)?;
    let mut nfa = builder.nfa;
    nfa.set_start(fragment.start);
    nfa.add_accepting(fragment.accept);
    Ok(nfa)
}

impl Builder<'_> {
    fn state(&mut self) -> RGResult<StateId> {
        if self.nfa.num_states() >= self.state_limit {
            return Err(RegaugeError::StateLimitExceeded {
                limit: self.state_limit,
            });
        }
        Ok(self.nfa.add_state())
    }

    fn fragment(&mut self, ast: &Ast) -> RGResult<Fragment> {
        match ast {
            Ast::Empty => {
                let start = self.state()?;
                let accept = self.state()?;
                self.nfa.add_epsilon(start, accept);
                Ok(Fragment { start, accept })
            }
            Ast::Literal(c) => {
                let start = self.state()?;
                let accept = self.state()?;
                self.nfa.add_transition(start, Symbol::Char(*c), accept);
                Ok(Fragment { start, accept })
            }
            Ast::Dot => {
                let start = self.state()?;
                let accept = self.state()?;
                for &c in self.domain.chars() {
                    self.nfa.add_transition(start, Symbol::Char(c), accept);
                }
                Ok(Fragment { start, accept })
            }
            Ast::Class(spec) => {
                let start = self.state()?;
                let accept = self.state()?;
                for &c in self.domain.chars() {
                    if spec.matches(c) {
                        self.nfa.add_transition(start, Symbol::Char(c), accept);
                    }
                }
                Ok(Fragment { start, accept })
            }
            Ast::Concat(parts) => {
                let mut combined: Option<Fragment> = None;
                for part in parts {
                    let fragment = self.fragment(part)?;
                    combined = Some(match combined {
                        None => fragment,
                        Some(previous) => {
                            self.nfa.add_epsilon(previous.accept, fragment.start);
                            Fragment {
                                start: previous.start,
                                accept: fragment.accept,
                            }
                        }
                    });
                }
                match combined {
                    Some(fragment) => Ok(fragment),
                    None => self.fragment(&Ast::Empty),
                }
            }
            Ast::Alternate(branches) => {
                let start = self.state()?;
                let accept = self.state()?;
                for branch in branches {
                    let fragment = self.fragment(branch)?;
                    self.nfa.add_epsilon(start, fragment.start);
                    self.nfa.add_epsilon(fragment.accept, accept);
                }
                Ok(Fragment { start, accept })
            }
            Ast::Repeat { inner, min, max } => self.repeat(inner, *min, *max),
        }
    }

    /// Repetition: `min` mandatory copies, then either bypassed copies up to
    /// `max` or an unbounded loop on the final copy.
    fn repeat(&mut self, inner: &Ast, min: u32, max: Option<u32>) -> RGResult<Fragment> {
        let mut copies: Vec<Fragment> = Vec::new();
        for _ in 0..min {
            copies.push(self.fragment(inner)?);
        }
        match max {
            None => {
                if min == 0 {
                    // `*`: back-edge plus bypass on a single copy.
                    let fragment = self.fragment(inner)?;
                    self.nfa.add_epsilon(fragment.accept, fragment.start);
                    self.nfa.add_epsilon(fragment.start, fragment.accept);
                    copies.push(fragment);
                } else if let Some(last) = copies.last() {
                    // `+` / `{m,}`: the final mandatory copy loops.
                    self.nfa.add_epsilon(last.accept, last.start);
                }
            }
            Some(max) => {
                for _ in min..max {
                    let fragment = self.fragment(inner)?;
                    self.nfa.add_epsilon(fragment.start, fragment.accept);
                    copies.push(fragment);
                }
            }
        }

        let mut iter = copies.into_iter();
        let Some(mut combined) = iter.next() else {
            // `{0,0}` degenerates to the empty pattern.
            return self.fragment(&Ast::Empty);
        };
        for fragment in iter {
            self.nfa.add_epsilon(combined.accept, fragment.start);
            combined.accept = fragment.accept;
        }
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::complete::complete;
    use crate::automata::determinize::determinize;
    use crate::pattern::parse;

    fn accepts(pattern: &str, alphabet: &Alphabet, input: &str) -> bool {
        let ast = parse(pattern).unwrap();
        let domain = WorkingDomain::new(alphabet, &ast);
        let nfa = compile_nfa(&ast, &domain, 1_000).unwrap();
        let dfa = determinize(&nfa, 1_000).unwrap();
        complete(&dfa, alphabet).accepts(input)
    }

    #[test]
    fn test_literals_and_concat() {
        let alphabet = Alphabet::from_examples(&["abc"], &[] as &[&str]);
        assert!(accepts("abc", &alphabet, "abc"));
        assert!(!accepts("abc", &alphabet, "ab"));
        assert!(!accepts("abc", &alphabet, "abcc"));
    }

    #[test]
    fn test_alternation_and_grouping() {
        let alphabet = Alphabet::from_examples(&["ab", "cd"], &[] as &[&str]);
        assert!(accepts("ab|cd", &alphabet, "ab"));
        assert!(accepts("ab|cd", &alphabet, "cd"));
        assert!(!accepts("ab|cd", &alphabet, "ad"));
        assert!(accepts("a(b|d)", &alphabet, "ad"));
    }

    #[test]
    fn test_quantifiers() {
        let alphabet = Alphabet::from_examples(&["aab"], &[] as &[&str]);
        assert!(accepts("a*b", &alphabet, "b"));
        assert!(accepts("a*b", &alphabet, "aaab"));
        assert!(accepts("a+b", &alphabet, "ab"));
        assert!(!accepts("a+b", &alphabet, "b"));
        assert!(accepts("a?b", &alphabet, "b"));
        assert!(accepts("a?b", &alphabet, "ab"));
        assert!(!accepts("a?b", &alphabet, "aab"));
    }

    #[test]
    fn test_bounded_repeats() {
        let alphabet = Alphabet::from_examples(&["aaaa"], &[] as &[&str]);
        assert!(!accepts("a{2,3}", &alphabet, "a"));
        assert!(accepts("a{2,3}", &alphabet, "aa"));
        assert!(accepts("a{2,3}", &alphabet, "aaa"));
        assert!(!accepts("a{2,3}", &alphabet, "aaaa"));
        assert!(accepts("a{2,}", &alphabet, "aaaa"));
        assert!(!accepts("a{2,}", &alphabet, "a"));
        assert!(accepts("a{3}", &alphabet, "aaa"));
        assert!(!accepts("a{3}", &alphabet, "aa"));
    }

    #[test]
    fn test_classes_expand_within_domain() {
        let alphabet = Alphabet::from_examples(&["a", "b", "c"], &["d"]);
        assert!(accepts("[a-c]", &alphabet, "a"));
        assert!(accepts("[a-c]", &alphabet, "b"));
        assert!(!accepts("[a-c]", &alphabet, "d"));
        // Negation complements within the working domain, not all of char.
        assert!(accepts("[^a-c]", &alphabet, "d"));
        assert!(!accepts("[^a-c]", &alphabet, "a"));
    }

    #[test]
    fn test_dot_matches_any_domain_character() {
        let alphabet = Alphabet::from_examples(&["ab"], &[] as &[&str]);
        assert!(accepts(".", &alphabet, "a"));
        assert!(accepts(".", &alphabet, "b"));
        assert!(!accepts(".", &alphabet, ""));
        assert!(!accepts(".", &alphabet, "z"));
    }

    #[test]
    fn test_pattern_literals_extend_domain() {
        // `z` appears only in the pattern, not the examples.
        let alphabet = Alphabet::from_examples(&["a"], &[] as &[&str]);
        assert!(accepts("z", &alphabet, "z"));
    }

    #[test]
    fn test_empty_pattern_matches_empty_string_only() {
        let alphabet = Alphabet::from_examples(&["a"], &[] as &[&str]);
        assert!(accepts("", &alphabet, ""));
        assert!(!accepts("", &alphabet, "a"));
    }

    #[test]
    fn test_state_limit_enforced() {
        let alphabet = Alphabet::from_examples(&["a"], &[] as &[&str]);
        let ast = parse("a{1,50}").unwrap();
        let domain = WorkingDomain::new(&alphabet, &ast);
        let err = compile_nfa(&ast, &domain, 8).unwrap_err();
        assert!(matches!(err, RegaugeError::StateLimitExceeded { limit: 8 }));
    }
}
