//! # Pattern AST

use std::collections::BTreeSet;

/// One item of a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    /// A single member character.
    Char(char),

    /// An inclusive character range `lo-hi`.
    Range(char, char),
}

impl ClassItem {
    /// Whether `c` is covered by this item.
    pub fn matches(&self, c: char) -> bool {
        match *self {
            ClassItem::Char(member) => c == member,
            ClassItem::Range(lo, hi) => lo <= c && c <= hi,
        }
    }
}

/// A character class `[...]`, possibly negated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    /// Whether the class is negated (`[^...]`).
    pub negated: bool,

    /// The class members.
    pub items: Vec<ClassItem>,
}

impl ClassSpec {
    /// Whether the class matches `c`, negation applied.
    pub fn matches(&self, c: char) -> bool {
        let hit = self.items.iter().any(|item| item.matches(c));
        hit != self.negated
    }
}

/// A parsed pattern.
///
/// A closed variant set covering the regular-only dialect: matching over
/// every node kind is checked for exhaustiveness at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// The empty pattern; matches only the empty string.
    Empty,

    /// A single literal character.
    Literal(char),

    /// A character class.
    Class(ClassSpec),

    /// `.`: any character of the working domain.
    Dot,

    /// A sequence of sub-patterns.
    Concat(Vec<Ast>),

    /// A choice between sub-patterns.
    Alternate(Vec<Ast>),

    /// Repetition of a sub-pattern.
    Repeat {
        /// The repeated sub-pattern.
        inner: Box<Ast>,

        /// Minimum number of occurrences.
        min: u32,

        /// Maximum number of occurrences; `None` is unbounded.
        max: Option<u32>,
    },
}

impl Ast {
    /// Collect every character appearing explicitly in the pattern text:
    /// literal atoms, class members, and range endpoints.
    pub fn literal_chars(&self, out: &mut BTreeSet<char>) {
        match self {
            Ast::Empty | Ast::Dot => {}
            Ast::Literal(c) => {
                out.insert(*c);
            }
            Ast::Class(spec) => {
                for item in &spec.items {
                    match *item {
                        ClassItem::Char(c) => {
                            out.insert(c);
                        }
                        ClassItem::Range(lo, hi) => {
                            out.insert(lo);
                            out.insert(hi);
                        }
                    }
                }
            }
            Ast::Concat(parts) | Ast::Alternate(parts) => {
                for part in parts {
                    part.literal_chars(out);
                }
            }
            Ast::Repeat { inner, .. } => inner.literal_chars(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_membership() {
        let spec = ClassSpec {
            negated: false,
            items: vec![ClassItem::Char('x'), ClassItem::Range('0', '9')],
        };
        assert!(spec.matches('x'));
        assert!(spec.matches('5'));
        assert!(!spec.matches('y'));

        let negated = ClassSpec {
            negated: true,
            items: vec![ClassItem::Range('0', '9')],
        };
        assert!(negated.matches('y'));
        assert!(!negated.matches('5'));
    }

    #[test]
    fn test_literal_chars_covers_atoms_and_endpoints() {
        let ast = Ast::Concat(vec![
            Ast::Literal('x'),
            Ast::Class(ClassSpec {
                negated: true,
                items: vec![ClassItem::Char('y'), ClassItem::Range('a', 'c')],
            }),
            Ast::Repeat {
                inner: Box::new(Ast::Literal('z')),
                min: 0,
                max: None,
            },
        ]);

        let mut chars = BTreeSet::new();
        ast.literal_chars(&mut chars);
        // Range members other than the endpoints are not explicit text.
        let collected: Vec<char> = chars.into_iter().collect();
        assert_eq!(collected, vec!['a', 'c', 'x', 'y', 'z']);
    }
}
