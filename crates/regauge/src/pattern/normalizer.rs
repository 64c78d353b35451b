//! # Pattern Normalization
//!
//! Rewrites a practical regex dialect into the strict regular-only form the
//! parser accepts, rejecting constructs that have no regular equivalent.
//!
//! The rewriting is textual and order-preserving, not grammar-aware: a
//! shorthand class inside an already-built character class is rewritten in
//! place, nesting the brackets. That behavior is intentional and relied on
//! by downstream fixtures.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{ConstructKind, RGResult, RegaugeError};

static INLINE_FLAG_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\?[a-zA-Z]+:").unwrap());

static INLINE_FLAG_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\?[a-zA-Z]+\)").unwrap());

/// Scan for constructs that cannot be expressed as a finite automaton.
///
/// Runs before any rewriting; a hit aborts normalization outright.
fn reject_unsupported(pattern: &str) -> RGResult<()> {
    let lookarounds: [(&str, ConstructKind); 4] = [
        ("(?=", ConstructKind::PositiveLookahead),
        ("(?!", ConstructKind::NegativeLookahead),
        ("(?<=", ConstructKind::PositiveLookbehind),
        ("(?<!", ConstructKind::NegativeLookbehind),
    ];
    for (needle, kind) in lookarounds {
        if pattern.contains(needle) {
            return Err(RegaugeError::UnsupportedConstruct { kind });
        }
    }

    let bytes = pattern.as_bytes();
    for window in bytes.windows(2) {
        if window[0] == b'\\' && matches!(window[1], b'1'..=b'9') {
            return Err(RegaugeError::UnsupportedConstruct {
                kind: ConstructKind::Backreference,
            });
        }
    }

    Ok(())
}

/// Normalize `pattern` into the restricted regular-only dialect.
///
/// Applies, in order:
/// * shorthand classes: `\d` -> `[0-9]`, `\D` -> `[^0-9]`,
///   `\s` -> `[ \t\r\n\f\v]`, `\S` -> `[^ \t\r\n\f\v]`,
///   `\w` -> `[a-zA-Z0-9_]`, `\W` -> `[^a-zA-Z0-9_]`;
/// * non-capturing group openers `(?:` -> `(`;
/// * inline-flag group openers such as `(?i:` -> `(`;
/// * standalone inline-flag groups such as `(?im)` -> deleted.
///
/// Lookaround and backreferences fail with
/// [`RegaugeError::UnsupportedConstruct`] before any rewriting.
pub fn normalize(pattern: &str) -> RGResult<String> {
    reject_unsupported(pattern)?;

    let mut adapted = pattern.to_string();

    adapted = adapted.replace(r"\d", "[0-9]");
    adapted = adapted.replace(r"\D", "[^0-9]");

    adapted = adapted.replace(r"\s", "[ \t\r\n\u{000C}\u{000B}]");
    adapted = adapted.replace(r"\S", "[^ \t\r\n\u{000C}\u{000B}]");

    adapted = adapted.replace(r"\w", "[a-zA-Z0-9_]");
    adapted = adapted.replace(r"\W", "[^a-zA-Z0-9_]");

    adapted = adapted.replace("(?:", "(");
    adapted = INLINE_FLAG_OPENER.replace_all(&adapted, "(").into_owned();
    adapted = INLINE_FLAG_GROUP.replace_all(&adapted, "").into_owned();

    Ok(adapted)
}
