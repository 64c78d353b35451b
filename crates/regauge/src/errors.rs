//! # Error Types

use core::fmt;

/// The non-regular constructs rejected during pattern normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    /// Positive lookahead `(?=...)`.
    PositiveLookahead,

    /// Negative lookahead `(?!...)`.
    NegativeLookahead,

    /// Positive lookbehind `(?<=...)`.
    PositiveLookbehind,

    /// Negative lookbehind `(?<!...)`.
    NegativeLookbehind,

    /// Numbered backreference `\1` through `\9`.
    Backreference,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PositiveLookahead => "positive lookahead",
            Self::NegativeLookahead => "negative lookahead",
            Self::PositiveLookbehind => "positive lookbehind",
            Self::NegativeLookbehind => "negative lookbehind",
            Self::Backreference => "backreference",
        };
        f.write_str(name)
    }
}

/// Errors from regauge operations.
#[derive(Debug, thiserror::Error)]
pub enum RegaugeError {
    /// The pattern uses a construct with no regular-language equivalent.
    #[error("pattern contains unsupported construct: {kind}")]
    UnsupportedConstruct {
        /// The construct that was rejected.
        kind: ConstructKind,
    },

    /// The pattern is not parseable, even after normalization.
    #[error("pattern compile error: {0}")]
    PatternCompile(String),

    /// Product operands were completed over different alphabets.
    #[error("alphabet mismatch between product operands")]
    AlphabetMismatch,

    /// Automaton growth exceeded the configured safety cap.
    #[error("state limit exceeded ({limit} states)")]
    StateLimitExceeded {
        /// The cap that was exceeded.
        limit: usize,
    },
}

/// Result type for regauge operations.
pub type RGResult<T> = core::result::Result<T, RegaugeError>;
