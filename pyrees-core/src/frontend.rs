//! Language front-end capability
//!
//! The extractor only needs two things from the analysed language: a token
//! stream that tells comments and names apart, and a count of function-like
//! definitions. Both are behind [`Frontend`] so another language can be
//! plugged in without touching the measures.

use crate::errors::FrontendError;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    /// Identifier or reserved word
    Name,
    Other,
}

/// A classified piece of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line the token starts on
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

/// Lexer, parser and keyword set for one source language.
///
/// Implementations report failures as `Err` and never panic; the extractor
/// decides how to degrade.
pub trait Frontend: Send + Sync {
    /// Language name, for logs
    fn name(&self) -> &'static str;

    /// Tokenize the whole source. A failure anywhere fails the whole call.
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, FrontendError>;

    /// Count function-like definitions anywhere in the source, nested ones
    /// included.
    fn count_definitions(&self, source: &str) -> Result<usize, FrontendError>;

    /// Whether `word` belongs to the language's reserved word set
    fn is_reserved(&self, word: &str) -> bool;
}
