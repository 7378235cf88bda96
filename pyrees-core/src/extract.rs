//! Measurement extraction
//!
//! Line-based measures (line length, indentation, blank lines, embedded
//! spaces) read only the [`SourceText`]. Token-based measures (comments,
//! reserved words, identifiers) read the front-end's token stream, which is
//! treated as empty when tokenization fails. Module length asks the
//! front-end for a definition count, which is treated as zero when parsing
//! fails. Extraction itself always succeeds.

use crate::frontend::{Frontend, Token, TokenKind};
use crate::measures::{Measure, MeasureVector};
use crate::source::{char_len, strip, SourceText};
use std::collections::HashSet;
use tracing::debug;

/// `100 * part / whole`, or 0 when `whole` is 0
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Mean of `total / count`, or 0 when `count` is 0
fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Mean stripped length of non-blank lines
pub fn avg_line_length(source: &SourceText<'_>) -> f64 {
    let total: usize = source.non_blank().map(|l| char_len(strip(l))).sum();
    mean(total, source.non_blank_count())
}

/// Share of all lines carrying at least one comment token
pub fn comment_percentage(source: &SourceText<'_>, tokens: &[Token]) -> f64 {
    let comment_lines: HashSet<usize> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.line)
        .collect();
    percentage(comment_lines.len(), source.line_count())
}

/// Share of non-blank lines that start with a space or tab
pub fn indent_percentage(source: &SourceText<'_>) -> f64 {
    let indented = source
        .non_blank()
        .filter(|l| l.starts_with(' ') || l.starts_with('\t'))
        .count();
    percentage(indented, source.non_blank_count())
}

/// Share of lines that are empty or whitespace only
pub fn blank_percentage(source: &SourceText<'_>) -> f64 {
    let blank = source.line_count() - source.non_blank_count();
    percentage(blank, source.line_count())
}

/// Spaces inside stripped non-blank lines, as a share of their characters
pub fn embedded_space_percentage(source: &SourceText<'_>) -> f64 {
    let (spaces, chars) = source.non_blank().fold((0, 0), |(spaces, chars), line| {
        let stripped = strip(line);
        (
            spaces + stripped.chars().filter(|&c| c == ' ').count(),
            chars + char_len(stripped),
        )
    });
    percentage(spaces, chars)
}

/// Non-blank lines per module, where the top level counts as one module
pub fn module_length(source: &SourceText<'_>, definitions: usize) -> f64 {
    source.non_blank_count() as f64 / (definitions + 1) as f64
}

/// Number of distinct reserved words among name tokens
pub fn reserved_words_count(frontend: &dyn Frontend, tokens: &[Token]) -> f64 {
    let used: HashSet<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Name && frontend.is_reserved(&t.text))
        .map(|t| t.text.as_str())
        .collect();
    used.len() as f64
}

/// Mean length of name tokens that are not reserved words
pub fn avg_identifier_length(frontend: &dyn Frontend, tokens: &[Token]) -> f64 {
    let (total, count) = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Name && !frontend.is_reserved(&t.text))
        .fold((0, 0), |(total, count), t| (total + char_len(&t.text), count + 1));
    mean(total, count)
}

/// Compute all eight raw measures for `source`.
pub fn extract(source: &SourceText<'_>, frontend: &dyn Frontend) -> MeasureVector {
    let tokens = frontend.tokenize(source.text()).unwrap_or_else(|e| {
        debug!("{} tokenizer failed, using empty token stream: {}", frontend.name(), e);
        Vec::new()
    });
    let definitions = frontend.count_definitions(source.text()).unwrap_or_else(|e| {
        debug!("{} parser failed, counting no definitions: {}", frontend.name(), e);
        0
    });

    debug!(
        "Extracting measures: {} lines, {} tokens, {} definitions",
        source.line_count(),
        tokens.len(),
        definitions
    );

    MeasureVector::from_fn(|measure| match measure {
        Measure::AvgLineLength => avg_line_length(source),
        Measure::CommentPercentage => comment_percentage(source, &tokens),
        Measure::IndentPercentage => indent_percentage(source),
        Measure::BlankPercentage => blank_percentage(source),
        Measure::EmbeddedSpacePercentage => embedded_space_percentage(source),
        Measure::ModuleLength => module_length(source, definitions),
        Measure::ReservedWordsCount => reserved_words_count(frontend, &tokens),
        Measure::AvgIdentifierLength => avg_identifier_length(frontend, &tokens),
    })
}
