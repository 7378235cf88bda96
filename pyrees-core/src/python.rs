//! Python front-end built on rustpython-parser
//!
//! Tokens come from the rustpython lexer, function definitions from its AST.
//! Classification follows Python's own `tokenize` module: reserved words are
//! reported as names, soft keywords (`match`, `case`, `type`) are ordinary
//! identifiers.

use crate::errors::FrontendError;
use crate::frontend::{Frontend, Token, TokenKind};
use line_numbers::LinePositions;
use rustpython_parser::ast::{ExceptHandler, Mod, Stmt};
use rustpython_parser::lexer::lex;
use rustpython_parser::{parse, Mode, Tok};

/// Python 3 reserved words (`keyword.kwlist`)
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Front-end for Python source
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFrontend;

impl PythonFrontend {
    pub fn new() -> Self {
        Self
    }
}

/// Drop a leading byte order mark; Python's tokenizer consumes it as an
/// encoding marker.
fn without_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}

/// Whether `text` is shaped like a Python identifier
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => chars.all(|c| c == '_' || c.is_alphanumeric()),
        _ => false,
    }
}

impl Frontend for PythonFrontend {
    fn name(&self) -> &'static str {
        "python"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, FrontendError> {
        let source = without_bom(source);
        let line_positions = LinePositions::from(source);
        let mut tokens = Vec::new();

        for result in lex(source, Mode::Module) {
            let (tok, range) = result.map_err(|e| FrontendError::Tokenize {
                message: format!("{:?}", e),
            })?;
            let start = usize::from(range.start());
            let end = usize::from(range.end());
            let text = source.get(start..end).unwrap_or("");
            let line = line_positions.from_offset(start).as_usize() + 1;

            let kind = match tok {
                Tok::Comment(_) => TokenKind::Comment,
                Tok::Name { .. } => TokenKind::Name,
                // Keyword and soft-keyword tokens still read as names
                _ if is_identifier(text) => TokenKind::Name,
                _ => TokenKind::Other,
            };
            tokens.push(Token::new(kind, text, line));
        }

        Ok(tokens)
    }

    fn count_definitions(&self, source: &str) -> Result<usize, FrontendError> {
        let ast = parse(without_bom(source), Mode::Module, "<string>").map_err(|e| {
            FrontendError::Parse {
                message: e.to_string(),
            }
        })?;

        let body = match ast {
            Mod::Module(m) => m.body,
            _ => return Ok(0),
        };

        Ok(count_in_suite(&body))
    }

    fn is_reserved(&self, word: &str) -> bool {
        KEYWORDS.contains(&word)
    }
}

fn count_in_suite(body: &[Stmt]) -> usize {
    body.iter().map(count_in_stmt).sum()
}

/// Count `def` / `async def` in a statement and everything nested under it
fn count_in_stmt(stmt: &Stmt) -> usize {
    match stmt {
        Stmt::FunctionDef(func) => 1 + count_in_suite(&func.body),
        Stmt::AsyncFunctionDef(func) => 1 + count_in_suite(&func.body),
        Stmt::ClassDef(class) => count_in_suite(&class.body),
        Stmt::If(if_stmt) => count_in_suite(&if_stmt.body) + count_in_suite(&if_stmt.orelse),
        Stmt::For(for_stmt) => count_in_suite(&for_stmt.body) + count_in_suite(&for_stmt.orelse),
        Stmt::AsyncFor(for_stmt) => count_in_suite(&for_stmt.body) + count_in_suite(&for_stmt.orelse),
        Stmt::While(while_stmt) => {
            count_in_suite(&while_stmt.body) + count_in_suite(&while_stmt.orelse)
        }
        Stmt::With(with_stmt) => count_in_suite(&with_stmt.body),
        Stmt::AsyncWith(with_stmt) => count_in_suite(&with_stmt.body),
        Stmt::Try(try_stmt) => {
            count_in_suite(&try_stmt.body)
                + count_in_handlers(&try_stmt.handlers)
                + count_in_suite(&try_stmt.orelse)
                + count_in_suite(&try_stmt.finalbody)
        }
        Stmt::TryStar(try_stmt) => {
            count_in_suite(&try_stmt.body)
                + count_in_handlers(&try_stmt.handlers)
                + count_in_suite(&try_stmt.orelse)
                + count_in_suite(&try_stmt.finalbody)
        }
        Stmt::Match(match_stmt) => match_stmt
            .cases
            .iter()
            .map(|case| count_in_suite(&case.body))
            .sum(),
        _ => 0,
    }
}

fn count_in_handlers(handlers: &[ExceptHandler]) -> usize {
    handlers
        .iter()
        .map(|handler| {
            let ExceptHandler::ExceptHandler(h) = handler;
            count_in_suite(&h.body)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<String> {
        PythonFrontend
            .tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Name)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_keyword_list_matches_python() {
        assert_eq!(KEYWORDS.len(), 35);
        assert!(PythonFrontend.is_reserved("def"));
        assert!(PythonFrontend.is_reserved("None"));
        assert!(!PythonFrontend.is_reserved("match"));
        assert!(!PythonFrontend.is_reserved("print"));
    }

    #[test]
    fn test_names_include_keywords() {
        assert_eq!(
            names("def f(x):\n    return x\n"),
            vec!["def", "f", "x", "return", "x"]
        );
    }

    #[test]
    fn test_soft_keywords_are_names() {
        let src = "match = 1\ntype = 2\n";
        assert_eq!(names(src), vec!["match", "type"]);
    }

    #[test]
    fn test_strings_and_numbers_are_not_names() {
        assert_eq!(names("x = 'abc' + b\"de\" + 42\n"), vec!["x"]);
    }

    #[test]
    fn test_comment_lines() {
        let src = "# header\nx = 1  # trailing\n\ny = 2\n";
        let comments: Vec<(usize, String)> = PythonFrontend
            .tokenize(src)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Comment)
            .map(|t| (t.line, t.text))
            .collect();
        assert_eq!(
            comments,
            vec![(1, "# header".to_string()), (2, "# trailing".to_string())]
        );
    }

    #[test]
    fn test_comment_and_blank_line_tokens_classified() {
        let tokens = PythonFrontend.tokenize("# only\n\nx = 1\n").unwrap();
        let comments: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::Comment).collect();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].line, 1);
        // Newlines after the comment and the blank line are not names
        assert!(tokens
            .iter()
            .filter(|t| t.text.trim().is_empty())
            .all(|t| t.kind == TokenKind::Other));
    }

    #[test]
    fn test_unterminated_string_fails_tokenize() {
        let err = PythonFrontend.tokenize("x = '''never closed\n").unwrap_err();
        assert!(matches!(err, FrontendError::Tokenize { .. }));
    }

    #[test]
    fn test_bom_is_ignored() {
        assert_eq!(names("\u{feff}x = 1\n"), vec!["x"]);
        assert_eq!(PythonFrontend.count_definitions("\u{feff}def f(): pass\n"), Ok(1));
    }

    #[test]
    fn test_count_nested_and_async_definitions() {
        let src = r#"
import asyncio

def outer():
    def inner():
        pass
    return inner

class Widget:
    def method(self):
        pass

    async def fetch(self):
        await asyncio.sleep(0)

if True:
    def conditional():
        pass
else:
    try:
        def in_try():
            pass
    except ValueError:
        def in_handler():
            pass
    finally:
        pass

square = lambda v: v * v
"#;
        assert_eq!(PythonFrontend.count_definitions(src), Ok(7));
    }

    #[test]
    fn test_count_definitions_in_loops_and_with() {
        let src = "for i in range(3):\n    def a(): pass\nelse:\n    def b(): pass\nwhile False:\n    def c(): pass\nwith open('f') as fh:\n    def d(): pass\n";
        assert_eq!(PythonFrontend.count_definitions(src), Ok(4));
    }

    #[test]
    fn test_syntax_error_fails_parse() {
        let err = PythonFrontend.count_definitions("def broken(:\n").unwrap_err();
        assert!(matches!(err, FrontendError::Parse { .. }));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(PythonFrontend.count_definitions(""), Ok(0));
        assert!(names("").is_empty());
    }
}
