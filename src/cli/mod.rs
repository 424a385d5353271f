//! CLI support for boolex-lang
//!
//! Provides programmatic access to boolex CLI functionality for embedding
//! in other tools.

mod check;
mod docs;
mod highlight;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use highlight::{HighlightFormat, HighlightOptions, execute_highlight, execute_tokens};

use std::io;

use crate::pipeline;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Query failed to tokenize, parse or validate
    Query {
        query: String,
        error: pipeline::Error,
    },
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No query provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
    /// Unknown highlight output format
    UnknownFormat(String),
}

/// Source line with a caret under the error position
fn caret_line(query: &str, error: &pipeline::Error) -> Option<String> {
    let span = error.span()?;
    // Multi-line queries are shown flattened so the caret column stays valid
    let flat: String = query
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let column = query.get(..span.start)?.chars().count();
    let width = query
        .get(span.start..span.end)
        .map(|s| s.chars().count())
        .unwrap_or(0)
        .max(1);
    Some(format!(
        "  {}\n  {}{}",
        flat,
        " ".repeat(column),
        "^".repeat(width)
    ))
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Query { query, error } => {
                let stage = error.stage().as_str();
                let mut chars = stage.chars();
                let stage = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                };
                write!(f, "{} error: {}", stage, error)?;
                if let Some(caret) = caret_line(query, error) {
                    write!(f, "\n{}", caret)?;
                }
                Ok(())
            }
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No query provided. Pass it as an argument or pipe it to stdin."
            ),
            CliError::UnknownCategory(c) => write!(
                f,
                "Unknown category: '{}'\nRun 'boolex docs' to see available categories.",
                c
            ),
            CliError::UnknownFormat(name) => {
                write!(f, "Unknown format: '{}' (expected 'json' or 'html')", name)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Query { error, .. } => Some(error),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_stage_and_caret() {
        let options = CheckOptions {
            query: "a AND".to_string(),
            ..CheckOptions::default()
        };
        let err = execute_check(&options).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Syntax error: "), "{}", message);
        assert!(message.ends_with("  a AND\n       ^"), "{}", message);
    }

    #[test]
    fn test_check_syntax_only() {
        let options = CheckOptions {
            query: "STATUS=\"open\"".to_string(),
            syntax_only: true,
            ..CheckOptions::default()
        };
        assert!(matches!(execute_check(&options), Ok(CheckResult::SyntaxValid)));
    }

    #[test]
    fn test_check_syntax_only_still_validates_block_types() {
        let options = CheckOptions {
            query: "a AND STATUS=\"open\"".to_string(),
            syntax_only: true,
        };
        match execute_check(&options).unwrap_err() {
            CliError::Query { error, .. } => {
                assert_eq!(error.stage(), pipeline::Stage::Validation)
            }
            other => panic!("Expected query error, got {}", other),
        }
    }

    #[test]
    fn test_check_outputs_ast() {
        let options = CheckOptions {
            query: "a OR b".to_string(),
            ..CheckOptions::default()
        };
        match execute_check(&options).unwrap() {
            CheckResult::Success(json) => {
                assert_eq!(json["type"], "binary");
                assert_eq!(json["operators"][0], "OR");
            }
            other => panic!("Expected AST output, got {:?}", other),
        }
    }

    #[test]
    fn test_highlight_html_for_invalid_query() {
        let options = HighlightOptions {
            query: "a AND".to_string(),
            format: HighlightFormat::Html,
            pretty: false,
        };
        assert_eq!(
            execute_highlight(&options).unwrap(),
            r#"<span class="hl-word">a</span> <span class="hl-operator">AND</span>"#
        );
    }

    #[test]
    fn test_unknown_doc_category() {
        assert!(matches!(
            get_doc_category("nope"),
            Err(CliError::UnknownCategory(_))
        ));
        assert!(get_doc_category("Operators").is_ok());
    }
}
