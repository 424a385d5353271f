//! Highlight and tokenize boolex queries

use crate::highlight_source;
use crate::lexer::Lexer;
use crate::output::{render_html, spans_to_json, tokens_to_json};

use super::CliError;

/// Output format for highlight spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightFormat {
    #[default]
    Json,
    Html,
}

impl HighlightFormat {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Options for the highlight command
#[derive(Debug, Clone, Default)]
pub struct HighlightOptions {
    pub query: String,
    pub format: HighlightFormat,
    pub pretty: bool,
}

/// Render highlight spans; succeeds for any input
pub fn execute_highlight(options: &HighlightOptions) -> Result<String, CliError> {
    let spans = highlight_source(Lexer::global(), &options.query);

    match options.format {
        HighlightFormat::Html => Ok(render_html(&spans)),
        HighlightFormat::Json => {
            let json = spans_to_json(&spans);
            let text = if options.pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            };
            Ok(text)
        }
    }
}

/// Token stream as JSON; fails on lexical errors
pub fn execute_tokens(query: &str) -> Result<serde_json::Value, CliError> {
    let stream = Lexer::global()
        .tokenize(query)
        .map_err(|e| CliError::Query {
            query: query.to_string(),
            error: e.into(),
        })?;
    Ok(tokens_to_json(&stream))
}
