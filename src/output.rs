//! Output rendering for analysis results.
//!
//! This module turns pipeline results into formats consumed outside the
//! library: JSON documents for tooling and HTML markup for display layers.
//!
//! # Features
//!
//! - **AST as JSON** via [`ast_to_json()`] - one object per node, tagged by `type`;
//!   AND/OR chains flattened into one object
//! - **Tokens and spans as JSON** via [`tokens_to_json()`] and [`spans_to_json()`]
//! - **HTML highlighting** via [`render_html()`] - one `<span>` per classified token
//! - **Markup escaping** via [`escape_markup()`] - applied to every emitted text
//!
//! # Examples
//!
//! ```
//! use boolex_lang::output::render_html;
//! use boolex_lang::analyze;
//!
//! let analysis = analyze("a AND b");
//! assert_eq!(
//!     render_html(&analysis.spans),
//!     r#"<span class="hl-word">a</span> <span class="hl-operator">AND</span> <span class="hl-word">b</span>"#
//! );
//! ```

use serde_json::{Value, json};

use crate::ast::{Expr, Span, TokenStream};
use crate::highlight::{Category, HighlightSpan};
use crate::pipeline::Error;

fn span_to_json(span: Span) -> Value {
    json!({ "start": span.start, "end": span.end })
}

/// Convert an AST into a JSON tree.
///
/// A left-folded chain such as `a AND b OR c` is emitted as one `binary`
/// object with `operands` and `operators` lists, so the JSON depth follows
/// NOT/group nesting only.
pub fn ast_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Binary { block_type, .. } => {
            let (first, rest) = expr.chain();
            let mut operands = vec![ast_to_json(first)];
            let mut operators = vec![];
            for (op, right) in rest {
                operators.push(Value::from(op.as_str()));
                operands.push(ast_to_json(right));
            }
            json!({
                "type": "binary",
                "operators": operators,
                "operands": operands,
                "block_type": block_type.as_str(),
            })
        }
        Expr::Prefix {
            op,
            child,
            block_type,
        } => json!({
            "type": "prefix",
            "op": op.as_str(),
            "child": ast_to_json(child),
            "block_type": block_type.as_str(),
        }),
        Expr::Group { child, block_type } => json!({
            "type": "group",
            "child": ast_to_json(child),
            "block_type": block_type.as_str(),
        }),
        Expr::Leaf { text, block_type } => json!({
            "type": "leaf",
            "text": text,
            "block_type": block_type.as_str(),
        }),
    }
}

/// All tokens of a stream, whitespace included, in source order
pub fn tokens_to_json(stream: &TokenStream) -> Value {
    Value::Array(
        stream
            .merged()
            .into_iter()
            .map(|token| {
                json!({
                    "kind": token.kind.as_str(),
                    "text": token.text,
                    "span": span_to_json(token.span),
                })
            })
            .collect(),
    )
}

pub fn spans_to_json(spans: &[HighlightSpan]) -> Value {
    Value::Array(
        spans
            .iter()
            .map(|span| {
                json!({
                    "category": span.category.as_str(),
                    "text": span.text,
                    "span": span_to_json(span.span),
                })
            })
            .collect(),
    )
}

pub fn error_to_json(error: &Error) -> Value {
    json!({
        "stage": error.stage().as_str(),
        "message": error.to_string(),
        "span": error.span().map(span_to_json),
    })
}

/// Escape characters significant in HTML/XML markup
pub fn escape_markup(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}

/// Render spans as HTML; unclassified text is escaped but not wrapped
pub fn render_html(spans: &[HighlightSpan]) -> String {
    let mut result = String::new();
    for span in spans {
        let text = escape_markup(&span.text);
        match span.category {
            Category::Plain => result.push_str(&text),
            category => {
                result.push_str(&format!(
                    "<span class=\"hl-{}\">{}</span>",
                    category.as_str(),
                    text
                ));
            }
        }
    }
    result
}
