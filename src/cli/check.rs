//! Validate boolex queries and report their AST

use crate::analyze;
use crate::output::ast_to_json;

use super::CliError;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to check
    pub query: String,
    /// Only check syntax and the block-type rule, don't build the AST output
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Query is valid
    SyntaxValid,
    /// Query is valid; its AST as JSON
    Success(serde_json::Value),
}

/// Execute a boolex check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let analysis = analyze(&options.query);
    let ast = analysis.result.map_err(|error| CliError::Query {
        query: options.query.clone(),
        error,
    })?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    Ok(CheckResult::Success(ast_to_json(&ast)))
}
