use boolex_lang::cli::{
    self, CheckOptions, CheckResult, CliError, HighlightFormat, HighlightOptions,
};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "boolex")]
#[command(about = "Boolex - check and highlight boolean search expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query and print its AST
    Check {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only check syntax and the block-type rule, don't print the AST
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print syntax highlighting spans for a query
    Highlight {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Output format: json or html
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the token stream of a query
    Tokens {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'boolex docs' to list categories)
        category: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("BOOLEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            pretty,
            syntax_only,
        } => run_check(query, pretty, syntax_only),
        Commands::Highlight {
            query,
            format,
            pretty,
        } => run_highlight(query, format, pretty),
        Commands::Tokens { query, pretty } => run_tokens(query, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Query from the argument, or from stdin when it is piped
fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            // A trailing newline from `echo` is not part of the query
            let trimmed = buffer.strip_suffix('\n').unwrap_or(&buffer);
            let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
            Ok(trimmed.to_string())
        }
        None => Err(CliError::NoInput),
    }
}

fn to_json(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run_check(query: Option<String>, pretty: bool, syntax_only: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Query is valid"),
        CheckResult::Success(output) => println!("{}", to_json(&output, pretty)?),
    }
    Ok(())
}

fn run_highlight(query: Option<String>, format: String, pretty: bool) -> Result<(), CliError> {
    let format = HighlightFormat::from_name(&format).ok_or(CliError::UnknownFormat(format))?;
    let options = HighlightOptions {
        query: read_query(query)?,
        format,
        pretty,
    };

    println!("{}", cli::execute_highlight(&options)?);
    Ok(())
}

fn run_tokens(query: Option<String>, pretty: bool) -> Result<(), CliError> {
    let query = read_query(query)?;
    let tokens = cli::execute_tokens(&query)?;
    println!("{}", to_json(&tokens, pretty)?);
    Ok(())
}
