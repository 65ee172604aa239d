//! Tokens command implementation.
//!
//! Scans one query and prints its tokens, as text or as JSON, optionally
//! followed by per-kind counts.

use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};
use xqc_lex::{Lexer, ScanState, Token, TokenKind};
use xqc_util::Handler;

use crate::commands::common::{read_source, render_diagnostics, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Query file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format name; the configured format when `None`.
    pub format: Option<String>,
    /// Emit whitespace tokens.
    pub ws_explicit: bool,
    /// Treat quotes as bare `Quot`/`Apos` tokens.
    pub no_string_literals: bool,
    /// Start inside element content.
    pub element_content: bool,
    /// Include `Ws` tokens in the listing.
    pub show_trivia: bool,
    /// Print per-kind counts.
    pub stats: bool,
}

/// One token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'static str>,
    text: &'a str,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let keyword = match token.kind {
            TokenKind::Keyword(keyword) => Some(keyword.as_str()),
            _ => None,
        };
        Self {
            kind: token.kind.name(),
            keyword,
            text: &token.text,
            line: token.line,
            column: token.column,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    tokens: Vec<TokenRecord<'a>>,
    stats: IndexMap<&'static str, usize>,
}

/// Tokens command handler.
#[derive(Debug)]
pub struct TokensCommand {
    args: TokensArgs,
    format: OutputFormat,
    state: ScanState,
    show_trivia: bool,
}

impl TokensCommand {
    /// Scan `text` and keep the tokens that should be listed.
    fn scan(&self, text: &str, handler: &Handler) -> xqc_lex::Result<Vec<Token>> {
        let tokens = Lexer::with_state(text, handler, self.state).tokenize()?;
        Ok(tokens
            .into_iter()
            .filter(|token| self.show_trivia || token.kind != TokenKind::Ws)
            .collect())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs, config: Config) -> Result<Self> {
        let format = OutputFormat::parse(args.format.as_deref().unwrap_or(&config.output.format))?;

        let mut state = config.lexer.scan_state();
        if args.ws_explicit {
            state.set_ws_explicit(true);
        }
        if args.no_string_literals {
            state.set_parse_string_literals(false);
        }
        if args.element_content {
            state.set_element_content(true);
        }

        let show_trivia = args.show_trivia || config.output.show_trivia;
        Ok(Self {
            args,
            format,
            state,
            show_trivia,
        })
    }

    fn execute(&self) -> Result<()> {
        let source = read_source(&self.args.input)?;
        debug!(name = %source.name, bytes = source.text.len(), "scanning");

        let handler = Handler::new();
        let tokens = match self.scan(&source.text, &handler) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprint!("{}", render_diagnostics(&source, &handler));
                return Err(err.into());
            },
        };
        info!(tokens = tokens.len(), "scanned {}", source.name);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_listing(&mut out, &tokens, self.format, self.args.stats)?;
        out.flush()?;
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Token counts per kind, in first-seen order.
pub fn kind_counts(tokens: &[Token]) -> IndexMap<&'static str, usize> {
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(token.kind.name()).or_insert(0) += 1;
    }
    counts
}

/// Write a token listing to `out`.
pub fn write_listing<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
    stats: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
            if stats {
                writeln!(out)?;
                for (kind, count) in kind_counts(tokens) {
                    writeln!(out, "{count:>6} {kind}")?;
                }
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            if stats {
                let listing = Listing {
                    tokens: records,
                    stats: kind_counts(tokens),
                };
                serde_json::to_writer_pretty(&mut *out, &listing)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &records)?;
            }
            writeln!(out)?;
        },
    }
    Ok(())
}
