//! Print the tokens of a source.

use std::fmt::Write;

use bulikit_core::Colors;
use bulikit_lib::Tokens;

use super::source::SourceArgs;
use crate::error::CliError;

pub struct TokensArgs {
    pub source: SourceArgs,
    pub no_space: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) -> Result<(), CliError> {
    let source = args.source.load()?;
    let tokens = source.lang.tokenize(&source.text)?;

    if args.json {
        let shown: Vec<_> = tokens
            .as_slice()
            .iter()
            .filter(|t| !(args.no_space && t.token_type().is_whitespace()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        print!(
            "{}",
            format_tokens(&tokens, args.no_space, Colors::new(args.color))
        );
    }
    Ok(())
}

/// One token per line: `row:column Type "text"`.
pub fn format_tokens(tokens: &Tokens, no_space: bool, c: Colors) -> String {
    let mut out = String::new();
    for token in tokens.as_slice() {
        if no_space && token.token_type().is_whitespace() {
            continue;
        }
        let position = format!("{}:{}", token.row(), token.column());
        let _ = writeln!(
            out,
            "{}{position:<7}{} {}{}{} {}{:?}{}",
            c.dim,
            c.reset,
            c.blue,
            token.token_type(),
            c.reset,
            c.green,
            token.text(),
            c.reset
        );
    }
    out
}
