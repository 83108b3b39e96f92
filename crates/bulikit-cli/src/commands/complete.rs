//! Completion proposals for typed text.

use std::fmt::Write;

use bulikit_lib::Proposal;

use super::lang_resolver::resolve_lang_required;
use crate::error::CliError;

pub struct CompleteArgs {
    pub prefix: String,
    pub lang: String,
    pub json: bool,
}

pub fn run(args: CompleteArgs) -> Result<(), CliError> {
    let lang = resolve_lang_required(&args.lang)?;
    let proposals = lang.text_proposals(&args.prefix);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&proposals)?);
    } else {
        print!("{}", format_proposals(&proposals));
    }
    Ok(())
}

/// `value<TAB>description`, one proposal per line.
pub fn format_proposals(proposals: &[Proposal]) -> String {
    let mut out = String::new();
    for proposal in proposals {
        let _ = match &proposal.description {
            Some(description) => writeln!(out, "{}\t{description}", proposal.value),
            None => writeln!(out, "{}", proposal.value),
        };
    }
    out
}
