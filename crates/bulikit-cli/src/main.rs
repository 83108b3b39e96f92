mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use cli::{AstParams, CheckParams, CompleteParams, LangsParams, TokensParams, build_cli};
use error::CliError;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into())
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into())
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into())
        }
        Some(("complete", m)) => {
            let params = CompleteParams::from_matches(m);
            commands::complete::run(params.into())
        }
        Some(("langs", m)) => {
            let _params = LangsParams::from_matches(m);
            commands::langs::run();
            Ok(())
        }
        _ => unreachable!("clap should have caught this"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // diagnostics were already printed
        Err(CliError::InvalidSource) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
