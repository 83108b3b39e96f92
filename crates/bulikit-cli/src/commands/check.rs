use super::ast::render_diagnostics;
use super::source::SourceArgs;
use crate::error::CliError;

pub struct CheckArgs {
    pub source: SourceArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let source = args.source.load()?;
    let mut parser = source.lang.parser()?;
    let result = parser.parse(&source.text)?;

    if !result.is_valid() {
        eprint!("{}", render_diagnostics(&result, &source, args.color));
        return Err(CliError::InvalidSource);
    }

    // Silent on success (like cargo check)
    Ok(())
}
