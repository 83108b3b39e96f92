//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file (-s/--source-file); `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .short('s')
        .long("source-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("Source file to read ('-' for stdin)")
}

/// Inline source text (--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Language flag (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .help("Language (inferred from the file extension if not specified)")
}

/// Required language flag, for commands without a source file.
pub fn required_lang_arg() -> Arg {
    lang_arg().required(true).help("Language name or alias")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// S-expression output (--sexpr).
pub fn sexpr_arg() -> Arg {
    Arg::new("sexpr")
        .long("sexpr")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Print the tree as a compact s-expression")
}

/// Skip whitespace tokens (--no-space).
pub fn no_space_arg() -> Arg {
    Arg::new("no_space")
        .long("no-space")
        .action(ArgAction::SetTrue)
        .help("Hide space and newline tokens")
}

/// Typed text to complete (positional).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .value_name("TEXT")
        .required(true)
        .help("Typed text to complete")
}
