//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("bulikit")
        .about("Inspect tokens, syntax trees and completions of bulikit languages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(complete_command())
        .subcommand(langs_command())
}

fn with_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
}

/// Print the tokens of a source.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of a source")
        .override_usage(
            "\
  bulikit tokens -s <FILE> [-l <LANG>]
  bulikit tokens --source <TEXT> -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  bulikit tokens -s script.calc              # language from extension
  bulikit tokens --source 'set x = 1' -l calc
  cat page.xml | bulikit tokens -s - -l xml --no-space"#,
        )
        .arg(no_space_arg())
        .arg(json_arg())
        .arg(color_arg());
    with_source_args(cmd)
}

/// Print the syntax tree of a source.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Print the syntax tree of a source")
        .override_usage(
            "\
  bulikit ast -s <FILE> [-l <LANG>]
  bulikit ast --source <TEXT> -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  bulikit ast -s script.calc
  bulikit ast --source 'print 1 + 2 * 3' -l calc --sexpr
  bulikit ast -s script.calc --json"#,
        )
        .arg(json_arg())
        .arg(sexpr_arg())
        .arg(color_arg());
    with_source_args(cmd)
}

/// Validate a source.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a source")
        .override_usage(
            "\
  bulikit check -s <FILE> [-l <LANG>]
  bulikit check --source <TEXT> -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  bulikit check -s script.calc               # silent when valid
  bulikit check --source 'set x =' -l calc"#,
        )
        .arg(color_arg());
    with_source_args(cmd)
}

/// Completion proposals for typed text.
pub fn complete_command() -> Command {
    Command::new("complete")
        .about("Show completion proposals for typed text")
        .override_usage("  bulikit complete -l <LANG> <TEXT>")
        .after_help(
            r#"EXAMPLES:
  bulikit complete -l calc pr
  bulikit complete -l calc '' --json"#,
        )
        .arg(prefix_arg())
        .arg(required_lang_arg())
        .arg(json_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List supported languages")
}
