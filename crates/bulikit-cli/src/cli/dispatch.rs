//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::{AstArgs, AstFormat};
use crate::commands::check::CheckArgs;
use crate::commands::complete::CompleteArgs;
use crate::commands::source::SourceArgs;
use crate::commands::tokens::TokensArgs;

/// Source input shared by `tokens`, `ast` and `check`.
pub struct SourceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
}

impl SourceParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
        }
    }
}

impl From<SourceParams> for SourceArgs {
    fn from(p: SourceParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
        }
    }
}

pub struct TokensParams {
    pub source: SourceParams,
    pub no_space: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            no_space: m.get_flag("no_space"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source: p.source.into(),
            no_space: p.no_space,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub source: SourceParams,
    pub json: bool,
    pub sexpr: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            json: m.get_flag("json"),
            sexpr: m.get_flag("sexpr"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        let format = if p.json {
            AstFormat::Json
        } else if p.sexpr {
            AstFormat::Sexpr
        } else {
            AstFormat::Tree
        };
        Self {
            source: p.source.into(),
            format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source: SourceParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: p.source.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompleteParams {
    pub prefix: String,
    pub lang: String,
    pub json: bool,
}

impl CompleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            prefix: m.get_one::<String>("prefix").cloned().unwrap_or_default(),
            lang: m.get_one::<String>("lang").cloned().unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<CompleteParams> for CompleteArgs {
    fn from(p: CompleteParams) -> Self {
        Self {
            prefix: p.prefix,
            lang: p.lang,
            json: p.json,
        }
    }
}

pub struct LangsParams;

impl LangsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
