use std::path::PathBuf;

use bulikit_langs::LangError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("source text is required (use --source or --source-file)")]
    MissingSource,

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("unknown language: '{name}'")]
    UnknownLang {
        name: String,
        suggestion: Option<String>,
    },

    #[error("cannot infer language from extension '.{0}', use --lang")]
    UnknownExtension(String),

    #[error("--lang is required (cannot infer from input)")]
    LangRequired,

    #[error(transparent)]
    Lang(#[from] LangError),

    #[error(transparent)]
    Engine(#[from] bulikit_lib::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Source has syntax errors; diagnostics are already on stderr.
    #[error("source is invalid")]
    InvalidSource,
}

impl CliError {
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::UnknownLang { suggestion, .. } => Some(match suggestion {
                Some(name) => format!("Did you mean '{name}'?\n\nRun 'bulikit langs' for the full list."),
                None => "Run 'bulikit langs' for the full list.".to_string(),
            }),
            CliError::LangRequired => {
                Some("hint: use -l <language> to specify the language".to_string())
            }
            _ => None,
        }
    }
}
