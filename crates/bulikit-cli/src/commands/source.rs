//! Source loading shared by `tokens`, `ast` and `check`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bulikit_langs::Lang;

use super::lang_resolver::{lang_from_path, resolve_lang_required};
use crate::error::CliError;

pub struct SourceArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
}

/// A loaded source and the language to read it with.
pub struct LoadedSource {
    pub text: String,
    pub lang: Lang,
    /// Shown in diagnostics; `None` for inline text and stdin.
    pub path: Option<String>,
}

impl SourceArgs {
    pub fn load(&self) -> Result<LoadedSource, CliError> {
        let lang = self.resolve_lang()?;
        let text = self.read_text()?;
        let path = self
            .source_path
            .as_deref()
            .filter(|p| !is_stdin(p))
            .map(|p| p.display().to_string());
        Ok(LoadedSource { text, lang, path })
    }

    fn resolve_lang(&self) -> Result<Lang, CliError> {
        if let Some(name) = &self.lang {
            return resolve_lang_required(name);
        }
        match self.source_path.as_deref() {
            Some(path) if !is_stdin(path) => lang_from_path(path),
            _ => Err(CliError::LangRequired),
        }
    }

    fn read_text(&self) -> Result<String, CliError> {
        if let Some(text) = &self.source_text {
            return Ok(text.clone());
        }
        let Some(path) = &self.source_path else {
            return Err(CliError::MissingSource);
        };
        if is_stdin(path) {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            return Ok(buf);
        }
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
