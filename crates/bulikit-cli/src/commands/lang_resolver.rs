use std::path::Path;

use bulikit_langs::Lang;

use crate::error::CliError;

/// Resolve a language by name or alias.
pub fn resolve_lang_required(name: &str) -> Result<Lang, CliError> {
    bulikit_langs::from_name(name).ok_or_else(|| CliError::UnknownLang {
        name: name.to_string(),
        suggestion: suggest_language(name),
    })
}

/// Infer the language from a file extension.
pub fn lang_from_path(path: &Path) -> Result<Lang, CliError> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Err(CliError::LangRequired);
    };
    bulikit_langs::from_ext(ext).ok_or_else(|| CliError::UnknownExtension(ext.to_string()))
}

/// Suggest similar language names for typos.
pub fn suggest_language(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    bulikit_langs::all()
        .into_iter()
        .filter(|lang| levenshtein(lang.name(), &input_lower) <= 2)
        .min_by_key(|lang| levenshtein(lang.name(), &input_lower))
        .map(|lang| lang.name().to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
