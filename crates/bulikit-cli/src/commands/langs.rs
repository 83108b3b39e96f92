use std::fmt::Write;

use bulikit_langs::Lang;

pub fn run() {
    print!("{}", format_langs(&bulikit_langs::all()));
}

pub fn format_langs(langs: &[Lang]) -> String {
    let mut out = format!("Supported languages ({}):\n", langs.len());
    for lang in langs {
        let extensions: Vec<_> = lang.extensions().iter().map(|e| format!(".{e}")).collect();
        let _ = write!(out, "  {:<6} {}", lang.name(), lang.description());
        if !extensions.is_empty() {
            let _ = write!(out, " [{}]", extensions.join(", "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_langs;

    #[test]
    #[cfg(all(feature = "lang-calc", feature = "lang-xml"))]
    fn lists_languages() {
        insta::assert_snapshot!(format_langs(&bulikit_langs::all()), @r"
        Supported languages (2):
          calc   Line-oriented arithmetic script [.calc, .buli]
          xml    XML markup (tokens only) [.xml, .xsd, .svg]
        ");
    }
}
