/// Split leading whitespace off `text`.
///
/// Returns the number of stripped characters and the remainder.
///
/// # Examples
/// ```
/// use bulikit_core::utils::split_indent;
/// assert_eq!(split_indent("    set"), (4, "set"));
/// assert_eq!(split_indent("\n"), (1, ""));
/// ```
pub fn split_indent(text: &str) -> (usize, &str) {
    let rest = text.trim_start();
    let indent = text[..text.len() - rest.len()].chars().count();
    (indent, rest)
}

/// Replace every run of whitespace with a single space.
///
/// # Examples
/// ```
/// use bulikit_core::utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("else \t  if"), "else if");
/// assert_eq!(collapse_whitespace("a\n\n"), "a ");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                result.push(' ');
            }
            in_space = true;
        } else {
            result.push(c);
            in_space = false;
        }
    }
    result
}

/// Count characters in `text[..byte_offset]`.
///
/// `byte_offset` is clamped to the text length and rounded down to a char
/// boundary.
pub fn char_offset(text: &str, byte_offset: usize) -> usize {
    let mut end = byte_offset.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].chars().count()
}
