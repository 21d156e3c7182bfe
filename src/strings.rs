use std::borrow::Cow;

/// True when the line contains nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Count of leading spaces.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Strips the common leading-space prefix from every line.
///
/// The prefix width is the minimum leading-space count over non-blank lines;
/// blank lines are left alone. Idempotent: text with no common prefix comes
/// back unchanged, as does text consisting of blank lines only.
pub fn dedent(text: &str) -> Cow<str> {
    let min = text
        .lines()
        .filter(|line| !is_blank(line))
        .map(indent_width)
        .min()
        .unwrap_or(0);
    if min == 0 {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_blank(line) {
            out.push_str(line);
        } else {
            out.push_str(&line[min..]);
        }
    }
    Cow::Owned(out)
}

/// Splits a TODO-keyword configuration value (`"TODO | DONE | CANCELED"`)
/// into its keywords.
pub fn split_keywords(value: &str) -> Vec<&str> {
    value
        .split(|c: char| c.is_whitespace() || c == '|')
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedent_common_prefix() {
        assert_eq!(dedent("  a\n    b\n  c"), "a\n  b\nc");
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn dedent_skips_blank_lines() {
        assert_eq!(dedent("  a\n\n  b"), "a\n\nb");
        assert_eq!(dedent("\n   \n"), "\n   \n");
    }

    #[test]
    fn dedent_idempotent() {
        let once = dedent("   x\n     y").into_owned();
        assert_eq!(dedent(&once), once);
    }

    #[test]
    fn keyword_fields() {
        assert_eq!(
            split_keywords("TODO | DONE | CANCELED"),
            vec!["TODO", "DONE", "CANCELED"]
        );
        assert_eq!(split_keywords(""), Vec::<&str>::new());
    }
}
