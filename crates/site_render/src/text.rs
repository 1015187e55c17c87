//! Small text helpers.

/// Prefix every line of `text` with `prefix`, dropping trailing whitespace from each line.
pub fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fold line breaks into single spaces after trimming the ends.
pub fn one_line(text: &str) -> String {
    text.trim().replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indent_prefixes_every_line_including_blank_ones() {
        assert_eq!(indent("a  \n\nb", "    "), "    a\n    \n    b");
        assert_eq!(indent("", "> "), "> ");
    }

    #[test]
    fn one_line_folds_newlines() {
        assert_eq!(one_line("  first\nsecond\n"), "first second");
    }
}
