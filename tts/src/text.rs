use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\W*").unwrap());

/// Swap typographic quotes for their plain ASCII forms.
pub fn replace_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Collapse a newline and any non-word characters after it into one newline.
///
/// Strips list bullets and blank lines from text that is typed out on screen.
pub fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUN.replace_all(text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straightens_quotes() {
        assert_eq!(
            replace_quotes("\u{201C}It\u{2019}s 1977,\u{201D} said \u{2018}Vox\u{2019}."),
            "\"It's 1977,\" said 'Vox'."
        );
    }

    #[test]
    fn collapses_bullets() {
        assert_eq!(collapse_newlines("Items:\n\n- one\n* two"), "Items:\none\ntwo");
    }

    #[test]
    fn leaves_plain_text() {
        assert_eq!(collapse_newlines("no breaks here"), "no breaks here");
    }
}
