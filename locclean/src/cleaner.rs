//! Line-level cleanup of localization text.
//!
//! Localization entries look like `Key=[speaker]Some dialogue , here`. The
//! cleaner keeps only the dialogue: `Some dialogue, here`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KEY_PREFIX_REGEX: Regex = Regex::new(r"^.*?=").unwrap();
    static ref BRACKET_TAG_REGEX: Regex = Regex::new(r"\[.*?\]").unwrap();
    // Information separators U+001C..U+001F count as whitespace in localization text.
    static ref SPACE_BEFORE_PUNCT_REGEX: Regex =
        Regex::new(r"[\s\x1C-\x1F]+([.,!?:;])").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
    static ref LINE_BREAK_REGEX: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Cleans a single line.
///
/// In order: drops everything up to and including the first `=`, replaces
/// each `[...]` tag with a space, removes whitespace before `. , ! ? : ;`,
/// collapses whitespace runs to one space and trims the result.
pub fn clean_line(line: &str) -> String {
    let line = KEY_PREFIX_REGEX.replace(line, "");
    let line = BRACKET_TAG_REGEX.replace_all(&line, " ");
    let line = SPACE_BEFORE_PUNCT_REGEX.replace_all(&line, "${1}");
    let line = WHITESPACE_REGEX.replace_all(&line, " ");
    line.trim_matches(is_blank_char).to_string()
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Drops blank lines that have no non-blank predecessor.
///
/// Line `i` survives if it is non-empty, or if line `i - 1` is non-empty.
/// Runs of blank lines therefore shrink to one, and leading blank lines
/// disappear.
pub fn collapse_blank_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let is_blank = |i: usize| lines[i].as_ref().is_empty();
    (0..lines.len())
        .filter(|&i| !is_blank(i) || (i > 0 && !is_blank(i - 1)))
        .map(|i| lines[i].as_ref().to_string())
        .collect()
}

/// Cleans every line, then collapses blank lines.
pub fn clean_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let cleaned: Vec<String> = lines.iter().map(|l| clean_line(l.as_ref())).collect();
    collapse_blank_lines(&cleaned)
}

/// Splits decoded text on `\r\n`, `\r` or `\n`. A terminator at the very end
/// does not start another line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK_REGEX.split(text).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Splits and cleans a whole decoded file.
pub fn clean_text(text: &str) -> Vec<String> {
    clean_lines(&split_lines(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_key_strip_stops_at_first_equals() {
        assert_eq!(clean_line("a=b=c"), "b=c");
        assert_eq!(clean_line("Intro_01=Hello"), "Hello");
        assert_eq!(clean_line("no key here"), "no key here");
        assert_eq!(clean_line("="), "");
    }

    #[test]
    fn test_bracket_tags_are_non_greedy() {
        assert_eq!(clean_line("[x][y]"), "");
        assert_eq!(clean_line("a[b]c"), "a c");
        assert_eq!(clean_line("Hat[pause]Kid"), "Hat Kid");
        // Nested tags are not balanced: the first `]` closes the span.
        assert_eq!(clean_line("[a[b]c]"), "c]");
        assert_eq!(clean_line("open [tag"), "open [tag");
    }

    #[test]
    fn test_whitespace_before_punctuation() {
        assert_eq!(clean_line("hello ."), "hello.");
        assert_eq!(clean_line("hi , there"), "hi, there");
        assert_eq!(clean_line("Wait\t\t!  What ?"), "Wait! What?");
        assert_eq!(clean_line("a ; b : c"), "a; b: c");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(clean_line("   spaced    out\t words  "), "spaced out words");
        assert_eq!(clean_line("\u{3000}全角\u{3000}スペース"), "全角 スペース");
        assert_eq!(clean_line("   "), "");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        assert_eq!(clean_line("k=a\x1f\x1f b"), "a b");
        assert_eq!(clean_line("k=hello\x1e."), "hello.");
        assert_eq!(clean_line("\x1cpadded\x1d"), "padded");
    }

    #[test]
    fn test_tag_before_punctuation() {
        assert_eq!(clean_line("Key=Go [wave]!"), "Go!");
    }

    #[test]
    fn test_end_to_end_line() {
        assert_eq!(
            clean_line("Name=  Hello [color=red]world [/color] !  "),
            "Hello world!"
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines(&["a", "", "", "b"]), vec!["a", "", "b"]);
        assert_eq!(collapse_blank_lines(&["", "a"]), vec!["a"]);
        assert_eq!(collapse_blank_lines(&["a", ""]), vec!["a", ""]);
        assert_eq!(collapse_blank_lines(&["a", "", ""]), vec!["a", ""]);
    }

    #[test]
    fn test_collapse_blank_lines_boundaries() {
        let empty: [&str; 0] = [];
        assert!(collapse_blank_lines(&empty).is_empty());
        assert!(collapse_blank_lines(&[""]).is_empty());
        assert!(collapse_blank_lines(&["", "", ""]).is_empty());
        assert_eq!(collapse_blank_lines(&["a"]), vec!["a"]);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\r\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_clean_text() {
        let input = indoc! {"
            [Subtitles]
            Intro_01=[Hat Kid] Hello there , Mustache Girl !

            Intro_02=[Mustache Girl]Hmph.


            Intro_03=  [pause] See you  [wave] later ...
        "};

        assert_eq!(
            clean_text(input),
            vec![
                "Hello there, Mustache Girl!",
                "",
                "Hmph.",
                "",
                "See you later...",
            ]
        );
    }
}
