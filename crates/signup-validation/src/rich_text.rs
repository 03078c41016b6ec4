//! Rich-text helpers
//!
//! Rich-text editors emit HTML even when the user typed nothing
//! (`<p><br></p>`), so emptiness is decided on the visible text.

use crate::string::is_blank;
use alloc::string::String;

const ENTITIES: &[(&str, char)] = &[
    ("&nbsp;", ' '),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Returns the visible text of an HTML fragment
///
/// Tags are dropped and the common named entities decoded. Unknown entities
/// are kept verbatim.
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => match rest.find('>') {
                Some(end) => rest = &rest[end + 1..],
                None => {
                    text.push_str(rest);
                    break;
                }
            },
            '&' => match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
                Some((name, decoded)) => {
                    text.push(*decoded);
                    rest = &rest[name.len()..];
                }
                None => {
                    text.push('&');
                    rest = &rest[1..];
                }
            },
            _ => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    text
}

/// True when the fragment has no visible, non-whitespace text
pub fn is_blank_rich_text(html: &str) -> bool {
    is_blank(&plain_text(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(plain_text("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(plain_text("no markup"), "no markup");
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("a&nbsp;&amp;&nbsp;b"), "a & b");
        assert_eq!(plain_text("&lt;tag&gt;"), "<tag>");
        assert_eq!(plain_text("&copy;"), "&copy;");
    }

    #[test]
    fn test_unclosed_tag_is_kept() {
        assert_eq!(plain_text("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_blank_rich_text() {
        assert!(is_blank_rich_text(""));
        assert!(is_blank_rich_text("<p><br></p>"));
        assert!(is_blank_rich_text("<p>&nbsp;</p>"));
        assert!(!is_blank_rich_text("<p>I agree</p>"));
    }
}
