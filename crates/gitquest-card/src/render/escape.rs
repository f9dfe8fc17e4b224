//! XML escaping for user-supplied text.
//!
//! The SVG body is assembled by hand, so everything taken from a profile
//! (name, login, bio) passes through here before embedding. This is the
//! SVG counterpart of the auto-escaping maud gives the HTML pages.

/// Escape the five XML special characters.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_passes_plain_text() {
        assert_eq!(escape_xml("hello world"), "hello world");
    }

    #[test]
    fn escape_empty() {
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn escape_markup_characters() {
        assert_eq!(
            escape_xml(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_single_quote() {
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn escape_ampersand_first() {
        // An already-escaped input is escaped again, never left raw.
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_keeps_unicode() {
        assert_eq!(escape_xml("こんにちは 🎉"), "こんにちは 🎉");
    }
}
