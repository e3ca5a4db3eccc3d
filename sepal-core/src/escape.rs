use std::borrow::Cow;

/// Appends `value` to `out`, replacing the characters that are unsafe inside
/// a double-quoted attribute value with entity references.
///
/// One left-to-right pass, O(n) in the value length. This runs on every
/// escaped attribute of every rendered element, so it writes straight into
/// the caller's buffer instead of materializing an intermediate string.
///
/// There is no inverse: serialized output is never parsed back.
pub fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

/// Escapes `value` for embedding in a double-quoted attribute value,
/// borrowing the input when nothing needs replacing.
///
/// ```
/// use sepal_core::escape;
///
/// assert_eq!(escape(r#"a"b"#), "a&quot;b");
/// assert_eq!(escape("plain"), "plain");
/// ```
///
/// Escaping is not idempotent: `&` becomes `&amp;`, and escaping that again
/// yields `&amp;amp;`. Run it exactly once per value.
pub fn escape(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|c| matches!(c, '"' | '\'' | '<' | '>' | '&'))
    {
        let mut out = String::with_capacity(value.len() + 8);
        escape_into(&mut out, value);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_unsafe_character() {
        assert_eq!(escape("a\"b<c>d&e'f"), "a&quot;b&lt;c&gt;d&amp;e&#39;f");
    }

    #[test]
    fn output_contains_no_literal_unsafe_characters() {
        let escaped = escape(r#"<a href="x">&'</a>"#).into_owned();
        assert!(!escaped.contains(['"', '\'', '<', '>']));
        // every `&` left is the one we emitted as part of an entity
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                ["&quot;", "&#39;", "&lt;", "&gt;", "&amp;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {escaped:?}"
            );
        }
    }

    #[test]
    fn safe_input_passes_through_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape(""), Cow::Borrowed(_)));
    }

    #[test]
    fn multibyte_characters_pass_through() {
        assert_eq!(escape("héllo → wörld"), "héllo → wörld");
    }

    #[test]
    fn escaping_twice_double_escapes() {
        assert_eq!(escape(&escape("&")), "&amp;amp;");
    }

    #[test]
    fn escape_into_appends_after_existing_content() {
        let mut out = String::from(" class=\"");
        escape_into(&mut out, "a<b");
        out.push('"');
        assert_eq!(out, r#" class="a&lt;b""#);
    }
}
