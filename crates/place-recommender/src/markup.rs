//! Removal of highlight markup from provider titles

use regex::Regex;

lazy_static::lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"(?s)</?[A-Za-z][^>]*>").expect("valid tag regex");
}

/// Decode the entities the search provider emits and strip HTML tags
///
/// `"<b>Clinic</b>"` becomes `"Clinic"`, `"A &amp; B"` becomes `"A & B"`.
/// Entities are decoded first so escaped tags such as `&lt;b&gt;` are removed too.
pub fn strip_markup(raw: &str) -> String {
    let decoded = decode_entities(raw);
    TAG_RE.replace_all(&decoded, "").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    // &amp; last so "&amp;lt;" decodes to "&lt;" rather than "<"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bold() {
        assert_eq!(strip_markup("<b>Clinic</b>"), "Clinic");
    }

    #[test]
    fn test_strip_partial_highlight() {
        assert_eq!(strip_markup("역삼<b>정형외과</b>의원"), "역삼정형외과의원");
    }

    #[test]
    fn test_strip_tags_with_attributes() {
        assert_eq!(
            strip_markup(r#"<span class="hl">서울</span> 내과"#),
            "서울 내과"
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(strip_markup("A &amp; B <b>의원</b>"), "A & B 의원");
        assert_eq!(strip_markup("&quot;하나&quot;"), "\"하나\"");
        assert_eq!(strip_markup("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_strip_escaped_tags() {
        let title = strip_markup("&lt;b&gt;Clinic&lt;/b&gt;");
        assert_eq!(title, "Clinic");
        assert!(!title.contains('<'));
    }

    #[test]
    fn test_comparison_signs_are_not_tags() {
        assert_eq!(strip_markup("A &lt; B &gt; C"), "A < B > C");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_markup("서울대학교병원"), "서울대학교병원");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(strip_markup("  <b></b>약국 "), "약국");
    }
}
