//! Escaping helpers for building HTML by hand.
//!
//! Every value that originates from the audit document goes through one of
//! these before it is interpolated into markup.

use serde::Serialize;

/// Escape text for use in element content or a quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a URL for an `href`, replacing unsafe schemes with `#`.
///
/// Allowed: `http`, `https`, `mailto` and scheme-less (relative) values.
pub fn safe_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "#".to_string();
    }

    let scheme_end = trimmed.find(':');
    let path_start = trimmed.find(['/', '?', '#']);
    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    };

    if has_scheme {
        let scheme = trimmed[..scheme_end.unwrap_or(0)].to_ascii_lowercase();
        if !matches!(scheme.as_str(), "http" | "https" | "mailto") {
            return "#".to_string();
        }
    }

    escape(trimmed)
}

/// Lowercase ASCII slug for anchors: alphanumeric runs joined by `-`.
///
/// Slugs never contain `_`; fixed element ids use it to stay out of the
/// anchor namespace.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("page");
    }
    slug
}

/// Build one unique anchor id per label, suffixing repeats with `-2`, `-3`, ...
pub fn unique_anchors<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut anchors: Vec<String> = Vec::new();
    for label in labels {
        let base = slugify(label.as_ref());
        let mut candidate = base.clone();
        let mut n = 2;
        while anchors.contains(&candidate) {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        anchors.push(candidate);
    }
    anchors
}

/// Serialize a value as JSON that is safe inside an inline `<script>`.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b onclick="x('y')">&</b>"#),
            "&lt;b onclick=&quot;x(&#39;y&#39;)&quot;&gt;&amp;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url("https://example.com/?a=1&b=2"), "https://example.com/?a=1&amp;b=2");
        assert_eq!(safe_url("/collections/all"), "/collections/all");
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_url("data:text/html,hi"), "#");
        assert_eq!(safe_url("page?next=a:b"), "page?next=a:b");
        assert_eq!(safe_url(""), "#");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Product Detail / PDP"), "product-detail-pdp");
        assert_eq!(slugify("Cart"), "cart");
        assert_eq!(slugify("  ???  "), "page");
    }

    #[test]
    fn test_unique_anchors() {
        let anchors = unique_anchors(["Homepage", "PDP", "Homepage", "homepage"]);
        assert_eq!(anchors, vec!["homepage", "pdp", "homepage-2", "homepage-3"]);
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let json = script_json(&["</script><script>alert(1)</script>"]);
        assert!(!json.contains("</script>"));
        assert!(json.starts_with('['));
    }
}
