//! Cleanup of raw model output
//!
//! Models often wrap the document in a Markdown code fence even when told
//! not to. [`sanitize`] removes those fences; [`design_prompt`] pulls the
//! hidden design description out of the cleaned document.

use crate::prompt::DESIGN_PROMPT_ELEMENT_ID;

/// Returned when the model produced no usable text
pub const FALLBACK_HTML: &str = "<!-- Failed to generate content -->";

const FENCE: &str = "```";
const FENCE_LANGUAGE: &str = "html";

/// Strip Markdown code fences from a model reply.
///
/// Leading ```` ```html ```` / ```` ``` ```` markers and trailing ```` ``` ```` markers are removed
/// together with the whitespace around them, repeatedly, so the result never
/// starts or ends with a fence. Applying it twice gives the same result as
/// applying it once.
///
/// A missing reply, and any reply that is empty once trimmed and unfenced
/// (including one made only of whitespace, or a bare ```` ```html ```` block),
/// gives [`FALLBACK_HTML`] rather than an empty string.
pub fn sanitize(raw: Option<&str>) -> String {
    let mut text = raw.unwrap_or_default().trim();

    loop {
        let before = text.len();

        if let Some(rest) = strip_opening_fence(text) {
            text = rest.trim_start();
        }
        if let Some(rest) = text.strip_suffix(FENCE) {
            text = rest.trim_end();
        }

        if text.len() == before {
            break;
        }
    }

    if text.is_empty() {
        FALLBACK_HTML.to_string()
    } else {
        text.to_string()
    }
}

fn strip_opening_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    let tagged = rest
        .get(..FENCE_LANGUAGE.len())
        .filter(|tag| tag.eq_ignore_ascii_case(FENCE_LANGUAGE))
        .map(|tag| &rest[tag.len()..]);
    Some(tagged.unwrap_or(rest))
}

/// Body of the hidden `<script id="design-prompt-data">` element, if present.
///
/// Best effort: the element is a convention the model is asked to follow,
/// not something the response is checked against.
pub fn design_prompt(html: &str) -> Option<&str> {
    let double = format!("id=\"{}\"", DESIGN_PROMPT_ELEMENT_ID);
    let single = format!("id='{}'", DESIGN_PROMPT_ELEMENT_ID);

    let attr = html.find(&double).or_else(|| html.find(&single))?;
    let tag_end = attr + html[attr..].find('>')? + 1;
    let close = tag_end + html[tag_end..].find("</script>")?;

    let body = html[tag_end..close].trim();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_fence() {
        assert_eq!(
            sanitize(Some("```html\n<!DOCTYPE html>...```")),
            "<!DOCTYPE html>..."
        );
    }

    #[test]
    fn test_strips_fence_with_trailing_newline() {
        assert_eq!(sanitize(Some("```html\n<html>OK</html>\n```")), "<html>OK</html>");
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(sanitize(Some("```\n<html></html>\n```\n")), "<html></html>");
    }

    #[test]
    fn test_uppercase_language_tag() {
        assert_eq!(sanitize(Some("```HTML\n<p>x</p>```")), "<p>x</p>");
    }

    #[test]
    fn test_unfenced_text_is_kept() {
        let html = "<!DOCTYPE html><html><body>```code```</body></html>";
        assert_eq!(sanitize(Some(html)), html);
    }

    #[test]
    fn test_fallback_for_missing_output() {
        assert_eq!(sanitize(None), FALLBACK_HTML);
        assert_eq!(sanitize(Some("")), FALLBACK_HTML);
        assert_eq!(sanitize(Some("  \n ")), FALLBACK_HTML);
        assert_eq!(sanitize(Some("```html\n```")), FALLBACK_HTML);
        assert_eq!(sanitize(Some("\t\r\n")), FALLBACK_HTML);
        assert_eq!(sanitize(Some("```\n   \n```")), FALLBACK_HTML);
    }

    #[test]
    fn test_nested_fences_are_fully_removed() {
        let once = sanitize(Some("```html\n```html\n<div/>\n```\n```"));
        assert_eq!(once, "<div/>");
        assert_eq!(sanitize(Some(&once)), once);
    }

    #[test]
    fn test_design_prompt_extraction() {
        let html = r#"<html><body>
<script id="design-prompt-data" type="text/plain">
  Palette: #0F172A, #22C55E
</script>
</body></html>"#;
        assert_eq!(design_prompt(html), Some("Palette: #0F172A, #22C55E"));
    }

    #[test]
    fn test_design_prompt_single_quotes() {
        let html = "<script type='text/plain' id='design-prompt-data'>Spacing 8px</script>";
        assert_eq!(design_prompt(html), Some("Spacing 8px"));
    }

    #[test]
    fn test_design_prompt_missing_or_empty() {
        assert_eq!(design_prompt("<html></html>"), None);
        assert_eq!(
            design_prompt("<script id=\"design-prompt-data\">  </script>"),
            None
        );
        assert_eq!(design_prompt("<script id=\"design-prompt-data\">"), None);
    }
}
