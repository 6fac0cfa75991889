//! Two-pass snippet extraction over raw results HTML.
//!
//! Pass one captures everything between a `result__snippet` anchor's opening
//! tag and the nearest following `</a>`. Pass two deletes every
//! angle-bracketed tag from each captured fragment. This reproduces the
//! pattern-based behaviour of the quick tool this crate replaces, fragility
//! included: if the engine renames the CSS class or restructures the result
//! markup, the first pass silently matches nothing and the output is empty.
//! A structural HTML parser is deliberately not used.

use regex::Regex;

use crate::error::SearchError;

/// First pass: a snippet anchor's inner HTML.
///
/// Case-insensitive, with `.` matching newlines so a fragment may span
/// lines. The lazy `(.*?)` stops at the nearest `</a>`, which for the
/// engine's flat snippet markup is the anchor's own closing tag.
const SNIPPET_PATTERN: &str = r#"(?is)<a class="result__snippet[^>]*>(.*?)</a>"#;

/// Second pass: any angle-bracketed tag, `<` + one or more non-`>` + `>`.
const TAG_PATTERN: &str = "<[^>]+>";

/// Compiled two-pass snippet extractor.
///
/// Both patterns are compiled once up front so a pattern problem surfaces
/// before any network traffic happens.
pub struct SnippetExtractor {
    snippet: Regex,
    tag: Regex,
}

impl SnippetExtractor {
    /// Compiles both extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Extract`] if either pattern fails to compile.
    pub fn new() -> Result<Self, SearchError> {
        let snippet = Regex::new(SNIPPET_PATTERN)
            .map_err(|e| SearchError::Extract(format!("invalid snippet pattern: {e}")))?;
        let tag = Regex::new(TAG_PATTERN)
            .map_err(|e| SearchError::Extract(format!("invalid tag pattern: {e}")))?;
        Ok(Self { snippet, tag })
    }

    /// First pass: raw snippet fragments in document order.
    ///
    /// Each fragment is the capture between a snippet anchor's opening tag
    /// and the next `</a>`, inner tags still present. Non-overlapping
    /// matches, scanned left to right.
    pub fn fragments<'h>(&self, html: &'h str) -> Vec<&'h str> {
        self.snippet
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Second pass: delete every angle-bracketed tag from one fragment.
    ///
    /// Only real tags are removed. A literal `<>` survives (the pattern
    /// needs at least one character between the brackets) and HTML entities
    /// such as `&amp;` are left undecoded.
    pub fn strip_tags(&self, fragment: &str) -> String {
        self.tag.replace_all(fragment, "").into_owned()
    }

    /// Runs both passes: cleaned snippet lines in document order.
    ///
    /// An empty vector means the page contained no snippet anchors. That is
    /// a legitimate outcome, not an error.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let cleaned: Vec<String> = self
            .fragments(html)
            .into_iter()
            .map(|fragment| self.strip_tags(fragment))
            .collect();
        tracing::debug!(count = cleaned.len(), "snippets extracted");
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_RESULTS_HTML: &str = r#"
        <html><body>
        <div class="result results_links results_links_deep web-result">
            <a class="result__snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fdeveloper.apple.com%2Fdocumentation%2Fcoreimage">A 64-bit-per-pixel, floating-point pixel format. The <b>RGBAh</b> format stores four half-float components.</a>
        </div>
        <div class="result results_links results_links_deep web-result">
            <a class="result__snippet js-result-snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fdeveloper.apple.com%2Fdocumentation%2Fcoreimage%2Fciformat">Case <b>RGBAh</b>. A pixel format with full-range colour.</a>
        </div>
        </body></html>
    "#;

    fn extractor() -> SnippetExtractor {
        SnippetExtractor::new().expect("patterns should compile")
    }

    // ── Full pipeline ──

    #[test]
    fn two_snippets_cleaned_in_document_order() {
        let lines = extractor().extract(MOCK_RESULTS_HTML);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "A 64-bit-per-pixel, floating-point pixel format. The RGBAh format stores four half-float components."
        );
        assert_eq!(
            lines[1],
            "Case RGBAh. A pixel format with full-range colour."
        );
    }

    #[test]
    fn no_snippet_anchors_yields_empty() {
        let html = "<html><body><p>No results.</p></body></html>";
        assert!(extractor().extract(html).is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let ex = extractor();
        assert_eq!(ex.extract(MOCK_RESULTS_HTML), ex.extract(MOCK_RESULTS_HTML));
    }

    // ── First pass ──

    #[test]
    fn fragments_keep_inner_tags() {
        let html = r#"<a class="result__snippet" href="/x">keep <b>bold</b></a>"#;
        let fragments = extractor().fragments(html);
        assert_eq!(fragments, vec!["keep <b>bold</b>"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let html = r#"<A CLASS="result__snippet" HREF="/x">shouting markup</A>"#;
        let lines = extractor().extract(html);
        assert_eq!(lines, vec!["shouting markup".to_string()]);
    }

    #[test]
    fn fragment_may_span_lines() {
        let html = "<a class=\"result__snippet\" href=\"/x\">first line\nsecond line</a>";
        let lines = extractor().extract(html);
        assert_eq!(lines, vec!["first line\nsecond line".to_string()]);
    }

    #[test]
    fn extra_classes_and_attributes_allowed() {
        let html = r#"<a class="result__snippet js-snippet" rel="nofollow" href="/x">text</a>"#;
        assert_eq!(extractor().fragments(html), vec!["text"]);
    }

    #[test]
    fn unterminated_anchor_not_matched() {
        let html = r#"<a class="result__snippet" href="/x">never closed"#;
        assert!(extractor().fragments(html).is_empty());
    }

    #[test]
    fn other_anchor_classes_ignored() {
        let html = r#"<a class="result__a" href="/x">a title</a>"#;
        assert!(extractor().fragments(html).is_empty());
    }

    #[test]
    fn lazy_capture_stops_at_nearest_close() {
        let html = r#"<a class="result__snippet" href="/x">inner <i>em</i></a> trailing</a>"#;
        assert_eq!(extractor().fragments(html), vec!["inner <i>em</i>"]);
    }

    // ── Second pass ──

    #[test]
    fn nested_tags_fully_stripped() {
        let cleaned = extractor().strip_tags("<span><i>deep</i></span> text");
        assert_eq!(cleaned, "deep text");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('>'));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(extractor().strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn empty_angle_pair_survives() {
        // The tag pattern requires at least one character between the
        // brackets, so a literal `<>` is not a tag.
        assert_eq!(extractor().strip_tags("a <> b"), "a <> b");
    }

    #[test]
    fn entities_left_undecoded() {
        assert_eq!(
            extractor().strip_tags("Fish &amp; chips &lt;fast&gt;"),
            "Fish &amp; chips &lt;fast&gt;"
        );
    }

    #[test]
    fn extractor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnippetExtractor>();
    }
}
