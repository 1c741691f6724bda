//! HTML emission for classified segments
//!
//! Produces a flat span-per-segment markup string; styling is left to
//! the consumer's stylesheet via per-category class names.

use crate::classify::Segment;

use super::style::style_for;

/// Render segments as HTML.
///
/// Plain text is escaped as-is; molecular segments become
/// `<span class="molscan-{category}" title="{label}">` elements.
pub fn render_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.category.is_molecular() {
            out.push_str("<span class=\"molscan-");
            out.push_str(segment.category.as_str());
            out.push_str("\" title=\"");
            out.push_str(style_for(segment.category).label);
            out.push_str("\">");
            escape_into(&segment.text, &mut out);
            out.push_str("</span>");
        } else {
            escape_into(&segment.text, &mut out);
        }
    }
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_plain_text_is_escaped_verbatim() {
        let html = render_html(&classify("a < b & c"));
        assert_eq!(html, "a &lt; b &amp; c");
    }

    #[test]
    fn test_molecular_segment_becomes_span() {
        let html = render_html(&classify("see 1UBQ today"));
        assert_eq!(
            html,
            "see <span class=\"molscan-structure_id\" title=\"PDB Structure ID\">1UBQ</span> today"
        );
    }

    #[test]
    fn test_notation_markup_is_escaped() {
        let html = render_html(&classify("C=CC=CC(=O)O"));
        assert!(html.contains("C=CC=CC(=O)O"));
        assert!(html.starts_with("<span class=\"molscan-chemical_notation\""));
    }
}
