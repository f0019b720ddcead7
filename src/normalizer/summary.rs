//! Markup-to-summary extraction.
//!
//! Feed bodies arrive as HTML of wildly varying quality. The summary shown for
//! a story is the text of the first paragraph, flattened onto a single line.
//! When the body has no paragraph at all, the text of the whole fragment is used.

use scraper::{ElementRef, Html, Node, Selector};

/// Returned for absent bodies and for markup that cannot be processed.
pub const NO_CONTENT: &str = "No content available.";

/// Elements whose boundaries separate words even when the markup has no
/// whitespace between them.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Elements whose text content is never prose.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Reduce raw feed markup to a one-line plain-text summary.
///
/// Never fails: empty input gives [`NO_CONTENT`], an empty first paragraph
/// gives an empty string.
pub fn normalize(raw_markup: &str) -> String {
    if raw_markup.is_empty() {
        return NO_CONTENT.to_string();
    }

    let Ok(paragraph) = Selector::parse("p") else {
        return NO_CONTENT.to_string();
    };

    let document = Html::parse_fragment(raw_markup);
    let scope = document
        .select(&paragraph)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    collect_text(scope, &mut text);
    collapse_whitespace(&text)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push(' ');
                    continue;
                }

                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// Replace every run of whitespace with a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_flat(s: &str) {
        assert!(!s.contains('\n'), "newline in {:?}", s);
        assert!(!s.contains('\t'), "tab in {:?}", s);
        assert!(!s.contains("  "), "double space in {:?}", s);
        assert_eq!(s, s.trim());
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(normalize(""), NO_CONTENT);
    }

    #[test]
    fn test_first_paragraph_only() {
        let html = "<p>Hello<br>World</p><p>Second paragraph</p>";
        assert_eq!(normalize(html), "Hello World");
    }

    #[test]
    fn test_paragraph_after_leading_markup() {
        let html = r#"<div><img src="x.png"><h2>Heading</h2><p>The <a href="/x">first</a> <b>real</b> paragraph.</p></div>"#;
        assert_eq!(normalize(html), "The first real paragraph.");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        assert_eq!(normalize("<p>un<em>believ</em>able</p>"), "unbelievable");
    }

    #[test]
    fn test_no_paragraph_uses_whole_document() {
        let html = "<div>Line one</div>\n<div>Line\ttwo</div>";
        assert_eq!(normalize(html), "Line one Line two");
    }

    #[test]
    fn test_plain_text_is_flattened() {
        assert_eq!(
            normalize("  Just some\n\n text\twith   gaps  "),
            "Just some text with gaps"
        );
    }

    #[test]
    fn test_empty_paragraph_gives_empty_string() {
        assert_eq!(normalize("<p>   </p><p>Later</p>"), "");
    }

    #[test]
    fn test_whitespace_only_input_is_empty_not_fallback() {
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(normalize("<p>Fish &amp; Chips&nbsp;&nbsp;today</p>"), "Fish & Chips today");
    }

    #[test]
    fn test_script_and_style_are_dropped() {
        let html = "<style>.a { color: red }</style><script>alert(1)</script><span>Visible</span>";
        assert_eq!(normalize(html), "Visible");
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        let inputs = [
            "<p>unclosed <b>bold",
            "</p></div>stray closers",
            "<<<>>>",
            "<p><p><p>",
            "<![CDATA[ odd ]]>",
            "<!-- only a comment -->",
        ];
        for input in inputs {
            assert_flat(&normalize(input));
        }
        assert_eq!(normalize("<p>unclosed <b>bold"), "unclosed bold");
    }

    #[test]
    fn test_output_is_always_flat() {
        let inputs = [
            "<p>\n  multi\n  line\n</p>",
            "<ul><li>one</li><li>two</li></ul>",
            "<table><tr><td>a</td><td>b</td></tr></table>",
            "tabs\t\tand\r\nreturns",
            "<pre>  keep\n\n  nothing  </pre>",
        ];
        for input in inputs {
            assert_flat(&normalize(input));
        }
        assert_eq!(normalize("<ul><li>one</li><li>two</li></ul>"), "one two");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            "<p>Hello<br>World</p>",
            "<div>Some <i>styled</i>\ntext</div>",
            "plain words",
            "",
            "<p></p>",
        ];
        for input in inputs {
            let once = normalize(input);
            if once.is_empty() {
                continue;
            }
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_decoded_entities_are_markup_again() {
        // Entities decode to text that reads as markup on a second pass.
        let once = normalize("<p>x &lt;b&gt; y</p>");
        assert_eq!(once, "x <b> y");
        assert_eq!(normalize(&once), "x y");

        let once = normalize("<p>AT&amp;amp;T</p>");
        assert_eq!(once, "AT&amp;T");
        assert_eq!(normalize(&once), "AT&T");
    }
}
