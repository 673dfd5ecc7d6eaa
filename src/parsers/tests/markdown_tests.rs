use crate::error::ConversionError;
use crate::parsers::markdown::{MAX_DEPTH, MarkdownConverter};

#[cfg(test)]
mod inline_tests {
    use super::*;

    fn convert(html: &str) -> String {
        MarkdownConverter::new("https://developer.mozilla.org")
            .unwrap()
            .convert(html)
            .unwrap()
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(convert("<p>Hello <strong>world</strong></p>"), "Hello **world**");
        assert_eq!(convert("<p>An <em>important</em> note</p>"), "An *important* note");
        assert_eq!(convert("<b>bold</b> and <i>italic</i>"), "**bold** and *italic*");
    }

    #[test]
    fn test_code_hoists_emphasis() {
        assert_eq!(convert("<code>Array.from()</code>"), "`Array.from()`");
        assert_eq!(convert("<code><strong>value</strong></code>"), "**`value`**");
        assert_eq!(convert("<em><code>arr</code></em>"), "*`arr`*");
    }

    #[test]
    fn test_links_are_resolved() {
        assert_eq!(
            convert(r#"<a href="/fr/docs/Web" title="Web">Web</a>"#),
            "[Web](https://developer.mozilla.org/fr/docs/Web)"
        );
        assert_eq!(
            convert(r#"<a href="https://tc39.es/ecma262/">ECMAScript</a>"#),
            "[ECMAScript](https://tc39.es/ecma262/)"
        );
    }

    #[test]
    fn test_superscript() {
        assert_eq!(convert("<p>2<sup>53</sup> - 1</p>"), "2⁵³ - 1");
    }

    #[test]
    fn test_entities_and_whitespace() {
        assert_eq!(convert("<p>a&nbsp;&lt;b&gt;</p>"), "a <b>");
        assert_eq!(convert("<p>  lots   of\n   space </p>"), "lots of space");
        assert_eq!(convert("<span class=\"x\">inline</span> text"), "inline text");
    }

    #[test]
    fn test_dropped_elements() {
        assert_eq!(convert("<p>kept<script>alert(1)</script></p>"), "kept");
        assert_eq!(convert("<p><img src=\"a.png\">caption</p>"), "caption");
        assert_eq!(convert(""), "");
        assert_eq!(convert("   "), "");
    }
}

#[cfg(test)]
mod block_tests {
    use super::*;

    fn convert(html: &str) -> String {
        MarkdownConverter::new("https://developer.mozilla.org")
            .unwrap()
            .convert(html)
            .unwrap()
    }

    #[test]
    fn test_code_block_keeps_indentation() {
        let html = "<pre class=\"brush: js notranslate\">let a = 1;\n  a++;</pre>";
        assert_eq!(convert(html), "```js\nlet a = 1;\n  a++;\n```");
    }

    #[test]
    fn test_code_block_language() {
        assert_eq!(convert("<pre class=\"brush: html\">&lt;p&gt;</pre>"), "```html\n<p>\n```");
        assert_eq!(convert("<pre>x</pre>"), "```js\nx\n```");
    }

    #[test]
    fn test_lists() {
        assert_eq!(convert("<ul><li>One</li><li>Two</li></ul>"), "• One\n• Two");
        assert_eq!(convert("<ol><li>One</li><li>Two</li></ol>"), "1. One\n2. Two");
    }

    #[test]
    fn test_headings_and_paragraphs() {
        assert_eq!(convert("<h3>Title</h3><p>Body</p>"), "> **Title**\nBody");
        assert_eq!(convert("<p>First</p><p>Second</p>"), "First\nSecond");
        assert_eq!(convert("a<br>b"), "a\nb");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(convert("<p>a</p><br><br><br><p>b</p>"), "a\n\nb");
    }

    #[test]
    fn test_output_has_no_supported_tags() {
        let html = r#"<div class="note"><p>Use <a href="/x"><code>map()</code></a> with
            <em>care</em>.</p><ul><li><strong>one</strong></li></ul>
            <pre class="brush: js">[1, 2].map(x =&gt; x * 2);</pre><h4>End</h4></div>"#;
        let markdown = convert(html);

        for tag in ["<p", "<a ", "<code", "<em", "<ul", "<li", "<strong", "<pre", "<h4", "<div"] {
            assert!(!markdown.contains(tag), "{} left in {:?}", tag, markdown);
        }
        assert!(markdown.contains("[`map()`](https://developer.mozilla.org/x)"));
        assert!(markdown.contains("[1, 2].map(x => x * 2);"));
    }
}

#[cfg(test)]
mod depth_tests {
    use super::*;

    #[test]
    fn test_pathological_nesting_is_rejected() {
        let html = format!("{}x{}", "<span>".repeat(300), "</span>".repeat(300));
        let converter = MarkdownConverter::new("https://developer.mozilla.org").unwrap();

        assert_eq!(
            converter.convert(&html),
            Err(ConversionError::DepthExceeded { limit: MAX_DEPTH })
        );
    }

    #[test]
    fn test_reasonable_nesting_is_accepted() {
        let html = format!("{}x{}", "<span>".repeat(20), "</span>".repeat(20));
        let converter = MarkdownConverter::new("https://developer.mozilla.org").unwrap();

        assert_eq!(converter.convert(&html).unwrap(), "x");
    }
}
