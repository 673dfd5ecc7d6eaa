use crate::error::ConversionError;
use crate::format::to_superscript;
use crate::utils::resolve_link;
use regex::Regex;
use scraper::{ElementRef, Html, Node};
use once_cell::sync::Lazy;
use url::Url;

/// Deepest element nesting the converter will walk
pub const MAX_DEPTH: usize = 128;

static SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("space pattern is a valid regex"));

/// Converts documentation HTML fragments into Discord markdown
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    base: Url,
}

impl MarkdownConverter {
    /// Create a converter resolving relative links against `domain`
    pub fn new(domain: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(domain)?,
        })
    }

    /// Convert an HTML fragment to markdown
    ///
    /// The fragment is parsed once and walked once. Markup nested deeper than
    /// [`MAX_DEPTH`] is rejected with [`ConversionError::DepthExceeded`].
    pub fn convert(&self, html: &str) -> Result<String, ConversionError> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let fragment = Html::parse_fragment(html);
        let raw = self.children(fragment.root_element(), 0)?;
        Ok(tidy(&raw))
    }

    fn children(&self, element: ElementRef, depth: usize) -> Result<String, ConversionError> {
        if depth > MAX_DEPTH {
            return Err(ConversionError::DepthExceeded { limit: MAX_DEPTH });
        }

        let mut out = String::new();
        for child in element.children() {
            match child.value() {
                Node::Text(text) => push_text(&mut out, text),
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        out.push_str(&self.element(child, depth + 1)?);
                    }
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn element(&self, element: ElementRef, depth: usize) -> Result<String, ConversionError> {
        let tag = element.value().name();

        let rendered = match tag {
            "script" | "style" | "template" | "img" | "svg" => String::new(),
            "br" => "\n".to_string(),
            "pre" => code_block(element),
            "ul" => self.list(element, depth, false)?,
            "ol" => self.list(element, depth, true)?,
            "li" => format!("\n• {}\n", self.children(element, depth)?.trim()),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let inner = self.children(element, depth)?;
                format!("\n> **{}**\n", inner.trim())
            }
            "em" | "i" => wrap(&self.children(element, depth)?, "*"),
            "strong" | "b" => wrap(&self.children(element, depth)?, "**"),
            "dt" => format!("\n{}\n", wrap(&self.children(element, depth)?, "**").trim()),
            "code" | "kbd" => code_span(&self.children(element, depth)?),
            "sup" => to_superscript(&self.children(element, depth)?),
            "a" => self.link(element, depth)?,
            "td" | "th" => format!("{} ", self.children(element, depth)?),
            "p" | "div" | "section" | "article" | "header" | "dl" | "dd" | "table" | "tr"
            | "blockquote" | "figure" => format!("{}\n", self.children(element, depth)?),
            _ => self.children(element, depth)?,
        };

        Ok(rendered)
    }

    fn list(&self, element: ElementRef, depth: usize, numbered: bool) -> Result<String, ConversionError> {
        let mut out = String::from("\n");
        let items = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li");

        for (index, item) in items.enumerate() {
            let text = self.children(item, depth + 1)?;
            if numbered {
                out.push_str(&format!("{}. {}\n", index + 1, text.trim()));
            } else {
                out.push_str(&format!("• {}\n", text.trim()));
            }
        }
        Ok(out)
    }

    fn link(&self, element: ElementRef, depth: usize) -> Result<String, ConversionError> {
        let text = self.children(element, depth)?;
        let Some(href) = element.value().attr("href") else {
            return Ok(text);
        };
        if text.trim().is_empty() {
            return Ok(text);
        }

        Ok(format!("[{}]({})", text.trim(), resolve_link(&self.base, href)))
    }
}

/// Appends a text node with its whitespace runs collapsed to single spaces
fn push_text(out: &mut String, text: &str) {
    let mut last_space = out.ends_with(' ') || out.ends_with('\n');
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(c);
            last_space = false;
        }
    }
}

/// Wraps trimmed content in a markdown marker, keeping outer whitespace outside
fn wrap(inner: &str, marker: &str) -> String {
    let core = inner.trim();
    if core.is_empty() {
        return inner.to_string();
    }

    let leading = if inner.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if inner.ends_with(char::is_whitespace) { " " } else { "" };
    format!("{}{}{}{}{}", leading, marker, core, marker, trailing)
}

/// Renders inline code, hoisting emphasis markers out of the backticks
fn code_span(inner: &str) -> String {
    let trimmed = inner.trim();
    let core = trimmed.trim_matches('*');
    if core.is_empty() {
        return inner.to_string();
    }

    let lead = &trimmed[..trimmed.len() - trimmed.trim_start_matches('*').len()];
    let trail = &trimmed[trimmed.trim_end_matches('*').len()..];
    if core.contains('`') {
        format!("{}`` {} ``{}", lead, core, trail)
    } else {
        format!("{}`{}`{}", lead, core, trail)
    }
}

/// Renders a `<pre>` block as a fenced code block
fn code_block(element: ElementRef) -> String {
    let code: String = element.text().collect();
    let code = code.trim_start_matches('\n').trim_end();
    let language = element
        .value()
        .attr("class")
        .and_then(brush_language)
        .unwrap_or("js");

    format!("\n```{}\n{}\n```\n", language, code)
}

/// Extracts the language from MDN's `brush: js` class convention
fn brush_language(class: &str) -> Option<&str> {
    let rest = class.split("brush:").nth(1)?;
    rest.split_whitespace().next().filter(|lang| !lang.is_empty())
}

/// Normalizes whitespace outside fenced code blocks
///
/// Lines are trimmed, runs of spaces collapse to one and consecutive blank
/// lines collapse to a single blank line. Fenced content is kept verbatim.
fn tidy(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_fence = false;
    let mut blank_run = 0;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            lines.push(trimmed.to_string());
            blank_run = 0;
            continue;
        }

        if in_fence {
            lines.push(line.trim_end().replace('\u{a0}', " "));
            continue;
        }

        let collapsed = SPACES
            .replace_all(&trimmed.replace('\u{a0}', " "), " ")
            .trim()
            .to_string();
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run > 1 || lines.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(collapsed);
    }

    lines.join("\n").trim().to_string()
}
