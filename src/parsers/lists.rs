use crate::parsers::{child_elements, collapse_whitespace, contains_heading, escape_html, tag_name};
use crate::results::{DESCRIPTION_KEY, EntryMap};
use scraper::ElementRef;

/// Parses `<dt>`/`<dd>` pairs into a term → definition map
///
/// A `<div>` container contributes its first paragraph as the
/// [`DESCRIPTION_KEY`] entry, then every top-level `<dl>` it holds is parsed
/// and merged in document order.
pub fn parse_definition_list(node: ElementRef) -> EntryMap {
    let mut result = EntryMap::new();

    if tag_name(&node) == "div" {
        if let Some(paragraph) = child_elements(node).find(|child| tag_name(child) == "p") {
            result.insert(DESCRIPTION_KEY, paragraph.inner_html());
        }
        for list in top_level_lists(node) {
            result.extend(parse_definition_list(list));
        }
        return result;
    }

    let mut term: Option<String> = None;
    for child in child_elements(node) {
        match tag_name(&child) {
            "dt" if contains_heading(child) => term = None,
            "dt" => term = Some(collapse_whitespace(&child.text().collect::<String>())),
            "dd" => {
                if let Some(term) = term.take() {
                    result.insert(term, child.inner_html());
                }
            }
            _ => {}
        }
    }

    result
}

/// Renders a parameter list as HTML with one bold header line per parameter
///
/// Each header reads "**`name`** (hint) :" where the hint is whatever the term
/// carries besides the parameter name, e.g. "Optional".
pub fn parse_parameter_list(node: ElementRef) -> String {
    match tag_name(&node) {
        "dl" => {
            let mut result = String::new();
            for child in child_elements(node) {
                match tag_name(&child) {
                    "dt" if contains_heading(child) => {}
                    "dt" => result.push_str(&parameter_header(child)),
                    "dd" => result.push_str(&format!("<div>{}</div>", child.inner_html())),
                    _ => {}
                }
            }
            result
        }
        "div" => child_elements(node).map(parse_parameter_list).collect(),
        _ => node.html(),
    }
}

fn parameter_header(term: ElementRef) -> String {
    let full = collapse_whitespace(&term.text().collect::<String>());
    let name = term
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| tag_name(e) == "code")
        .map(|code| collapse_whitespace(&code.text().collect::<String>()))
        .unwrap_or_else(|| full.clone());
    let hint = full.replacen(&name, "", 1).trim().to_string();

    if hint.is_empty() {
        format!("<p><strong><code>{}</code></strong> :</p>", escape_html(&name))
    } else {
        format!(
            "<p><strong><code>{}</code></strong> ({}) :</p>",
            escape_html(&name),
            escape_html(&hint)
        )
    }
}

/// Renders a "see also" list as one bullet paragraph per item
pub fn parse_see_also(node: ElementRef) -> String {
    match tag_name(&node) {
        "ul" | "ol" => child_elements(node)
            .filter(|child| tag_name(child) == "li")
            .map(|item| format!("<p><strong>•</strong> {}</p>", item.inner_html().trim()))
            .collect(),
        "div" => child_elements(node).map(parse_see_also).collect(),
        _ => node.html(),
    }
}

/// `<dl>` descendants of `node` that are not nested inside another `<dl>`
fn top_level_lists(node: ElementRef) -> Vec<ElementRef> {
    let mut lists = Vec::new();
    for child in child_elements(node) {
        if tag_name(&child) == "dl" {
            lists.push(child);
        } else {
            lists.extend(top_level_lists(child));
        }
    }
    lists
}
