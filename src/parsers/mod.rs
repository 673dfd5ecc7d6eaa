pub mod directory;
pub mod lists;
pub mod markdown;
pub mod sections;

#[cfg(test)]
mod tests;

use scraper::ElementRef;

/// Lower-case tag name of an element
pub(crate) fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Element children of `element`, skipping text and comment nodes
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Element descendants of `element`, excluding itself, in document order
pub(crate) fn descendant_elements<'a>(
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Heading level of an `h1`–`h6` tag name
pub(crate) fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Whether any descendant of `element` is a heading
pub(crate) fn contains_heading(element: ElementRef) -> bool {
    descendant_elements(element).any(|e| heading_level(tag_name(&e)).is_some())
}

/// Whether `element` has any non-whitespace text
pub(crate) fn has_text(element: ElementRef) -> bool {
    element.text().any(|t| !t.trim().is_empty())
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
