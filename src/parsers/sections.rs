use crate::locale::{Locale, Section};
use crate::parsers::lists::{parse_definition_list, parse_parameter_list, parse_see_also};
use crate::parsers::{
    child_elements, collapse_whitespace, descendant_elements, has_text, heading_level, tag_name,
};
use crate::results::{DESCRIPTION_KEY, EntryMap, FieldSet};
use scraper::{ElementRef, Html};

/// Parses a raw documentation page and classifies it
///
/// The parsed tree is dropped before returning, so this is safe to call from
/// async code that must stay `Send`.
pub fn classify_page(html: &str, locale: Locale) -> FieldSet {
    let document = Html::parse_document(html);
    classify(&document, locale)
}

/// Buckets the article content of a documentation page into a [`FieldSet`]
///
/// Walks the article's children while tracking the current section, which
/// headings up to level 3 update. Once inside the examples section only a
/// level 1 or 2 heading leaves it, so example sub-headings stay with their
/// examples. Content under sections the locale does not know is dropped.
pub fn classify(document: &Html, locale: Locale) -> FieldSet {
    let root = document.root_element();
    let container = find_container(root);
    let mut fields = FieldSet::new(page_name(root));

    if let Some(paragraph) = descendant_elements(container).find(|e| tag_name(e) == "p") {
        fields.short_description = paragraph.inner_html();
    }

    let mut current = child_elements(container)
        .find(|e| tag_name(e) == "h1")
        .map(section_id)
        .unwrap_or_default();

    for element in flatten_sections(container) {
        let tag = tag_name(&element);

        if tag == "dl" {
            if let Some(heading) = descendant_elements(element).find(|e| tag_name(e) == "h3") {
                current = section_id(heading);
            }
        }

        let in_examples = locale.section(&current) == Some(Section::Examples);
        match heading_level(tag) {
            Some(1..=2) if in_examples => {
                current = section_id(element);
                continue;
            }
            Some(1..=3) if !in_examples => {
                current = section_id(element);
                continue;
            }
            _ => {}
        }

        if !has_text(element) {
            continue;
        }

        match locale.section(&current) {
            Some(section) => append(&mut fields, section, element),
            None => ::log::debug!("Dropping <{}> under unrecognised section '{}'", tag, current),
        }
    }

    ::log::debug!(
        "Classified '{}': {} methods, {} properties, {} static methods, {} static properties",
        fields.name,
        fields.methods.len(),
        fields.properties.len(),
        fields.static_methods.len(),
        fields.static_properties.len()
    );

    fields
}

fn append(fields: &mut FieldSet, section: Section, element: ElementRef) {
    match section {
        Section::Syntax => push_html(&mut fields.syntax, &element.html()),
        Section::Parameters => push_html(&mut fields.parameters, &parse_parameter_list(element)),
        Section::ReturnValue => push_html(&mut fields.returned_value, &element.html()),
        Section::Description => push_html(&mut fields.description, &element.html()),
        Section::Examples => push_html(&mut fields.examples, &element.html()),
        Section::SeeAlso => push_html(&mut fields.see_also, &parse_see_also(element)),
        Section::StaticProperties => merge_members(&mut fields.static_properties, element),
        Section::StaticMethods => merge_members(&mut fields.static_methods, element),
        Section::Properties => merge_members(&mut fields.properties, element),
        Section::Methods => merge_members(&mut fields.methods, element),
    }
}

fn push_html(field: &mut String, html: &str) {
    field.push('\n');
    field.push_str(html);
}

/// Member lists merge into the map; a stray paragraph becomes its description
fn merge_members(map: &mut EntryMap, element: ElementRef) {
    match tag_name(&element) {
        "dl" | "div" => map.extend(parse_definition_list(element)),
        _ => {
            if !map.contains_key(DESCRIPTION_KEY) {
                map.insert(DESCRIPTION_KEY, element.inner_html());
            }
        }
    }
}

/// Identifier of a heading: its `id`, or its text with spaces as underscores
pub(crate) fn section_id(heading: ElementRef) -> String {
    match heading.value().id() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => collapse_whitespace(&heading.text().collect::<String>()).replace(' ', "_"),
    }
}

fn container_rank(element: &ElementRef) -> Option<u8> {
    let value = element.value();
    if value.id() == Some("wikiArticle") {
        return Some(0);
    }
    match value.name() {
        "article" if value.classes().any(|c| c == "main-page-content") => Some(1),
        "article" => Some(2),
        "main" => Some(3),
        "body" => Some(4),
        _ => None,
    }
}

/// The element holding the article body, from the most to least specific layout
pub(crate) fn find_container(root: ElementRef) -> ElementRef {
    descendant_elements(root)
        .filter_map(|e| container_rank(&e).map(|rank| (rank, e)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, e)| e)
        .unwrap_or(root)
}

/// Children of `container`, with `<section>` wrappers replaced by their content
pub(crate) fn flatten_sections(container: ElementRef) -> Vec<ElementRef> {
    let mut elements = Vec::new();
    for child in child_elements(container) {
        if tag_name(&child) == "section" {
            elements.extend(flatten_sections(child));
        } else {
            elements.push(child);
        }
    }
    elements
}

fn page_name(root: ElementRef) -> String {
    let header = descendant_elements(root)
        .find(|e| e.value().classes().any(|c| c == "documentation-page-header"));
    let heading = header
        .and_then(|h| descendant_elements(h).find(|e| tag_name(e) == "h1"))
        .or_else(|| descendant_elements(root).find(|e| tag_name(e) == "h1"));

    heading
        .map(|h| collapse_whitespace(&h.text().collect::<String>()))
        .unwrap_or_default()
}
