use crate::parsers::sections::{find_container, flatten_sections};
use crate::parsers::{child_elements, collapse_whitespace, descendant_elements, heading_level, tag_name};
use scraper::{ElementRef, Html};

/// A titled group of names on the global objects index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    pub name: String,
    pub entries: Vec<String>,
}

/// Extracts the grouped list of native objects from the index page
///
/// Each `h2`/`h3` heading opens a group; list items after it are its entries.
/// Groups without entries are left out.
pub fn parse_directory(html: &str) -> Vec<DirectoryGroup> {
    let document = Html::parse_document(html);
    let container = find_container(document.root_element());

    let mut groups: Vec<DirectoryGroup> = Vec::new();
    let mut current: Option<DirectoryGroup> = None;

    for element in flatten_sections(container) {
        if matches!(heading_level(tag_name(&element)), Some(2..=3)) {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            current = Some(DirectoryGroup {
                name: collapse_whitespace(&element.text().collect::<String>()),
                entries: Vec::new(),
            });
            continue;
        }

        let Some(group) = current.as_mut() else {
            continue;
        };
        for list in lists_in(element) {
            let names = child_elements(list)
                .filter(|item| tag_name(item) == "li")
                .map(|item| collapse_whitespace(&item.text().collect::<String>()))
                .filter(|name| !name.is_empty());
            group.entries.extend(names);
        }
    }

    if let Some(group) = current {
        groups.push(group);
    }
    groups.retain(|group| !group.entries.is_empty());

    ::log::debug!("Directory page lists {} groups", groups.len());
    groups
}

fn lists_in(element: ElementRef) -> Vec<ElementRef> {
    if matches!(tag_name(&element), "ul" | "ol") {
        return vec![element];
    }
    descendant_elements(element)
        .filter(|e| matches!(tag_name(e), "ul" | "ol"))
        .collect()
}
