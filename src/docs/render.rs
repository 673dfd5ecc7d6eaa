use crate::docs::page::{Page, PageKey, PageKind};
use crate::error::ConversionError;
use crate::format::truncate;
use crate::locale::{Labels, Locale};
use crate::parsers::directory::parse_directory;
use crate::parsers::markdown::MarkdownConverter;
use crate::results::{DESCRIPTION_KEY, EntryMap, FieldSet};

/// Discord ceiling for a field value
pub const FIELD_LIMIT: usize = 1024;
/// Ceiling for a page body
pub const DESCRIPTION_LIMIT: usize = 2000;
/// Discord ceiling for fields per embed
pub const MAX_FIELDS: usize = 25;
/// Discord ceiling for a field name
pub const FIELD_NAME_LIMIT: usize = 256;
/// Discord ceiling for all text of one embed
pub const EMBED_LIMIT: usize = 6000;

// Room kept for the navigation footer when budgeting fields.
const FOOTER_RESERVE: usize = 256;
// Shortest field value still worth adding to a nearly full embed.
const MIN_FIELD_ROOM: usize = 32;

/// What kind of global a documented name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Class,
    Function,
    Namespace,
    Constant,
}

const NAMESPACES: &[&str] = &["Intl", "Math", "JSON", "Reflect", "Atomics", "WebAssembly"];
const CONSTANTS: &[&str] = &["Infinity", "NaN", "undefined", "null", "globalThis"];

/// Guesses the entity kind from its name
pub fn entity_kind(name: &str) -> EntityKind {
    if NAMESPACES.contains(&name) {
        EntityKind::Namespace
    } else if CONSTANTS.contains(&name) {
        EntityKind::Constant
    } else if name.ends_with("()") {
        EntityKind::Function
    } else if name.chars().next().is_some_and(char::is_uppercase) {
        EntityKind::Class
    } else {
        EntityKind::Function
    }
}

/// Characters left for fields before the embed total, footer reserve included
fn remaining_budget(page: &Page) -> usize {
    let used = page.title.chars().count()
        + page.description.chars().count()
        + page
            .fields
            .iter()
            .map(|field| field.name.chars().count() + field.value.chars().count())
            .sum::<usize>();
    EMBED_LIMIT.saturating_sub(used).saturating_sub(FOOTER_RESERVE)
}

/// Renders field sets into pages
#[derive(Debug, Clone)]
pub struct Renderer {
    converter: MarkdownConverter,
    locale: Locale,
}

impl Renderer {
    pub fn new(converter: MarkdownConverter, locale: Locale) -> Self {
        Self { converter, locale }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    /// Render the page of `fields` that `key` names
    pub fn render(&self, fields: &FieldSet, key: &PageKey) -> Result<Page, ConversionError> {
        let mut page = match key.kind {
            PageKind::Main => self.main_page(fields)?,
            PageKind::More => self.more_page(fields)?,
            PageKind::Methods => self.members_page(&fields.methods, key.kind)?,
            PageKind::Properties => self.members_page(&fields.properties, key.kind)?,
            PageKind::StaticMethods => self.members_page(&fields.static_methods, key.kind)?,
            PageKind::StaticProperties => {
                self.members_page(&fields.static_properties, key.kind)?
            }
        };

        page.url = Some(key.link.clone());
        page.footer = Some(self.navigation_legend(fields));
        Ok(page)
    }

    fn main_page(&self, fields: &FieldSet) -> Result<Page, ConversionError> {
        let labels = self.labels();
        let kind = match entity_kind(&fields.name) {
            EntityKind::Class => labels.class,
            EntityKind::Function => labels.function,
            EntityKind::Namespace => labels.namespace,
            EntityKind::Constant => labels.constant,
        };

        let mut page = Page::new(format!("{} {} :", kind, fields.name));
        page.description = truncate(&self.converter.convert(&fields.description)?, DESCRIPTION_LIMIT);

        let sections = [
            (labels.short_description, &fields.short_description),
            (labels.syntax, &fields.syntax),
            (labels.parameters, &fields.parameters),
            (labels.return_value, &fields.returned_value),
        ];
        for (name, html) in sections {
            self.push_converted(&mut page, name, html)?;
        }

        Ok(page)
    }

    fn more_page(&self, fields: &FieldSet) -> Result<Page, ConversionError> {
        let labels = self.labels();
        let mut page = Page::new(format!("{} {} :", PageKind::More.emoji(), labels.more));

        if !fields.examples.trim().is_empty() {
            page.description = truncate(&self.converter.convert(&fields.examples)?, DESCRIPTION_LIMIT);
        }
        self.push_converted(&mut page, labels.see_also, &fields.see_also)?;

        Ok(page)
    }

    /// One field per member, first [`MAX_FIELDS`] entries in document order
    fn members_page(&self, members: &EntryMap, kind: PageKind) -> Result<Page, ConversionError> {
        let labels = self.labels();
        let mut page = Page::new(format!("{} {} :", kind.emoji(), kind.label(labels)));

        if members.is_empty() {
            page.description = labels.empty_category.to_string();
            return Ok(page);
        }

        if let Some(description) = members.get(DESCRIPTION_KEY) {
            page.description = truncate(&self.converter.convert(description)?, DESCRIPTION_LIMIT);
        }

        for (name, html) in members.iter().take(MAX_FIELDS) {
            if name == DESCRIPTION_KEY || html.trim().is_empty() {
                continue;
            }
            let value = self.converter.convert(html)?;
            if value.is_empty() {
                continue;
            }

            let name = truncate(name, FIELD_NAME_LIMIT);
            let value = truncate(&value, FIELD_LIMIT);
            if name.chars().count() + value.chars().count() > remaining_budget(&page) {
                ::log::debug!("Embed budget exhausted after {} fields", page.fields.len());
                break;
            }
            page.push_field(name, value, false);
        }

        Ok(page)
    }

    /// Page listing the native objects, shown when a lookup finds nothing
    pub fn directory_page(&self, html: &str, url: &str) -> Page {
        let labels = self.labels();
        let mut page = Page::new(labels.directory_title);
        page.url = Some(url.to_string());
        page.footer = Some(labels.directory_footer.to_string());

        for group in parse_directory(html).into_iter().take(MAX_FIELDS) {
            let names = group
                .entries
                .iter()
                .map(|entry| format!("`{}`", entry))
                .collect::<Vec<_>>()
                .join("\n");
            page.push_field(
                truncate(&group.name, FIELD_NAME_LIMIT),
                truncate(&names, FIELD_LIMIT),
                true,
            );
        }

        page
    }

    /// Adds `html` as a field, shortened to what is left of the embed budget
    fn push_converted(&self, page: &mut Page, name: &str, html: &str) -> Result<(), ConversionError> {
        let text = self.converter.convert(html)?;
        if text.is_empty() {
            return Ok(());
        }

        let room = remaining_budget(page)
            .saturating_sub(name.chars().count())
            .min(FIELD_LIMIT);
        if room < MIN_FIELD_ROOM {
            ::log::debug!("No room left in the embed for '{}'", name);
            return Ok(());
        }
        page.push_field(name, truncate(&text, room), false);
        Ok(())
    }

    fn navigation_legend(&self, fields: &FieldSet) -> String {
        let labels = self.labels();
        PageKind::available(fields)
            .into_iter()
            .map(|kind| format!("{} {}", kind.emoji(), kind.label(labels)))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
