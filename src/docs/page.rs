use crate::locale::Labels;
use crate::results::FieldSet;
use std::fmt;

/// Which view of a documentation entry a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageKind {
    #[default]
    Main,
    More,
    Methods,
    Properties,
    StaticMethods,
    StaticProperties,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Main,
        PageKind::More,
        PageKind::Methods,
        PageKind::Properties,
        PageKind::StaticMethods,
        PageKind::StaticProperties,
    ];

    /// Reaction emoji used to navigate to this kind
    pub fn emoji(self) -> &'static str {
        match self {
            PageKind::Main => "📋",
            PageKind::More => "📖",
            PageKind::Methods => "🔧",
            PageKind::Properties => "📦",
            PageKind::StaticMethods => "⚡",
            PageKind::StaticProperties => "📌",
        }
    }

    pub fn from_emoji(emoji: &str) -> Option<PageKind> {
        Self::ALL.into_iter().find(|kind| kind.emoji() == emoji)
    }

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            PageKind::Main => labels.main,
            PageKind::More => labels.more,
            PageKind::Methods => labels.methods,
            PageKind::Properties => labels.properties,
            PageKind::StaticMethods => labels.static_methods,
            PageKind::StaticProperties => labels.static_properties,
        }
    }

    /// Kinds worth offering for `fields`: main and more always, member
    /// categories only when they have entries
    pub fn available(fields: &FieldSet) -> Vec<PageKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| match kind {
                PageKind::Main | PageKind::More => true,
                PageKind::Methods => !fields.methods.is_empty(),
                PageKind::Properties => !fields.properties.is_empty(),
                PageKind::StaticMethods => !fields.static_methods.is_empty(),
                PageKind::StaticProperties => !fields.static_properties.is_empty(),
            })
            .collect()
    }
}

/// Identifies one rendered page of one documentation entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub link: String,
    pub kind: PageKind,
}

impl PageKey {
    pub fn new(link: impl Into<String>, kind: PageKind) -> Self {
        Self {
            link: link.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rendered page, ready to be shown as an embed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub url: Option<String>,
    pub description: String,
    pub fields: Vec<PageField>,
    pub footer: Option<String>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) {
        self.fields.push(PageField {
            name: name.into(),
            value: value.into(),
            inline,
        });
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(url) = &self.url {
            writeln!(f, "<{}>", url)?;
        }
        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }
        for field in &self.fields {
            writeln!(f, "\n{}\n{}", field.name, field.value)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "\n{}", footer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_emoji(kind.emoji()), Some(kind));
        }
        assert_eq!(PageKind::from_emoji("👍"), None);
    }

    #[test]
    fn test_available_kinds() {
        let mut fields = FieldSet::new("Array");
        assert_eq!(
            PageKind::available(&fields),
            vec![PageKind::Main, PageKind::More]
        );

        fields.methods.insert("at()", "<p>Returns an item</p>");
        assert_eq!(
            PageKind::available(&fields),
            vec![PageKind::Main, PageKind::More, PageKind::Methods]
        );
    }

    #[test]
    fn test_display_page() {
        let mut page = Page::new("Title");
        page.description = "Body".to_string();
        page.push_field("Name", "Value", false);

        let text = page.to_string();
        assert!(text.starts_with("Title\n"));
        assert!(text.contains("Name\nValue"));
    }
}
