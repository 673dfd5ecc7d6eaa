use crate::docs::Page;
use serenity::all::{CreateEmbed, CreateEmbedFooter};

/// Accent colour of documentation embeds
pub const EMBED_COLOR: u32 = 0x83_D0_F2;

/// Builds the Discord embed showing `page`
pub fn page_embed(page: &Page) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&page.title).color(EMBED_COLOR);

    if let Some(url) = &page.url {
        embed = embed.url(url);
    }
    if !page.description.is_empty() {
        embed = embed.description(&page.description);
    }

    embed = embed.fields(
        page.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str(), field.inline)),
    );

    if let Some(footer) = &page.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed
}
