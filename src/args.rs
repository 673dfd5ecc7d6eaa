use clap::{Parser, ValueEnum};
use docbot::PageKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docbot")]
#[command(about = "Discord bot answering MDN documentation lookups")]
#[command(version)]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Print the documentation of NAME instead of connecting to Discord
    #[arg(short, long, value_name = "NAME")]
    pub lookup: Option<String>,

    /// Page printed by --lookup
    #[arg(short, long, value_enum, default_value_t = PageKindArg::Main)]
    pub page: PageKindArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageKindArg {
    Main,
    More,
    Methods,
    Properties,
    StaticMethods,
    StaticProperties,
}

/// Convert from CLI argument page kind to internal page kind
pub fn convert_page_kind(arg: PageKindArg) -> PageKind {
    match arg {
        PageKindArg::Main => PageKind::Main,
        PageKindArg::More => PageKind::More,
        PageKindArg::Methods => PageKind::Methods,
        PageKindArg::Properties => PageKind::Properties,
        PageKindArg::StaticMethods => PageKind::StaticMethods,
        PageKindArg::StaticProperties => PageKind::StaticProperties,
    }
}
