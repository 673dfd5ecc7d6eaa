//! Documentation lookups: fetching, classifying, rendering and paging.
//!
//! [`DocService`] owns the rendered page cache, the per-user navigation
//! history and the open reaction sessions. Parsed HTML never outlives the
//! synchronous classification step, so every method here is `Send`.

pub mod page;
pub mod render;

pub use page::{Page, PageField, PageKey, PageKind};
pub use render::Renderer;

use crate::config::DocsConfig;
use crate::error::{ConfigError, ConversionError, DocError, FetchError};
use crate::fetch::PageFetcher;
use crate::locale::Locale;
use crate::parsers::markdown::MarkdownConverter;
use crate::parsers::sections::classify_page;
use crate::results::FieldSet;
use crate::utils::object_path;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

const GLOBAL_OBJECTS_PATH: &str = "docs/Web/JavaScript/Reference/Global_Objects";

/// A lookup message whose reactions drive navigation
#[derive(Debug, Clone)]
pub struct Session {
    /// Only this user's reactions are honoured
    pub user_id: u64,
    pub link: String,
    pub fields: Arc<FieldSet>,
}

/// Last page kind a user picked, and on which link
#[derive(Debug, Clone)]
struct Visit {
    kind: PageKind,
    link: String,
}

/// Result of [`DocService::lookup`]
#[derive(Debug)]
pub enum LookupOutcome {
    Found {
        link: String,
        fields: Arc<FieldSet>,
        page: Arc<Page>,
    },
    /// Nothing matched; the page lists the native objects instead.
    Fallback { page: Page },
    Failed(DocError),
}

pub struct DocService<F> {
    fetcher: F,
    renderer: Renderer,
    domain: String,
    locale: Locale,
    pages: Mutex<HashMap<PageKey, Arc<Page>>>,
    history: Mutex<HashMap<u64, Visit>>,
    sessions: Mutex<HashMap<u64, Session>>,
}

impl<F: PageFetcher> DocService<F> {
    pub fn new(fetcher: F, config: &DocsConfig) -> Result<Self, ConfigError> {
        let converter = MarkdownConverter::new(&config.domain)?;

        Ok(Self {
            fetcher,
            renderer: Renderer::new(converter, config.locale),
            domain: config.domain.trim_end_matches('/').to_string(),
            locale: config.locale,
            pages: Mutex::new(HashMap::new()),
            history: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Documentation URL for a global object name such as `Array.prototype.at`
    pub fn link_for(&self, name: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.domain,
            self.locale.path_segment(),
            GLOBAL_OBJECTS_PATH,
            object_path(name)
        )
    }

    /// URL of the page listing every native object
    pub fn directory_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.domain,
            self.locale.path_segment(),
            GLOBAL_OBJECTS_PATH
        )
    }

    /// Look up `query` and render its main page
    ///
    /// Never fails past this boundary: a missing page or an empty query
    /// yields the directory fallback, anything else a `Failed` value.
    pub async fn lookup(&self, query: &str) -> LookupOutcome {
        let name = query.trim();
        if object_path(name).is_empty() {
            return self.fallback_outcome(None).await;
        }

        let link = self.link_for(name);
        let fields = match self.load(&link).await {
            Ok(fields) => fields,
            Err(e) if e.is_not_found() => {
                ::log::info!("No documentation page for '{}' at {}", name, link);
                return self.fallback_outcome(Some(name)).await;
            }
            Err(e) => {
                ::log::warn!("Lookup of '{}' failed: {}", name, e);
                return LookupOutcome::Failed(e.into());
            }
        };

        let key = PageKey::new(&link, PageKind::Main);
        match self.page(&key, &fields).await {
            Ok(page) => LookupOutcome::Found { link, fields, page },
            Err(e) => {
                ::log::warn!("Rendering '{}' failed: {}", name, e);
                LookupOutcome::Failed(e.into())
            }
        }
    }

    async fn load(&self, link: &str) -> Result<Arc<FieldSet>, FetchError> {
        let html = self.fetcher.fetch(link).await?;
        Ok(Arc::new(classify_page(&html, self.locale)))
    }

    /// Page kind to show `user_id` on `link`: the kind remembered from
    /// another link, else the signalled one, else the main page
    ///
    /// On the link the kind was picked on, the signal wins so the user can
    /// page through the message.
    pub async fn select_kind(&self, user_id: u64, link: &str, signal: Option<PageKind>) -> PageKind {
        let history = self.history.lock().await;
        let remembered = history.get(&user_id).map(|visit| (visit.kind, visit.link == link));

        match (remembered, signal) {
            (Some((_, true)), Some(signal)) => signal,
            (Some((kind, _)), _) => kind,
            (None, signal) => signal.unwrap_or_default(),
        }
    }

    /// Serve a navigation request from `user_id` on `link`
    ///
    /// The resolved kind is recorded against `link` once the page renders.
    pub async fn navigate(
        &self,
        user_id: u64,
        link: &str,
        fields: &FieldSet,
        signal: Option<PageKind>,
    ) -> Result<Arc<Page>, ConversionError> {
        let kind = self.select_kind(user_id, link, signal).await;
        let page = self.page(&PageKey::new(link, kind), fields).await?;
        self.history.lock().await.insert(
            user_id,
            Visit {
                kind,
                link: link.to_string(),
            },
        );

        Ok(page)
    }

    /// Cached page for `key`, rendered and cached on a miss
    pub async fn page(&self, key: &PageKey, fields: &FieldSet) -> Result<Arc<Page>, ConversionError> {
        if let Some(page) = self.pages.lock().await.get(key) {
            ::log::trace!("Cache hit for {:?} of {}", key.kind, key.link);
            return Ok(Arc::clone(page));
        }

        let page = Arc::new(self.renderer.render(fields, key)?);
        self.pages.lock().await.insert(key.clone(), Arc::clone(&page));
        ::log::debug!("Rendered {:?} page of {}", key.kind, key.link);

        Ok(page)
    }

    async fn fallback_outcome(&self, query: Option<&str>) -> LookupOutcome {
        match self.fallback(query).await {
            Ok(page) => LookupOutcome::Fallback { page },
            Err(e) => {
                ::log::warn!("Directory fallback failed: {}", e);
                LookupOutcome::Failed(e)
            }
        }
    }

    /// Directory of native objects, fetched once and then served from cache
    ///
    /// With a query the body says that the search found nothing.
    pub async fn fallback(&self, query: Option<&str>) -> Result<Page, DocError> {
        let url = self.directory_url();
        let key = PageKey::new(&url, PageKind::Main);

        let cached = self.pages.lock().await.get(&key).cloned();
        let directory = match cached {
            Some(page) => page,
            None => {
                let html = self.fetcher.fetch(&url).await?;
                let page = Arc::new(self.renderer.directory_page(&html, &url));
                self.pages.lock().await.insert(key, Arc::clone(&page));
                page
            }
        };

        let mut page = (*directory).clone();
        if let Some(query) = query {
            page.description = self.renderer.labels().not_found.replace("{query}", query);
        }
        Ok(page)
    }

    pub async fn open_session(&self, message_id: u64, session: Session) {
        self.sessions.lock().await.insert(message_id, session);
    }

    pub async fn session(&self, message_id: u64) -> Option<Session> {
        self.sessions.lock().await.get(&message_id).cloned()
    }

    /// Forget every rendered page and every user's history
    pub async fn clear_cache(&self) {
        let mut pages = self.pages.lock().await;
        let mut history = self.history.lock().await;
        ::log::info!(
            "Clearing {} cached pages and {} history entries",
            pages.len(),
            history.len()
        );
        pages.clear();
        history.clear();
    }
}
