use url::Url;

/// Turns a user query into a documentation path segment.
///
/// Dots and whitespace separate path components, so `Array.prototype.sort`
/// becomes `Array/prototype/sort`.
pub fn object_path(name: &str) -> String {
    name.split(|c: char| c == '.' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolves a link found in a documentation page against the site root
pub fn resolve_link(base: &Url, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(e) => {
            ::log::debug!("Keeping unresolvable link {}: {}", href, e);
            href.to_string()
        }
    }
}
