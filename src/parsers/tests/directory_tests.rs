use crate::parsers::directory::{DirectoryGroup, parse_directory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_index_page() {
        let html = r#"<html><body><div id="wikiArticle">
            <p>Cette page liste les objets natifs.</p>
            <h3 id="Valeurs">Propriétés représentant des valeurs</h3>
            <ul><li>Infinity</li><li> NaN </li><li>   </li></ul>
            <h3 id="Fonctions">Fonctions</h3>
            <ul><li><code>eval()</code></li></ul>
            <ul><li><code>isNaN()</code></li></ul>
        </div></body></html>"#;

        assert_eq!(
            parse_directory(html),
            vec![
                DirectoryGroup {
                    name: "Propriétés représentant des valeurs".to_string(),
                    entries: vec!["Infinity".to_string(), "NaN".to_string()],
                },
                DirectoryGroup {
                    name: "Fonctions".to_string(),
                    entries: vec!["eval()".to_string(), "isNaN()".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_modern_index_page() {
        let html = r#"<html><body><main><article class="main-page-content">
            <section aria-labelledby="value_properties">
                <h2 id="value_properties">Value properties</h2>
                <div class="section-content"><ul><li>globalThis</li><li>undefined</li></ul></div>
            </section>
            <section aria-labelledby="see_also">
                <h2 id="see_also">See also</h2>
                <p>No list here.</p>
            </section>
        </article></main></body></html>"#;

        let groups = parse_directory(html);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Value properties");
        assert_eq!(groups[0].entries, vec!["globalThis", "undefined"]);
    }

    #[test]
    fn test_lists_before_any_heading_are_ignored() {
        let html = "<html><body><ul><li>stray</li></ul></body></html>";
        assert!(parse_directory(html).is_empty());
    }
}
