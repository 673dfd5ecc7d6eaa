use crate::locale::Locale;
use crate::parsers::sections::classify_page;
use crate::results::DESCRIPTION_KEY;

/// Wraps `article` in the legacy MDN page layout
fn legacy_page(article: &str) -> String {
    format!(
        r#"<html><body>
        <div class="documentation-page-header"><h1>Array</h1></div>
        <nav><p>Navigation noise</p></nav>
        <div id="wikiArticle">{}</div>
        </body></html>"#,
        article
    )
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_name_and_short_description() {
        let fields = classify_page(
            &legacy_page("<p>L'objet <strong>Array</strong> est une liste.</p>"),
            Locale::Fr,
        );

        assert_eq!(fields.name, "Array");
        assert_eq!(
            fields.short_description,
            "L'objet <strong>Array</strong> est une liste."
        );
    }

    #[test]
    fn test_modern_layout() {
        let html = r#"<html><body><main>
            <article class="main-page-content">
                <header><h1>Array.prototype.at()</h1></header>
                <div class="section-content"><p>Returns the item at an index.</p></div>
                <section aria-labelledby="syntax">
                    <h2 id="syntax">Syntax</h2>
                    <div class="code-example"><pre class="brush: js">at(index)</pre></div>
                </section>
                <section aria-labelledby="return_value">
                    <h3 id="return_value">Return value</h3>
                    <p>The matching element.</p>
                </section>
            </article>
        </main></body></html>"#;
        let fields = classify_page(html, Locale::En);

        assert_eq!(fields.name, "Array.prototype.at()");
        assert_eq!(fields.short_description, "Returns the item at an index.");
        assert!(fields.syntax.contains("at(index)"));
        assert!(fields.returned_value.contains("The matching element."));
        assert!(fields.description.is_empty());
    }

    #[test]
    fn test_heading_without_id_uses_text() {
        let fields = classify_page(
            &legacy_page("<h2>Valeur de retour</h2><p>Un nouveau tableau.</p>"),
            Locale::Fr,
        );

        assert!(fields.returned_value.contains("Un nouveau tableau."));
    }
}

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[test]
    fn test_sections_are_routed() {
        let fields = classify_page(
            &legacy_page(
                r#"<p>Short</p>
                <h2 id="Syntaxe">Syntaxe</h2>
                <pre>new Array()</pre>
                <h3 id="Paramètres">Paramètres</h3>
                <dl><dt><code>length</code></dt><dd>Taille</dd></dl>
                <h2 id="Description">Description</h2>
                <p>Les tableaux sont des listes.</p>
                <h2 id="Voir_aussi">Voir aussi</h2>
                <ul><li>TypedArray</li></ul>"#,
            ),
            Locale::Fr,
        );

        assert_eq!(fields.syntax, "\n<pre>new Array()</pre>");
        assert!(fields.parameters.contains("<strong><code>length</code></strong>"));
        assert_eq!(fields.description, "\n<p>Les tableaux sont des listes.</p>");
        assert_eq!(fields.see_also, "\n<p><strong>•</strong> TypedArray</p>");
    }

    #[test]
    fn test_unknown_sections_are_dropped() {
        let fields = classify_page(
            &legacy_page(
                r#"<h2 id="Spécifications">Spécifications</h2>
                <p>Tableau des spécifications</p>
                <h2 id="Description">Description</h2>
                <p>Gardé</p>"#,
            ),
            Locale::Fr,
        );

        assert_eq!(fields.description, "\n<p>Gardé</p>");
        for text in [
            &fields.syntax,
            &fields.parameters,
            &fields.returned_value,
            &fields.examples,
            &fields.see_also,
        ] {
            assert!(!text.contains("spécifications"));
        }
    }

    #[test]
    fn test_empty_elements_are_skipped() {
        let fields = classify_page(
            &legacy_page(r#"<h2 id="Description">Description</h2><p>   </p><div></div><p>Body</p>"#),
            Locale::Fr,
        );

        assert_eq!(fields.description, "\n<p>Body</p>");
    }

    #[test]
    fn test_examples_keep_their_subheadings() {
        let fields = classify_page(
            &legacy_page(
                r#"<h2 id="Exemples">Exemples</h2>
                <h3 id="Créer_un_tableau">Créer un tableau</h3>
                <pre>let fruits = [];</pre>
                <h4>Note</h4>
                <p>Suite de l'exemple</p>
                <h2 id="Voir_aussi">Voir aussi</h2>
                <ul><li>Map</li></ul>"#,
            ),
            Locale::Fr,
        );

        assert!(fields.examples.contains("Créer un tableau"));
        assert!(fields.examples.contains("let fruits = [];"));
        assert!(fields.examples.contains("Suite de l'exemple"));
        assert!(!fields.examples.contains("Map"));
        assert!(fields.see_also.contains("Map"));
    }
}

#[cfg(test)]
mod member_tests {
    use super::*;

    #[test]
    fn test_instance_and_static_members() {
        let fields = classify_page(
            &legacy_page(
                r#"<h2 id="Propriétés">Propriétés</h2>
                <p>Propriétés du constructeur.</p>
                <dl><dt>Array.length</dt><dd>Vaut 1.</dd></dl>
                <h2 id="Méthodes">Méthodes</h2>
                <dl><dt>Array.from()</dt><dd>Crée un tableau.</dd></dl>
                <h2 id="Propriétés_2">Propriétés</h2>
                <dl><dt>Array.prototype.length</dt><dd>Nombre d'éléments.</dd></dl>
                <h2 id="Méthodes_2">Méthodes</h2>
                <dl><dt>Array.prototype.at()</dt><dd>Renvoie un élément.</dd>
                <dt>Array.prototype.map()</dt><dd>Transforme.</dd></dl>"#,
            ),
            Locale::Fr,
        );

        assert_eq!(fields.static_properties.len(), 2);
        assert_eq!(
            fields.static_properties.get(DESCRIPTION_KEY),
            Some("Propriétés du constructeur.")
        );
        assert_eq!(fields.static_methods.get("Array.from()"), Some("Crée un tableau."));
        assert_eq!(fields.properties.len(), 1);
        assert_eq!(fields.methods.len(), 2);
    }

    #[test]
    fn test_definition_list_heading_sets_section() {
        let fields = classify_page(
            &legacy_page(
                r#"<h2 id="Description">Description</h2>
                <p>Texte</p>
                <dl><dt><h3 id="Méthodes_2">Méthodes</h3></dt>
                <dt>Array.prototype.at()</dt><dd>Renvoie un élément.</dd></dl>"#,
            ),
            Locale::Fr,
        );

        assert_eq!(fields.methods.get("Array.prototype.at()"), Some("Renvoie un élément."));
        assert!(!fields.description.contains("Renvoie"));
    }

    #[test]
    fn test_later_lists_merge_into_the_same_mapping() {
        let fields = classify_page(
            &legacy_page(
                r#"<h2 id="Méthodes_2">Méthodes</h2>
                <dl><dt>at()</dt><dd>first</dd></dl>
                <p>Méthodes héritées</p>
                <dl><dt>at()</dt><dd>replaced</dd><dt>map()</dt><dd>second</dd></dl>"#,
            ),
            Locale::Fr,
        );

        let keys: Vec<_> = fields.methods.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["at()", DESCRIPTION_KEY, "map()"]);
        assert_eq!(fields.methods.get("at()"), Some("replaced"));
    }
}
