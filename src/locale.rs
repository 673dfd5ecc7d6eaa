use serde::{Deserialize, Serialize};

/// Documentation language: decides the URL locale, the section ids the
/// classifier recognizes and the labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

/// Page section a heading id maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Syntax,
    Parameters,
    ReturnValue,
    Description,
    StaticProperties,
    StaticMethods,
    Properties,
    Methods,
    Examples,
    SeeAlso,
}

/// User-facing strings
#[derive(Debug)]
pub struct Labels {
    pub class: &'static str,
    pub function: &'static str,
    pub namespace: &'static str,
    pub constant: &'static str,
    pub main: &'static str,
    pub short_description: &'static str,
    pub syntax: &'static str,
    pub parameters: &'static str,
    pub return_value: &'static str,
    pub more: &'static str,
    pub see_also: &'static str,
    pub methods: &'static str,
    pub properties: &'static str,
    pub static_methods: &'static str,
    pub static_properties: &'static str,
    pub empty_category: &'static str,
    pub directory_title: &'static str,
    pub directory_footer: &'static str,
    /// `{query}` is replaced by the failed search
    pub not_found: &'static str,
    pub lookup_failed: &'static str,
    pub reloaded: &'static str,
    pub restarting: &'static str,
}

static FRENCH: Labels = Labels {
    class: "Classe",
    function: "Fonction",
    namespace: "Namespace",
    constant: "Constante",
    main: "Informations principales",
    short_description: "Description courte :",
    syntax: "Syntaxe :",
    parameters: "Paramètres :",
    return_value: "Valeur de retour :",
    more: "Informations supplémentaires",
    see_also: "Voir aussi :",
    methods: "Méthodes",
    properties: "Propriétés",
    static_methods: "Méthodes statiques",
    static_properties: "Propriétés statiques",
    empty_category: "Rien à afficher dans cette catégorie.",
    directory_title: "Liste des objets natifs.",
    directory_footer: "Faites doc [Element] pour récupérer des informations sur un élément.",
    not_found: "Recherche de `{query}` non trouvée, voici la liste des objets natifs disponibles :",
    lookup_failed: "La recherche a échoué, réessayez plus tard.",
    reloaded: "Configuration rechargée.",
    restarting: "Relancement du bot. (Ou arrêt du bot si le bot n'est pas sur le vps.)",
};

static ENGLISH: Labels = Labels {
    class: "Class",
    function: "Function",
    namespace: "Namespace",
    constant: "Constant",
    main: "Main information",
    short_description: "Short description:",
    syntax: "Syntax:",
    parameters: "Parameters:",
    return_value: "Return value:",
    more: "More information",
    see_also: "See also:",
    methods: "Methods",
    properties: "Properties",
    static_methods: "Static methods",
    static_properties: "Static properties",
    empty_category: "Nothing to show in this category.",
    directory_title: "List of native objects.",
    directory_footer: "Use doc [Element] to get information about an element.",
    not_found: "No result for `{query}`, here are the available native objects:",
    lookup_failed: "The lookup failed, try again later.",
    reloaded: "Configuration reloaded.",
    restarting: "Restarting the bot.",
};

impl Locale {
    /// Locale segment of documentation URLs
    pub fn path_segment(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en-US",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Fr => &FRENCH,
            Locale::En => &ENGLISH,
        }
    }

    /// Maps a heading id to the section it introduces
    ///
    /// Covers both the legacy MDN ids (`Syntaxe`, `Méthodes_2`, ...) and the
    /// current lower-case ones. Matching ignores case.
    pub fn section(self, id: &str) -> Option<Section> {
        let id = id.to_lowercase();
        match self {
            Locale::Fr => french_section(&id),
            Locale::En => english_section(&id),
        }
    }
}

fn french_section(id: &str) -> Option<Section> {
    let section = match id {
        "syntaxe" => Section::Syntax,
        "paramètres" => Section::Parameters,
        "valeur_de_retour" => Section::ReturnValue,
        "description" => Section::Description,
        "propriétés" | "propriétés_statiques" => Section::StaticProperties,
        "méthodes" | "méthodes_statiques" => Section::StaticMethods,
        "les_propriétés" | "propriétés_2" | "propriétés_des_instances" | "propriétés_d'instance" => {
            Section::Properties
        }
        "méthodes_2" | "les_méthodes" | "méthodes_des_instances" | "méthodes_d'instance" => {
            Section::Methods
        }
        "exemples" => Section::Examples,
        "voir_aussi" => Section::SeeAlso,
        _ if id.starts_with("propriétés_du_constructeur") => Section::StaticProperties,
        _ if id.starts_with("méthodes_du_constructeur") => Section::StaticMethods,
        _ => return None,
    };
    Some(section)
}

fn english_section(id: &str) -> Option<Section> {
    let section = match id {
        "syntax" => Section::Syntax,
        "parameters" => Section::Parameters,
        "return_value" => Section::ReturnValue,
        "description" => Section::Description,
        "static_properties" | "constructor_properties" => Section::StaticProperties,
        "static_methods" | "constructor_methods" => Section::StaticMethods,
        "instance_properties" => Section::Properties,
        "instance_methods" => Section::Methods,
        "examples" => Section::Examples,
        "see_also" => Section::SeeAlso,
        _ => return None,
    };
    Some(section)
}
