use crate::models::{Category, PageView};

struct Rule {
    needles: [&'static str; 2],
    category: Category,
    default_name: &'static str,
}

// Order matters: a path matching several rules takes the first one.
const RULES: [Rule; 6] = [
    Rule {
        needles: ["/activites", "/randonnees"],
        category: Category::Activites,
        default_name: "Activités",
    },
    Rule {
        needles: ["/hebergement", "/hotels"],
        category: Category::Hebergement,
        default_name: "Hébergement",
    },
    Rule {
        needles: ["/restaurants", "/gastronomie"],
        category: Category::Restauration,
        default_name: "Restauration",
    },
    Rule {
        needles: ["/culture", "/patrimoine"],
        category: Category::Culture,
        default_name: "Culture",
    },
    Rule {
        needles: ["/nature", "/plages"],
        category: Category::Nature,
        default_name: "Nature",
    },
    Rule {
        needles: ["/evenements", "/agenda"],
        category: Category::Evenements,
        default_name: "Événements",
    },
];

const HOME_PATHS: [&str; 2] = ["/", "/accueil"];
const FALLBACK_NAME: &str = "Page générale";

pub fn classify_page(path: &str, title: Option<&str>) -> PageView {
    let title = title.map(str::trim).filter(|title| !title.is_empty());

    if let Some(rule) = RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| path.contains(needle)))
    {
        return PageView::new(title.unwrap_or(rule.default_name), rule.category);
    }

    if HOME_PATHS.contains(&path) {
        return PageView::new("Accueil", Category::Accueil);
    }

    PageView::new(title.unwrap_or(FALLBACK_NAME), Category::Pratique)
}
