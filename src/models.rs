use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// Closed set of string options accepted by the API. Each variant maps to
// the exact label the server validates against.
macro_rules! option_set {
    ($name:ident { $($variant:ident => $label:literal,)+ }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let value = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label() == value)
                    .ok_or_else(|| UnknownOption(value.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option {:?}", self.0)
    }
}

impl std::error::Error for UnknownOption {}

option_set!(
    Category {
        Accueil => "Accueil",
        Activites => "Activités",
        Hebergement => "Hébergement",
        Restauration => "Restauration",
        Culture => "Culture",
        Nature => "Nature",
        Evenements => "Événements",
        Pratique => "Pratique",
    }
);

option_set!(
    VisitorType {
        Couple => "Couple",
        Famille => "Famille",
        Solitaire => "Solitaire",
    }
);

option_set!(
    StayLength {
        UnderOneWeek => "Moins d'une semaine",
        OneToTwoWeeks => "1-2 semaines",
        OverOneMonth => "Plus d'un mois",
        OverThreeMonths => "Plus de 3 mois",
    }
);

option_set!(
    AgeRange {
        From18To25 => "18-25 ans",
        From26To35 => "26-35 ans",
        From36To45 => "36-45 ans",
        From46To55 => "46-55 ans",
        From56To65 => "56-65 ans",
        Over65 => "Plus de 65 ans",
    }
);

option_set!(
    Persona {
        CulturePatrimoine => "Culture/Patrimoine",
        Randonnee => "Randonnée",
        Plage => "Plage",
        Gastronomie => "Gastronomie",
        Sport => "Sport",
        Detente => "Détente",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub nom_page: String,
    pub categorie: Category,
}

impl PageView {
    pub fn new(nom_page: impl Into<String>, categorie: Category) -> Self {
        Self {
            nom_page: nom_page.into(),
            categorie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorProfile {
    pub type_visiteur: VisitorType,
    pub temps_sejour: StayLength,
    pub tranche_age: AgeRange,
    pub type_personna: Persona,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPayload {
    pub visiteurs: Vec<VisitorProfile>,
    pub pages: Vec<PageView>,
    pub vues_totales: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CounterAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub vues_totales: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub visiteurs_ajoutes: u64,
    #[serde(default)]
    pub pages_ajoutees: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub vues_totales: u64,
    pub nombre_visiteurs: u64,
    #[serde(default)]
    pub nombre_pages: u64,
    #[serde(default)]
    pub derniere_activite: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub vues_totales: Option<u64>,
}

impl HealthStatus {
    pub const HEALTHY: &'static str = "healthy";

    pub fn is_healthy(&self) -> bool {
        self.status == Self::HEALTHY
    }

    pub fn checked_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: i64,
    #[serde(flatten)]
    pub profile: VisitorProfile,
    pub date_visite: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: i64,
    pub nom_page: String,
    pub categorie: Category,
    pub nombre_vues: u64,
    pub date_derniere_vue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidValues {
    pub type_visiteur: Vec<String>,
    pub temps_sejour: Vec<String>,
    pub tranche_age: Vec<String>,
    pub type_personna: Vec<String>,
    #[serde(default)]
    pub categories_pages: Vec<String>,
}

impl ValidValues {
    pub fn known() -> Self {
        fn labels<T: Copy + fmt::Display>(all: &[T]) -> Vec<String> {
            all.iter().map(ToString::to_string).collect()
        }

        Self {
            type_visiteur: labels(VisitorType::ALL),
            temps_sejour: labels(StayLength::ALL),
            tranche_age: labels(AgeRange::ALL),
            type_personna: labels(Persona::ALL),
            categories_pages: labels(Category::ALL),
        }
    }
}
