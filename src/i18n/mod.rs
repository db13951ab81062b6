//! Per-language string tables.
//!
//! Text is addressed either through the typed tables
//! (`translations(lang).auth.login_title`) or by name through [`lookup`],
//! which the content catalog uses for lesson and article titles.

mod da;
mod en;
mod table;

use serde::{Deserialize, Serialize};

pub use table::{Namespace, Translations};

/// A string picked out of whichever table is active when it is rendered.
pub type LocalizedText = fn(&Translations) -> &'static str;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Da,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Da, Language::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Da => "da",
            Self::En => "en",
        }
    }

    /// Short label shown on the language toggle.
    pub fn label(&self) -> &'static str {
        let common = &translations(*self).common;
        match self {
            Self::Da => common.language_da,
            Self::En => common.language_en,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "da" => Ok(Self::Da),
            "en" => Ok(Self::En),
            _ => Err(format!("unsupported language: {}", s)),
        }
    }
}

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Da => &da::DA,
        Language::En => &en::EN,
    }
}

/// Looks up `namespace.key` for `language`.
///
/// Returns `None` only for keys that are not part of the table; every key in
/// `namespace.keys()` resolves for every language.
pub fn lookup(
    language: Language,
    namespace: Namespace,
    key: &str,
) -> Option<&'static str> {
    translations(language).get(namespace, key)
}
