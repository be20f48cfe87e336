//! Read-only portfolio content in two locales.

use crate::error::ContentError;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// Content bundled into the binary.
pub const BUNDLED_PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// Unknown or missing codes fall back to Japanese.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("en") => Locale::En,
            _ => Locale::Ja,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Ja => Locale::En,
            Locale::En => Locale::Ja,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Infra,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            85.. => SkillTier::Expert,
            70..=84 => SkillTier::Advanced,
            50..=69 => SkillTier::Intermediate,
            _ => SkillTier::Beginner,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level.min(100))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub techs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    /// Menu labels for sections 1..=K, in order.
    pub sections: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

impl Portfolio {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Label for a 1-based section index. Index 0 and out-of-range give `None`.
    pub fn label(&self, section: usize) -> Option<&str> {
        section
            .checked_sub(1)
            .and_then(|i| self.sections.get(i))
            .map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct ContentCatalog {
    portfolios: FnvHashMap<Locale, Portfolio>,
}

impl ContentCatalog {
    /// Parse `{ "ja": Portfolio, "en": Portfolio }`. Both locales must be
    /// present and list at least one section.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolios: FnvHashMap<Locale, Portfolio> = serde_json::from_str(text)?;
        for locale in Locale::ALL {
            let portfolio = portfolios
                .get(&locale)
                .ok_or_else(|| ContentError::MissingLocale(locale.code().to_string()))?;
            if portfolio.sections.is_empty() {
                return Err(ContentError::NoSections(locale.code().to_string()));
            }
        }
        Ok(Self { portfolios })
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_PORTFOLIO_JSON)
    }

    pub fn get(&self, locale: Locale) -> Result<&Portfolio, ContentError> {
        self.portfolios
            .get(&locale)
            .ok_or_else(|| ContentError::MissingLocale(locale.code().to_string()))
    }

    /// K, taken from the default locale.
    pub fn section_count(&self) -> usize {
        self.portfolios
            .get(&Locale::default())
            .map(Portfolio::section_count)
            .unwrap_or(0)
    }
}
