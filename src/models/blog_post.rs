use chrono::NaiveDate;

use crate::i18n::{Language, Namespace, lookup, translations};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BlogCategory {
    Basics,
    Risk,
    Trends,
    Tips,
}

impl BlogCategory {
    pub fn label(&self, language: Language) -> &'static str {
        let blog = &translations(language).blog;
        match self {
            Self::Basics => blog.category_basics,
            Self::Risk => blog.category_risk,
            Self::Trends => blog.category_trends,
            Self::Tips => blog.category_tips,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub category: BlogCategory,
    /// Publication date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub title_key: &'static str,
    pub excerpt_key: &'static str,
}

impl BlogPost {
    pub fn title(&self, language: Language) -> &'static str {
        lookup(language, Namespace::Blog, self.title_key)
            .unwrap_or(self.slug)
    }

    pub fn excerpt(&self, language: Language) -> &'static str {
        lookup(language, Namespace::Blog, self.excerpt_key)
            .unwrap_or_default()
    }

    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}
