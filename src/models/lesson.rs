use crate::i18n::{Language, Namespace, lookup};

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum LessonLevel {
    Basics = 1,
    Strategy = 2,
    Risk = 3,
}

impl LessonLevel {
    pub const ALL: [LessonLevel; 3] =
        [LessonLevel::Basics, LessonLevel::Strategy, LessonLevel::Risk];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self, language: Language) -> &'static str {
        let learn = &crate::i18n::translations(language).learn;
        match self {
            Self::Basics => learn.level1,
            Self::Strategy => learn.level2,
            Self::Risk => learn.level3,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Lesson {
    pub id: &'static str,
    pub slug: &'static str,
    pub level: LessonLevel,
    /// Robot builder step this lesson prepares for.
    pub related_step: Option<u8>,
    pub title_key: &'static str,
    pub summary_key: &'static str,
}

impl Lesson {
    pub fn title(&self, language: Language) -> &'static str {
        lookup(language, Namespace::Learn, self.title_key)
            .unwrap_or(self.slug)
    }

    pub fn summary(&self, language: Language) -> &'static str {
        lookup(language, Namespace::Learn, self.summary_key)
            .unwrap_or_default()
    }

    pub fn href(&self) -> String {
        format!("/learn/{}", self.slug)
    }
}
