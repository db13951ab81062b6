use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Translations;

/// A validated contact-form submission.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SupportTicket {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub category: TicketCategory,
    pub message: String,
}

/// Raw contact-form input as typed by the user.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SupportForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Question,
    Bug,
    Feedback,
    Other,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 4] = [
        TicketCategory::Question,
        TicketCategory::Bug,
        TicketCategory::Feedback,
        TicketCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Bug => "bug",
            Self::Feedback => "feedback",
            Self::Other => "other",
        }
    }

    pub fn label(&self, t: &Translations) -> &'static str {
        match self {
            Self::Question => t.support.category_question,
            Self::Bug => t.support.category_bug,
            Self::Feedback => t.support.category_feedback,
            Self::Other => t.support.category_other,
        }
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "bug" => Ok(Self::Bug),
            "feedback" => Ok(Self::Feedback),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid ticket category: {}", s)),
        }
    }
}
