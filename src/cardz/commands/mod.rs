use crate::index::DisplayCard;
use crate::model::Card;

pub mod categories;
pub mod create;
pub mod delete;
pub mod favorite;
pub mod helpers;
pub mod list;
pub mod show;

pub use list::{CatalogView, CategoryChip};
pub use show::CardDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<DisplayCard>,
    pub details: Vec<CardDetail>,
    pub view: Option<CatalogView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<DisplayCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_details(mut self, details: Vec<CardDetail>) -> Self {
        self.details = details;
        self
    }

    pub fn with_view(mut self, view: CatalogView) -> Self {
        self.view = Some(view);
        self
    }
}
