#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use jeopardy_protocol::{CategoryDetail, CategoryId, ClueRecord};
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use fetch::*;
pub use selector::*;
pub use types::*;

mod board;
mod error;
mod fetch;
mod selector;
mod types;

/// Number of categories (columns) on a board.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clues (rows) kept per category.
pub const NUM_QUESTIONS_PER_CAT: usize = 5;

/// How many candidate categories are requested before picking the board's.
pub const CATEGORY_POOL_SIZE: usize = 100;

pub const DEFAULT_API_BASE_URL: &str = "https://jservice.io/api";

/// Text shown in a cell before anything about its clue is revealed.
pub const PLACEHOLDER: &str = "?";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::default(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Advances `Hidden -> Question -> Answer`, `Answer` is terminal.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;

        match self.showing {
            Hidden => {
                self.showing = Question;
                RevealOutcome::ShowedQuestion
            }
            Question => {
                self.showing = Answer;
                RevealOutcome::ShowedAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }

    pub fn view(&self) -> CellView<'_> {
        match self.showing {
            RevealState::Hidden => CellView::Placeholder,
            RevealState::Question => CellView::Question(&self.question),
            RevealState::Answer => CellView::Answer(&self.answer),
        }
    }

    fn hide(&mut self) {
        self.showing = RevealState::default();
    }
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        Self::new(record.question, record.answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Builds a category, keeping at most the first `NUM_QUESTIONS_PER_CAT` clues.
    pub fn new(id: CategoryId, title: impl Into<String>, mut clues: Vec<Clue>) -> Self {
        clues.truncate(NUM_QUESTIONS_PER_CAT);
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    /// Normalizes a service response. Clues keep the order the service sent them in.
    pub fn from_detail(id: CategoryId, detail: CategoryDetail) -> Self {
        if detail.clues.len() < NUM_QUESTIONS_PER_CAT {
            log::warn!(
                "category {} ({:?}) only has {} clues, expected {}",
                id,
                detail.title,
                detail.clues.len(),
                NUM_QUESTIONS_PER_CAT
            );
        }

        let clues = detail
            .clues
            .into_iter()
            .take(NUM_QUESTIONS_PER_CAT)
            .map(Clue::from)
            .collect();
        Self::new(id, detail.title, clues)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }

    pub(crate) fn hide_all(&mut self) {
        self.clues.iter_mut().for_each(Clue::hide);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}
