use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// All categories of one game. Replaced wholesale on every (re)start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        if categories.len() != NUM_CATEGORIES {
            log::warn!(
                "board built with {} categories, expected {}",
                categories.len(),
                NUM_CATEGORIES
            );
        }
        Self { categories }
    }

    /// Board in place before the first game is loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Body rows always span the full clue count, short categories leave empty cells.
    pub const fn rows(&self) -> usize {
        NUM_QUESTIONS_PER_CAT
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    /// Addresses of every cell, row by row.
    pub fn addresses(&self) -> impl Iterator<Item = ClueAddr> + use<> {
        let columns = self.columns();
        (0..NUM_QUESTIONS_PER_CAT)
            .flat_map(move |clue| (0..columns).map(move |category| ClueAddr::new(category, clue)))
    }

    pub fn clue_at(&self, addr: ClueAddr) -> Option<&Clue> {
        self.categories.get(addr.category)?.clues().get(addr.clue)
    }

    pub fn cell_at(&self, addr: ClueAddr) -> CellView<'_> {
        self.clue_at(addr).map_or(CellView::Empty, Clue::view)
    }

    pub fn can_reveal_at(&self, addr: ClueAddr) -> bool {
        self.clue_at(addr)
            .is_some_and(|clue| !clue.showing().is_terminal())
    }

    pub fn reveal(&mut self, addr: ClueAddr) -> Result<RevealOutcome> {
        let clue = self
            .categories
            .get_mut(addr.category)
            .and_then(|category| category.clue_mut(addr.clue))
            .ok_or(GameError::InvalidAddress)?;

        let outcome = clue.reveal();
        log::debug!("reveal {:?}: {:?}", addr, outcome);
        Ok(outcome)
    }

    /// Puts every clue back to `Hidden`.
    pub fn reset(&mut self) {
        self.categories.iter_mut().for_each(Category::hide_all);
    }
}
