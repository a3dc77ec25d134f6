use alloc::vec::Vec;
use futures_util::future::try_join_all;
use jeopardy_protocol::{CategoryDetail, CategoryId, CategorySummary};

use crate::*;

/// Remote clue service. Implementations only move bytes, shaping the board happens in [`fetch_board`].
#[allow(async_fn_in_trait)]
pub trait CluesApi {
    async fn categories(&self, count: usize) -> FetchResult<Vec<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> FetchResult<CategoryDetail>;
}

/// Loads a fresh board: one pool request, then every selected category concurrently.
///
/// Any failing request fails the whole load, no partial board is returned.
pub async fn fetch_board<A: CluesApi>(api: &A, seed: u64) -> FetchResult<Board> {
    let pool = api.categories(CATEGORY_POOL_SIZE).await?;
    log::trace!("category pool has {} entries", pool.len());

    let ids = RandomCategorySelector::new(seed, NUM_CATEGORIES).select(&pool)?;
    log::debug!("selected categories: {:?}", ids);

    let details = try_join_all(ids.iter().map(|&id| api.category(id))).await?;
    let categories = ids
        .into_iter()
        .zip(details)
        .map(|(id, detail)| Category::from_detail(id, detail))
        .collect();

    Ok(Board::new(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use alloc::string::{String, ToString};
    use core::cell::RefCell;
    use futures::executor::block_on;
    use jeopardy_protocol::ClueRecord;

    #[derive(Default)]
    struct FakeApi {
        pool_size: u64,
        clues_per_category: usize,
        failing: bool,
        requested: RefCell<Vec<CategoryId>>,
    }

    impl FakeApi {
        fn new(pool_size: u64, clues_per_category: usize) -> Self {
            Self {
                pool_size,
                clues_per_category,
                ..Default::default()
            }
        }
    }

    impl CluesApi for FakeApi {
        async fn categories(&self, count: usize) -> FetchResult<Vec<CategorySummary>> {
            assert_eq!(count, CATEGORY_POOL_SIZE);
            Ok((0..self.pool_size)
                .map(|id| CategorySummary { id })
                .collect())
        }

        async fn category(&self, id: CategoryId) -> FetchResult<CategoryDetail> {
            self.requested.borrow_mut().push(id);
            if self.failing {
                return Err(FetchError::Network("connection reset".to_string()));
            }
            Ok(CategoryDetail {
                title: format!("cat{id}"),
                clues: (0..self.clues_per_category)
                    .map(|i| ClueRecord {
                        question: format!("q{id}-{i}"),
                        answer: format!("a{id}-{i}"),
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn board_has_distinct_categories_with_hidden_clues() {
        let api = FakeApi::new(100, 8);

        let board = block_on(fetch_board(&api, 1234)).unwrap();

        assert_eq!(board.columns(), NUM_CATEGORIES);
        let ids: BTreeSet<_> = board.categories().iter().map(Category::id).collect();
        assert_eq!(ids.len(), NUM_CATEGORIES);
        for category in board.categories() {
            assert!(category.clues().len() <= NUM_QUESTIONS_PER_CAT);
            assert!(
                category
                    .clues()
                    .iter()
                    .all(|clue| clue.showing() == RevealState::Hidden)
            );
        }
    }

    #[test]
    fn board_keeps_selection_order() {
        let api = FakeApi::new(100, 5);

        let board = block_on(fetch_board(&api, 99)).unwrap();

        let expected: Vec<String> = api
            .requested
            .borrow()
            .iter()
            .map(|id| format!("cat{id}"))
            .collect();
        let titles: Vec<String> = board.headers().map(String::from).collect();
        assert_eq!(titles, expected);
        assert_eq!(
            board.categories()[0].clues()[0].question(),
            format!("q{}-0", board.categories()[0].id())
        );
    }

    #[test]
    fn short_categories_are_not_padded() {
        let api = FakeApi::new(10, 2);

        let board = block_on(fetch_board(&api, 5)).unwrap();

        assert!(board.categories().iter().all(|c| c.clues().len() == 2));
        assert_eq!(board.cell_at(ClueAddr::new(0, 4)), CellView::Empty);
    }

    #[test]
    fn one_failed_category_fails_the_whole_board() {
        let api = FakeApi {
            failing: true,
            ..FakeApi::new(100, 5)
        };

        let result = block_on(fetch_board(&api, 0));

        assert_eq!(
            result,
            Err(FetchError::Network("connection reset".to_string()))
        );
    }

    #[test]
    fn tiny_pool_fails_before_requesting_categories() {
        let api = FakeApi::new(4, 5);

        let result = block_on(fetch_board(&api, 0));

        assert_eq!(
            result,
            Err(FetchError::NotEnoughCategories {
                requested: NUM_CATEGORIES,
                available: 4,
            })
        );
        assert!(api.requested.borrow().is_empty());
    }

    #[test]
    fn seed_decides_the_board() {
        let a = block_on(fetch_board(&FakeApi::new(100, 5), 42)).unwrap();
        let b = block_on(fetch_board(&FakeApi::new(100, 5), 42)).unwrap();

        assert_eq!(a, b);
    }
}
