//! Wire types for the remote clue service.
//!
//! Only the fields the game reads are declared, anything else the service
//! sends is ignored during deserialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identifier the service assigns to a category.
pub type CategoryId = u64;

/// One entry of `GET /categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Body of `GET /category?id=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
}

pub fn categories_path(count: usize) -> String {
    format!("/categories?count={count}")
}

pub fn category_path(id: CategoryId) -> String {
    format!("/category?id={id}")
}

/// Decodes a response body into one of the wire types.
pub fn from_json<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_detail_ignores_extra_fields() {
        let body = r#"{
            "id": 11496,
            "title": "authors",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "Hamlet Author", "answer": "Shakespeare", "value": 200},
                {"id": 2, "question": "Bell Jar Author", "answer": "Plath", "value": null}
            ]
        }"#;

        let detail: CategoryDetail = from_json(body).unwrap();

        assert_eq!(detail.title, "authors");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[1].answer, "Plath");
    }

    #[test]
    fn category_summaries_only_need_an_id() {
        let body = r#"[{"id": 3, "title": "math", "clues_count": 5}, {"id": 7}]"#;

        let pool: Vec<CategorySummary> = from_json(body).unwrap();

        assert_eq!(pool, vec![CategorySummary { id: 3 }, CategorySummary { id: 7 }]);
    }

    #[test]
    fn clue_without_answer_is_rejected() {
        let body = r#"{"title": "broken", "clues": [{"question": "q"}]}"#;

        assert!(from_json::<CategoryDetail>(body).is_err());
    }

    #[test]
    fn paths_carry_query_parameters() {
        assert_eq!(categories_path(100), "/categories?count=100");
        assert_eq!(category_path(42), "/category?id=42");
    }
}
