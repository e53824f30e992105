//! Wire shapes the suites assert on.
//!
//! Single-resource responses deserialize into these structs; HAL list
//! responses (`_embedded.<collection>[...]`) are indexed as raw JSON in the
//! tests instead of being modelled generically.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Province {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Problem-detail envelope the API returns for 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub status: u16,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub detail: String,
    #[serde(rename = "userMessage")]
    pub user_message: String,
}
