//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the chat history endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    /// Owner whose chat sessions to list.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Query parameters for the pet list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct PetListQuery {
    /// Owner whose pets to list.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
