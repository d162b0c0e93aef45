//! Episode filter response.

use serde::{Deserialize, Serialize};

/// Projection of an episode that passed filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EpisodeResponseItem {
    pub image: String,
    pub slug: String,
    pub title: String,
}

/// Response body. `response` is always an array, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EpisodeResponse {
    pub response: Vec<EpisodeResponseItem>,
}

impl From<Vec<EpisodeResponseItem>> for EpisodeResponse {
    fn from(response: Vec<EpisodeResponseItem>) -> Self {
        Self { response }
    }
}
