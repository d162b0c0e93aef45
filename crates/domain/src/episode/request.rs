//! Episode filter request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Episode;
use crate::shared::{null_as_default, optional_null_elements_as_default};

/// Request body submitted for filtering.
///
/// `skip`, `take` and `totalRecords` are accepted for compatibility with
/// paging clients but have no effect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRequest {
    /// Episodes to filter. Required; may be empty. `null` elements decode as
    /// empty episodes.
    #[serde(default, deserialize_with = "optional_null_elements_as_default")]
    pub payload: Option<Vec<Episode>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skip: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub take: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: i64,
}

/// Error when a request cannot be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Payload is absent or `null`.
    #[error("payload is required")]
    MissingPayload,
}

impl EpisodeRequest {
    /// Create a request carrying the given payload.
    pub fn new(payload: Vec<Episode>) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Check the request and borrow its payload.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::MissingPayload` if no payload was submitted.
    /// An empty payload is valid.
    pub fn validate(&self) -> Result<&[Episode], RequestError> {
        self.payload.as_deref().ok_or(RequestError::MissingPayload)
    }
}
