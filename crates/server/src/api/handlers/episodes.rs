use axum::{body::Bytes, Json};
use domain::{EpisodeRequest, EpisodeResponse};

use crate::error::{AppResult, ErrorResponse};

/// Filter a batch of episodes
///
/// Keeps episodes with DRM enabled and a positive episode count, drops the
/// ones with a missing title, slug or image URL, and returns the rest as
/// `{image, slug, title}` items.
#[utoipa::path(
    post,
    path = "/api/v1/episodes",
    tag = "episodes",
    request_body = EpisodeRequest,
    responses(
        (status = 200, description = "Matching episodes, possibly none", body = EpisodeResponse),
        (status = 400, description = "Undecodable body or missing payload", body = ErrorResponse)
    )
)]
pub async fn process_episodes(body: Bytes) -> AppResult<Json<EpisodeResponse>> {
    tracing::info!("Received episode processing request");
    tracing::debug!("Raw request body: {}", String::from_utf8_lossy(&body));

    let request = decode_request(&body)?;
    let payload = request.validate()?;

    tracing::info!("Processing {} episodes", payload.len());

    let outcome = domain::filter_episodes(payload);

    tracing::info!(
        "Processed {} episodes, {} matched criteria",
        outcome.total,
        outcome.matched()
    );
    if outcome.matched() == 0 {
        tracing::info!("No episodes matched the criteria");
    }

    Ok(Json(outcome.into_response()))
}

/// An empty or `null` body decodes as an empty request so that it is rejected
/// for the missing payload rather than as malformed JSON.
fn decode_request(body: &[u8]) -> Result<EpisodeRequest, serde_json::Error> {
    let body = body.trim_ascii();
    if body.is_empty() || body == b"null" {
        return Ok(EpisodeRequest::default());
    }
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body() {
        let request = decode_request(b"  \n").unwrap();
        assert!(request.payload.is_none());
    }

    #[test]
    fn test_decode_null_body() {
        let request = decode_request(b" null ").unwrap();
        assert!(request.payload.is_none());
    }

    #[test]
    fn test_decode_invalid_body() {
        assert!(decode_request(b"{invalid json}").is_err());
        assert!(decode_request(b"[]").is_err());
        assert!(decode_request(br#"{"payload": [{"drm": "yes"}]}"#).is_err());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let request = decode_request(br#"{"payload": [], "cursor": "abc"}"#).unwrap();
        assert_eq!(request.payload, Some(Vec::new()));
    }
}
