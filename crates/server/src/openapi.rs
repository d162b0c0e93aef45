use utoipa::OpenApi;

use domain::{Episode, EpisodeRequest, EpisodeResponse, EpisodeResponseItem, Image, NextEpisode, Season};

use crate::api::handlers::{self, HealthResponse};
use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Episode Filter API",
        version = "1.0.0"
    ),
    paths(
        handlers::episodes::process_episodes,
        handlers::health::health
    ),
    tags(
        (name = "episodes", description = "Episode filtering endpoints"),
        (name = "health", description = "Service health endpoints")
    ),
    components(schemas(
        EpisodeRequest,
        Episode,
        Image,
        NextEpisode,
        Season,
        EpisodeResponse,
        EpisodeResponseItem,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;
