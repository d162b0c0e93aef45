//! Domain layer for the episode filter service.
//!
//! This crate contains the episode data model and the rules that decide
//! which submitted episodes make it into a response. It is designed to be
//! independent of the HTTP layer: everything here works on plain values
//! that have already been decoded from a request body.
//!
//! # Module Structure
//!
//! - **episode**: Episode entity, request/response envelopes, validation
//!   and the filter pass
//! - **url_check**: Image URL syntax check
//! - **shared**: Serde helpers shared by the wire types
//!
//! # Dependencies
//!
//! This crate must not depend on any web framework or runtime. The optional
//! `openapi` feature only adds schema derives for the wire types.

pub mod episode;
pub mod shared;
pub mod url_check;

// Re-exports for convenience
pub use episode::{
    filter_episodes, Episode, EpisodeError, EpisodeRequest, EpisodeResponse, EpisodeResponseItem,
    FilterOutcome, Image, NextEpisode, RequestError, Season,
};
pub use url_check::is_valid_image_url;
