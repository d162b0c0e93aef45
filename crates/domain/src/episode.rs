//! Episode domain module.
//!
//! Contains the episode record, the request and response envelopes, and the
//! filter pass that reduces a submitted payload into a response.

mod entity;
mod filter;
mod request;
mod response;
mod validation;

pub use entity::{Episode, Image, NextEpisode, Season};
pub use filter::{filter_episodes, FilterOutcome};
pub use request::{EpisodeRequest, RequestError};
pub use response::{EpisodeResponse, EpisodeResponseItem};
pub use validation::EpisodeError;
