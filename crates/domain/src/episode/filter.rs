//! Episode filtering.
//!
//! Reduces a submitted payload to the eligible, well-formed episodes and
//! projects them into response items. Invalid episodes never fail the
//! request; they are dropped and logged.

use super::{Episode, EpisodeResponse, EpisodeResponseItem};

/// Result of a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Surviving episodes, in input order.
    pub items: Vec<EpisodeResponseItem>,
    /// Episodes inspected.
    pub total: usize,
    /// Episodes that passed the business filter.
    pub eligible: usize,
    /// Eligible episodes dropped by field validation.
    pub skipped_invalid: usize,
}

impl FilterOutcome {
    pub fn matched(&self) -> usize {
        self.items.len()
    }

    pub fn into_response(self) -> EpisodeResponse {
        EpisodeResponse::from(self.items)
    }
}

/// Keep episodes with DRM enabled and a positive episode count whose title,
/// slug and image URL are all valid.
pub fn filter_episodes(episodes: &[Episode]) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        total: episodes.len(),
        ..FilterOutcome::default()
    };

    for episode in episodes {
        tracing::debug!("Processing episode: {}", episode.title);

        if !episode.is_eligible() {
            continue;
        }
        outcome.eligible += 1;

        match episode.validate() {
            Ok(()) => outcome.items.push(episode.to_response_item()),
            Err(e) => {
                tracing::warn!("Skipping invalid episode '{}': {}", episode.title, e);
                outcome.skipped_invalid += 1;
            }
        }
    }

    outcome
}
