//! Episode eligibility and field validation.

use thiserror::Error;

use super::{Episode, EpisodeResponseItem};
use crate::url_check::is_valid_image_url;

/// Error when an eligible episode is missing data needed for the response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpisodeError {
    #[error("title is required")]
    MissingTitle,
    #[error("slug is required")]
    MissingSlug,
    #[error("image.showImage is required")]
    MissingImage,
    #[error("image.showImage must be a valid URL")]
    InvalidImageUrl,
}

impl Episode {
    /// Business filter: DRM enabled and at least one episode.
    pub fn is_eligible(&self) -> bool {
        self.drm && self.episode_count > 0
    }

    /// Check the fields projected into the response.
    ///
    /// Checks run in order (title, slug, image presence, image URL) and the
    /// first failure is returned.
    pub fn validate(&self) -> Result<(), EpisodeError> {
        if self.title.is_empty() {
            return Err(EpisodeError::MissingTitle);
        }
        if self.slug.is_empty() {
            return Err(EpisodeError::MissingSlug);
        }
        if self.image.show_image.is_empty() {
            return Err(EpisodeError::MissingImage);
        }
        if !is_valid_image_url(&self.image.show_image) {
            return Err(EpisodeError::InvalidImageUrl);
        }
        Ok(())
    }

    /// Project into a response item.
    pub fn to_response_item(&self) -> EpisodeResponseItem {
        EpisodeResponseItem {
            image: self.image.show_image.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}
