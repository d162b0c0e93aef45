//! Episode entity.
//!
//! A show/episode metadata record as submitted by clients. Only a handful
//! of fields drive filtering; the rest are accepted and carried along.

use serde::{Deserialize, Serialize};

use crate::shared::{null_as_default, null_elements_as_default};

/// Episode metadata record.
///
/// Missing or `null` fields decode to their zero value, so a record is
/// never rejected for being sparse. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Digital rights management enabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub drm: bool,

    /// Number of episodes available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode_count: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default)]
    pub next_episode: Option<NextEpisode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_colour: String,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub seasons: Vec<Season>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tv_channel: String,
}

/// Show artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_image: String,
}

/// Upcoming episode teaser. Never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NextEpisode {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub channel_logo: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Reference to one season of the show. Never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Season {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r##"{
            "country": "USA",
            "description": "Culinary competition.",
            "drm": true,
            "episodeCount": 2,
            "genre": "Reality",
            "image": {"showImage": "http://catchup.ninemsn.com.au/img/jump-in/shows/TheTaste1280.jpg"},
            "language": "English",
            "nextEpisode": {
                "channel": null,
                "channelLogo": "http://catchup.ninemsn.com.au/img/player/logo_go.gif",
                "date": null,
                "html": "<br><span class=\"visit\">Visit the Official Website</span></span>",
                "url": "http://go.ninemsn.com.au/"
            },
            "primaryColour": "#df0000",
            "seasons": [{"slug": "show/thetaste/season/1"}],
            "slug": "show/thetaste",
            "title": "The Taste (Le Goût)",
            "tvChannel": "GEM"
        }"##;

        let episode: Episode = serde_json::from_str(json).unwrap();
        assert!(episode.drm);
        assert_eq!(episode.episode_count, 2);
        assert_eq!(episode.primary_colour, "#df0000");
        assert_eq!(episode.tv_channel, "GEM");
        assert_eq!(episode.seasons.len(), 1);
        let next = episode.next_episode.unwrap();
        assert_eq!(next.channel, None);
        assert_eq!(next.url.as_deref(), Some("http://go.ninemsn.com.au/"));
    }

    #[test]
    fn test_decode_sparse_record() {
        let episode: Episode = serde_json::from_str(r#"{"title": null, "image": null}"#).unwrap();
        assert_eq!(episode, Episode::default());
    }

    #[test]
    fn test_decode_null_seasons() {
        let episode: Episode =
            serde_json::from_str(r#"{"seasons": [null, {"slug": "show/thunderbirds/season/3"}]}"#)
                .unwrap();
        assert_eq!(episode.seasons.len(), 2);
        assert_eq!(episode.seasons[0], Season::default());

        let episode: Episode = serde_json::from_str(r#"{"seasons": null}"#).unwrap();
        assert!(episode.seasons.is_empty());
    }

    #[test]
    fn test_decode_wrong_type() {
        assert!(serde_json::from_str::<Episode>(r#"{"drm": "yes"}"#).is_err());
        assert!(serde_json::from_str::<Episode>(r#"{"episodeCount": "3"}"#).is_err());
    }
}
