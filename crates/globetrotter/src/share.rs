//! Share links for a trip.
//!
//! Everything here is display-only: links are derived from the trip id and
//! nothing is persisted.

use serde::Serialize;

use crate::trip::Trip;

/// Public base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://globetrotter.app";

/// Social networks offered on the share screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    /// `WhatsApp` message.
    WhatsApp,
    /// Facebook sharer.
    Facebook,
    /// Twitter intent.
    Twitter,
    /// Mail client.
    Email,
}

impl SocialNetwork {
    /// All networks in display order.
    pub const ALL: [Self; 4] = [Self::WhatsApp, Self::Facebook, Self::Twitter, Self::Email];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Email => "Email",
        }
    }

    /// Link that shares `share_url` on this network.
    #[must_use]
    pub fn link(self, share_url: &str) -> String {
        match self {
            Self::WhatsApp => format!("https://wa.me/?text=Check out my trip: {share_url}"),
            Self::Facebook => format!("https://facebook.com/sharer/sharer.php?u={share_url}"),
            Self::Twitter => format!("https://twitter.com/intent/tweet?url={share_url}"),
            Self::Email => {
                format!("mailto:?subject=My Trip&body=Check out my trip: {share_url}")
            }
        }
    }
}

/// A social share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Target network.
    pub network: SocialNetwork,
    /// Fully formed link.
    pub url: String,
}

/// Everything the share screen shows for one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    /// Public trip URL.
    pub url: String,
    /// One link per [`SocialNetwork`].
    pub social: Vec<SocialLink>,
}

/// Public URL of a trip under `base_url`.
#[must_use]
pub fn share_url(base_url: &str, trip: &Trip) -> String {
    format!("{}/trip/{}", base_url.trim_end_matches('/'), trip.id)
}

/// Build the trip URL and all social links.
#[must_use]
pub fn share_links(base_url: &str, trip: &Trip) -> ShareLinks {
    let url = share_url(base_url, trip);
    let social = SocialNetwork::ALL
        .iter()
        .map(|&network| SocialLink {
            network,
            url: network.link(&url),
        })
        .collect();
    ShareLinks { url, social }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn kerala() -> Trip {
        catalog::seed_trips().remove(0)
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url(DEFAULT_BASE_URL, &kerala()),
            "https://globetrotter.app/trip/1"
        );
    }

    #[test]
    fn test_share_url_trailing_slash() {
        assert_eq!(
            share_url("https://example.test/", &kerala()),
            "https://example.test/trip/1"
        );
    }

    #[test]
    fn test_social_links() {
        let links = share_links(DEFAULT_BASE_URL, &kerala());
        assert_eq!(links.social.len(), 4);
        assert_eq!(
            links.social[0].url,
            "https://wa.me/?text=Check out my trip: https://globetrotter.app/trip/1"
        );
        assert_eq!(
            links.social[1].url,
            "https://facebook.com/sharer/sharer.php?u=https://globetrotter.app/trip/1"
        );
        assert_eq!(
            links.social[2].url,
            "https://twitter.com/intent/tweet?url=https://globetrotter.app/trip/1"
        );
        assert!(links.social[3].url.starts_with("mailto:?subject=My Trip"));
    }

    #[test]
    fn test_network_names() {
        let names: Vec<_> = SocialNetwork::ALL.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["WhatsApp", "Facebook", "Twitter", "Email"]);
    }
}
