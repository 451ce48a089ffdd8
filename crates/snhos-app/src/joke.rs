//! Joke fetching for the `joke` command.
//!
//! The only real network call the desktop makes. [`JokeSource`] is the seam
//! the action layer talks to; [`HttpJokeSource`] is the production
//! implementation and tests plug in their own.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::config::NetworkSettings;

/// A joke as returned by the joke API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JokeError {
    #[error("joke fetching is disabled")]
    Disabled,

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed joke payload: {0}")]
    Decode(String),
}

/// Where jokes come from
#[trait_variant::make(JokeSource: Send)]
pub trait LocalJokeSource {
    async fn fetch(&self) -> Result<Joke, JokeError>;
}

/// GET against the configured endpoint
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpJokeSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, JokeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JokeError::Request(e.to_string()))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl JokeSource for HttpJokeSource {
    async fn fetch(&self) -> Result<Joke, JokeError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| JokeError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(JokeError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| JokeError::Request(e.to_string()))?;
        parse_joke(&body)
    }
}

/// Decode a single joke object
pub fn parse_joke(body: &str) -> Result<Joke, JokeError> {
    serde_json::from_str(body).map_err(|e| JokeError::Decode(e.to_string()))
}

/// Always fails with [`JokeError::Disabled`]; used when networking is off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledJokeSource;

impl JokeSource for DisabledJokeSource {
    async fn fetch(&self) -> Result<Joke, JokeError> {
        Err(JokeError::Disabled)
    }
}

/// The source picked from `[network]` settings
#[derive(Debug, Clone)]
pub enum ConfiguredJokeSource {
    Http(HttpJokeSource),
    Disabled(DisabledJokeSource),
}

impl ConfiguredJokeSource {
    /// Falls back to [`DisabledJokeSource`] when networking is off or the
    /// endpoint can't be used
    pub fn from_settings(settings: &NetworkSettings) -> Self {
        if !settings.enabled {
            return Self::Disabled(DisabledJokeSource);
        }
        let url = match settings.joke_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("Joke endpoint unusable, disabling: {}", e);
                return Self::Disabled(DisabledJokeSource);
            }
        };
        match HttpJokeSource::new(url, settings.timeout()) {
            Ok(http) => Self::Http(http),
            Err(e) => {
                warn!("Failed to build HTTP client: {}", e);
                Self::Disabled(DisabledJokeSource)
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Where jokes are fetched from, `None` when disabled
    pub fn endpoint(&self) -> Option<&Url> {
        match self {
            Self::Http(http) => Some(http.url()),
            Self::Disabled(_) => None,
        }
    }
}

impl JokeSource for ConfiguredJokeSource {
    async fn fetch(&self) -> Result<Joke, JokeError> {
        match self {
            Self::Http(http) => JokeSource::fetch(http).await,
            Self::Disabled(disabled) => JokeSource::fetch(disabled).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_joke_renames_type() {
        let joke = parse_joke(
            r#"{"type":"programming","setup":"Why?","punchline":"Because.","id":16}"#,
        )
        .unwrap();
        assert_eq!(joke.id, 16);
        assert_eq!(joke.kind, "programming");
        assert_eq!(joke.punchline, "Because.");
    }

    #[test]
    fn test_parse_joke_rejects_missing_fields() {
        assert!(matches!(
            parse_joke(r#"{"setup":"only"}"#),
            Err(JokeError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_disabled_source_fails() {
        assert_eq!(
            JokeSource::fetch(&DisabledJokeSource).await,
            Err(JokeError::Disabled)
        );
    }

    #[test]
    fn test_configured_source_respects_enabled_flag() {
        let settings = NetworkSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(!ConfiguredJokeSource::from_settings(&settings).is_enabled());
    }

    #[test]
    fn test_configured_source_rejects_bad_url() {
        let settings = NetworkSettings {
            joke_api_url: "ftp://example.com/joke".to_string(),
            ..Default::default()
        };
        assert!(!ConfiguredJokeSource::from_settings(&settings).is_enabled());
    }

    #[test]
    fn test_configured_source_uses_http_by_default() {
        let source = ConfiguredJokeSource::from_settings(&NetworkSettings::default());
        assert!(source.is_enabled());
        assert_eq!(
            source.endpoint().map(Url::as_str),
            Some("https://official-joke-api.appspot.com/random_joke")
        );
    }

    #[test]
    fn test_disabled_source_has_no_endpoint() {
        let settings = NetworkSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(ConfiguredJokeSource::from_settings(&settings).endpoint().is_none());
    }
}
