use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response; the message is the response body when there is one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed pagination link [{0}]")]
    MalformedLink(String),
}

/// One page of listing results.
pub(super) trait Page: serde::de::DeserializeOwned {
    fn into_items(self) -> Vec<String>;
}

#[derive(Debug, Deserialize)]
pub(super) struct CatalogPage {
    #[serde(default)]
    repositories: Option<Vec<String>>,
}

impl Page for CatalogPage {
    fn into_items(self) -> Vec<String> {
        self.repositories.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TagsPage {
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl Page for TagsPage {
    fn into_items(self) -> Vec<String> {
        self.tags.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    #[serde(default)]
    pub(super) token: Option<String>,
    #[serde(default)]
    pub(super) access_token: Option<String>,
}

impl TokenResponse {
    pub(super) fn into_token(self) -> Option<String> {
        self.token
            .filter(|t| !t.is_empty())
            .or(self.access_token.filter(|t| !t.is_empty()))
    }
}
