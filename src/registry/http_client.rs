use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{LINK, WWW_AUTHENTICATE};
use tracing::{debug, warn};

use super::*;

impl RegistryClient {
    /// Follows `Link` headers from `first` until the last page and
    /// concatenates every page's items.
    pub(super) fn paginate<P: Page>(&self, first: String) -> Result<Vec<String>, RegistryError> {
        let mut items = Vec::new();
        let mut next = Some(first);
        while let Some(path) = next {
            let (page, link) = self.get_page::<P>(&path)?;
            items.extend(page.into_items());

            next = match link {
                Some(link) => parse_link(&link)?,
                None => None,
            };
            if next.as_deref() == Some(path.as_str()) {
                return Err(RegistryError::MalformedLink(format!(
                    "link repeats the current page {}",
                    path
                )));
            }
        }
        Ok(items)
    }

    fn get_page<P: Page>(&self, path: &str) -> Result<(P, Option<String>), RegistryError> {
        let url = self.url(path);
        let resp = self.get_with_auth(&url)?;
        let link = resp
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let page = decode_json(resp, &url)?;
        Ok((page, link))
    }

    /// GET that answers one bearer challenge before giving up.
    pub(super) fn get_with_auth(&self, url: &str) -> Result<Response, RegistryError> {
        debug!(%url, "GET");
        let resp = self.send(self.client.get(url), url)?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return ensure_ok(resp);
        }

        let challenge = challenge_of(&resp)?;
        warn!(realm = %challenge.realm, scope = ?challenge.scope, "registry requested a bearer token");
        let token = self.fetch_token(&challenge)?;

        let resp = self.send(self.client.get(url).bearer_auth(token), url)?;
        ensure_ok(resp)
    }

    fn fetch_token(&self, challenge: &Challenge) -> Result<String, RegistryError> {
        let mut query = Vec::new();
        if let Some(service) = &challenge.service {
            query.push(("service", service.as_str()));
        }
        if let Some(scope) = &challenge.scope {
            query.push(("scope", scope.as_str()));
        }

        let resp = self.send(self.client.get(&challenge.realm).query(&query), &challenge.realm)?;
        let resp = ensure_ok(resp).map_err(|err| match err {
            RegistryError::Status { message, .. } => {
                RegistryError::Auth(format!("token endpoint refused: {}", message))
            }
            other => other,
        })?;

        let token: TokenResponse = decode_json(resp, &challenge.realm)?;
        token
            .into_token()
            .ok_or_else(|| RegistryError::Auth("token endpoint returned no token".to_string()))
    }

    fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<Response, RegistryError> {
        req.send().map_err(|source| RegistryError::Transport {
            url: url.to_string(),
            source,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.target.base_url(), path)
    }
}

fn challenge_of(resp: &Response) -> Result<Challenge, RegistryError> {
    let mut last_err = None;
    for value in resp.headers().get_all(WWW_AUTHENTICATE) {
        let value = value
            .to_str()
            .map_err(|_| RegistryError::Auth("WWW-Authenticate header is not ASCII".to_string()))?;
        match Challenge::parse(value) {
            Ok(challenge) => return Ok(challenge),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        RegistryError::Auth("unauthorized and no WWW-Authenticate header".to_string())
    }))
}

fn ensure_ok(resp: Response) -> Result<Response, RegistryError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    let body = body.trim();
    let message = if body.is_empty() {
        "unable to fetch".to_string()
    } else {
        body.to_string()
    };

    if status == StatusCode::UNAUTHORIZED {
        return Err(RegistryError::Auth(message));
    }
    Err(RegistryError::Status {
        status: status.as_u16(),
        message,
    })
}

fn decode_json<T: serde::de::DeserializeOwned>(
    resp: Response,
    url: &str,
) -> Result<T, RegistryError> {
    let bytes = resp.bytes().map_err(|source| RegistryError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| RegistryError::Decode {
        url: url.to_string(),
        source,
    })
}
