use super::RegistryError;

/// Extracts the next request path from a pagination `Link` header, e.g.
/// `</v2/_catalog?last=b&n=100>; rel="next"` yields `/v2/_catalog?last=b&n=100`.
/// An empty header means there is no next page.
pub fn parse_link(link: &str) -> Result<Option<String>, RegistryError> {
    let link = link.trim();
    if link.is_empty() {
        return Ok(None);
    }

    let start = link.find("/v2/").ok_or_else(|| {
        RegistryError::MalformedLink(format!("link header must contain '/v2/': {}", link))
    })?;
    let end = link[start..].find('>').ok_or_else(|| {
        RegistryError::MalformedLink(format!("link header must contain '>': {}", link))
    })?;

    Ok(Some(link[start..start + end].to_string()))
}

#[cfg(test)]
#[path = "../tests/registry/link_tests.rs"]
mod tests;
