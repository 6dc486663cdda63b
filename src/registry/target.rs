use anyhow::{Context, Result};
use reqwest::Url;

/// Where to browse: scheme + host of the registry and an optional sub path
/// that narrows the catalog to one namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryTarget {
    pub scheme: String,
    /// Host with port, e.g. `localhost:5000`.
    pub host: String,
    /// Empty or `/`-prefixed without trailing `/`, e.g. `/team/backend`.
    pub sub_path: String,
}

impl RegistryTarget {
    /// Accepts `registry.example.com`, `http://localhost:5000`,
    /// `registry.example.com/team/` and similar. Input is lowercased and
    /// defaults to https.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            anyhow::bail!("registry name is empty");
        }
        let normalized = if input.starts_with("http://") || input.starts_with("https://") {
            input
        } else {
            format!("https://{}", input)
        };

        let url = Url::parse(&normalized)
            .with_context(|| format!("parse registry url `{}`", normalized))?;
        let host = url
            .host_str()
            .with_context(|| format!("registry url `{}` has no host", normalized))?;
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let sub_path = url.path().trim_end_matches('/').to_string();
        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            sub_path,
        })
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Label of the tree root.
    pub fn root_label(&self) -> String {
        format!("{}{}", self.host, self.sub_path)
    }

    fn prefix(&self) -> &str {
        self.sub_path.trim_start_matches('/')
    }

    /// Keeps repositories below the sub path, relative to it.
    pub fn scope_repositories(&self, repositories: Vec<String>) -> Vec<String> {
        let prefix = self.prefix();
        if prefix.is_empty() {
            return repositories;
        }
        repositories
            .into_iter()
            .filter_map(|repo| {
                let rest = repo.strip_prefix(prefix)?.strip_prefix('/')?;
                (!rest.is_empty()).then(|| rest.to_string())
            })
            .collect()
    }

    /// Full registry name of a repository given relative to the sub path.
    pub fn repository_name(&self, relative: &str) -> String {
        let relative = relative.trim_matches('/');
        match self.prefix() {
            "" => relative.to_string(),
            prefix => format!("{}/{}", prefix, relative),
        }
    }
}

#[cfg(test)]
#[path = "../tests/registry/target_tests.rs"]
mod tests;
