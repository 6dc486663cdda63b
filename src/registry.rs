use std::time::Duration;

use tracing::info;

mod challenge;
mod http_client;
mod link;
mod target;
mod types;

pub use self::challenge::Challenge;
pub use self::link::parse_link;
pub use self::target::RegistryTarget;
pub use self::types::*;

/// Source of repository and tag listings. Implementations return fully
/// paged results.
pub trait Registry {
    fn list_repositories(&self) -> Result<Vec<String>, RegistryError>;
    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn list_repositories(&self) -> Result<Vec<String>, RegistryError> {
        (**self).list_repositories()
    }

    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        (**self).list_tags(repository)
    }
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub page_size: usize,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            page_size: 100,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Docker Registry HTTP API v2 client.
pub struct RegistryClient {
    target: RegistryTarget,
    page_size: usize,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(target: RegistryTarget, options: ClientOptions) -> Result<Self, RegistryError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("regview/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()
            .map_err(RegistryError::Client)?;
        Ok(Self {
            target,
            page_size: options.page_size.max(1),
            client,
        })
    }

    pub fn target(&self) -> &RegistryTarget {
        &self.target
    }
}

impl Registry for RegistryClient {
    fn list_repositories(&self) -> Result<Vec<String>, RegistryError> {
        let first = format!("/v2/_catalog?n={}", self.page_size);
        let mut repositories = self.paginate::<CatalogPage>(first)?;
        repositories.sort();
        let total = repositories.len();
        let scoped = self.target.scope_repositories(repositories);
        info!(total, scoped = scoped.len(), "listed repositories");
        Ok(scoped)
    }

    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        let name = self.target.repository_name(repository);
        let first = format!("/v2/{}/tags/list?n={}", name, self.page_size);
        let tags = self.paginate::<TagsPage>(first)?;
        info!(repository = %name, count = tags.len(), "listed tags");
        Ok(tags)
    }
}
