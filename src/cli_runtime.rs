use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use regview::browser::Browser;
use regview::registry::{ClientOptions, Registry, RegistryClient, RegistryTarget};
use regview::tree::Tree;

#[derive(Parser)]
#[command(name = "regview")]
#[command(version, about = "Browse a container image registry as a tree", long_about = None)]
pub(crate) struct Cli {
    /// Registry to browse, e.g. `registry.example.com`, `http://localhost:5000`
    /// or `registry.example.com/team` to start below a namespace
    registry: String,

    /// Page size requested from the catalog and tag list endpoints
    #[arg(long, default_value_t = 100)]
    page_size: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Append logs to this file (filter with REGVIEW_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    regview::logging::init(cli.log_file.as_deref())?;

    let target = RegistryTarget::parse(&cli.registry)?;
    let client = RegistryClient::new(
        target.clone(),
        ClientOptions {
            page_size: cli.page_size,
            timeout: Duration::from_secs(cli.timeout),
        },
    )
    .context("create registry client")?;

    eprintln!("Getting repository list from {}", target.base_url());
    info!(registry = %target.base_url(), sub_path = %target.sub_path, "listing repositories");
    let repositories = client
        .list_repositories()
        .with_context(|| format!("list repositories from {}", target.base_url()))?;

    let tree = Tree::from_paths(target.root_label(), &repositories);
    let mut browser = Browser::new(client, tree, 1);
    regview::tui_shell::run(&mut browser)
}
