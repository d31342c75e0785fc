//! Diagnostic search over the node catalog.
//!
//! Loads the config and nodes document the app would use, runs one query and
//! prints the resulting sections to stdout. Tracing goes to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flowcanvas::{FlowConfig, NodePicker, load_catalog};
use node_search::Category;
use node_search::types::TOP_MATCHES_SECTION;

/// Search the flowcanvas node catalog.
#[derive(Debug, Parser)]
#[command(name = "flowcanvas-search", version, about)]
struct Cli {
    /// Config file (default: platform config dir/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nodes document, overriding the configured catalog path.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Category tab to browse (Popular, Tools, Apps, Flow).
    #[arg(long)]
    category: Option<Category>,

    /// Print the sections as JSON.
    #[arg(long)]
    json: bool,

    /// Query words. Leave empty to browse the selected tab.
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("flowcanvas=info,node_search=warn")
            }),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(flowcanvas::dirs::config_file);
    let mut config = FlowConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    if let Some(category) = cli.category {
        config.search.default_category = category;
    }

    let catalog = load_catalog(&config.catalog).with_context(|| {
        format!(
            "loading catalog {}",
            flowcanvas::catalog_path(&config.catalog).display()
        )
    })?;
    let mut picker = NodePicker::new(catalog, &config.search)?;
    picker.set_query(cli.query.join(" "));

    let sections = picker.sections();
    tracing::info!(
        searching = picker.is_searching(),
        sections = sections.len(),
        items = sections.item_count(),
        "search complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for (label, items) in sections.iter() {
        let heading = if label == TOP_MATCHES_SECTION {
            "Top matches"
        } else {
            label
        };
        println!("{heading}");
        for item in items {
            println!("  {:<40} {}", item.name, item.id);
        }
    }
    Ok(())
}
