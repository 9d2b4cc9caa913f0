//! # pricelist — price-list catalog CLI
//!
//! Composition root that wires all adapters together and runs one command.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars) and CLI arguments
//! - Initialise tracing from the configured filter
//! - Construct the REST source adapter
//! - Construct the cache service, injecting the source and clock via ports
//! - Subscribe to the refresh bus so reloads are visible in the logs
//! - Dispatch the requested command
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use std::sync::Arc;

use clap::Parser;

use pricelist_app::ports::{NomenclatureSource, SystemClock};
use pricelist_app::services::price_list_service::PriceListService;
use pricelist_domain::catalog::{self, SectionNode, ServiceFilter, SortDirection};
use pricelist_domain::nomenclature::{self, NomenclatureFilter};
use pricelist_domain::refresh::RefreshPhase;

use cli::{Cli, Command};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Remote source
    let source = Arc::new(
        pricelist_adapter_source_rest::Config {
            base_url: config.source.base_url.clone(),
            api_key: config.source.api_key.clone(),
        }
        .build()?,
    );

    // Cache service
    let service = PriceListService::new(Arc::clone(&source), SystemClock)
        .with_ttl(chrono::Duration::seconds(config.cache.ttl_secs))
        .with_chunk_size(config.cache.chunk_size);

    // Surface reloads in the logs, the way the UI shows a loading indicator.
    let mut refresh_rx = service.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = refresh_rx.recv().await {
            match event.phase {
                RefreshPhase::Started => {
                    tracing::info!(dataset = %event.dataset, "refreshing price list");
                }
                RefreshPhase::Finished => {
                    tracing::info!(dataset = %event.dataset, "refresh finished");
                }
            }
        }
    });

    match args.command {
        Command::Fetch {
            dataset,
            section,
            search,
            sort,
            desc,
            page,
            page_size,
        } => {
            let items = service.get(dataset).await?;
            let filter = ServiceFilter {
                section,
                search,
                ..ServiceFilter::default()
            };
            let mut filtered = catalog::filter_services(&items, &filter);
            if let Some(field) = sort {
                let direction = if desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                catalog::sort_services(&mut filtered, field, direction);
            }
            let shown = catalog::paginate(&filtered, page, page_size);
            for item in shown {
                println!("{:<14} {:<60} {:>12.2}", item.code, item.name, item.cost);
            }
            println!(
                "{} of {} services (page {page} of dataset `{dataset}`)",
                shown.len(),
                filtered.len()
            );
        }
        Command::Sections { dataset } => {
            let items = service.get(dataset).await?;
            for node in catalog::section_tree(&items) {
                print_section(&node, 0);
            }
        }
        Command::Count { dataset } => {
            let count = service.count(dataset).await?;
            println!("{count}");
        }
        Command::Export {
            dataset,
            output,
            section,
        } => {
            let items = service.get(dataset).await?;
            let filter = ServiceFilter {
                section,
                ..ServiceFilter::default()
            };
            let filtered = catalog::filter_services(&items, &filter);
            let file = std::fs::File::create(&output)?;
            pricelist_adapter_export_csv::write_services(file, &filtered)?;
            println!("wrote {} services to {}", filtered.len(), output.display());
        }
        Command::Nomenclature {
            section,
            search,
            limit,
        } => {
            let entries = source.fetch_all().await?;
            let filter = NomenclatureFilter {
                section,
                search,
                ..NomenclatureFilter::default()
            };
            let filtered = nomenclature::filter_nomenclature(&entries, &filter);
            let shown = catalog::paginate(&filtered, 1, limit);
            for entry in shown {
                println!("{:<16} {}", entry.code, entry.name);
            }
            println!("{} of {} entries", shown.len(), filtered.len());
        }
    }

    Ok(())
}

fn print_section(node: &SectionNode, depth: usize) {
    println!("{:indent$}{}", "", node.name, indent = depth * 2);
    for child in &node.children {
        print_section(child, depth + 1);
    }
}
