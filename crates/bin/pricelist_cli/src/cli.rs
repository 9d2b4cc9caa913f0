//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pricelist_domain::catalog::SortField;
use pricelist_domain::dataset::Dataset;

/// Medical price-list catalog client.
#[derive(Debug, Parser)]
#[command(name = "pricelist", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a dataset and print matching services.
    Fetch {
        /// Logical dataset (`ambulatory` or `laboratory`).
        dataset: Dataset,
        /// Case-insensitive substring filter on the section column.
        #[arg(long)]
        section: Option<String>,
        /// Case-insensitive search across every column.
        #[arg(long)]
        search: Option<String>,
        /// Sort column (section, subsection1, subsection2, code, name, cost).
        #[arg(long)]
        sort: Option<SortField>,
        /// Sort descending instead of ascending.
        #[arg(long)]
        desc: bool,
        /// 1-based page to show.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows shown per page.
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },
    /// Print the section hierarchy of a dataset.
    Sections {
        /// Logical dataset (`ambulatory` or `laboratory`).
        dataset: Dataset,
    },
    /// Print the exact remote row count of a dataset.
    Count {
        /// Logical dataset (`ambulatory` or `laboratory`).
        dataset: Dataset,
    },
    /// Load a dataset and write it to a CSV file.
    Export {
        /// Logical dataset (`ambulatory` or `laboratory`).
        dataset: Dataset,
        /// Output file path.
        #[arg(long, short)]
        output: PathBuf,
        /// Case-insensitive substring filter on the section column.
        #[arg(long)]
        section: Option<String>,
    },
    /// Load the nomenclature registry and print matching entries.
    Nomenclature {
        /// Exact chapter to keep (tree selection).
        #[arg(long)]
        section: Option<String>,
        /// Case-insensitive search across every column.
        #[arg(long)]
        search: Option<String>,
        /// Maximum entries to print.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
