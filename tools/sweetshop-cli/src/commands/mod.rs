//! CLI command implementations.

pub mod catalog;
pub mod list;

use clap::Args;
use sweetshop_catalog::search::SortOrder;

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Keyword matched against titles (case-insensitive).
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Only these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only these brands (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Only gift boxes.
    #[arg(long, conflicts_with = "no_gift_box")]
    pub gift_box: bool,

    /// Exclude gift boxes.
    #[arg(long)]
    pub no_gift_box: bool,

    /// Drop products containing this allergen (repeatable).
    #[arg(long = "exclude-allergen")]
    pub exclude_allergens: Vec<String>,

    /// Sort key: price, createdAt or popularity.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort order.
    #[arg(short, long, value_parser = parse_order)]
    pub order: Option<SortOrder>,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Page size (default from config).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Index of the featured product on the page.
    #[arg(long, default_value = "0")]
    pub featured: usize,

    /// Skip the simulated network latency.
    #[arg(long)]
    pub instant: bool,
}

/// Arguments for the catalog command.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Mark these categories as selected in the facet output (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

fn parse_order(s: &str) -> Result<SortOrder, String> {
    SortOrder::parse(s).ok_or_else(|| format!("expected `asc` or `desc`, got `{}`", s))
}
