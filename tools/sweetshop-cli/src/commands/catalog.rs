//! Catalog summary command.

use anyhow::Result;
use serde::Serialize;
use sweetshop_catalog::search::{Facet, Filters};

use super::CatalogArgs;
use crate::context::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSummary {
    total: usize,
    gift_boxes: usize,
    facets: Vec<Facet>,
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let filters = Filters::default().with_categories(args.categories);

    let summary = CatalogSummary {
        total: catalog.len(),
        gift_boxes: catalog.products().iter().filter(|p| p.is_gift_box).count(),
        facets: catalog.facets(&filters),
    };

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Catalog");
    if let Some(path) = &ctx.config_path {
        ctx.output.kv("Config", &path.display().to_string());
    }
    ctx.output.kv("Products", &summary.total.to_string());
    ctx.output.kv("Gift boxes", &summary.gift_boxes.to_string());

    for facet in &summary.facets {
        ctx.output.header(&facet.name);
        for value in &facet.values {
            let marker = if value.selected { "*" } else { " " };
            ctx.output.table_row(
                &[marker, &value.value, &value.count.to_string()],
                &[1, 14, 4],
            );
        }
    }

    Ok(())
}
