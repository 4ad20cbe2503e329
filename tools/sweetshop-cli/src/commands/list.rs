//! Product listing command.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde::Serialize;
use sweetshop_catalog::catalog::Product;
use sweetshop_catalog::search::{Filters, Pagination, QueryResult, SortKey};
use sweetshop_store::{Action, FetchOutcome, ProductsState, ProductsStore};

use super::ListArgs;
use crate::context::Context;
use crate::output::{format_date, format_price, status_badge};

const COLUMNS: [&str; 6] = ["ID", "TITLE", "CATEGORY", "BRAND", "PRICE", "CREATED"];
const WIDTHS: [usize; 6] = [4, 30, 12, 11, 8, 10];

/// JSON shape of a listing: the page plus its pagination.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingJson<'a> {
    #[serde(flatten)]
    result: &'a QueryResult,
    pagination: Pagination,
    featured_index: usize,
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine(args.instant);
    let state = ProductsState::default().with_page_size(ctx.config.query.default_page_size);
    let store = ProductsStore::with_state(Arc::new(engine), state);

    store.dispatch_all(actions(&args));

    let spinner = ctx.output.spinner("Fetching products...");
    let outcome = store.fetch().await;
    spinner.finish_and_clear();

    let state = store.snapshot();
    if outcome == FetchOutcome::Failed {
        let message = state.error.unwrap_or_else(|| "unknown error".to_string());
        return Err(anyhow!(message).context("Product fetch failed"));
    }

    let result = QueryResult::new(state.items.clone(), state.total);
    let pagination = result.pagination(state.page, state.page_size);

    if ctx.output.is_json() {
        ctx.output.json(&ListingJson {
            result: &result,
            pagination,
            featured_index: state.featured_index,
        });
        return Ok(());
    }

    print_listing(&state, &pagination, ctx);
    Ok(())
}

/// The store actions the command-line flags describe.
fn actions(args: &ListArgs) -> Vec<Action> {
    let mut filters = Filters::default()
        .with_categories(args.categories.clone())
        .with_brands(args.brands.clone())
        .with_allergens_excluded(args.exclude_allergens.clone());
    if args.gift_box {
        filters = filters.with_gift_box(true);
    } else if args.no_gift_box {
        filters = filters.with_gift_box(false);
    }

    let mut actions = vec![
        Action::SetFilters(filters),
        Action::SetKeyword(args.keyword.clone().unwrap_or_default()),
        Action::SetPage(args.page),
        Action::SetFeaturedIndex(args.featured),
    ];
    if let Some(page_size) = args.page_size {
        actions.push(Action::SetPageSize(page_size));
    }
    if let Some(sort) = &args.sort {
        actions.push(Action::SetSortKey(Some(SortKey::parse(sort))));
    }
    if let Some(order) = args.order {
        actions.push(Action::SetSortOrder(order));
    }
    actions
}

fn print_listing(state: &ProductsState, pagination: &Pagination, ctx: &Context) {
    let sort = state
        .sort_key
        .as_ref()
        .map(|k| format!("{} {}", k.display_name(), state.sort_order.as_str()))
        .unwrap_or_else(|| "none".to_string());

    ctx.output.header("Products");
    ctx.output.kv("Status", &status_badge(state.status.as_str()));
    if !state.keyword.trim().is_empty() {
        ctx.output.kv("Keyword", state.keyword.trim());
    }
    ctx.output.kv("Sort", &sort);
    ctx.output.kv("Active filters", &state.filters.active_count().to_string());
    println!();

    if state.items.is_empty() {
        ctx.output.info("No products match.");
    } else {
        ctx.output.table_row(&COLUMNS, &WIDTHS);
        for product in &state.items {
            print_row(product, ctx);
        }
    }

    println!();
    ctx.output.kv(
        "Showing",
        &format!(
            "{}-{} of {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total
        ),
    );
    ctx.output.kv(
        "Page",
        &format!(
            "{} of {}  [{}]",
            pagination.page,
            pagination.total_pages,
            page_strip(pagination)
        ),
    );

    if let Some(featured) = state.featured() {
        ctx.output.header("Featured");
        ctx.output.kv("Title", &featured.title);
        ctx.output.kv("Price", &format_price(featured.price));
        if !featured.tags.is_empty() {
            ctx.output.kv("Tags", &featured.tags.join(", "));
        }
        ctx.output.kv("Image", featured.primary_image());
        ctx.output.kv("Hover image", featured.secondary_image());
    }
}

fn print_row(product: &Product, ctx: &Context) {
    let price = format_price(product.price);
    let created = format_date(&product.created_at);
    ctx.output.table_row(
        &[
            product.id.as_str(),
            &product.title,
            &product.category,
            &product.brand,
            &price,
            &created,
        ],
        &WIDTHS,
    );
}

fn page_strip(pagination: &Pagination) -> String {
    pagination
        .page_numbers(5)
        .iter()
        .map(|n| {
            if *n == pagination.page {
                format!("({})", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
