//! Product listing and lookup handlers.

use shophub_catalog::ProductSource;
use shophub_core::{filter_products, format_currency, CategoryFilter, Product, SortKey};
use shophub_store::CartStore;

const TITLE_WIDTH: usize = 50;

/// Print the filtered, sorted product list with the cart count in the header.
///
/// Products and categories are fetched concurrently; either falls back to
/// the supplemental list on its own.
pub(crate) async fn run_products(
    source: &ProductSource,
    carts: &CartStore,
    search: Option<&str>,
    category: &CategoryFilter,
    sort: SortKey,
) {
    let (products, categories) = tokio::join!(source.all_products(), source.categories());
    let query = search.unwrap_or_default();
    let visible = filter_products(&products, query, category, sort);

    println!(
        "ShopHub: {} of {} products, cart: {} items",
        visible.len(),
        products.len(),
        carts.cart().item_count()
    );
    println!("categories: all, {}", categories.join(", "));
    println!();

    if visible.is_empty() {
        println!("no products match; try a different search or category");
        return;
    }
    print_product_table(&visible);
}

/// Print one product in detail.
///
/// # Errors
///
/// Returns an error if the product does not exist or the catalog request fails.
pub(crate) async fn run_product(source: &ProductSource, id: u64) -> anyhow::Result<()> {
    let product = source
        .product_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("product {id} not found"))?;

    println!("{}", product.title);
    println!("{}", format_currency(product.price));
    println!("Category: {}", product.category);
    println!(
        "Rating:   {} {:.1} ({} reviews)",
        stars(&product),
        product.rating.rate,
        product.rating.count
    );
    if !product.image.is_empty() {
        println!("Image:    {}", product.image);
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    Ok(())
}

/// List every category with its product count, or the products in one.
pub(crate) async fn run_categories(source: &ProductSource, category: Option<&str>) {
    if let Some(category) = category {
        let products = source.products_by_category(category).await;
        if products.is_empty() {
            println!("no products in category '{category}'");
            return;
        }
        println!("{category}: {} products", products.len());
        println!();
        print_product_table(&products);
        return;
    }

    let (products, categories) = tokio::join!(source.all_products(), source.categories());
    println!("{:<24}PRODUCTS", "CATEGORY");
    for label in &categories {
        let count = products.iter().filter(|p| &p.category == label).count();
        println!("{label:<24}{count}");
    }
}

fn print_product_table(products: &[Product]) {
    println!(
        "{:<6}{:<11}{:<9}{:<20}TITLE",
        "ID", "PRICE", "RATING", "CATEGORY"
    );
    for p in products {
        let rating = format!("{:.1}", p.rating.rate);
        println!(
            "{:<6}{:<11}{:<9}{:<20}{}",
            p.id,
            format_currency(p.price),
            rating,
            p.category,
            truncate(&p.title, TITLE_WIDTH)
        );
    }
}

fn stars(product: &Product) -> String {
    let full = product.rating.full_stars();
    format!("{}{}", "*".repeat(full), ".".repeat(5 - full))
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width).collect::<String>())
    } else {
        text.to_string()
    }
}
