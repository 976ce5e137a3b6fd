use storefront_lib::model::Product;
use storefront_table::Alignment;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::NONE;
use super::Screen;
use super::rupees;

pub struct ProductScreen;

/// Category name, or its id when the product came without the embedded record.
fn category(product: &Product) -> String {
    product
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| product.category_id.to_string())
}

fn collection(product: &Product) -> String {
    match (&product.collection, product.collection_id) {
        (Some(c), _) => c.name.clone(),
        (None, Some(id)) => id.to_string(),
        (None, None) => NONE.to_string(),
    }
}

impl Screen for ProductScreen {
    type Row = Product;
    const NAME: &'static str = "products";
    const ADD_ACTION: Option<&'static str> = Some("Add Product");

    fn columns() -> Vec<ColumnDef<Product>> {
        vec![
            ColumnDef::new("productName", "Product Name", |p: &Product| {
                Cell::stack([Cell::strong(&p.name), Cell::muted(&p.slug)])
            })
            .searchable(),
            ColumnDef::new("category", "Category", |p: &Product| Cell::text(category(p)))
                .searchable(),
            ColumnDef::new("collection", "Collection", |p: &Product| {
                Cell::text(collection(p))
            })
            .searchable(),
            ColumnDef::new("shortDescription", "Short Description", |p: &Product| {
                Cell::muted(&p.short_description)
            })
            .searchable()
            .max_width(40),
            ColumnDef::new("stock", "Stock", |p: &Product| {
                let stock = p.total_stock();
                if stock == 0 {
                    Cell::styled("Out of stock", Tone::Danger)
                } else {
                    Cell::text(stock.to_string())
                }
            })
            .align(Alignment::Right),
            ColumnDef::new("price", "From", |p: &Product| {
                p.lowest_price()
                    .map(|price| Cell::text(rupees(price)))
                    .unwrap_or_else(|| Cell::muted(NONE))
            })
            .align(Alignment::Right),
        ]
    }

    fn suggestion_label(product: &Product) -> String {
        format!("{} — {}", product.name, category(product))
    }
}
