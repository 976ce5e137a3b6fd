use storefront_lib::model::Review;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::Screen;

pub struct ReviewScreen;

impl Screen for ReviewScreen {
    type Row = Review;
    const NAME: &'static str = "reviews";

    fn columns() -> Vec<ColumnDef<Review>> {
        vec![
            ColumnDef::new("product", "Product", |r: &Review| match &r.product {
                Some(product) => Cell::stack([
                    Cell::strong(&product.name),
                    Cell::muted(product.slug.clone().unwrap_or_default()),
                ]),
                None => Cell::muted("Product removed"),
            })
            .searchable(),
            ColumnDef::new("rating", "Rating", |r: &Review| Cell::text(r.stars())),
            ColumnDef::new("user", "Customer", |r: &Review| match &r.user {
                Some(user) => Cell::stack([
                    Cell::text(&user.name),
                    Cell::muted(user.email.clone().unwrap_or_default()),
                ]),
                None => Cell::muted("Unknown user"),
            })
            .searchable(),
            ColumnDef::new("isApproved", "Status", |r: &Review| {
                if r.is_approved {
                    Cell::styled("Approved", Tone::Success)
                } else {
                    Cell::styled("Pending", Tone::Warning)
                }
            }),
            ColumnDef::new("isFeatured", "Featured", |r: &Review| {
                if r.is_featured {
                    Cell::styled("Featured", Tone::Info)
                } else {
                    Cell::muted("Normal")
                }
            }),
        ]
    }

    fn suggestion_label(review: &Review) -> String {
        let product = review.product.as_ref().map_or("Review", |p| p.name.as_str());
        let user = review.user.as_ref().map_or("", |u| u.name.as_str());
        format!("{} - {}", product, user)
    }
}
