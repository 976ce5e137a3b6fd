use storefront_lib::model::Category;
use storefront_lib::model::Collection;
use storefront_lib::model::Color;
use storefront_lib::model::Size;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::NONE;
use super::Screen;

pub struct ColorScreen;

impl Screen for ColorScreen {
    type Row = Color;
    const NAME: &'static str = "colors";
    const ADD_ACTION: Option<&'static str> = Some("Add Color");

    fn columns() -> Vec<ColumnDef<Color>> {
        vec![
            ColumnDef::new("name", "Color Name", |c: &Color| Cell::strong(&c.name)).searchable(),
            ColumnDef::new("code", "Color Code", |c: &Color| Cell::muted(&c.code)).searchable(),
            ColumnDef::new("hexCode", "Hex Code", |c: &Color| Cell::muted(&c.hex_code))
                .searchable(),
        ]
    }

    fn suggestion_label(color: &Color) -> String {
        format!("{} - {}", color.name, color.code)
    }
}

pub struct SizeScreen;

impl Screen for SizeScreen {
    type Row = Size;
    const NAME: &'static str = "sizes";
    const ADD_ACTION: Option<&'static str> = Some("Add Size");

    fn columns() -> Vec<ColumnDef<Size>> {
        vec![
            ColumnDef::new("label", "Label", |s: &Size| Cell::text(&s.label)).searchable(),
            ColumnDef::new("code", "Size Code", |s: &Size| Cell::strong(&s.code)).searchable(),
        ]
    }

    fn suggestion_label(size: &Size) -> String {
        format!("{} — {}", size.code, size.label)
    }
}

pub struct CategoryScreen;

impl Screen for CategoryScreen {
    type Row = Category;
    const NAME: &'static str = "categories";
    const ADD_ACTION: Option<&'static str> = Some("Add Category");

    fn columns() -> Vec<ColumnDef<Category>> {
        vec![
            ColumnDef::new("categoryName", "Category Name", |c: &Category| {
                Cell::strong(&c.name)
            })
            .searchable(),
            ColumnDef::new("slug", "Slug", |c: &Category| Cell::muted(&c.slug)).searchable(),
        ]
    }

    fn suggestion_label(category: &Category) -> String {
        let slug = if category.slug.is_empty() {
            "Uncategorised"
        } else {
            &category.slug
        };
        format!("{} – {}", category.name, slug)
    }
}

pub struct CollectionScreen;

impl Screen for CollectionScreen {
    type Row = Collection;
    const NAME: &'static str = "collections";
    const ADD_ACTION: Option<&'static str> = Some("Add Collection");

    fn columns() -> Vec<ColumnDef<Collection>> {
        vec![
            ColumnDef::new("collectionName", "Collection Name", |c: &Collection| {
                Cell::strong(&c.name)
            })
            .searchable(),
            ColumnDef::new("slug", "Slug", |c: &Collection| Cell::muted(&c.slug)).searchable(),
            ColumnDef::new("home", "Home Page", |c: &Collection| {
                match (c.show_on_home, c.home_order) {
                    (true, Some(order)) => Cell::styled(format!("Shown (#{})", order), Tone::Success),
                    (true, None) => Cell::styled("Shown", Tone::Success),
                    (false, _) => Cell::muted(NONE),
                }
            }),
        ]
    }

    fn suggestion_label(collection: &Collection) -> String {
        format!("{} — {}", collection.name, collection.slug)
    }
}

#[cfg(test)]
mod tests {
    use storefront_table::render_text;

    use super::*;
    use crate::screens::table_builder;

    fn color(id: i64, name: &str, code: &str) -> Color {
        Color {
            id,
            name: name.to_string(),
            code: code.to_string(),
            hex_code: "#000000".to_string(),
        }
    }

    #[test]
    fn color_search_suggests_by_name_and_code() {
        let rows = vec![color(1, "Black", "BLK"), color(2, "White", "WHT")];
        let mut table = table_builder::<ColorScreen>(rows, 10).build().unwrap();

        table.focus_search();
        table.set_query("bla");

        let labels: Vec<String> = table.suggestions().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Black - BLK"]);

        let text = render_text(&table.view());
        assert!(text.starts_with("Search: bla"));
        assert!(text.contains("[+ Add Color]"));
    }

    #[test]
    fn category_label_falls_back_when_slug_missing() {
        let category = Category {
            id: 1,
            name: "Shirts".to_string(),
            slug: String::new(),
        };
        assert_eq!(
            CategoryScreen::suggestion_label(&category),
            "Shirts – Uncategorised"
        );
    }

    #[test]
    fn collection_home_column() {
        let collection = Collection {
            id: 3,
            name: "Summer".to_string(),
            slug: "summer".to_string(),
            show_on_home: true,
            home_order: Some(2),
        };
        let columns = CollectionScreen::columns();
        assert_eq!(columns[2].render(&collection).plain_text(), "Shown (#2)");
    }
}
