use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
        }
    }
}

/// A category or collection as embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantColor {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub hex_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSize {
    pub id: i64,
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub color_id: i64,
    pub size_id: i64,
    pub sku: String,
    pub stock_quantity: i64,
    pub base_price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default, skip_serializing)]
    pub color: Option<VariantColor>,
    #[serde(default, skip_serializing)]
    pub size: Option<VariantSize>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gender: Gender,
    pub category_id: i64,
    #[serde(default)]
    pub collection_id: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub category: Option<ProductRef>,
    #[serde(default)]
    pub collection: Option<ProductRef>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Units in stock across all variants.
    pub fn total_stock(&self) -> i64 {
        self.variants.iter().map(|v| v.stock_quantity.max(0)).sum()
    }

    /// Lowest effective price across variants, sale price first.
    pub fn lowest_price(&self) -> Option<Decimal> {
        self.variants
            .iter()
            .map(|v| v.sale_price.unwrap_or(v.base_price))
            .min()
    }

    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|i| i.is_primary)
            .or_else(|| self.images.first())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub gender: Gender,
    pub category_id: i64,
    pub collection_id: Option<i64>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}
