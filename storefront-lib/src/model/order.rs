use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// Fulfilment status of an order.
///
/// Statuses this client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Packed,
    OutForDelivery,
    Delivered,
    Cancelled,
    ReturnRequested,
    Returned,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Placed => "PLACED",
            Self::Confirmed => "CONFIRMED",
            Self::Packed => "PACKED",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::ReturnRequested => "RETURN_REQUESTED",
            Self::Returned => "RETURNED",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable form, e.g. `OUT FOR DELIVERY`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Returns `true` once the order can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Returned)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PLACED" => Self::Placed,
            "CONFIRMED" => Self::Confirmed,
            "PACKED" => Self::Packed,
            "OUT_FOR_DELIVERY" => Self::OutForDelivery,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            "RETURN_REQUESTED" => Self::ReturnRequested,
            "RETURNED" => Self::Returned,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedPartner {
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(default)]
    pub size_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub address_phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub shipping_fee: Option<Decimal>,
    #[serde(default)]
    pub discount_amount: Option<Decimal>,
    pub total: Decimal,
    #[serde(default)]
    pub assigned_partner_id: Option<String>,
    #[serde(default)]
    pub assigned_partner: Option<AssignedPartner>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}
