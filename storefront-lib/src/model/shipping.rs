use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// The active shipping rule: orders at or above the threshold ship free,
/// others pay the flat fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSetting {
    #[serde(default)]
    pub id: Option<i64>,
    pub free_shipping_threshold: Decimal,
    pub shipping_fee: Decimal,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShippingSetting {
    /// Fee charged on an order with the given subtotal.
    pub fn fee_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal >= self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.shipping_fee
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPayload {
    pub free_shipping_threshold: Decimal,
    pub shipping_fee: Decimal,
    pub is_active: bool,
}
