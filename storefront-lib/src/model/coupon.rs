use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponType {
    #[default]
    Normal,
    Combo,
    Welcome,
    Seasonal,
    Other,
}

impl CouponType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Combo => "COMBO",
            Self::Welcome => "WELCOME",
            Self::Seasonal => "SEASONAL",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for CouponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CouponType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(Self::Normal),
            "COMBO" => Ok(Self::Combo),
            "WELCOME" => Ok(Self::Welcome),
            "SEASONAL" => Ok(Self::Seasonal),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown coupon type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    #[default]
    Percent,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "PERCENT",
            Self::Fixed => "FIXED",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PERCENT" => Ok(Self::Percent),
            "FIXED" => Ok(Self::Fixed),
            other => Err(format!("unknown discount type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    #[serde(rename = "type")]
    pub coupon_type: CouponType,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub global_max_redemptions: Option<u32>,
    #[serde(default)]
    pub per_user_limit: Option<u32>,
    #[serde(default)]
    pub min_order_amount: Option<Decimal>,
    #[serde(default)]
    pub max_discount_amount: Option<Decimal>,
    #[serde(default)]
    pub combo_required_quantity: Option<u32>,
    #[serde(default)]
    pub combo_allowed_quantity: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub redemptions_count: Option<u32>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    pub code: String,
    #[serde(rename = "type")]
    pub coupon_type: CouponType,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub global_max_redemptions: Option<u32>,
    pub per_user_limit: u32,
    pub min_order_amount: Option<Decimal>,
    pub max_discount_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_required_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_allowed_quantity: Option<u32>,
    pub is_active: bool,
}
