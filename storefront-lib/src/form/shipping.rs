use rust_decimal::Decimal;

use super::Form;
use super::parse;
use crate::error::ValidationErrors;
use crate::model::ShippingPayload;
use crate::model::ShippingSetting;

/// Shipping settings editor. Blank amounts count as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingForm {
    pub free_shipping_threshold: String,
    pub shipping_fee: String,
    pub is_active: bool,
}

impl Default for ShippingForm {
    fn default() -> Self {
        Self {
            free_shipping_threshold: String::new(),
            shipping_fee: String::new(),
            is_active: true,
        }
    }
}

impl From<&ShippingSetting> for ShippingForm {
    fn from(setting: &ShippingSetting) -> Self {
        Self {
            free_shipping_threshold: setting.free_shipping_threshold.to_string(),
            shipping_fee: setting.shipping_fee.to_string(),
            is_active: setting.is_active,
        }
    }
}

impl Form for ShippingForm {
    type Payload = ShippingPayload;

    fn validate(&self) -> Result<ShippingPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let free_shipping_threshold = non_negative(
            &self.free_shipping_threshold,
            "freeShippingThreshold",
            "Free shipping threshold must be zero or more.",
            &mut errors,
        );
        let shipping_fee = non_negative(
            &self.shipping_fee,
            "shippingFee",
            "Shipping fee must be zero or more.",
            &mut errors,
        );

        errors.into_result(|| ShippingPayload {
            free_shipping_threshold,
            shipping_fee,
            is_active: self.is_active,
        })
    }
}

fn non_negative(raw: &str, field: &str, message: &str, errors: &mut ValidationErrors) -> Decimal {
    match parse::decimal(raw) {
        Ok(None) => Decimal::ZERO,
        Ok(Some(value)) if value >= Decimal::ZERO => value,
        _ => {
            errors.add(field, message);
            Decimal::ZERO
        }
    }
}
