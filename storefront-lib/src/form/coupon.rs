use rust_decimal::Decimal;

use super::Form;
use super::parse;
use crate::error::ValidationErrors;
use crate::model::Coupon;
use crate::model::CouponPayload;
use crate::model::CouponType;
use crate::model::DiscountType;

/// Coupon editor state.
///
/// Dates accept RFC 3339 or `YYYY-MM-DD`; numbers are typed as text and may
/// be left blank where optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponForm {
    pub code: String,
    pub coupon_type: CouponType,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub start_at: String,
    pub end_at: String,
    pub global_max_redemptions: String,
    /// Blank means one use per customer.
    pub per_user_limit: String,
    pub min_order_amount: String,
    pub max_discount_amount: String,
    pub combo_required_quantity: String,
    pub combo_allowed_quantity: String,
    pub is_active: bool,
}

impl Default for CouponForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            coupon_type: CouponType::Normal,
            discount_type: DiscountType::Percent,
            discount_value: String::new(),
            start_at: String::new(),
            end_at: String::new(),
            global_max_redemptions: String::new(),
            per_user_limit: "1".to_string(),
            min_order_amount: String::new(),
            max_discount_amount: String::new(),
            combo_required_quantity: String::new(),
            combo_allowed_quantity: String::new(),
            is_active: true,
        }
    }
}

impl From<&Coupon> for CouponForm {
    fn from(coupon: &Coupon) -> Self {
        fn text<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        Self {
            code: coupon.code.clone(),
            coupon_type: coupon.coupon_type,
            discount_type: coupon.discount_type,
            discount_value: coupon.discount_value.to_string(),
            start_at: text(coupon.start_at.map(|d| d.to_rfc3339())),
            end_at: text(coupon.end_at.map(|d| d.to_rfc3339())),
            global_max_redemptions: text(coupon.global_max_redemptions),
            per_user_limit: text(coupon.per_user_limit.or(Some(1))),
            min_order_amount: text(coupon.min_order_amount),
            max_discount_amount: text(coupon.max_discount_amount),
            combo_required_quantity: text(coupon.combo_required_quantity),
            combo_allowed_quantity: text(coupon.combo_allowed_quantity),
            is_active: coupon.is_active,
        }
    }
}

impl Form for CouponForm {
    type Payload = CouponPayload;

    fn validate(&self) -> Result<CouponPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            errors.add("code", "Coupon code is required.");
        }

        let discount_value = match parse::decimal(&self.discount_value) {
            Ok(Some(value)) if value > Decimal::ZERO => value,
            _ => {
                errors.add("discountValue", "Discount value must be greater than zero.");
                Decimal::ZERO
            }
        };
        if self.discount_type == DiscountType::Percent && discount_value > Decimal::ONE_HUNDRED {
            errors.add("discountValue", "Percent discount cannot exceed 100.");
        }

        let start_at = parse::timestamp(&self.start_at).unwrap_or_else(|()| {
            errors.add("startAt", "Start date is not a valid date.");
            None
        });
        let end_at = parse::timestamp(&self.end_at).unwrap_or_else(|()| {
            errors.add("endAt", "End date is not a valid date.");
            None
        });
        if let (Some(start), Some(end)) = (start_at, end_at)
            && start > end
        {
            errors.add("date", "Start date must be before end date.");
        }

        // Blank means one use per customer.
        let per_user_limit = positive(
            &self.per_user_limit,
            "perUserLimit",
            "Per user limit must be at least 1.",
            &mut errors,
        )
        .unwrap_or(1);
        let global_max_redemptions = positive(
            &self.global_max_redemptions,
            "globalMaxRedemptions",
            "Global redemption limit must be 1 or more.",
            &mut errors,
        );

        let min_order_amount = amount(&self.min_order_amount, "minOrderAmount", &mut errors);
        let max_discount_amount =
            amount(&self.max_discount_amount, "maxDiscountAmount", &mut errors);

        let (combo_required_quantity, combo_allowed_quantity) =
            if self.coupon_type == CouponType::Combo {
                (
                    positive(
                        &self.combo_required_quantity,
                        "comboRequiredQuantity",
                        QUANTITY_MESSAGE,
                        &mut errors,
                    ),
                    positive(
                        &self.combo_allowed_quantity,
                        "comboAllowedQuantity",
                        QUANTITY_MESSAGE,
                        &mut errors,
                    ),
                )
            } else {
                (None, None)
            };

        errors.into_result(|| CouponPayload {
            code,
            coupon_type: self.coupon_type,
            discount_type: self.discount_type,
            discount_value,
            start_at,
            end_at,
            global_max_redemptions,
            per_user_limit,
            min_order_amount,
            max_discount_amount,
            combo_required_quantity,
            combo_allowed_quantity,
            is_active: self.is_active,
        })
    }
}

/// Optional non-negative amount.
fn amount(raw: &str, field: &str, errors: &mut ValidationErrors) -> Option<Decimal> {
    match parse::decimal(raw) {
        Ok(Some(value)) if value >= Decimal::ZERO => Some(value),
        Ok(None) => None,
        _ => {
            errors.add(field, "Amount must be a number, zero or more.");
            None
        }
    }
}

const QUANTITY_MESSAGE: &str = "Quantity must be 1 or more.";

/// Optional whole number, at least 1 and within `u32`.
fn positive(raw: &str, field: &str, message: &str, errors: &mut ValidationErrors) -> Option<u32> {
    match parse::integer(raw) {
        Ok(None) => None,
        Ok(Some(count)) if count >= 1 => match u32::try_from(count) {
            Ok(count) => Some(count),
            Err(_) => {
                errors.add(field, "Number is too large.");
                None
            }
        },
        _ => {
            errors.add(field, message);
            None
        }
    }
}
