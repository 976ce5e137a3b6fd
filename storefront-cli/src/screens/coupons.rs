use storefront_lib::model::Coupon;
use storefront_lib::model::DiscountType;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::Screen;
use super::date_time;
use super::rupees;

pub struct CouponScreen;

fn discount(coupon: &Coupon) -> String {
    match coupon.discount_type {
        DiscountType::Percent => format!("{}%", coupon.discount_value.normalize()),
        DiscountType::Fixed => rupees(coupon.discount_value),
    }
}

fn validity(coupon: &Coupon) -> Cell {
    let starts = coupon
        .start_at
        .map(date_time)
        .unwrap_or_else(|| "Active now".to_string());
    let ends = coupon
        .end_at
        .map(date_time)
        .unwrap_or_else(|| "No end date".to_string());
    Cell::stack([
        Cell::muted(format!("Starts: {}", starts)),
        Cell::muted(format!("Ends: {}", ends)),
    ])
}

fn limits(coupon: &Coupon) -> Cell {
    let global = match coupon.global_max_redemptions {
        Some(max) => max.to_string(),
        None => "Unlimited".to_string(),
    };
    let used = coupon
        .redemptions_count
        .map(|count| format!(" (used {})", count))
        .unwrap_or_default();
    Cell::stack([
        Cell::text(format!("Per user: {}", coupon.per_user_limit.unwrap_or(1))),
        Cell::text(format!("Global: {}{}", global, used)),
    ])
}

impl Screen for CouponScreen {
    type Row = Coupon;
    const NAME: &'static str = "coupons";
    const ADD_ACTION: Option<&'static str> = Some("Add Coupon");

    fn columns() -> Vec<ColumnDef<Coupon>> {
        vec![
            ColumnDef::new("code", "Code", |c: &Coupon| Cell::strong(&c.code)).searchable(),
            ColumnDef::new("type", "Type", |c: &Coupon| Cell::text(c.coupon_type.as_str()))
                .searchable(),
            ColumnDef::new("discount", "Discount", |c: &Coupon| Cell::text(discount(c))),
            ColumnDef::new("validity", "Validity", validity),
            ColumnDef::new("limits", "Limits", limits),
            ColumnDef::new("status", "Status", |c: &Coupon| {
                if c.is_active {
                    Cell::styled("Active", Tone::Success)
                } else {
                    Cell::muted("Inactive")
                }
            }),
        ]
    }

    fn suggestion_label(coupon: &Coupon) -> String {
        format!("{} - {}", coupon.code, coupon.coupon_type)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use storefront_lib::model::CouponType;

    use super::*;

    fn coupon(discount_type: DiscountType, value: &str) -> Coupon {
        Coupon {
            id: 1,
            code: "SUMMER10".to_string(),
            coupon_type: CouponType::Seasonal,
            discount_type,
            discount_value: Decimal::from_str(value).unwrap(),
            start_at: None,
            end_at: None,
            global_max_redemptions: None,
            per_user_limit: None,
            min_order_amount: None,
            max_discount_amount: None,
            combo_required_quantity: None,
            combo_allowed_quantity: None,
            is_active: true,
            created_at: None,
            updated_at: None,
            redemptions_count: Some(4),
        }
    }

    #[test]
    fn discount_text() {
        assert_eq!(discount(&coupon(DiscountType::Percent, "10.00")), "10%");
        assert_eq!(discount(&coupon(DiscountType::Fixed, "1500")), "₹1,500");
    }

    #[test]
    fn limits_and_validity_defaults() {
        let c = coupon(DiscountType::Percent, "10");
        assert_eq!(
            limits(&c).lines(),
            vec!["Per user: 1", "Global: Unlimited (used 4)"]
        );
        assert_eq!(
            validity(&c).lines(),
            vec!["Starts: Active now", "Ends: No end date"]
        );
        assert_eq!(CouponScreen::suggestion_label(&c), "SUMMER10 - SEASONAL");
    }
}
