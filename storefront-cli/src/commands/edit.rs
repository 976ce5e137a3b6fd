//! Create and update commands.
//!
//! The command line fields are applied on top of a form, the form is
//! validated, and only then is the record sent.

use log::info;
use storefront_lib::StorefrontClient;
use storefront_lib::api::MasterResource;
use storefront_lib::form::CategoryForm;
use storefront_lib::form::CollectionForm;
use storefront_lib::form::ColorForm;
use storefront_lib::form::CouponForm;
use storefront_lib::form::Form;
use storefront_lib::form::SizeForm;
use storefront_lib::model::ReviewStatusPayload;

use super::table;
use crate::args::CategoryFields;
use crate::args::CollectionFields;
use crate::args::ColorFields;
use crate::args::CouponFields;
use crate::args::SizeFields;
use crate::error::CliError;
use crate::error::parse_id;
use crate::screens::CouponScreen;
use crate::screens::ReviewScreen;
use crate::screens::Screen;

/// Command line values for one form.
pub trait FormEdits {
    type Form: Form + Default;

    /// Overwrite the fields that were given.
    fn apply(&self, form: &mut Self::Form);
}

fn set(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl FormEdits for ColorFields {
    type Form = ColorForm;

    fn apply(&self, form: &mut ColorForm) {
        set(&mut form.name, &self.name);
        set(&mut form.code, &self.code);
        set(&mut form.hex_code, &self.hex);
    }
}

impl FormEdits for SizeFields {
    type Form = SizeForm;

    fn apply(&self, form: &mut SizeForm) {
        set(&mut form.code, &self.code);
        set(&mut form.label, &self.label);
        set(&mut form.sort_order, &self.sort_order);
    }
}

impl FormEdits for CategoryFields {
    type Form = CategoryForm;

    fn apply(&self, form: &mut CategoryForm) {
        set(&mut form.name, &self.name);
        set(&mut form.slug, &self.slug);
    }
}

impl FormEdits for CollectionFields {
    type Form = CollectionForm;

    fn apply(&self, form: &mut CollectionForm) {
        set(&mut form.name, &self.name);
        set(&mut form.slug, &self.slug);
        set(&mut form.home_order, &self.home_order);
        if let Some(show) = self.show_on_home {
            form.show_on_home = show;
        }
    }
}

impl FormEdits for CouponFields {
    type Form = CouponForm;

    fn apply(&self, form: &mut CouponForm) {
        set(&mut form.code, &self.code);
        set(&mut form.discount_value, &self.discount_value);
        set(&mut form.start_at, &self.start_at);
        set(&mut form.end_at, &self.end_at);
        set(&mut form.global_max_redemptions, &self.global_max_redemptions);
        set(&mut form.per_user_limit, &self.per_user_limit);
        set(&mut form.min_order_amount, &self.min_order_amount);
        set(&mut form.max_discount_amount, &self.max_discount_amount);
        set(&mut form.combo_required_quantity, &self.combo_required_quantity);
        set(&mut form.combo_allowed_quantity, &self.combo_allowed_quantity);
        if let Some(coupon_type) = self.coupon_type {
            form.coupon_type = coupon_type;
        }
        if let Some(discount_type) = self.discount_type {
            form.discount_type = discount_type;
        }
        if let Some(active) = self.active {
            form.is_active = active;
        }
    }
}

/// Build the form for `id` (or a blank one) with `edits` applied.
pub fn prepare<E, T>(
    edits: &E,
    records: Vec<T>,
    id: Option<i64>,
    record_id: impl Fn(&T) -> i64,
) -> Result<E::Form, CliError>
where
    E: FormEdits,
    E::Form: for<'a> From<&'a T>,
{
    let mut form = match id {
        None => E::Form::default(),
        Some(id) => {
            let record = records
                .iter()
                .find(|r| record_id(r) == id)
                .ok_or_else(|| CliError::NotFound {
                    query: id.to_string(),
                })?;
            E::Form::from(record)
        }
    };
    edits.apply(&mut form);
    Ok(form)
}

/// "Saved ..." followed by the saved record.
pub fn saved<S: Screen>(row: &S::Row) -> String {
    format!(
        "Saved {}.\n{}",
        S::suggestion_label(row),
        table::detail(&S::columns(), row)
    )
}

/// Create a master record, or update record `id`.
pub async fn master<S, R, E>(
    client: &StorefrontClient,
    id: Option<&str>,
    edits: &E,
) -> Result<String, CliError>
where
    R: MasterResource,
    S: Screen<Row = R::Record>,
    E: FormEdits,
    E::Form: Form<Payload = R::Payload> + for<'a> From<&'a R::Record>,
{
    let id = id.map(parse_id).transpose()?;
    let records = match id {
        Some(_) => client.list_masters::<R>().await?,
        None => Vec::new(),
    };
    let payload = prepare(edits, records, id, R::record_id)?.validate()?;

    let record = match id {
        Some(id) => client.update_master::<R>(id, &payload).await?,
        None => client.create_master::<R>(&payload).await?,
    };
    info!("Saved {} record {}", S::NAME, R::record_id(&record));
    Ok(saved::<S>(&record))
}

pub async fn coupon(
    client: &StorefrontClient,
    id: Option<&str>,
    edits: &CouponFields,
) -> Result<String, CliError> {
    let id = id.map(parse_id).transpose()?;
    let records = match id {
        Some(_) => client.list_coupons().await?,
        None => Vec::new(),
    };
    let payload = prepare(edits, records, id, |c| c.id)?.validate()?;

    let coupon = match id {
        Some(id) => client.update_coupon(id, &payload).await?,
        None => client.create_coupon(&payload).await?,
    };
    info!("Saved coupon {}", coupon.code);
    Ok(saved::<CouponScreen>(&coupon))
}

/// Publish or hide a review, leaving its featured flag alone.
pub fn approval(approved: bool) -> ReviewStatusPayload {
    ReviewStatusPayload {
        is_approved: Some(approved),
        is_featured: None,
    }
}

pub fn featuring(featured: bool) -> ReviewStatusPayload {
    ReviewStatusPayload {
        is_approved: None,
        is_featured: Some(featured),
    }
}

pub async fn review_status(
    client: &StorefrontClient,
    id: &str,
    payload: ReviewStatusPayload,
) -> Result<String, CliError> {
    let review = client.update_review_status(parse_id(id)?, payload).await?;
    Ok(saved::<ReviewScreen>(&review))
}

#[cfg(test)]
mod tests {
    use storefront_lib::model::Color;
    use storefront_lib::model::Coupon;
    use storefront_lib::model::CouponType;
    use storefront_lib::model::DiscountType;

    use super::*;
    use crate::screens::ColorScreen;

    fn colors() -> Vec<Color> {
        vec![
            Color {
                id: 1,
                name: "Red".to_string(),
                code: "RED".to_string(),
                hex_code: "#ff0000".to_string(),
            },
            Color {
                id: 2,
                name: "Green".to_string(),
                code: "GRN".to_string(),
                hex_code: "#00ff00".to_string(),
            },
        ]
    }

    #[test]
    fn update_keeps_fields_not_given() {
        let edits = ColorFields {
            name: Some("Forest".to_string()),
            ..ColorFields::default()
        };
        let form = prepare(&edits, colors(), Some(2), |c| c.id).unwrap();
        assert_eq!(
            form,
            ColorForm {
                name: "Forest".to_string(),
                code: "GRN".to_string(),
                hex_code: "#00ff00".to_string(),
            }
        );
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let err = prepare(&ColorFields::default(), colors(), Some(9), |c| c.id).unwrap_err();
        assert!(matches!(err, CliError::NotFound { query } if query == "9"));
    }

    #[test]
    fn create_starts_blank_and_still_validates() {
        let edits = ColorFields {
            name: Some("Teal".to_string()),
            ..ColorFields::default()
        };
        let form = prepare(&edits, Vec::<Color>::new(), None, |c| c.id).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.get("code").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn coupon_edits_override_types_and_flags() {
        let coupon: Coupon = serde_json::from_value(serde_json::json!({
            "id": 3,
            "code": "SAVE10",
            "type": "NORMAL",
            "discountType": "PERCENT",
            "discountValue": 10,
            "isActive": true
        }))
        .unwrap();
        let edits = CouponFields {
            coupon_type: Some(CouponType::Seasonal),
            discount_type: Some(DiscountType::Fixed),
            discount_value: Some("200".to_string()),
            active: Some(false),
            ..CouponFields::default()
        };

        let form = prepare(&edits, vec![coupon], Some(3), |c| c.id).unwrap();
        assert_eq!(form.code, "SAVE10");
        assert_eq!(form.coupon_type, CouponType::Seasonal);
        assert_eq!(form.discount_type, DiscountType::Fixed);
        assert_eq!(form.discount_value, "200");
        assert!(!form.is_active);
    }

    #[test]
    fn moderation_sends_one_flag() {
        let approve = approval(true);
        assert_eq!(approve.is_approved, Some(true));
        assert_eq!(approve.is_featured, None);

        let unfeature = featuring(false);
        assert_eq!(unfeature.is_approved, None);
        assert_eq!(unfeature.is_featured, Some(false));
    }

    #[test]
    fn saved_prints_the_record() {
        let text = saved::<ColorScreen>(&colors()[0]);
        assert!(text.starts_with("Saved "));
        assert!(text.contains("RED"));
    }
}
