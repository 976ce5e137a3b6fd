use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::Coupon;
use crate::model::CouponPayload;

const PATH: &str = "/coupons/admin";
const FALLBACK_MESSAGE: &str = "Coupon API error.";

impl StorefrontClient {
    pub async fn list_coupons(&self) -> Result<Vec<Coupon>, Error> {
        self.get(PATH, FALLBACK_MESSAGE).await
    }

    pub async fn create_coupon(&self, payload: &CouponPayload) -> Result<Coupon, Error> {
        self.post(PATH, payload, FALLBACK_MESSAGE).await
    }

    /// Update a coupon (`PATCH`); coupons cannot be deleted, only deactivated.
    pub async fn update_coupon(&self, id: i64, payload: &CouponPayload) -> Result<Coupon, Error> {
        self.patch(&format!("{}/{}", PATH, id), payload, FALLBACK_MESSAGE)
            .await
    }
}
