use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::ShippingPayload;
use crate::model::ShippingSetting;

const PATH: &str = "/orders/admin/shipping-settings";
const FALLBACK_MESSAGE: &str = "Shipping API error.";

impl StorefrontClient {
    /// The active shipping setting; `None` until one has been saved.
    pub async fn shipping_setting(&self) -> Result<Option<ShippingSetting>, Error> {
        self.get(PATH, FALLBACK_MESSAGE).await
    }

    /// Save a new shipping setting, which becomes the active one.
    pub async fn save_shipping_setting(
        &self,
        payload: &ShippingPayload,
    ) -> Result<ShippingSetting, Error> {
        self.post(PATH, payload, FALLBACK_MESSAGE).await
    }
}
