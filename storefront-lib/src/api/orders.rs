use super::segment;
use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::Order;

const FALLBACK_MESSAGE: &str = "Order API error.";

impl StorefrontClient {
    pub async fn list_orders(&self) -> Result<Vec<Order>, Error> {
        self.get("/orders/admin/list", FALLBACK_MESSAGE).await
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, Error> {
        self.get(&format!("/orders/admin/{}", segment(id)), FALLBACK_MESSAGE)
            .await
    }
}
