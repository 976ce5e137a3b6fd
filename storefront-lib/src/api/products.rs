use serde::de::IgnoredAny;

use super::segment;
use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::Product;
use crate::model::ProductPayload;

const PATH: &str = "/products";
const FALLBACK_MESSAGE: &str = "Product API error.";

impl StorefrontClient {
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.get(PATH, FALLBACK_MESSAGE).await
    }

    /// Fetch one product by numeric id or slug.
    pub async fn get_product(&self, id_or_slug: &str) -> Result<Product, Error> {
        self.get(&format!("{}/{}", PATH, segment(id_or_slug)), FALLBACK_MESSAGE)
            .await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, Error> {
        self.post(PATH, payload, FALLBACK_MESSAGE).await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, Error> {
        self.put(&format!("{}/{}", PATH, id), payload, FALLBACK_MESSAGE)
            .await
    }

    pub async fn remove_product(&self, id: i64) -> Result<(), Error> {
        let _: IgnoredAny = self
            .delete(&format!("{}/{}", PATH, id), FALLBACK_MESSAGE)
            .await?;
        Ok(())
    }
}
