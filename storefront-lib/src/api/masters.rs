//! Master data CRUD: colors, sizes, categories and collections.
//!
//! The four resources share one shape (`GET`/`POST` on the collection path,
//! `PUT`/`DELETE` on `path/{id}`), so they go through a single generic
//! implementation keyed by a [`MasterResource`] marker type.
//!
//! ```ignore
//! let sizes = client.list_masters::<Sizes>().await?;
//! let created = client.create_master::<Colors>(&payload).await?;
//! client.remove_master::<Categories>(7).await?;
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::de::IgnoredAny;

use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::Category;
use crate::model::CategoryPayload;
use crate::model::Collection;
use crate::model::CollectionPayload;
use crate::model::CollectionQuery;
use crate::model::Color;
use crate::model::ColorPayload;
use crate::model::Size;
use crate::model::SizePayload;

/// A master data resource.
pub trait MasterResource {
    /// Collection path, e.g. `/masters/colors`.
    const PATH: &'static str;
    /// Message used when the server rejects a request without saying why.
    const FALLBACK_MESSAGE: &'static str;

    type Record: DeserializeOwned + Send;
    type Payload: Serialize + Sync;

    fn record_id(record: &Self::Record) -> i64;
}

pub struct Colors;
pub struct Sizes;
pub struct Categories;
pub struct Collections;

impl MasterResource for Colors {
    const PATH: &'static str = "/masters/colors";
    const FALLBACK_MESSAGE: &'static str = "Color API error.";
    type Record = Color;
    type Payload = ColorPayload;

    fn record_id(record: &Color) -> i64 {
        record.id
    }
}

impl MasterResource for Sizes {
    const PATH: &'static str = "/masters/sizes";
    const FALLBACK_MESSAGE: &'static str = "Size API error.";
    type Record = Size;
    type Payload = SizePayload;

    fn record_id(record: &Size) -> i64 {
        record.id
    }
}

impl MasterResource for Categories {
    const PATH: &'static str = "/masters/categories";
    const FALLBACK_MESSAGE: &'static str = "Category API error.";
    type Record = Category;
    type Payload = CategoryPayload;

    fn record_id(record: &Category) -> i64 {
        record.id
    }
}

impl MasterResource for Collections {
    const PATH: &'static str = "/masters/collections";
    const FALLBACK_MESSAGE: &'static str = "Collection API error.";
    type Record = Collection;
    type Payload = CollectionPayload;

    fn record_id(record: &Collection) -> i64 {
        record.id
    }
}

impl StorefrontClient {
    /// List every record of a master resource.
    pub async fn list_masters<R: MasterResource>(&self) -> Result<Vec<R::Record>, Error> {
        self.get(R::PATH, R::FALLBACK_MESSAGE).await
    }

    pub async fn create_master<R: MasterResource>(
        &self,
        payload: &R::Payload,
    ) -> Result<R::Record, Error> {
        self.post(R::PATH, payload, R::FALLBACK_MESSAGE).await
    }

    /// Replace a record (`PUT`).
    pub async fn update_master<R: MasterResource>(
        &self,
        id: i64,
        payload: &R::Payload,
    ) -> Result<R::Record, Error> {
        let path = format!("{}/{}", R::PATH, id);
        self.put(&path, payload, R::FALLBACK_MESSAGE).await
    }

    pub async fn remove_master<R: MasterResource>(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{}", R::PATH, id);
        let _: IgnoredAny = self.delete(&path, R::FALLBACK_MESSAGE).await?;
        Ok(())
    }

    /// List collections, optionally only those shown on the home page.
    pub async fn list_collections(&self, query: CollectionQuery) -> Result<Vec<Collection>, Error> {
        self.get_with(
            Collections::PATH,
            &query.to_pairs(),
            Collections::FALLBACK_MESSAGE,
        )
        .await
    }
}
