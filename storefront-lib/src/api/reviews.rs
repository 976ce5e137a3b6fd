use serde::de::IgnoredAny;

use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::Review;
use crate::model::ReviewFilters;
use crate::model::ReviewStatusPayload;

const FALLBACK_MESSAGE: &str = "Review API error.";

impl StorefrontClient {
    pub async fn list_reviews(&self, filters: ReviewFilters) -> Result<Vec<Review>, Error> {
        self.get_with("/reviews/admin/list", &filters.to_pairs(), FALLBACK_MESSAGE)
            .await
    }

    /// Approve, hide, feature or unfeature a review.
    pub async fn update_review_status(
        &self,
        id: i64,
        payload: ReviewStatusPayload,
    ) -> Result<Review, Error> {
        self.patch(&format!("/reviews/admin/{}", id), &payload, FALLBACK_MESSAGE)
            .await
    }

    pub async fn remove_review(&self, id: i64) -> Result<(), Error> {
        let _: IgnoredAny = self
            .delete(&format!("/reviews/admin/{}", id), FALLBACK_MESSAGE)
            .await?;
        Ok(())
    }
}
