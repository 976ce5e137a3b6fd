//! Users and delivery partners.
//!
//! Partners are users with the `partner` role; there is no separate partner
//! list endpoint.

use super::segment;
use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::ActiveState;
use crate::model::PartnerCreated;
use crate::model::PartnerPayload;
use crate::model::UserSummary;

const USERS_PATH: &str = "/admin/users";
const USER_FALLBACK: &str = "User API error.";
const PARTNER_FALLBACK: &str = "Partner API error.";

impl StorefrontClient {
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, Error> {
        self.get(USERS_PATH, USER_FALLBACK).await
    }

    pub async fn list_partners(&self) -> Result<Vec<UserSummary>, Error> {
        let users: Vec<UserSummary> = self.get(USERS_PATH, PARTNER_FALLBACK).await?;
        Ok(users.into_iter().filter(UserSummary::is_partner).collect())
    }

    /// Look a partner up by user id. `Ok(None)` if there is no such partner.
    pub async fn get_partner(&self, user_id: &str) -> Result<Option<UserSummary>, Error> {
        Ok(self
            .list_partners()
            .await?
            .into_iter()
            .find(|p| p.id == user_id))
    }

    pub async fn create_partner(&self, payload: &PartnerPayload) -> Result<PartnerCreated, Error> {
        self.post("/auth/register/partner", payload, PARTNER_FALLBACK)
            .await
    }

    /// Flip a user's active flag, returning the new state.
    pub async fn toggle_user_active(&self, user_id: &str) -> Result<ActiveState, Error> {
        let path = format!("{}/{}/toggle-active", USERS_PATH, segment(user_id));
        self.patch_empty(&path, PARTNER_FALLBACK).await
    }
}
