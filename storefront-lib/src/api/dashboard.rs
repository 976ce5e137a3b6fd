use crate::client::StorefrontClient;
use crate::error::Error;
use crate::model::DashboardAdmin;
use crate::model::DashboardPartner;

const FALLBACK_MESSAGE: &str = "Dashboard API error.";

impl StorefrontClient {
    pub async fn admin_dashboard(&self) -> Result<DashboardAdmin, Error> {
        self.get("/dashboard/admin", FALLBACK_MESSAGE).await
    }

    pub async fn partner_dashboard(&self) -> Result<DashboardPartner, Error> {
        self.get("/dashboard/partner", FALLBACK_MESSAGE).await
    }
}
