use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardUsers {
    pub total: u64,
    pub customers: u64,
    pub partners: u64,
    pub super_admins: u64,
    pub active: u64,
    pub inactive: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardProducts {
    pub total_products: u64,
    pub active_products: u64,
    pub total_variants: u64,
    pub out_of_stock_variants: u64,
    pub low_stock_variants: u64,
    pub stock_on_hand: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOrders {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub cancelled: u64,
    pub return_requested: u64,
    pub assigned: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardRevenue {
    pub paid: Decimal,
    pub pending: Decimal,
    pub expected: Decimal,
    pub cancelled: Decimal,
    pub assigned_value: Option<Decimal>,
    pub completed_value: Option<Decimal>,
    pub in_progress_value: Option<Decimal>,
    pub outstanding_cod: Option<Decimal>,
}

/// Metrics for the super-admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardAdmin {
    pub users: DashboardUsers,
    pub products: DashboardProducts,
    pub orders: DashboardOrders,
    pub revenue: DashboardRevenue,
}

/// Metrics for a delivery partner's own orders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardPartner {
    pub orders: DashboardOrders,
    pub revenue: DashboardRevenue,
}
