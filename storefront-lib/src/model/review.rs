use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOrder {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub is_approved: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub product: Option<ReviewProduct>,
    #[serde(default)]
    pub order: Option<ReviewOrder>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

impl Review {
    /// `★★★☆☆` for a rating of 3.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Moderation state filter for listing reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStatusFilter {
    Pending,
    Approved,
    #[default]
    All,
}

impl ReviewStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for ReviewStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "all" => Ok(Self::All),
            other => Err(format!("unknown review status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFilters {
    pub status: ReviewStatusFilter,
    /// Exact star rating, 1 to 5.
    pub rating: Option<u8>,
}

impl ReviewFilters {
    /// Query parameters; `all` and a missing rating send nothing.
    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.status != ReviewStatusFilter::All {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        if let Some(rating) = self.rating.filter(|r| *r > 0) {
            pairs.push(("rating", rating.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStatusPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}
