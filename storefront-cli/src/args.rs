use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use storefront_lib::model::CouponType;
use storefront_lib::model::DiscountType;
use storefront_lib::model::ReviewStatusFilter;

/// Storefront admin console
#[derive(Parser, Debug)]
#[command(name = "storefront-admin")]
#[command(version, about = "Browse and manage the storefront from the terminal", long_about = None)]
pub struct Cli {
    /// API base URL including the /api prefix (e.g. http://localhost:4000/api)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Bearer token for the admin API
    #[arg(long = "token", global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Log level written to the log file (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Product colors
    Colors {
        #[command(subcommand)]
        action: Option<ColorAction>,
    },
    /// Product sizes
    Sizes {
        #[command(subcommand)]
        action: Option<SizeAction>,
    },
    /// Product categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },
    /// Product collections
    Collections(CollectionArgs),
    /// Discount coupons
    Coupons {
        #[command(subcommand)]
        action: Option<CouponAction>,
    },
    /// Catalogue products
    Products {
        #[command(subcommand)]
        action: Option<ProductAction>,
    },
    /// Customer orders
    Orders {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
    /// Product reviews
    Reviews(ReviewArgs),
    /// All registered users
    Users(ScreenArgs),
    /// Delivery partners
    Partners(PartnerArgs),
    /// Store metrics
    Dashboard {
        /// Show the partner dashboard instead of the admin one
        #[arg(long)]
        partner: bool,
    },
    /// Shipping fee settings
    Shipping {
        #[command(subcommand)]
        action: Option<ShippingAction>,
    },
}

#[derive(Args, Debug)]
pub struct ScreenArgs {
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Args, Debug)]
pub struct CollectionArgs {
    /// Only collections featured on the home page
    #[arg(long)]
    pub home: bool,

    /// Maximum number of collections to fetch
    #[arg(long)]
    pub limit: Option<u32>,

    #[command(subcommand)]
    pub action: Option<CollectionAction>,
}

#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Moderation state: pending, approved or all
    #[arg(long, default_value = "all")]
    pub status: ReviewStatusFilter,

    /// Only reviews with this many stars
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    #[command(subcommand)]
    pub action: Option<ReviewAction>,
}

#[derive(Args, Debug)]
pub struct PartnerArgs {
    #[command(subcommand)]
    pub action: Option<PartnerAction>,
}

/// What to do with a screen's table. Defaults to `list`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print one page of the table
    List(ListArgs),
    /// Print the search suggestions for a query
    Suggest { query: String },
    /// Print the first suggested record for a query
    Show { query: String },
    /// Delete a record by id
    Delete { id: String },
}

impl Default for Action {
    fn default() -> Self {
        Self::List(ListArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Filter rows by this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

// =============================================================================
// Editors
// =============================================================================
//
// `create` starts from an empty form, `update <id>` from the stored record.
// Fields left off the command line keep their value.

#[derive(Subcommand, Debug)]
pub enum ColorAction {
    #[command(flatten)]
    Table(Action),
    /// Add a color
    Create(ColorFields),
    /// Change a color
    Update {
        id: String,
        #[command(flatten)]
        fields: ColorFields,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    /// `#RGB` or `#RRGGBB`
    #[arg(long)]
    pub hex: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SizeAction {
    #[command(flatten)]
    Table(Action),
    /// Add a size
    Create(SizeFields),
    /// Change a size
    Update {
        id: String,
        #[command(flatten)]
        fields: SizeFields,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeFields {
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub label: Option<String>,
    /// Position in size pickers (blank to clear)
    #[arg(long)]
    pub sort_order: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    #[command(flatten)]
    Table(Action),
    /// Add a category
    Create(CategoryFields),
    /// Change a category
    Update {
        id: String,
        #[command(flatten)]
        fields: CategoryFields,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Derived from the name when blank
    #[arg(long)]
    pub slug: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CollectionAction {
    #[command(flatten)]
    Table(Action),
    /// Add a collection
    Create(CollectionFields),
    /// Change a collection
    Update {
        id: String,
        #[command(flatten)]
        fields: CollectionFields,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Derived from the name when blank
    #[arg(long)]
    pub slug: Option<String>,
    /// Feature the collection on the home page
    #[arg(long, value_name = "BOOL")]
    pub show_on_home: Option<bool>,
    /// Position among home page collections
    #[arg(long)]
    pub home_order: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CouponAction {
    #[command(flatten)]
    Table(Action),
    /// Add a coupon
    Create(CouponFields),
    /// Change a coupon
    Update {
        id: String,
        #[command(flatten)]
        fields: CouponFields,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponFields {
    #[arg(long)]
    pub code: Option<String>,
    /// normal, combo, welcome, seasonal or other
    #[arg(long = "type", value_name = "TYPE")]
    pub coupon_type: Option<CouponType>,
    /// percent or fixed
    #[arg(long)]
    pub discount_type: Option<DiscountType>,
    /// Percentage or rupee amount, depending on the discount type
    #[arg(long = "value")]
    pub discount_value: Option<String>,
    /// RFC 3339 or YYYY-MM-DD (blank to clear)
    #[arg(long = "starts")]
    pub start_at: Option<String>,
    /// RFC 3339 or YYYY-MM-DD (blank to clear)
    #[arg(long = "ends")]
    pub end_at: Option<String>,
    /// Redemptions allowed across all customers
    #[arg(long = "max-uses")]
    pub global_max_redemptions: Option<String>,
    #[arg(long)]
    pub per_user_limit: Option<String>,
    #[arg(long = "min-order")]
    pub min_order_amount: Option<String>,
    #[arg(long = "max-discount")]
    pub max_discount_amount: Option<String>,
    /// Items the customer must buy (combo coupons)
    #[arg(long = "combo-required")]
    pub combo_required_quantity: Option<String>,
    /// Items discounted per combo (combo coupons)
    #[arg(long = "combo-allowed")]
    pub combo_allowed_quantity: Option<String>,
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ReviewAction {
    #[command(flatten)]
    Table(Action),
    /// Publish a review
    Approve { id: String },
    /// Take a review down
    Hide { id: String },
    /// Feature a review on its product page
    Feature { id: String },
    /// Stop featuring a review
    Unfeature { id: String },
}

#[derive(Subcommand, Debug)]
pub enum OrderAction {
    #[command(flatten)]
    Table(Action),
    /// Print an order with its items
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ProductAction {
    #[command(flatten)]
    Table(Action),
    /// Print a product fetched by id or slug
    Get { id_or_slug: String },
    /// Create a product from a JSON payload file
    Create { file: PathBuf },
    /// Replace a product from a JSON payload file
    Update { id: String, file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum PartnerAction {
    #[command(flatten)]
    Table(Action),
    /// Register a new delivery partner
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Full name
        #[arg(long)]
        name: Option<String>,
    },
    /// Activate or deactivate a partner
    Toggle { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ShippingAction {
    /// Print the active shipping setting
    Show,
    /// Replace the shipping setting
    Set {
        /// Orders at or above this subtotal ship free (blank for zero)
        #[arg(long, default_value = "")]
        threshold: String,
        /// Flat fee charged below the threshold (blank for zero)
        #[arg(long, default_value = "")]
        fee: String,
        /// Save the setting as inactive
        #[arg(long)]
        inactive: bool,
    },
}
