//! Command dispatch.
//!
//! Each command fetches what it needs, hands list data to the screen's table
//! and returns the text to print.

mod edit;
mod summary;
mod table;

use std::path::Path;

use log::info;
use storefront_lib::StorefrontClient;
use storefront_lib::api::Categories;
use storefront_lib::api::Collections;
use storefront_lib::api::Colors;
use storefront_lib::api::MasterResource;
use storefront_lib::api::Sizes;
use storefront_lib::auth::AnonymousTokenProvider;
use storefront_lib::auth::StaticTokenProvider;
use storefront_lib::form::Form;
use storefront_lib::form::PartnerForm;
use storefront_lib::form::ShippingForm;
use storefront_lib::model::CollectionQuery;
use storefront_lib::model::ProductPayload;
use storefront_lib::model::ReviewFilters;

use crate::args::Action;
use crate::args::CategoryAction;
use crate::args::CollectionAction;
use crate::args::CollectionArgs;
use crate::args::ColorAction;
use crate::args::Command;
use crate::args::CouponAction;
use crate::args::OrderAction;
use crate::args::PartnerAction;
use crate::args::ProductAction;
use crate::args::ReviewAction;
use crate::args::ReviewArgs;
use crate::args::SizeAction;
use crate::args::ShippingAction;
use crate::error::CliError;
use crate::error::parse_id;
use crate::screens::CategoryScreen;
use crate::screens::CollectionScreen;
use crate::screens::ColorScreen;
use crate::screens::CouponScreen;
use crate::screens::OrderScreen;
use crate::screens::PartnerScreen;
use crate::screens::ProductScreen;
use crate::screens::ReviewScreen;
use crate::screens::Screen;
use crate::screens::SizeScreen;
use crate::screens::UserScreen;
use crate::settings::Settings;

/// Build the API client from resolved settings.
pub fn connect(settings: &Settings) -> Result<StorefrontClient, CliError> {
    let builder = StorefrontClient::builder()
        .url(&settings.base_url)
        .timeout(settings.timeout());
    let client = match &settings.token {
        Some(token) => builder
            .token_provider(StaticTokenProvider::new(token.clone()))
            .build(),
        None => builder.token_provider(AnonymousTokenProvider).build(),
    }
    .map_err(storefront_lib::Error::from)?;
    Ok(client)
}

pub async fn run(command: Command, settings: &Settings) -> Result<String, CliError> {
    let client = connect(settings)?;
    let page_size = settings.page_size;
    info!("Using API at {}", client.base_url());

    match command {
        Command::Colors { action } => match action.unwrap_or(ColorAction::Table(Action::default()))
        {
            ColorAction::Table(action) => {
                master::<ColorScreen, Colors>(&client, action, page_size).await
            }
            ColorAction::Create(fields) => {
                edit::master::<ColorScreen, Colors, _>(&client, None, &fields).await
            }
            ColorAction::Update { id, fields } => {
                edit::master::<ColorScreen, Colors, _>(&client, Some(&id), &fields).await
            }
        },
        Command::Sizes { action } => match action.unwrap_or(SizeAction::Table(Action::default())) {
            SizeAction::Table(action) => {
                master::<SizeScreen, Sizes>(&client, action, page_size).await
            }
            SizeAction::Create(fields) => {
                edit::master::<SizeScreen, Sizes, _>(&client, None, &fields).await
            }
            SizeAction::Update { id, fields } => {
                edit::master::<SizeScreen, Sizes, _>(&client, Some(&id), &fields).await
            }
        },
        Command::Categories { action } => {
            match action.unwrap_or(CategoryAction::Table(Action::default())) {
                CategoryAction::Table(action) => {
                    master::<CategoryScreen, Categories>(&client, action, page_size).await
                }
                CategoryAction::Create(fields) => {
                    edit::master::<CategoryScreen, Categories, _>(&client, None, &fields).await
                }
                CategoryAction::Update { id, fields } => {
                    edit::master::<CategoryScreen, Categories, _>(&client, Some(&id), &fields).await
                }
            }
        }
        Command::Collections(args) => collections(&client, args, page_size).await,
        Command::Coupons { action } => match action.unwrap_or(CouponAction::Table(Action::default())) {
            CouponAction::Table(action) => {
                table::run::<CouponScreen>(client.list_coupons().await?, action, page_size)
            }
            CouponAction::Create(fields) => edit::coupon(&client, None, &fields).await,
            CouponAction::Update { id, fields } => edit::coupon(&client, Some(&id), &fields).await,
        },
        Command::Products { action } => products(&client, action, page_size).await,
        Command::Orders { action } => match action.unwrap_or(OrderAction::Table(Action::default())) {
            OrderAction::Table(action) => {
                table::run::<OrderScreen>(client.list_orders().await?, action, page_size)
            }
            OrderAction::Get { id } => Ok(summary::order(&client.get_order(&id).await?)),
        },
        Command::Reviews(args) => reviews(&client, args, page_size).await,
        Command::Users(args) => {
            let action = args.action.unwrap_or_default();
            table::run::<UserScreen>(client.list_users().await?, action, page_size)
        }
        Command::Partners(args) => partners(&client, args.action, page_size).await,
        Command::Dashboard { partner } => {
            if partner {
                Ok(summary::partner(&client.partner_dashboard().await?))
            } else {
                Ok(summary::admin(&client.admin_dashboard().await?))
            }
        }
        Command::Shipping { action } => shipping(&client, action).await,
    }
}

fn deleted<S: Screen>(id: &str) -> String {
    format!("Deleted {} record {}.", S::NAME, id)
}

/// Colors, sizes and categories share one shape.
async fn master<S, R>(
    client: &StorefrontClient,
    action: Action,
    page_size: usize,
) -> Result<String, CliError>
where
    R: MasterResource,
    S: Screen<Row = R::Record>,
{
    match action {
        Action::Delete { id } => {
            client.remove_master::<R>(parse_id(&id)?).await?;
            Ok(deleted::<S>(&id))
        }
        action => table::run::<S>(client.list_masters::<R>().await?, action, page_size),
    }
}

async fn collections(
    client: &StorefrontClient,
    args: CollectionArgs,
    page_size: usize,
) -> Result<String, CliError> {
    match args.action.unwrap_or(CollectionAction::Table(Action::default())) {
        CollectionAction::Table(Action::Delete { id }) => {
            client.remove_master::<Collections>(parse_id(&id)?).await?;
            Ok(deleted::<CollectionScreen>(&id))
        }
        CollectionAction::Table(action) => {
            let query = CollectionQuery {
                show_on_home: args.home,
                limit: args.limit,
            };
            let rows = client.list_collections(query).await?;
            table::run::<CollectionScreen>(rows, action, page_size)
        }
        CollectionAction::Create(fields) => {
            edit::master::<CollectionScreen, Collections, _>(client, None, &fields).await
        }
        CollectionAction::Update { id, fields } => {
            edit::master::<CollectionScreen, Collections, _>(client, Some(&id), &fields).await
        }
    }
}

async fn reviews(
    client: &StorefrontClient,
    args: ReviewArgs,
    page_size: usize,
) -> Result<String, CliError> {
    match args.action.unwrap_or(ReviewAction::Table(Action::default())) {
        ReviewAction::Table(Action::Delete { id }) => {
            client.remove_review(parse_id(&id)?).await?;
            Ok(deleted::<ReviewScreen>(&id))
        }
        ReviewAction::Table(action) => {
            let filters = ReviewFilters {
                status: args.status,
                rating: args.rating,
            };
            let rows = client.list_reviews(filters).await?;
            table::run::<ReviewScreen>(rows, action, page_size)
        }
        ReviewAction::Approve { id } => edit::review_status(client, &id, edit::approval(true)).await,
        ReviewAction::Hide { id } => edit::review_status(client, &id, edit::approval(false)).await,
        ReviewAction::Feature { id } => edit::review_status(client, &id, edit::featuring(true)).await,
        ReviewAction::Unfeature { id } => {
            edit::review_status(client, &id, edit::featuring(false)).await
        }
    }
}

async fn products(
    client: &StorefrontClient,
    action: Option<ProductAction>,
    page_size: usize,
) -> Result<String, CliError> {
    match action.unwrap_or(ProductAction::Table(Action::default())) {
        ProductAction::Table(Action::Delete { id }) => {
            client.remove_product(parse_id(&id)?).await?;
            Ok(deleted::<ProductScreen>(&id))
        }
        ProductAction::Table(action) => {
            table::run::<ProductScreen>(client.list_products().await?, action, page_size)
        }
        ProductAction::Get { id_or_slug } => {
            let product = client.get_product(&id_or_slug).await?;
            Ok(table::detail(&ProductScreen::columns(), &product))
        }
        ProductAction::Create { file } => {
            let product = client.create_product(&product_payload(&file)?).await?;
            Ok(edit::saved::<ProductScreen>(&product))
        }
        ProductAction::Update { id, file } => {
            let payload = product_payload(&file)?;
            let product = client.update_product(parse_id(&id)?, &payload).await?;
            Ok(edit::saved::<ProductScreen>(&product))
        }
    }
}

/// Read a product payload written as JSON.
fn product_payload(path: &Path) -> Result<ProductPayload, CliError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::PayloadFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

async fn partners(
    client: &StorefrontClient,
    action: Option<PartnerAction>,
    page_size: usize,
) -> Result<String, CliError> {
    match action.unwrap_or(PartnerAction::Table(Action::default())) {
        PartnerAction::Table(action) => {
            table::run::<PartnerScreen>(client.list_partners().await?, action, page_size)
        }
        PartnerAction::Create {
            email,
            password,
            name,
        } => {
            let form = PartnerForm {
                full_name: name.unwrap_or_default(),
                email,
                password,
            };
            let created = client.create_partner(&form.validate()?).await?;
            Ok(format!("Partner {} created ({}).", created.email, created.user_id))
        }
        PartnerAction::Toggle { id } => {
            let state = client.toggle_user_active(&id).await?;
            let now = if state.is_active { "active" } else { "inactive" };
            Ok(format!("{} is now {}.", state.email, now))
        }
    }
}

async fn shipping(
    client: &StorefrontClient,
    action: Option<ShippingAction>,
) -> Result<String, CliError> {
    match action.unwrap_or(ShippingAction::Show) {
        ShippingAction::Show => Ok(summary::shipping(client.shipping_setting().await?.as_ref())),
        ShippingAction::Set {
            threshold,
            fee,
            inactive,
        } => {
            let form = ShippingForm {
                free_shipping_threshold: threshold,
                shipping_fee: fee,
                is_active: !inactive,
            };
            let saved = client.save_shipping_setting(&form.validate()?).await?;
            Ok(format!("Saved.\n{}", summary::shipping(Some(&saved))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_bad_url() {
        let settings = Settings {
            base_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(matches!(connect(&settings), Err(CliError::Api(_))));
    }

    #[test]
    fn connect_uses_settings() {
        let settings = Settings {
            token: Some("admin-token".to_string()),
            timeout_secs: 5,
            ..Settings::default()
        };
        let client = connect(&settings).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000/api");
        assert_eq!(client.timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn product_payload_from_file() {
        let dir = std::env::temp_dir().join(format!("storefront-payload-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("tee.json");
        std::fs::write(
            &good,
            r#"{"name":"Tee","slug":"tee","shortDescription":"","description":"","gender":"UNISEX","categoryId":3,"collectionId":null,"isActive":true}"#,
        )
        .unwrap();
        let payload = product_payload(&good).unwrap();
        assert_eq!(payload.slug, "tee");
        assert_eq!(payload.category_id, 3);
        assert!(payload.variants.is_empty());

        let bad = dir.join("broken.json");
        std::fs::write(&bad, "{\"name\":").unwrap();
        let err = product_payload(&bad).unwrap_err();
        assert!(matches!(&err, CliError::PayloadFile { path, .. } if path == &bad));

        let missing = product_payload(&dir.join("missing.json")).unwrap_err();
        assert!(matches!(missing, CliError::Io(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
