use storefront_lib::model::UserSummary;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::Screen;
use super::date;
use super::or_none;
use super::rupees;

fn name_column() -> ColumnDef<UserSummary> {
    ColumnDef::new("fullName", "Name", |u: &UserSummary| {
        Cell::stack([
            Cell::strong(or_none(u.full_name.as_deref())),
            Cell::muted(&u.email),
        ])
    })
    .searchable()
}

fn label(user: &UserSummary) -> String {
    format!("{} {}", user.full_name.as_deref().unwrap_or_default(), user.email)
}

pub struct UserScreen;

impl Screen for UserScreen {
    type Row = UserSummary;
    const NAME: &'static str = "users";

    fn columns() -> Vec<ColumnDef<UserSummary>> {
        vec![
            name_column(),
            ColumnDef::new("role", "Role", |u: &UserSummary| {
                Cell::strong(u.role.as_str().to_uppercase())
            })
            .searchable(),
            ColumnDef::new("orders", "Orders", |u: &UserSummary| {
                Cell::stack([
                    Cell::inline([
                        Cell::strong(u.orders.order_count.to_string()),
                        Cell::text("total"),
                    ]),
                    Cell::muted(format!(
                        "{} delivered / {} cancelled",
                        u.orders.delivered_count, u.orders.cancelled_count
                    )),
                ])
            }),
            ColumnDef::new("ordersValue", "Value", |u: &UserSummary| {
                Cell::stack([
                    Cell::strong(rupees(u.orders.total_value)),
                    Cell::muted(format!("Delivered: {}", rupees(u.orders.delivered_value))),
                ])
            }),
            ColumnDef::new("lastOrderAt", "Last Order", |u: &UserSummary| {
                Cell::muted(date(u.orders.last_order_at))
            }),
        ]
    }

    fn suggestion_label(user: &UserSummary) -> String {
        label(user)
    }
}

pub struct PartnerScreen;

impl Screen for PartnerScreen {
    type Row = UserSummary;
    const NAME: &'static str = "partners";
    const ADD_ACTION: Option<&'static str> = Some("Add Partner");

    fn columns() -> Vec<ColumnDef<UserSummary>> {
        vec![
            name_column(),
            ColumnDef::new("status", "Status", |u: &UserSummary| {
                if u.is_active {
                    Cell::styled("Active", Tone::Success)
                } else {
                    Cell::styled("Inactive", Tone::Danger)
                }
            }),
        ]
    }

    fn suggestion_label(partner: &UserSummary) -> String {
        label(partner)
    }
}

#[cfg(test)]
mod tests {
    use storefront_lib::model::UserOrderStats;
    use storefront_lib::model::UserRole;

    use super::*;

    fn user(full_name: Option<&str>, email: &str) -> UserSummary {
        UserSummary {
            id: "u1".to_string(),
            full_name: full_name.map(str::to_string),
            email: email.to_string(),
            phone_number: None,
            role: UserRole::Customer,
            is_active: true,
            is_verified: true,
            created_at: None,
            orders: UserOrderStats {
                order_count: 5,
                delivered_count: 3,
                cancelled_count: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn label_tolerates_missing_name() {
        assert_eq!(
            UserScreen::suggestion_label(&user(Some("Asha Rao"), "asha@shop.example")),
            "Asha Rao asha@shop.example"
        );
        assert_eq!(
            PartnerScreen::suggestion_label(&user(None, "ravi@shop.example")),
            " ravi@shop.example"
        );
    }

    #[test]
    fn order_counts() {
        let columns = UserScreen::columns();
        let u = user(None, "cara@shop.example");
        assert_eq!(
            columns[2].render(&u).lines(),
            vec!["5 total", "3 delivered / 1 cancelled"]
        );
        assert_eq!(columns[0].render(&u).lines(), vec!["-", "cara@shop.example"]);
    }
}
