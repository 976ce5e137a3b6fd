//! Dashboard metrics and shipping settings, printed as labelled sections.

use rust_decimal::Decimal;
use storefront_lib::model::DashboardAdmin;
use storefront_lib::model::DashboardOrders;
use storefront_lib::model::DashboardPartner;
use storefront_lib::model::DashboardRevenue;
use storefront_lib::model::Order;
use storefront_lib::model::OrderItem;
use storefront_lib::model::ShippingSetting;
use storefront_table::Alignment;
use storefront_table::text::display_width;
use storefront_table::text::pad_to_width;

use crate::screens::NONE;
use crate::screens::date;
use crate::screens::date_time;
use crate::screens::or_none;
use crate::screens::rupees;

fn section(title: &str, fields: &[(&str, String)]) -> String {
    let width = fields
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);
    let mut lines = vec![title.to_string()];
    lines.extend(
        fields
            .iter()
            .map(|(label, value)| format!("  {}  {}", pad_to_width(label, width, Alignment::Left), value)),
    );
    lines.join("\n")
}

fn optional_rupees(amount: Option<Decimal>) -> Option<String> {
    amount.map(rupees)
}

fn orders_section(orders: &DashboardOrders) -> String {
    let mut fields = vec![
        ("Total", orders.total.to_string()),
        ("Completed", orders.completed.to_string()),
        ("Pending", orders.pending.to_string()),
        ("Cancelled", orders.cancelled.to_string()),
        ("Return requested", orders.return_requested.to_string()),
    ];
    if let Some(assigned) = orders.assigned {
        fields.push(("Assigned", assigned.to_string()));
    }
    section("Orders", &fields)
}

fn revenue_section(revenue: &DashboardRevenue) -> String {
    let mut fields = vec![
        ("Paid", rupees(revenue.paid)),
        ("Pending", rupees(revenue.pending)),
        ("Expected", rupees(revenue.expected)),
        ("Cancelled", rupees(revenue.cancelled)),
    ];
    let extra = [
        ("Assigned value", optional_rupees(revenue.assigned_value)),
        ("Completed value", optional_rupees(revenue.completed_value)),
        ("In progress", optional_rupees(revenue.in_progress_value)),
        ("Outstanding COD", optional_rupees(revenue.outstanding_cod)),
    ];
    fields.extend(extra.into_iter().filter_map(|(label, value)| value.map(|v| (label, v))));
    section("Revenue", &fields)
}

pub fn admin(dashboard: &DashboardAdmin) -> String {
    let users = &dashboard.users;
    let products = &dashboard.products;
    [
        section(
            "Users",
            &[
                ("Total", users.total.to_string()),
                ("Customers", users.customers.to_string()),
                ("Partners", users.partners.to_string()),
                ("Admins", users.super_admins.to_string()),
                ("Active", users.active.to_string()),
                ("Inactive", users.inactive.to_string()),
            ],
        ),
        section(
            "Products",
            &[
                ("Products", products.total_products.to_string()),
                ("Active", products.active_products.to_string()),
                ("Variants", products.total_variants.to_string()),
                ("Out of stock", products.out_of_stock_variants.to_string()),
                ("Low stock", products.low_stock_variants.to_string()),
                ("Stock on hand", products.stock_on_hand.to_string()),
            ],
        ),
        orders_section(&dashboard.orders),
        revenue_section(&dashboard.revenue),
    ]
    .join("\n\n")
}

pub fn partner(dashboard: &DashboardPartner) -> String {
    [
        orders_section(&dashboard.orders),
        revenue_section(&dashboard.revenue),
    ]
    .join("\n\n")
}

pub fn shipping(setting: Option<&ShippingSetting>) -> String {
    let Some(setting) = setting else {
        return "No shipping setting saved yet.".to_string();
    };
    let status = if setting.is_active { "Active" } else { "Inactive" };
    section(
        "Shipping",
        &[
            ("Free shipping from", rupees(setting.free_shipping_threshold)),
            ("Flat fee", rupees(setting.shipping_fee)),
            ("Status", status.to_string()),
            ("Updated", date(setting.updated_at)),
        ],
    )
}

fn item_line(item: &OrderItem) -> String {
    let variant: Vec<&str> = [item.color_name.as_deref(), item.size_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .collect();
    let name = if variant.is_empty() {
        item.product_name.clone()
    } else {
        format!("{} ({})", item.product_name, variant.join(" / "))
    };
    format!(
        "  {} x {} @ {} = {}",
        item.quantity,
        name,
        rupees(item.unit_price),
        rupees(item.total_price)
    )
}

/// One order with its delivery address, totals and items.
pub fn order(order: &Order) -> String {
    let address: Vec<&str> = [
        order.address_line.as_deref(),
        order.city.as_deref(),
        order.state.as_deref(),
        order.postal_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect();
    let partner = order
        .assigned_partner
        .as_ref()
        .map(|p| {
            p.full_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(&p.email)
                .to_string()
        });

    let mut fields = vec![
        ("Status", order.status.label()),
        ("Placed", order.created_at.map_or_else(|| NONE.to_string(), date_time)),
        ("Customer", or_none(Some(order.address_name.as_str())).to_string()),
        ("Phone", or_none(order.address_phone.as_deref()).to_string()),
        (
            "Address",
            if address.is_empty() {
                NONE.to_string()
            } else {
                address.join(", ")
            },
        ),
        (
            "Payment",
            format!(
                "{} ({})",
                or_none(Some(order.payment_method.as_str())),
                or_none(Some(order.payment_status.as_str()))
            ),
        ),
        ("Partner", partner.unwrap_or_else(|| NONE.to_string())),
    ];
    if let Some(code) = order.coupon_code.as_deref().filter(|c| !c.trim().is_empty()) {
        fields.push(("Coupon", code.to_string()));
    }

    let totals = [
        ("Subtotal", order.subtotal),
        ("Shipping", order.shipping_fee),
        ("Discount", order.discount_amount),
        ("Total", Some(order.total)),
    ];
    let totals: Vec<(&str, String)> = totals
        .into_iter()
        .filter_map(|(label, amount)| amount.map(|a| (label, rupees(a))))
        .collect();

    let mut items = vec![format!("Items ({})", order.items.len())];
    items.extend(order.items.iter().map(item_line));

    [
        section(&format!("Order {}", order.id), &fields),
        section("Totals", &totals),
        items.join("\n"),
    ]
    .join("\n\n")
}
