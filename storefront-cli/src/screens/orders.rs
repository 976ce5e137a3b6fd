use storefront_lib::model::Order;
use storefront_lib::model::OrderStatus;
use storefront_table::Alignment;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::Tone;

use super::Screen;
use super::date;
use super::or_none;
use super::rupees;

pub struct OrderScreen;

/// Order ids are UUIDs; the list shows the first eight characters.
fn short_id(id: &str) -> String {
    match id.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_string(),
    }
}

fn status_tone(status: &OrderStatus) -> Tone {
    match status {
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Cancelled | OrderStatus::Returned => Tone::Danger,
        OrderStatus::ReturnRequested => Tone::Warning,
        OrderStatus::Other(_) => Tone::Normal,
        _ => Tone::Info,
    }
}

fn accepted_by(order: &Order) -> Cell {
    let partner = order.assigned_partner.as_ref().map(|p| {
        p.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&p.email)
            .to_string()
    });
    match (partner, &order.assigned_partner_id) {
        (Some(name), _) => Cell::styled(name, Tone::Success),
        (None, Some(_)) => Cell::styled("Partner", Tone::Success),
        (None, None) => Cell::styled("Unassigned", Tone::Warning),
    }
}

impl Screen for OrderScreen {
    type Row = Order;
    const NAME: &'static str = "orders";

    fn columns() -> Vec<ColumnDef<Order>> {
        vec![
            ColumnDef::new("id", "Order", |o: &Order| {
                Cell::stack([Cell::strong(short_id(&o.id)), Cell::muted(date(o.created_at))])
            })
            .searchable()
            .search_text(|o: &Order| o.id.clone()),
            ColumnDef::new("addressName", "Customer", |o: &Order| {
                Cell::stack([
                    Cell::strong(&o.address_name),
                    Cell::muted(or_none(o.city.as_deref())),
                ])
            })
            .searchable(),
            ColumnDef::new("status", "Status", |o: &Order| {
                Cell::styled(o.status.label(), status_tone(&o.status))
            })
            .searchable(),
            ColumnDef::new("assignedPartner", "Accepted By", accepted_by).searchable(),
            ColumnDef::new("paymentStatus", "Payment", |o: &Order| {
                Cell::stack([Cell::strong(&o.payment_method), Cell::muted(&o.payment_status)])
            })
            .searchable(),
            ColumnDef::new("total", "Total", |o: &Order| Cell::strong(rupees(o.total)))
                .align(Alignment::Right),
        ]
    }

    fn suggestion_label(order: &Order) -> String {
        format!("{} - {}", order.address_name, order.id)
    }
}
