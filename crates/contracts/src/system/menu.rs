//! Navigation menu filtered by the session's capability set

use serde::Serialize;

use crate::system::auth::{Capabilities, Capability};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub requires: Capability,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

const fn item(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    requires: Capability,
) -> MenuItem {
    MenuItem {
        id,
        label,
        icon,
        requires,
    }
}

pub fn menu_groups() -> Vec<MenuGroup> {
    use Capability::*;

    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "bike",
            items: vec![
                item("a001_category", "Categories", "folder", Catalog),
                item("a002_bike_model", "Models", "list", Catalog),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "package",
            items: vec![
                item("a003_stock", "Stock", "package", Stock),
                item("a006_transfer", "Transfers", "truck", Transfers),
                item("a005_courier", "Couriers", "user-check", Couriers),
                item(
                    "a008_dealer_consignment",
                    "Dealer consignment notes",
                    "file-text",
                    DealerNotes,
                ),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "cash",
            items: vec![
                item("a004_customer", "Customers", "contact", Customers),
                item("a007_payment", "Payments", "credit-card", Payments),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            items: vec![
                item("p901_sales_report", "Sales report", "receipt", Reports),
                item("p902_stock_report", "Stock report", "table", Reports),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                item("a009_setting", "Settings", "settings", Settings),
                item("sys_users", "Users", "users", Users),
            ],
        },
    ]
}

/// Groups with at least one permitted item, holding only the permitted items
pub fn visible_groups(capabilities: &Capabilities) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|i| capabilities.has(i.requires));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

/// Flat list of permitted items
pub fn visible_items(capabilities: &Capabilities) -> Vec<MenuItem> {
    visible_groups(capabilities)
        .into_iter()
        .flat_map(|g| g.items)
        .collect()
}
