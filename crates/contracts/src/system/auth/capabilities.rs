//! Capability set evaluated once per authenticated session

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::UserInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    Cashier,
    Dealer,
}

impl Role {
    /// Case-insensitive; anything unrecognised gets the least-privileged staff role
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" | "ROLE_ADMIN" => Role::Admin,
            "MANAGER" | "ROLE_MANAGER" => Role::Manager,
            "DEALER" | "ROLE_DEALER" => Role::Dealer,
            _ => Role::Cashier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Catalog,
    Stock,
    Customers,
    Couriers,
    Transfers,
    Payments,
    DealerNotes,
    Reports,
    Settings,
    Users,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::Catalog,
        Capability::Stock,
        Capability::Customers,
        Capability::Couriers,
        Capability::Transfers,
        Capability::Payments,
        Capability::DealerNotes,
        Capability::Reports,
        Capability::Settings,
        Capability::Users,
    ];
}

/// Immutable for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    role: Role,
    granted: BTreeSet<Capability>,
}

impl Capabilities {
    pub fn for_user(user: &UserInfo) -> Self {
        let role = Role::parse(&user.role);
        let effective = match role {
            Role::Admin if !user.admin_active => Role::Cashier,
            Role::Manager if !user.manager_active => Role::Cashier,
            other => other,
        };
        Self::for_role(effective)
    }

    pub fn for_role(role: Role) -> Self {
        use Capability::*;

        let granted: BTreeSet<Capability> = match role {
            Role::Admin => Capability::ALL.into_iter().collect(),
            Role::Manager => Capability::ALL
                .into_iter()
                .filter(|c| !matches!(c, Settings | Users))
                .collect(),
            Role::Cashier => [Catalog, Stock, Customers, Payments].into_iter().collect(),
            Role::Dealer => [Catalog, DealerNotes].into_iter().collect(),
        };

        Self { role, granted }
    }

    /// Nothing granted, used before login
    pub fn anonymous() -> Self {
        Self {
            role: Role::Cashier,
            granted: BTreeSet::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.granted.iter().copied()
    }
}
