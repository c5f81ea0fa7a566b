use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_reference, ValidationRules};
use crate::system::auth::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Cheque,
    BankTransfer,
    Leasing,
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub stock_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    /// Cheque number, card slip or leasing agreement number
    pub reference: Option<String>,
    pub invoice_number: Option<String>,
    pub paid_date: Option<String>,
}

impl Resource for PaymentDto {
    fn resource_index() -> &'static str {
        "a007"
    }

    fn required_capability() -> Capability {
        Capability::Payments
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        validate_reference(self.customer_id, "Customer")?;
        ValidationRules::positive().validate_number(self.amount, "Amount")?;
        if matches!(self.method, PaymentMethod::Cheque | PaymentMethod::Leasing) {
            let reference = self.reference.as_deref().unwrap_or_default();
            ValidationRules::required().validate_string(reference, "Reference")?;
        }
        validate_iso_date(self.paid_date.as_deref(), "Payment date")
    }
}
