use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_reference, ValidationRules};
use crate::system::auth::Capability;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsignmentLineDto {
    pub model_id: Option<i64>,
    pub chassis_number: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

impl ConsignmentLineDto {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Bikes handed over to a dealer on consignment
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealerConsignmentNoteDto {
    pub id: Option<i64>,
    /// Assigned by the backend on first save
    pub note_number: Option<String>,
    pub dealer_name: String,
    pub dealer_address: Option<String>,
    pub issued_date: Option<String>,
    #[serde(default)]
    pub lines: Vec<ConsignmentLineDto>,
    pub remarks: Option<String>,
}

impl DealerConsignmentNoteDto {
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.lines.iter().map(ConsignmentLineDto::line_total).sum()
    }
}

impl Resource for DealerConsignmentNoteDto {
    fn resource_index() -> &'static str {
        "a008"
    }

    fn required_capability() -> Capability {
        Capability::DealerNotes
    }

    fn collection_name() -> &'static str {
        "dealer-consignment-notes"
    }

    fn element_name() -> &'static str {
        "Dealer consignment note"
    }

    fn list_name() -> &'static str {
        "Dealer consignment notes"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string(&self.dealer_name, "Dealer name")?;
        validate_iso_date(self.issued_date.as_deref(), "Issued date")?;
        if self.lines.is_empty() {
            return Err("At least one line is required".to_string());
        }
        for (index, line) in self.lines.iter().enumerate() {
            validate_reference(line.model_id, &format!("Line {} model", index + 1))?;
            if line.quantity == 0 {
                return Err(format!("Line {} quantity must be greater than zero", index + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32, unit_price: f64) -> ConsignmentLineDto {
        ConsignmentLineDto {
            model_id: Some(1),
            chassis_number: None,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_totals() {
        let note = DealerConsignmentNoteDto {
            dealer_name: "Galle Motors".to_string(),
            lines: vec![line(2, 100.0), line(1, 50.5)],
            ..Default::default()
        };
        assert_eq!(note.total_quantity(), 3);
        assert_eq!(note.total_value(), 250.5);
        assert!(note.validate().is_ok());
    }

    #[test]
    fn test_empty_note_rejected() {
        let note = DealerConsignmentNoteDto {
            dealer_name: "Galle Motors".to_string(),
            ..Default::default()
        };
        assert_eq!(note.validate().unwrap_err(), "At least one line is required");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let note = DealerConsignmentNoteDto {
            dealer_name: "Galle Motors".to_string(),
            lines: vec![line(1, 10.0), line(0, 10.0)],
            ..Default::default()
        };
        assert_eq!(
            note.validate().unwrap_err(),
            "Line 2 quantity must be greater than zero"
        );
    }
}
