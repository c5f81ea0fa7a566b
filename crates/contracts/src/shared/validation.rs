//! Form validation rules shared by every DTO that is written to the backend

use crate::shared::nic;

/// Validation rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    /// Strictly positive amount
    pub const fn positive() -> Self {
        Self {
            required: true,
            min: Some(f64::MIN_POSITIVE),
            ..Self::none()
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                if min == f64::MIN_POSITIVE {
                    return Err(format!("{} must be greater than zero", field_label));
                }
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Required reference to another record
pub fn validate_reference(id: Option<i64>, field_label: &str) -> Result<(), String> {
    match id {
        Some(id) if id > 0 => Ok(()),
        _ => Err(format!("{} must be selected", field_label)),
    }
}

/// Identity card number in either the old or the new layout
pub fn validate_nic(value: &str) -> Result<(), String> {
    if nic::is_valid_nic(value) {
        Ok(())
    } else {
        Err("NIC must be 9 digits followed by V or X, or 12 digits".to_string())
    }
}

/// Local mobile number: 10 digits starting with 0
pub fn validate_mobile(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.len() == 10 && value.starts_with('0') && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Mobile number must be 10 digits starting with 0".to_string())
    }
}

/// Optional ISO date (`YYYY-MM-DD`)
pub fn validate_iso_date(value: Option<&str>, field_label: &str) -> Result<(), String> {
    let Some(value) = value else {
        return Ok(());
    };
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(format!("{} must be in YYYY-MM-DD format", field_label));
    }

    let month: u32 = value[5..7].parse().unwrap_or(0);
    let day: u32 = value[8..10].parse().unwrap_or(0);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("{} is not a valid date", field_label));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("Scooters", "Name").is_ok());
        assert_eq!(
            rules.validate_string("   ", "Name").unwrap_err(),
            "Name is required"
        );
    }

    #[test]
    fn test_length_bounds() {
        let rules = ValidationRules::required().with_min_length(3).with_max_length(5);
        assert!(rules.validate_string("ab", "Username").is_err());
        assert!(rules.validate_string("abc", "Username").is_ok());
        assert!(rules.validate_string("abcdef", "Username").is_err());
    }

    #[test]
    fn test_positive_number() {
        let rules = ValidationRules::positive();
        assert!(rules.validate_number(0.0, "Price").is_err());
        assert!(rules.validate_number(-5.0, "Price").is_err());
        assert!(rules.validate_number(0.01, "Price").is_ok());
        assert_eq!(
            rules.validate_number(0.0, "Price").unwrap_err(),
            "Price must be greater than zero"
        );
    }

    #[test]
    fn test_non_finite_number_rejected() {
        let rules = ValidationRules::positive();
        assert_eq!(
            rules.validate_number(f64::NAN, "Price").unwrap_err(),
            "Price must be a number"
        );
        assert!(rules.validate_number(f64::INFINITY, "Price").is_err());
        assert!(ValidationRules::none()
            .validate_number(f64::NEG_INFINITY, "Amount")
            .is_err());
    }

    #[test]
    fn test_mobile() {
        assert!(validate_mobile("0771234567").is_ok());
        assert!(validate_mobile("771234567").is_err());
        assert!(validate_mobile("07712345678").is_err());
        assert!(validate_mobile("077123456a").is_err());
    }

    #[test]
    fn test_iso_date() {
        assert!(validate_iso_date(None, "Date of birth").is_ok());
        assert!(validate_iso_date(Some("1999-02-29"), "Date of birth").is_ok());
        assert!(validate_iso_date(Some("1999/02/28"), "Date of birth").is_err());
        assert!(validate_iso_date(Some("1999-13-01"), "Date of birth").is_err());
    }

    #[test]
    fn test_reference() {
        assert!(validate_reference(Some(4), "Category").is_ok());
        assert!(validate_reference(Some(0), "Category").is_err());
        assert!(validate_reference(None, "Category").is_err());
    }
}
