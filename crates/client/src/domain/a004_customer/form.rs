//! Registration form state for customers and couriers
//!
//! The date of birth is pre-filled from the NIC as the user types. A number
//! that does not decode (yet) leaves the field as it was, so a half-typed
//! NIC never blanks a date that was already filled in.

use contracts::domain::a004_customer::aggregate::CustomerDto;
use contracts::domain::a005_courier::aggregate::CourierDto;
use contracts::domain::common::Resource;
use contracts::shared::nic;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub id: Option<i64>,
    pub name: String,
    pub nic: String,
    pub mobile: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub vehicle_number: Option<String>,
    pub document_keys: Vec<String>,
}

impl RegistrationForm {
    pub fn from_customer(dto: &CustomerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.clone(),
            nic: dto.nic.clone(),
            mobile: dto.mobile.clone(),
            email: dto.email.clone(),
            address: dto.address.clone(),
            date_of_birth: dto.date_of_birth.clone(),
            vehicle_number: None,
            document_keys: dto.document_keys.clone(),
        }
    }

    /// Store the raw NIC text; returns `true` if the date of birth was updated
    pub fn set_nic(&mut self, raw: &str) -> bool {
        self.nic = raw.to_string();
        match nic::decode_date_of_birth(raw) {
            Some(date) => {
                let changed = self.date_of_birth.as_deref() != Some(date.as_str());
                self.date_of_birth = Some(date);
                changed
            }
            None => false,
        }
    }

    /// Manual edit of the date field
    pub fn set_date_of_birth(&mut self, value: &str) {
        let value = value.trim();
        self.date_of_birth = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    fn clean_nic(&self) -> String {
        self.nic.trim().to_ascii_uppercase()
    }

    pub fn into_customer(self) -> Result<CustomerDto, String> {
        let dto = CustomerDto {
            id: self.id,
            name: self.name.trim().to_string(),
            nic: self.clean_nic(),
            mobile: self.mobile.trim().to_string(),
            email: self.email.filter(|e| !e.trim().is_empty()),
            address: self.address.filter(|a| !a.trim().is_empty()),
            date_of_birth: self.date_of_birth,
            document_keys: self.document_keys,
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn into_courier(self) -> Result<CourierDto, String> {
        let dto = CourierDto {
            id: self.id,
            name: self.name.trim().to_string(),
            nic: self.clean_nic(),
            mobile: self.mobile.trim().to_string(),
            vehicle_number: self.vehicle_number.filter(|v| !v.trim().is_empty()),
            date_of_birth: self.date_of_birth,
            document_keys: self.document_keys,
        };
        dto.validate()?;
        Ok(dto)
    }
}
