//! Sri Lankan National Identity Card (NIC) date-of-birth decoder
//!
//! Two layouts are in circulation:
//! - old: 9 digits followed by `V` or `X`, e.g. `901234567V`
//! - new: 12 digits, e.g. `199912345678`
//!
//! The day-of-year digits count from 1 in a calendar where February always
//! has 29 days. Women have 500 added to the day-of-year.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two-digit years up to this value belong to the 2000s (old layout only)
const CENTURY_PIVOT: u32 = 25;

/// Encoded day-of-year values above this mark a female holder
const FEMALE_OFFSET: u32 = 500;

/// Cumulative day count at the end of each month, February fixed at 29 days
const MONTH_ENDS: [u32; 12] = [31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NicError {
    #[error("identity number matches neither the old nor the new layout")]
    InvalidFormat,
    #[error("encoded day of year is out of range")]
    InvalidDayOfYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NicFormat {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Calendar date decoded from a NIC.
///
/// Not a `chrono::NaiveDate`: February 29 is a legal result in any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicDetails {
    pub format: NicFormat,
    pub sex: Sex,
    pub birth_date: BirthDate,
}

/// Strip everything that is not an ASCII digit
pub fn normalize(raw: &str) -> Result<String, NicError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(NicError::InvalidFormat);
    }
    Ok(digits)
}

/// Pick the layout by digit count and pull out (format, full year, encoded day)
pub fn extract_fields(digits: &str) -> Result<(NicFormat, u32, u32), NicError> {
    if digits.len() >= 12 {
        let year = parse_digits(&digits[0..4])?;
        let encoded_day = parse_digits(&digits[4..7])?;
        Ok((NicFormat::New, year, encoded_day))
    } else if digits.len() >= 9 {
        let yy = parse_digits(&digits[0..2])?;
        let year = if yy <= CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };
        let encoded_day = parse_digits(&digits[2..5])?;
        Ok((NicFormat::Old, year, encoded_day))
    } else {
        Err(NicError::InvalidFormat)
    }
}

fn parse_digits(s: &str) -> Result<u32, NicError> {
    s.parse::<u32>().map_err(|_| NicError::InvalidFormat)
}

/// Apply the sex offset and map the day-of-year onto (sex, month, day)
pub fn resolve_day_of_year(encoded: u32) -> Result<(Sex, u32, u32), NicError> {
    let (sex, day_of_year) = if encoded > FEMALE_OFFSET {
        (Sex::Female, encoded - FEMALE_OFFSET)
    } else {
        (Sex::Male, encoded)
    };

    if !(1..=366).contains(&day_of_year) {
        return Err(NicError::InvalidDayOfYear);
    }

    let mut previous_end = 0;
    for (index, &month_end) in MONTH_ENDS.iter().enumerate() {
        if day_of_year <= month_end {
            return Ok((sex, index as u32 + 1, day_of_year - previous_end));
        }
        previous_end = month_end;
    }

    Err(NicError::InvalidDayOfYear)
}

/// Full decode with layout and sex
pub fn decode(raw: &str) -> Result<NicDetails, NicError> {
    let digits = normalize(raw)?;
    let (format, year, encoded_day) = extract_fields(&digits)?;
    let (sex, month, day) = resolve_day_of_year(encoded_day)?;

    Ok(NicDetails {
        format,
        sex,
        birth_date: BirthDate { year, month, day },
    })
}

/// Decode a NIC into an ISO `YYYY-MM-DD` birth date.
///
/// Any malformed or partially typed number yields `None`.
pub fn decode_date_of_birth(raw: &str) -> Option<String> {
    decode(raw).ok().map(|details| details.birth_date.to_string())
}

/// Strict layout check for form validation: `#########V`/`X` or 12 digits
pub fn is_valid_nic(raw: &str) -> bool {
    let value = raw.trim();
    let bytes = value.as_bytes();
    match bytes.len() {
        10 => {
            bytes[..9].iter().all(u8::is_ascii_digit)
                && matches!(bytes[9], b'V' | b'v' | b'X' | b'x')
        }
        12 => bytes.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
