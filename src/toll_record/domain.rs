//! Core toll record types and the parsing of raw form input into them.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The reasons raw user input can be rejected before it reaches the store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// The vehicle number was empty or only whitespace.
    #[error("Vehicle number is required")]
    EmptyVehicleNumber,

    /// The toll amount was empty or only whitespace.
    #[error("Toll amount is required")]
    EmptyTollAmount,

    /// The toll amount could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid toll amount")]
    InvalidTollAmount(String),

    /// The toll amount was a number below zero.
    #[error("Toll amount cannot be negative")]
    NegativeTollAmount,
}

/// A vehicle registration number, trimmed and in uppercase.
///
/// Two inputs that only differ in case or surrounding whitespace produce the
/// same vehicle number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleNumber(String);

impl VehicleNumber {
    /// Create a vehicle number from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::EmptyVehicleNumber] if `raw` is empty after
    /// trimming.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() {
            Err(ValidationError::EmptyVehicleNumber)
        } else {
            Ok(Self(normalized))
        }
    }

    /// Create a vehicle number without normalization or validation.
    ///
    /// The caller should ensure that the string is already trimmed, uppercase
    /// and not empty, e.g. because it was read back from the database.
    pub fn new_unchecked(vehicle_number: &str) -> Self {
        Self(vehicle_number.to_owned())
    }
}

impl AsRef<str> for VehicleNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VehicleNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleNumber::new(s)
    }
}

impl Display for VehicleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finite, non-negative amount of money paid at the toll plaza.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TollAmount(f64);

impl TollAmount {
    /// Parse a toll amount from raw user input.
    ///
    /// # Errors
    ///
    /// Returns a [ValidationError] if `raw` is empty, is not a number, is not
    /// finite, or is negative.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(ValidationError::EmptyTollAmount);
        }

        let amount: f64 = raw
            .parse()
            .map_err(|_| ValidationError::InvalidTollAmount(raw.to_owned()))?;

        Self::try_from(amount).map_err(|error| match error {
            ValidationError::InvalidTollAmount(_) => {
                ValidationError::InvalidTollAmount(raw.to_owned())
            }
            error => error,
        })
    }

    /// Create a toll amount without validation.
    ///
    /// The caller should ensure that `amount` is finite and non-negative.
    /// Amounts read back from a table written by an earlier version of the
    /// app are the exception, since that table did not enforce either rule.
    pub fn new_unchecked(amount: f64) -> Self {
        Self(amount)
    }

    /// The amount as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TollAmount {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidTollAmount(amount.to_string()));
        }

        if amount < 0.0 {
            return Err(ValidationError::NegativeTollAmount);
        }

        // Collapse -0.0 so it displays and sums as zero.
        Ok(Self(amount.abs()))
    }
}

impl From<TollAmount> for f64 {
    fn from(amount: TollAmount) -> Self {
        amount.0
    }
}

impl FromStr for TollAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TollAmount::new(s)
    }
}

impl Display for TollAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A toll payment stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollRecord {
    /// The vehicle that paid the toll, unique across all records.
    pub vehicle_number: VehicleNumber,
    /// How much was paid.
    pub toll_paid: TollAmount,
}

/// A validated toll record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTollRecord {
    /// The vehicle that paid the toll.
    pub vehicle_number: VehicleNumber,
    /// How much was paid.
    pub toll_paid: TollAmount,
}

impl NewTollRecord {
    /// Parse the raw form fields into a toll record.
    ///
    /// The vehicle number is checked before the amount.
    ///
    /// # Errors
    ///
    /// Returns the first [ValidationError] found.
    pub fn parse(form: &TollRecordForm) -> Result<Self, ValidationError> {
        let vehicle_number = VehicleNumber::new(&form.vehicle_number)?;
        let toll_paid = TollAmount::new(&form.toll_paid)?;

        Ok(Self {
            vehicle_number,
            toll_paid,
        })
    }
}

/// The raw form data for adding a toll record.
///
/// Both fields are kept as text so that bad input is reported through
/// [ValidationError] instead of a form rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TollRecordForm {
    /// The vehicle number as typed by the user.
    #[serde(default)]
    pub vehicle_number: String,
    /// The toll amount as typed by the user.
    #[serde(default)]
    pub toll_paid: String,
}

/// The number of stored records and the sum of their amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollSummary {
    /// How many vehicles have a toll record.
    pub count: usize,
    /// The total amount collected, zero when there are no records.
    pub total: f64,
}
