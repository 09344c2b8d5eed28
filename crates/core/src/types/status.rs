//! Laundry service and order status enumerations.
//!
//! [`LaundryType::ALL`] and [`OrderStatus::ALL`] are the only lists of valid
//! values. Form dropdowns and the validator both read from them.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known enumeration value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid enum value. Expected {expected}, received '{received}'")]
pub struct UnknownVariant {
    /// Quoted list of accepted values, e.g. `'Wash' | 'Iron'`.
    pub expected: String,
    /// The rejected input.
    pub received: String,
}

impl UnknownVariant {
    fn new(allowed: &[&str], received: &str) -> Self {
        let expected = allowed
            .iter()
            .map(|v| format!("'{v}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        Self {
            expected,
            received: received.to_owned(),
        }
    }
}

/// Kind of service requested for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaundryType {
    Wash,
    Iron,
    #[serde(rename = "Wash & Iron")]
    WashAndIron,
    #[serde(rename = "Dry Clean")]
    DryClean,
}

impl LaundryType {
    /// Every laundry type, in display order.
    pub const ALL: [Self; 4] = [Self::Wash, Self::Iron, Self::WashAndIron, Self::DryClean];

    /// Display/wire form of the laundry type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wash => "Wash",
            Self::Iron => "Iron",
            Self::WashAndIron => "Wash & Iron",
            Self::DryClean => "Dry Clean",
        }
    }

    /// Parse from the display/wire form.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariant` if `s` is not one of [`LaundryType::ALL`].
    pub fn parse(s: &str) -> Result<Self, UnknownVariant> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new(&Self::ALL.map(|t| t.as_str()), s))
    }
}

impl std::fmt::Display for LaundryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LaundryType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Progress of an order through the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl OrderStatus {
    /// Every order status, in workflow order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Processing, Self::Completed];

    /// Display/wire form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }

    /// Parse from the display/wire form.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariant` if `s` is not one of [`OrderStatus::ALL`].
    pub fn parse(s: &str) -> Result<Self, UnknownVariant> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownVariant::new(&Self::ALL.map(|st| st.as_str()), s))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
