//! Laundry order record and its validator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ValidationErrors, as_object, min_chars, read_number, read_string};
use crate::types::{LaundryType, OrderId, OrderStatus};

/// Camel-case field names shared by the JSON API and the HTML forms.
pub mod field {
    pub const CUSTOMER_NAME: &str = "customerName";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const LAUNDRY_TYPE: &str = "laundryType";
    pub const WEIGHT: &str = "weight";
    pub const STATUS: &str = "status";
}

/// Minimum customer name length, in characters.
pub const CUSTOMER_NAME_MIN_CHARS: usize = 2;
/// Minimum phone number length, in characters.
pub const PHONE_NUMBER_MIN_CHARS: usize = 10;
/// Minimum order weight, in kilograms.
pub const WEIGHT_MIN_KG: f64 = 0.1;

/// Every order attribute except the id.
///
/// Stores assume the value came out of [`OrderInput::validate`]; constructing
/// one by hand skips that gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub customer_name: String,
    pub phone_number: String,
    pub laundry_type: LaundryType,
    pub weight: f64,
    pub status: OrderStatus,
}

impl OrderInput {
    /// Validate an untyped payload into an order field set.
    ///
    /// Unknown keys, including a client-supplied `id`, are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` with one entry per offending field:
    /// - missing fields report `Required`
    /// - wrongly typed fields report `Expected <type>, received <type>`
    /// - `customerName` shorter than 2 characters
    /// - `phoneNumber` shorter than 10 characters
    /// - `weight` below 0.1 or not finite
    /// - `laundryType` / `status` outside their enumerations
    pub fn validate(value: &Value) -> Result<Self, ValidationErrors> {
        let map = as_object(value)?;
        let mut errors = ValidationErrors::new();

        let customer_name = read_string(map, field::CUSTOMER_NAME, &mut errors).and_then(|s| {
            min_chars(
                s,
                CUSTOMER_NAME_MIN_CHARS,
                field::CUSTOMER_NAME,
                "Customer name must be at least 2 characters",
                &mut errors,
            )
        });

        let phone_number = read_string(map, field::PHONE_NUMBER, &mut errors).and_then(|s| {
            min_chars(
                s,
                PHONE_NUMBER_MIN_CHARS,
                field::PHONE_NUMBER,
                "Phone number must be at least 10 digits",
                &mut errors,
            )
        });

        let laundry_type = read_string(map, field::LAUNDRY_TYPE, &mut errors).and_then(|s| {
            LaundryType::parse(s)
                .map_err(|e| errors.add(field::LAUNDRY_TYPE, e.to_string()))
                .ok()
        });

        let weight = read_number(map, field::WEIGHT, &mut errors).and_then(|w| {
            if !w.is_finite() {
                errors.add(field::WEIGHT, "Weight must be a finite number");
                None
            } else if w < WEIGHT_MIN_KG {
                errors.add(field::WEIGHT, "Weight must be at least 0.1 kg");
                None
            } else {
                Some(w)
            }
        });

        let status = read_string(map, field::STATUS, &mut errors).and_then(|s| {
            OrderStatus::parse(s)
                .map_err(|e| errors.add(field::STATUS, e.to_string()))
                .ok()
        });

        match (customer_name, phone_number, laundry_type, weight, status) {
            (
                Some(customer_name),
                Some(phone_number),
                Some(laundry_type),
                Some(weight),
                Some(status),
            ) => Ok(Self {
                customer_name: customer_name.to_owned(),
                phone_number: phone_number.to_owned(),
                laundry_type,
                weight,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// A stored laundry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone_number: String,
    pub laundry_type: LaundryType,
    pub weight: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Build a record from an id and a validated field set.
    #[must_use]
    pub fn from_input(id: OrderId, input: OrderInput) -> Self {
        Self {
            id,
            customer_name: input.customer_name,
            phone_number: input.phone_number,
            laundry_type: input.laundry_type,
            weight: input.weight,
            status: input.status,
        }
    }

    /// The record's fields without the id.
    #[must_use]
    pub fn to_input(&self) -> OrderInput {
        OrderInput {
            customer_name: self.customer_name.clone(),
            phone_number: self.phone_number.clone(),
            laundry_type: self.laundry_type,
            weight: self.weight,
            status: self.status,
        }
    }
}
