//! Type definitions and conversions for order views.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use freshwash_core::order::field;
use freshwash_core::{LaundryType, Order, OrderStatus, ValidationErrors};

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for the orders list.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Case-insensitive customer name search.
    pub q: Option<String>,
    /// Status filter: `all` or one of the order statuses.
    pub status: Option<String>,
    /// Flash notice key set by the redirect after a mutation.
    pub notice: Option<String>,
}

/// Status filter for the orders list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Query value for "no filter".
    pub const ALL_VALUE: &'static str = "all";

    /// Parse the `status` query parameter. Unknown values mean no filter.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|s| OrderStatus::parse(s).ok())
            .map_or(Self::All, Self::Only)
    }

    /// Query value for this filter.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(status) => status.as_str(),
        }
    }

    /// Whether an order passes this filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => order.status == *status,
        }
    }
}

/// Keep the orders whose customer name contains `search` (case-insensitive)
/// and whose status passes `status`.
#[must_use]
pub fn filter_orders(orders: Vec<Order>, search: &str, status: StatusFilter) -> Vec<Order> {
    let needle = search.to_lowercase();
    orders
        .into_iter()
        .filter(|order| order.customer_name.to_lowercase().contains(&needle))
        .filter(|order| status.matches(order))
        .collect()
}

/// Flash message shown after a redirect back to the orders list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
}

impl Notice {
    /// Parse the `notice` query parameter.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param? {
            "created" => Some(Self::Created),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }

    /// Query value for this notice.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Created => "Order created",
            Self::Updated => "Order updated",
            Self::Deleted => "Order deleted",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Created => "Your laundry order has been successfully placed.",
            Self::Updated => "The order has been successfully updated.",
            Self::Deleted => "The order has been successfully removed.",
        }
    }

    /// Orders list URL carrying this notice.
    #[must_use]
    pub fn redirect_url(&self) -> String {
        format!("/orders?notice={}", self.as_param())
    }
}

// =============================================================================
// Form Input
// =============================================================================

/// Create/edit order form data.
///
/// Every field arrives as text. [`OrderForm::to_value`] shapes it into the
/// same JSON object the REST API receives, so both surfaces go through
/// `OrderInput::validate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub laundry_type: Option<String>,
    pub weight: Option<String>,
    pub status: Option<String>,
}

impl OrderForm {
    /// Convert into a JSON object for validation.
    ///
    /// Absent fields stay absent. `weight` becomes a number when it parses as a
    /// finite float and is left as text otherwise; a blank weight is absent.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        let text_fields = [
            (field::CUSTOMER_NAME, &self.customer_name),
            (field::PHONE_NUMBER, &self.phone_number),
            (field::LAUNDRY_TYPE, &self.laundry_type),
            (field::STATUS, &self.status),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        if let Some(raw) = self.weight.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
            let weight = raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(raw.to_string()), Value::Number);
            map.insert(field::WEIGHT.to_string(), weight);
        }

        Value::Object(map)
    }
}

// =============================================================================
// View Types
// =============================================================================

/// A `<select>` option.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Laundry type dropdown options with `current` selected.
#[must_use]
pub fn laundry_type_options(current: &str) -> Vec<OptionView> {
    LaundryType::ALL
        .iter()
        .map(|t| OptionView {
            value: t.as_str(),
            label: t.as_str(),
            selected: t.as_str() == current,
        })
        .collect()
}

/// Order status dropdown options with `current` selected.
#[must_use]
pub fn status_options(current: &str) -> Vec<OptionView> {
    OrderStatus::ALL
        .iter()
        .map(|s| OptionView {
            value: s.as_str(),
            label: s.as_str(),
            selected: s.as_str() == current,
        })
        .collect()
}

/// Status filter options for the list page, "All Statuses" first.
#[must_use]
pub fn status_filter_options(current: StatusFilter) -> Vec<OptionView> {
    std::iter::once(OptionView {
        value: StatusFilter::ALL_VALUE,
        label: "All Statuses",
        selected: current == StatusFilter::All,
    })
    .chain(OrderStatus::ALL.iter().map(|s| OptionView {
        value: s.as_str(),
        label: s.as_str(),
        selected: current == StatusFilter::Only(*s),
    }))
    .collect()
}

/// Values and errors for re-rendering the order form.
#[derive(Debug, Clone, Default)]
pub struct OrderFormView {
    pub customer_name: String,
    pub phone_number: String,
    pub laundry_type: String,
    pub weight: String,
    pub status: String,
    pub errors: ValidationErrors,
}

impl OrderFormView {
    /// Blank form for a new order.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            status: OrderStatus::default().as_str().to_string(),
            ..Self::default()
        }
    }

    /// Submitted values plus the errors they produced.
    #[must_use]
    pub fn from_submission(form: OrderForm, errors: ValidationErrors) -> Self {
        Self {
            customer_name: form.customer_name.unwrap_or_default(),
            phone_number: form.phone_number.unwrap_or_default(),
            laundry_type: form.laundry_type.unwrap_or_default(),
            weight: form.weight.unwrap_or_default(),
            status: form.status.unwrap_or_default(),
            errors,
        }
    }

    /// Error message for a field, if it failed validation.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

impl From<&Order> for OrderFormView {
    fn from(order: &Order) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.clone(),
            laundry_type: order.laundry_type.as_str().to_string(),
            weight: order.weight.to_string(),
            status: order.status.as_str().to_string(),
            errors: ValidationErrors::new(),
        }
    }
}

/// Order row for the list table.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    /// First 8 characters of the id, for display.
    pub short_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub laundry_type: &'static str,
    pub weight: f64,
    pub status: &'static str,
    pub badge_class: &'static str,
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        let id = order.id.to_string();
        Self {
            short_id: short_id(&id),
            id,
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.clone(),
            laundry_type: order.laundry_type.as_str(),
            weight: order.weight,
            status: order.status.as_str(),
            badge_class: badge_class(order.status),
        }
    }
}

/// First 8 characters of an id.
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// CSS badge modifier for a status.
const fn badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "badge badge-default",
        OrderStatus::Processing => "badge badge-secondary",
        OrderStatus::Pending => "badge badge-outline",
    }
}
