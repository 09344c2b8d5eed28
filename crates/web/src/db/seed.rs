//! Fixed sample orders loaded into every fresh order store.

use freshwash_core::{LaundryType, OrderInput, OrderStatus};

/// The five demo orders, in insertion order.
#[must_use]
pub fn sample_orders() -> Vec<OrderInput> {
    vec![
        OrderInput {
            customer_name: "Alice Johnson".to_string(),
            phone_number: "+1 (555) 123-4567".to_string(),
            laundry_type: LaundryType::WashAndIron,
            weight: 4.5,
            status: OrderStatus::Completed,
        },
        OrderInput {
            customer_name: "Bob Smith".to_string(),
            phone_number: "+1 (555) 234-5678".to_string(),
            laundry_type: LaundryType::DryClean,
            weight: 2.0,
            status: OrderStatus::Processing,
        },
        OrderInput {
            customer_name: "Carol White".to_string(),
            phone_number: "+1 (555) 345-6789".to_string(),
            laundry_type: LaundryType::Wash,
            weight: 6.2,
            status: OrderStatus::Pending,
        },
        OrderInput {
            customer_name: "David Brown".to_string(),
            phone_number: "+1 (555) 456-7890".to_string(),
            laundry_type: LaundryType::Iron,
            weight: 3.0,
            status: OrderStatus::Completed,
        },
        OrderInput {
            customer_name: "Eva Martinez".to_string(),
            phone_number: "+1 (555) 567-8901".to_string(),
            laundry_type: LaundryType::WashAndIron,
            weight: 5.5,
            status: OrderStatus::Processing,
        },
    ]
}
