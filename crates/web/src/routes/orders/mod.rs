//! Order management screens.

pub mod form;
pub mod list;
pub mod types;
