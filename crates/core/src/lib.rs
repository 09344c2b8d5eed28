//! FreshWash Core - Shared types and validation schema.
//!
//! This crate provides the record shapes and acceptance rules used by every
//! FreshWash component:
//! - `web` - Landing page, order screens and the REST API
//! - `integration-tests` - End-to-end tests against a spawned server
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage,
//! no HTTP. The same [`schema`] functions gate both the HTML forms and the
//! JSON API, so the two surfaces can never disagree about what a valid order
//! looks like.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the laundry type / order status enumerations
//! - [`schema`] - Order and User records plus their validators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;
