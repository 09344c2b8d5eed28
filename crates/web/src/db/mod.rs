//! In-memory record stores.
//!
//! # Stores
//!
//! - [`orders::OrderStore`] - Laundry orders, seeded with five sample orders
//! - [`users::UserStore`] - Users (username lookup, no uniqueness enforcement)
//!
//! All state is volatile: a restart drops every change and re-seeds the same
//! sample orders. Each store guards its map with a `tokio::sync::RwLock`, so
//! every operation is atomic as a single map operation. Methods are `async`
//! to keep the calling convention of a future persistence layer; none of
//! them perform I/O or can fail. Absence is reported as `None` / `false`.

pub mod orders;
pub mod seed;
pub mod users;

pub use orders::{OrderStore, OrderSummary};
pub use users::UserStore;
