//! Order store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use freshwash_core::{Order, OrderId, OrderInput, OrderStatus};

use super::seed;

/// Authoritative in-memory holder of all orders for the process lifetime.
#[derive(Debug, Default)]
pub struct OrderStore {
    table: RwLock<OrderTable>,
}

#[derive(Debug, Default)]
struct OrderTable {
    /// Insertion counter, used to list orders in creation order.
    next_seq: u64,
    rows: HashMap<OrderId, Row>,
}

#[derive(Debug)]
struct Row {
    seq: u64,
    order: Order,
}

/// Aggregate figures shown above the orders table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    /// Sum of all order weights, in kilograms.
    pub total_weight: f64,
}

impl OrderSummary {
    /// Tally a slice of orders.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut acc, order| {
            acc.total += 1;
            acc.total_weight += order.weight;
            match order.status {
                OrderStatus::Pending => acc.pending += 1,
                OrderStatus::Processing => acc.processing += 1,
                OrderStatus::Completed => acc.completed += 1,
            }
            acc
        })
    }
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the five sample orders.
    #[must_use]
    pub fn seeded() -> Self {
        let mut table = OrderTable::default();
        for input in seed::sample_orders() {
            table.insert(input);
        }
        tracing::debug!(count = table.rows.len(), "Seeded order store");
        Self {
            table: RwLock::new(table),
        }
    }

    /// Every stored order, in insertion order.
    ///
    /// The ordering is a convenience for display; callers must not rely on it.
    pub async fn list_all(&self) -> Vec<Order> {
        let table = self.table.read().await;
        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by_key(|row| row.seq);
        rows.into_iter().map(|row| row.order.clone()).collect()
    }

    /// Look up an order by id.
    pub async fn get_by_id(&self, id: OrderId) -> Option<Order> {
        let table = self.table.read().await;
        table.rows.get(&id).map(|row| row.order.clone())
    }

    /// Store a new order under a freshly generated id and return it.
    pub async fn create(&self, input: OrderInput) -> Order {
        let mut table = self.table.write().await;
        let order = table.insert(input);
        tracing::debug!(order_id = %order.id, "Order created");
        order
    }

    /// Replace every field of an existing order except its id.
    ///
    /// Returns `None` if no order has this id.
    pub async fn update(&self, id: OrderId, input: OrderInput) -> Option<Order> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id)?;
        row.order = Order::from_input(id, input);
        tracing::debug!(order_id = %id, "Order updated");
        Some(row.order.clone())
    }

    /// Remove an order. Returns whether a record was actually removed.
    pub async fn delete(&self, id: OrderId) -> bool {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(order_id = %id, "Order deleted");
        }
        removed
    }

    /// Totals across every stored order.
    pub async fn summary(&self) -> OrderSummary {
        OrderSummary::from_orders(&self.list_all().await)
    }
}

impl OrderTable {
    fn insert(&mut self, input: OrderInput) -> Order {
        let mut id = OrderId::generate();
        while self.rows.contains_key(&id) {
            id = OrderId::generate();
        }

        let order = Order::from_input(id, input);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(
            id,
            Row {
                seq,
                order: order.clone(),
            },
        );
        order
    }
}
