use anyhow::Result;
use rust_decimal::Decimal;

use super::aggregate::Order;
use super::value_objects::{LineItem, OrderStatus};

// ============================================================================
// Order Store - Owned, ordered collection of orders
// ============================================================================
//
// Orders are appended and never removed, so `len() + 1` always yields an
// unused id. Every creation path goes through `push_new`, which needs
// `&mut self`.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the five demo orders
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.push_new(
            "Edelbert",
            vec![
                LineItem::new("Laptop", 1, Decimal::new(99999, 2)),
                LineItem::new("Mouse", 2, Decimal::new(2550, 2)),
            ],
            OrderStatus::Completed,
        );
        store.push_new(
            "Mark Ace",
            vec![
                LineItem::new("Smartphone", 1, Decimal::new(69999, 2)),
                LineItem::new("Case", 1, Decimal::new(1999, 2)),
                LineItem::new("Screen Protector", 2, Decimal::new(999, 2)),
            ],
            OrderStatus::Pending,
        );
        store.push_new(
            "Mark Labitag",
            vec![
                LineItem::new("Tablet", 1, Decimal::new(39999, 2)),
                LineItem::new("Keyboard", 1, Decimal::new(7999, 2)),
            ],
            OrderStatus::Completed,
        );
        store.push_new(
            "Edelbert",
            vec![
                LineItem::new("Monitor", 2, Decimal::new(19999, 2)),
                LineItem::new("HDMI Cable", 3, Decimal::new(1299, 2)),
            ],
            OrderStatus::Shipped,
        );
        store.push_new(
            "Justine",
            vec![LineItem::new("Headphones", 1, Decimal::new(14999, 2))],
            OrderStatus::Completed,
        );

        store
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Append a new order; status defaults to `pending`. Inputs are not validated.
    pub fn add_order(
        &mut self,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        status: Option<OrderStatus>,
    ) -> &Order {
        let order = self.push_new(customer_name, items, status.unwrap_or_default());

        tracing::info!(
            order_id = order.id,
            customer = %order.customer_name,
            item_count = order.items.len(),
            status = %order.status,
            "Added order"
        );

        order
    }

    /// Replace the status of the first order with `order_id`.
    ///
    /// Returns `None` and leaves the store untouched when no order matches.
    pub fn update_order_status(
        &mut self,
        order_id: u32,
        new_status: OrderStatus,
    ) -> Option<&Order> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            tracing::warn!(order_id, "Status update for unknown order");
            return None;
        };

        tracing::info!(
            order_id,
            from = %order.status,
            to = %new_status,
            "Updating order status"
        );
        order.status = new_status;

        Some(&*order)
    }

    pub fn get_order_by_id(&self, order_id: u32) -> Option<&Order> {
        let found = self.orders.iter().find(|o| o.id == order_id);
        tracing::debug!(order_id, found = found.is_some(), "Order lookup");
        found
    }

    /// Pretty JSON snapshot of the current contents
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.orders)?)
    }

    pub(crate) fn next_id(&self) -> u32 {
        u32::try_from(self.orders.len()).unwrap_or(u32::MAX).saturating_add(1)
    }

    pub(crate) fn push_new(
        &mut self,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        status: OrderStatus,
    ) -> &Order {
        let order = Order::new(self.next_id(), customer_name, items, status);
        let index = self.orders.len();
        self.orders.push(order);
        &self.orders[index]
    }
}

impl<'a> IntoIterator for &'a OrderStore {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
