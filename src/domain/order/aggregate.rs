use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value_objects::{format_money, LineItem, OrderStatus};

// ============================================================================
// Order - Purchase order record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: u32,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items,
            status,
        }
    }

    /// Unrounded order value; zero for an order without items.
    /// Saturates rather than overflowing on absurd inputs.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn formatted_total(&self) -> String {
        format_money(self.total())
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
