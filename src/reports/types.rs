use serde::Serialize;

use crate::domain::order::{Order, OrderStatus};

// ============================================================================
// Report Views
// ============================================================================

/// Order with the greatest total value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargestOrder<'a> {
    pub order: &'a Order,
    pub total_value: String,
}

/// All orders of one customer, in store order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerOrders<'a> {
    pub customer_name: &'a str,
    pub orders: Vec<&'a Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount<'a> {
    pub status: &'a OrderStatus,
    pub count: usize,
}

/// Everything the statistics block shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics<'a> {
    pub total_revenue: String,
    pub largest_order: Option<LargestOrder<'a>>,
    pub status_counts: Vec<StatusCount<'a>>,
}
