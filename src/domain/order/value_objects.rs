use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price
    pub price: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// `quantity * price`, unrounded. Saturates at the `Decimal` bounds.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }
}

/// Order status tag.
///
/// The set is open: any text is accepted and lands in `Other`. Comparison is
/// an exact, case-sensitive match on the tag, so `"Completed"` is not
/// `OrderStatus::Completed`. `Other("completed")` and `Completed` carry the
/// same tag and are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Shipped,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Shipped => "shipped",
            Self::Other(tag) => tag,
        }
    }
}

impl PartialEq for OrderStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for OrderStatus {}

impl Hash for OrderStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for OrderStatus {
    fn from(tag: &str) -> Self {
        match tag {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "shipped" => Self::Shipped,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "pending" | "completed" | "shipped" => Self::from(tag.as_str()),
            _ => Self::Other(tag),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Money Formatting
// ============================================================================

/// Two-decimal monetary rendering, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Shortest decimal rendering of a unit price (`25.5`, `999.99`, `3`).
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
