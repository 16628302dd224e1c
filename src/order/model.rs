//! Order records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::CanonicalDate;

/// A customer's portion count for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier
    pub id: u64,
    /// Name as first entered, trimmed
    pub customer_name: String,
    /// Number of portions (always positive)
    pub quantity: u32,
    /// Day the order is for
    pub order_date: CanonicalDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether this order belongs to `customer_name` on `date`
    ///
    /// Names compare case-insensitively so "budi" finds Budi's order.
    pub fn is_for(&self, customer_name: &str, date: CanonicalDate) -> bool {
        self.order_date == date && same_customer(&self.customer_name, customer_name)
    }
}

/// Payload for inserting an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub quantity: u32,
    pub order_date: CanonicalDate,
}

pub(crate) fn same_customer(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
