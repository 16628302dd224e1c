//! Order tracking module

pub mod model;
pub mod service;
pub mod store;

// Re-export commonly used items
pub use model::{NewOrder, Order};
pub use service::{group_by_date, OrderService};
pub use store::{JsonStore, MemoryStore, OrderRepository};
