//! Lunch Orders Library
//!
//! Track who ordered how many lunch portions for which day, driven by short
//! chat commands. This library provides functionality to:
//! - Resolve loose date expressions ("tomorrow", "fri", "mon-fri", "25-01")
//! - Store orders per customer and day
//! - Parse and run chat commands and format their replies
//!
//! # Example
//!
//! ```
//! use lunch_orders::command::handle_message;
//! use lunch_orders::date::CanonicalDate;
//! use lunch_orders::order::{MemoryStore, OrderService};
//!
//! let mut service = OrderService::new(MemoryStore::new());
//! let today: CanonicalDate = "2026-01-21".parse().unwrap();
//!
//! let reply = handle_message(&mut service, "/order Budi 2 tomorrow", today).unwrap();
//! assert_eq!(reply, "✅ Added: **Budi** - 2 portion(s) for Thu, 22 Jan 2026");
//! ```

pub mod command;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod logger;
pub mod order;

// Re-export commonly used items
pub use error::{Error, Result};
