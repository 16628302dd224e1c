//! Order storage
//!
//! [`OrderRepository`] is what the service talks to. [`MemoryStore`] keeps
//! orders for the life of the process; [`JsonStore`] keeps them in a JSON
//! file that is rewritten after every change.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::model::{same_customer, NewOrder, Order};
use crate::date::CanonicalDate;
use crate::error::{Error, Result};

/// Persistence operations needed by the order service
pub trait OrderRepository {
    /// The order for `customer_name` (any case) on `date`
    fn find(&self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>>;

    /// Store a new order, assigning its id and timestamps
    fn insert(&mut self, order: NewOrder) -> Result<Order>;

    /// Change the quantity of order `id`; `None` if there is no such order
    fn set_quantity(&mut self, id: u64, quantity: u32) -> Result<Option<Order>>;

    /// Remove the order for `customer_name` on `date`, returning it
    fn remove(&mut self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>>;

    /// Orders for one day, by customer name
    fn by_date(&self, date: CanonicalDate) -> Result<Vec<Order>>;

    /// Orders from `start` through `end` inclusive, by date then customer name
    fn between(&self, start: CanonicalDate, end: CanonicalDate) -> Result<Vec<Order>>;
}

/// The full set of orders plus the id counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct OrderTable {
    next_id: u64,
    orders: Vec<Order>,
}

impl OrderTable {
    fn find(&self, customer_name: &str, date: CanonicalDate) -> Option<Order> {
        self.orders.iter().find(|o| o.is_for(customer_name, date)).cloned()
    }

    fn insert(&mut self, order: NewOrder) -> Order {
        self.next_id += 1;
        let now = Utc::now();
        let order = Order {
            id: self.next_id,
            customer_name: order.customer_name.trim().to_string(),
            quantity: order.quantity,
            order_date: order.order_date,
            created_at: now,
            updated_at: now,
        };
        self.orders.push(order.clone());
        order
    }

    fn set_quantity(&mut self, id: u64, quantity: u32) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.quantity = quantity;
        order.updated_at = Utc::now();
        Some(order.clone())
    }

    fn remove(&mut self, customer_name: &str, date: CanonicalDate) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.is_for(customer_name, date))?;
        Some(self.orders.remove(index))
    }

    fn select(&self, start: CanonicalDate, end: CanonicalDate) -> Vec<Order> {
        let mut selected: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.order_date >= start && o.order_date <= end)
            .cloned()
            .collect();
        selected.sort_by_cached_key(|o| (o.order_date, o.customer_name.to_lowercase(), o.id));
        selected
    }

    /// Check a table read from disk
    ///
    /// Ids must be unique, and so must (customer, date) pairs. `next_id` is
    /// raised to the largest stored id so new orders never reuse one.
    fn validate(&mut self) -> std::result::Result<(), String> {
        for (i, order) in self.orders.iter().enumerate() {
            let rest = &self.orders[i + 1..];
            if rest.iter().any(|other| other.id == order.id) {
                return Err(format!("duplicate order id {}", order.id));
            }
            let duplicate = rest.iter().any(|other| {
                other.order_date == order.order_date
                    && same_customer(&other.customer_name, &order.customer_name)
            });
            if duplicate {
                return Err(format!(
                    "duplicate orders for {} on {}",
                    order.customer_name, order.order_date
                ));
            }
        }

        let highest = self.orders.iter().map(|o| o.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(highest);
        Ok(())
    }
}

/// Volatile in-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: OrderTable,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for MemoryStore {
    fn find(&self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>> {
        Ok(self.table.find(customer_name, date))
    }

    fn insert(&mut self, order: NewOrder) -> Result<Order> {
        Ok(self.table.insert(order))
    }

    fn set_quantity(&mut self, id: u64, quantity: u32) -> Result<Option<Order>> {
        Ok(self.table.set_quantity(id, quantity))
    }

    fn remove(&mut self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>> {
        Ok(self.table.remove(customer_name, date))
    }

    fn by_date(&self, date: CanonicalDate) -> Result<Vec<Order>> {
        Ok(self.table.select(date, date))
    }

    fn between(&self, start: CanonicalDate, end: CanonicalDate) -> Result<Vec<Order>> {
        Ok(self.table.select(start, end))
    }
}

/// Store backed by a JSON file
///
/// The file is read once on [`JsonStore::open`] and rewritten through a
/// temporary sibling file after each change, so a crash mid-write leaves the
/// previous version intact. Changes are made to a copy of the table and
/// only become visible once that copy is on disk.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    table: OrderTable,
}

impl JsonStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// The parent directory is created when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let table = if path.exists() {
            let data = fs::read(&path)?;
            let mut table: OrderTable = serde_json::from_slice(&data).map_err(|e| Error::Store {
                path: path.clone(),
                message: e.to_string(),
            })?;
            table.validate().map_err(|message| Error::Store {
                path: path.clone(),
                message,
            })?;
            table
        } else {
            OrderTable::default()
        };

        tracing::debug!(path = %path.display(), orders = table.orders.len(), "opened order store");
        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `table` to disk, then make it the current table
    fn commit(&mut self, table: OrderTable) -> Result<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let data = serde_json::to_vec_pretty(&table)?;
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;

        tracing::trace!(
            path = %self.path.display(),
            orders = table.orders.len(),
            "saved order store"
        );
        self.table = table;
        Ok(())
    }
}

impl OrderRepository for JsonStore {
    fn find(&self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>> {
        Ok(self.table.find(customer_name, date))
    }

    fn insert(&mut self, order: NewOrder) -> Result<Order> {
        let mut table = self.table.clone();
        let order = table.insert(order);
        self.commit(table)?;
        Ok(order)
    }

    fn set_quantity(&mut self, id: u64, quantity: u32) -> Result<Option<Order>> {
        let mut table = self.table.clone();
        let Some(updated) = table.set_quantity(id, quantity) else {
            return Ok(None);
        };
        self.commit(table)?;
        Ok(Some(updated))
    }

    fn remove(&mut self, customer_name: &str, date: CanonicalDate) -> Result<Option<Order>> {
        let mut table = self.table.clone();
        let Some(removed) = table.remove(customer_name, date) else {
            return Ok(None);
        };
        self.commit(table)?;
        Ok(Some(removed))
    }

    fn by_date(&self, date: CanonicalDate) -> Result<Vec<Order>> {
        Ok(self.table.select(date, date))
    }

    fn between(&self, start: CanonicalDate, end: CanonicalDate) -> Result<Vec<Order>> {
        Ok(self.table.select(start, end))
    }
}
