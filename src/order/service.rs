//! Order management on top of an [`OrderRepository`]

use std::collections::BTreeMap;

use super::model::{NewOrder, Order};
use super::store::OrderRepository;
use crate::date::CanonicalDate;
use crate::error::{Error, Result};

/// Add, change and look up orders
pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record `quantity` portions for `customer_name` on `date`
    ///
    /// If the customer already has an order that day its quantity is
    /// replaced rather than a second order being added.
    pub fn add_order(
        &mut self,
        customer_name: &str,
        quantity: u32,
        date: CanonicalDate,
    ) -> Result<Order> {
        check_quantity(quantity)?;

        if let Some(existing) = self.repo.find(customer_name, date)? {
            tracing::debug!(
                id = existing.id,
                customer = %existing.customer_name,
                %date,
                quantity,
                "replacing order quantity"
            );
            if let Some(updated) = self.repo.set_quantity(existing.id, quantity)? {
                return Ok(updated);
            }
        }

        let order = self.repo.insert(NewOrder {
            customer_name: customer_name.trim().to_string(),
            quantity,
            order_date: date,
        })?;
        tracing::info!(
            id = order.id,
            customer = %order.customer_name,
            %date,
            quantity,
            "order added"
        );
        Ok(order)
    }

    /// [`add_order`](Self::add_order) for each date in turn
    pub fn add_bulk_orders(
        &mut self,
        customer_name: &str,
        quantity: u32,
        dates: &[CanonicalDate],
    ) -> Result<Vec<Order>> {
        dates
            .iter()
            .map(|&date| self.add_order(customer_name, quantity, date))
            .collect()
    }

    /// Orders for one day, by customer name
    pub fn orders_by_date(&self, date: CanonicalDate) -> Result<Vec<Order>> {
        self.repo.by_date(date)
    }

    /// Orders from `start` through `end`, by date then customer name
    pub fn orders_between(&self, start: CanonicalDate, end: CanonicalDate) -> Result<Vec<Order>> {
        self.repo.between(start, end)
    }

    /// Delete the customer's order on `date`; `false` if there was none
    pub fn delete_order(&mut self, customer_name: &str, date: CanonicalDate) -> Result<bool> {
        let removed = self.repo.remove(customer_name, date)?;
        if let Some(order) = &removed {
            tracing::info!(id = order.id, customer = %order.customer_name, %date, "order deleted");
        }
        Ok(removed.is_some())
    }

    /// Change the quantity of an existing order; never creates one
    pub fn update_order(
        &mut self,
        customer_name: &str,
        quantity: u32,
        date: CanonicalDate,
    ) -> Result<Option<Order>> {
        check_quantity(quantity)?;

        let Some(existing) = self.repo.find(customer_name, date)? else {
            return Ok(None);
        };
        let updated = self.repo.set_quantity(existing.id, quantity)?;
        if let Some(order) = &updated {
            tracing::info!(
                id = order.id,
                customer = %order.customer_name,
                %date,
                quantity,
                "order updated"
            );
        }
        Ok(updated)
    }
}

fn check_quantity(quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(Error::InvalidQuantity("quantity must be at least 1".to_string()));
    }
    Ok(())
}

/// Group orders by day, keeping their order within each day
pub fn group_by_date(orders: Vec<Order>) -> BTreeMap<CanonicalDate, Vec<Order>> {
    let mut grouped: BTreeMap<CanonicalDate, Vec<Order>> = BTreeMap::new();
    for order in orders {
        grouped.entry(order.order_date).or_default().push(order);
    }
    grouped
}
