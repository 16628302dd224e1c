//! Reply texts
//!
//! Everything a command sends back is built here, as Markdown.

use std::collections::BTreeMap;

use crate::date::{format_date, format_short_date, CanonicalDate};
use crate::order::Order;

/// Confirmation for a single added order
pub fn order_added(name: &str, quantity: u32, date: CanonicalDate) -> String {
    format!("✅ Added: **{}** - {} portion(s) for {}", name, quantity, format_date(date))
}

/// Confirmation for an order placed over several days
pub fn bulk_orders_added(name: &str, quantity: u32, dates: &[CanonicalDate]) -> String {
    let lines: Vec<String> = dates
        .iter()
        .map(|&d| format!("  • {}: {} portion(s)", format_short_date(d), quantity))
        .collect();
    format!("✅ Added {} orders for **{}**:\n{}", dates.len(), name, lines.join("\n"))
}

/// The orders for one day with a total
pub fn orders_list(orders: &[Order], date: CanonicalDate) -> String {
    let heading = format!("📋 **Orders for {}**", format_date(date));
    if orders.is_empty() {
        return format!("{}\n\n_No orders yet_", heading);
    }

    let total: u32 = orders.iter().map(|o| o.quantity).sum();
    let lines: Vec<String> = orders
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}. {} - {} portion(s)", i + 1, o.customer_name, o.quantity))
        .collect();

    format!("{}\n\n{}\n\n📊 **Total: {} portion(s)**", heading, lines.join("\n"), total)
}

/// One section per day, with day totals and a week total
pub fn weekly_orders(orders_by_date: &BTreeMap<CanonicalDate, Vec<Order>>) -> String {
    const HEADING: &str = "📋 **This Week's Orders**";

    let mut week_total = 0;
    let mut sections = Vec::new();

    for (&date, orders) in orders_by_date {
        if orders.is_empty() {
            continue;
        }
        let day_total: u32 = orders.iter().map(|o| o.quantity).sum();
        week_total += day_total;

        let lines: Vec<String> = orders
            .iter()
            .map(|o| format!("  • {}: {}", o.customer_name, o.quantity))
            .collect();
        sections.push(format!(
            "**{}** ({})\n{}",
            format_short_date(date),
            day_total,
            lines.join("\n")
        ));
    }

    if sections.is_empty() {
        return format!("{}\n\n_No orders this week_", HEADING);
    }

    format!(
        "{}\n\n{}\n\n📊 **Week Total: {} portion(s)**",
        HEADING,
        sections.join("\n\n"),
        week_total
    )
}

pub fn order_deleted(name: &str, date: CanonicalDate) -> String {
    format!("🗑️ Deleted order for **{}** on {}", name, format_date(date))
}

pub fn order_updated(name: &str, quantity: u32, date: CanonicalDate) -> String {
    format!("✏️ Updated: **{}** - {} portion(s) for {}", name, quantity, format_date(date))
}

pub fn error(message: &str) -> String {
    format!("❌ {}", message)
}

pub fn unknown_command() -> String {
    "❓ Unknown command. Type `/help` to see available commands.".to_string()
}

pub fn help() -> String {
    "🍱 **Lunch Order Bot**

**Adding Orders:**
`/order <name> <qty>` - Order for today
`/order <name> <qty> tomorrow` - Order for tomorrow
`/order <name> <qty> mon` - Order for next Monday
`/order <name> <qty> 25-01` - Order for specific date
`/order <name> <qty> mon-fri` - Order Mon to Fri

**Viewing Orders:**
`/today` - Show today's orders
`/tomorrow` - Show tomorrow's orders
`/check <date>` - Show orders for date
`/week` - Show this week's orders

**Managing Orders:**
`/delete <name> [date]` - Delete order
`/update <name> <qty> [date]` - Update quantity

**Examples:**
`/order Budi 2`
`/order Siti 1 tomorrow`
`/order Andi 1 mon-fri`
`/today`
`/delete Budi tomorrow`"
        .to_string()
}

pub fn welcome() -> String {
    "👋 **Welcome to Lunch Order Bot!**

I'll help you manage lunch orders for your team.

Quick start:
• `/order Budi 2` - Add order for today
• `/today` - View today's orders
• `/help` - See all commands

Let's get started! 🚀"
        .to_string()
}
