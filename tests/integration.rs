//! Integration tests for the lunch orders library

use lunch_orders::command::handle_message;
use lunch_orders::date::{resolve, CanonicalDate, ParseResult};
use lunch_orders::order::{JsonStore, OrderService};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn date(s: &str) -> CanonicalDate {
    s.parse().expect("valid test date")
}

fn store_path(dir: &Path) -> PathBuf {
    dir.join("data").join("orders.json")
}

fn dates(result: &ParseResult) -> Vec<String> {
    result.dates().iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_resolve_documented_examples() {
    let test_cases = vec![
        (Some("tomorrow"), "2026-01-23", vec!["2026-01-24"]),
        (Some("25-01"), "2026-02-01", vec!["2027-01-25"]),
        (Some("25-01"), "2026-01-01", vec!["2026-01-25"]),
        (Some(""), "2026-01-23", vec!["2026-01-23"]),
        (None, "2026-01-23", vec!["2026-01-23"]),
        (Some("today"), "2026-01-23", vec!["2026-01-23"]),
        (Some("xyz123"), "2026-01-23", vec!["2026-01-23"]),
        (
            Some("mon-fri"),
            "2026-01-21",
            vec!["2026-01-26", "2026-01-27", "2026-01-28", "2026-01-29", "2026-01-30"],
        ),
    ];

    for (input, reference, expected) in test_cases {
        let result = resolve(input, date(reference));
        assert_eq!(
            dates(&result),
            expected,
            "Resolving {:?} against {} gave the wrong dates",
            input,
            reference
        );
    }
}

#[test]
fn test_resolve_range_is_tagged_as_range() {
    assert!(resolve(Some("mon-fri"), date("2026-01-21")).is_range());
    assert!(!resolve(Some("monday"), date("2026-01-21")).is_range());
    assert!(!resolve(Some("25-01"), date("2026-01-21")).is_range());
}

#[test]
fn test_orders_survive_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = store_path(temp_dir.path());
    let today = date("2026-01-21");

    {
        let store = JsonStore::open(&path).expect("Failed to open store");
        let mut service = OrderService::new(store);
        handle_message(&mut service, "/order Budi 2", today);
        handle_message(&mut service, "/order Andi 1 mon-fri", today);
        handle_message(&mut service, "/order budi 3", today);
    }

    assert!(path.exists(), "Store file was not created");

    let store = JsonStore::open(&path).expect("Failed to reopen store");
    let mut service = OrderService::new(store);

    let today_orders = service.orders_by_date(today).expect("Failed to list orders");
    assert_eq!(today_orders.len(), 1, "Upsert should keep one order per person and day");
    assert_eq!(today_orders[0].customer_name, "Budi");
    assert_eq!(today_orders[0].quantity, 3);

    let next_week = service
        .orders_between(date("2026-01-26"), date("2026-02-01"))
        .expect("Failed to list orders");
    assert_eq!(next_week.len(), 5);
    assert!(next_week.iter().all(|o| o.customer_name == "Andi"));

    let reply = handle_message(&mut service, "/delete andi wed", date("2026-01-27"))
        .expect("delete should reply");
    assert!(reply.contains("Deleted order for **andi** on Wed, 28 Jan 2026"), "reply: {}", reply);
}

#[test]
fn test_chat_session_transcript() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = JsonStore::open(store_path(temp_dir.path())).expect("Failed to open store");
    let mut service = OrderService::new(store);
    // Friday
    let today = date("2026-01-23");

    let transcript = vec![
        ("/order Budi 2", Some("✅ Added: **Budi** - 2 portion(s) for Fri, 23 Jan 2026")),
        ("/order Siti 1 fri-mon", None),
        ("lunch anyone?", None),
        (
            "/update Siti 4 sat",
            Some("✏️ Updated: **Siti** - 4 portion(s) for Sat, 24 Jan 2026"),
        ),
        (
            "/update Andi 1",
            Some("❌ No order found for **Andi** on that date. Use `/order` to add a new order."),
        ),
    ];

    for (message, expected) in transcript {
        let reply = handle_message(&mut service, message, today);
        if let Some(expected) = expected {
            assert_eq!(reply.as_deref(), Some(expected), "Unexpected reply to {:?}", message);
        }
    }

    let reply = handle_message(&mut service, "/week", today).expect("week should reply");
    assert!(reply.contains("**Fri, 23 Jan** (3)"), "reply: {}", reply);
    assert!(reply.contains("**Sat, 24 Jan** (4)"), "reply: {}", reply);
    assert!(reply.contains("**Sun, 25 Jan** (1)"), "reply: {}", reply);
    // Monday 26th belongs to next week
    assert!(!reply.contains("Mon, 26 Jan"), "reply: {}", reply);
    assert!(reply.contains("Week Total: 8 portion(s)"), "reply: {}", reply);
}

#[test]
fn test_corrupt_store_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("orders.json");
    std::fs::write(&path, "{ broken").expect("Failed to write fixture");

    let result = JsonStore::open(&path);
    assert!(result.is_err(), "Should fail on an unreadable store file");

    if let Err(e) = result {
        assert!(
            e.to_string().contains("orders.json"),
            "Error should name the store file: {}",
            e
        );
    }
}
