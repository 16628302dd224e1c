//! Chat commands
//!
//! Parses lines such as `/order Budi 2 mon-fri` into a [`Command`] and
//! runs them against an [`OrderService`], producing the reply text.

use thiserror::Error;

use crate::date::{resolve, this_week, CanonicalDate, ParseResult};
use crate::format;
use crate::order::{group_by_date, OrderRepository, OrderService};

const ORDER_USAGE: &str = "Usage: `/order <name> <quantity> [date]`\nExample: `/order Budi 2 tomorrow`";
const DELETE_USAGE: &str = "Usage: `/delete <name> [date]`\nExample: `/delete Budi tomorrow`";
const UPDATE_USAGE: &str = "Usage: `/update <name> <quantity> [date]`\nExample: `/update Budi 3 tomorrow`";

/// A recognised chat command with its arguments
///
/// Dates stay as the text the user typed; they are resolved when the
/// command runs so the reference day is the day of execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Order { name: String, quantity: u32, date: Option<String> },
    Today,
    Tomorrow,
    Check { date: Option<String> },
    Week,
    Delete { name: String, date: Option<String> },
    Update { name: String, quantity: u32, date: Option<String> },
}

/// Why a chat line is not a runnable command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Plain text, not addressed to the bot
    #[error("not a command")]
    NotACommand,

    #[error("unknown command: /{0}")]
    Unknown(String),

    /// Missing arguments; carries the usage text for the command
    #[error("{0}")]
    Usage(&'static str),

    #[error("Quantity must be a positive number.")]
    InvalidQuantity,
}

impl CommandError {
    /// What to tell the user, if anything
    pub fn reply(&self) -> Option<String> {
        match self {
            CommandError::NotACommand => None,
            CommandError::Unknown(_) => Some(format::unknown_command()),
            CommandError::Usage(_) | CommandError::InvalidQuantity => {
                Some(format::error(&self.to_string()))
            }
        }
    }
}

impl Command {
    /// Parse one chat line
    ///
    /// The command word may carry a `@botname` suffix and is matched
    /// case-insensitively. Words after the fixed arguments are joined with
    /// single spaces to form the date expression.
    pub fn parse(text: &str) -> Result<Command, CommandError> {
        let mut words = text.split_whitespace();
        let head = words.next().ok_or(CommandError::NotACommand)?;
        let name = head.strip_prefix('/').ok_or(CommandError::NotACommand)?;
        let name = name.split('@').next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match name.as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "today" => Ok(Command::Today),
            "tomorrow" => Ok(Command::Tomorrow),
            "week" => Ok(Command::Week),
            "check" => Ok(Command::Check { date: join_date(&args) }),
            "order" => {
                let [name, quantity, rest @ ..] = args.as_slice() else {
                    return Err(CommandError::Usage(ORDER_USAGE));
                };
                Ok(Command::Order {
                    name: name.to_string(),
                    quantity: parse_quantity(quantity)?,
                    date: join_date(rest),
                })
            }
            "delete" => {
                let [name, rest @ ..] = args.as_slice() else {
                    return Err(CommandError::Usage(DELETE_USAGE));
                };
                Ok(Command::Delete {
                    name: name.to_string(),
                    date: join_date(rest),
                })
            }
            "update" => {
                let [name, quantity, rest @ ..] = args.as_slice() else {
                    return Err(CommandError::Usage(UPDATE_USAGE));
                };
                Ok(Command::Update {
                    name: name.to_string(),
                    quantity: parse_quantity(quantity)?,
                    date: join_date(rest),
                })
            }
            _ => Err(CommandError::Unknown(name.clone())),
        }
    }
}

fn join_date(words: &[&str]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

fn parse_quantity(text: &str) -> Result<u32, CommandError> {
    match text.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(CommandError::InvalidQuantity),
    }
}

/// Run a command and build its reply
///
/// `today` is the reference day for every date expression. Store failures
/// are logged and reported to the user as a retry message.
pub fn execute<R: OrderRepository>(
    service: &mut OrderService<R>,
    command: &Command,
    today: CanonicalDate,
) -> String {
    tracing::debug!(?command, %today, "executing command");

    match command {
        Command::Start => format::welcome(),
        Command::Help => format::help(),
        Command::Order { name, quantity, date } => {
            let resolved = resolve(date.as_deref(), today);
            let result = match &resolved {
                ParseResult::Single(day) => service
                    .add_order(name, *quantity, *day)
                    .map(|o| format::order_added(&o.customer_name, o.quantity, o.order_date)),
                ParseResult::Range(days) => service
                    .add_bulk_orders(name, *quantity, days.as_slice())
                    .map(|_| format::bulk_orders_added(name, *quantity, days.as_slice())),
            };
            result.unwrap_or_else(|e| failed("adding order", "Failed to add order.", &e))
        }
        Command::Today => list_day(service, today),
        Command::Tomorrow => list_day(service, today.add_days(1)),
        Command::Check { date } => list_day(service, resolve(date.as_deref(), today).first()),
        Command::Week => {
            let week = this_week(today);
            match service.orders_between(week.first(), week.last()) {
                Ok(orders) => format::weekly_orders(&group_by_date(orders)),
                Err(e) => failed("fetching weekly orders", "Failed to fetch orders.", &e),
            }
        }
        Command::Delete { name, date } => {
            let day = resolve(date.as_deref(), today).first();
            match service.delete_order(name, day) {
                Ok(true) => format::order_deleted(name, day),
                Ok(false) => {
                    format::error(&format!("No order found for **{}** on that date.", name))
                }
                Err(e) => failed("deleting order", "Failed to delete order.", &e),
            }
        }
        Command::Update { name, quantity, date } => {
            let day = resolve(date.as_deref(), today).first();
            match service.update_order(name, *quantity, day) {
                Ok(Some(o)) => format::order_updated(&o.customer_name, o.quantity, o.order_date),
                Ok(None) => format::error(&format!(
                    "No order found for **{}** on that date. Use `/order` to add a new order.",
                    name
                )),
                Err(e) => failed("updating order", "Failed to update order.", &e),
            }
        }
    }
}

/// Parse and run one chat line; `None` for text that is not a command
pub fn handle_message<R: OrderRepository>(
    service: &mut OrderService<R>,
    text: &str,
    today: CanonicalDate,
) -> Option<String> {
    match Command::parse(text) {
        Ok(command) => Some(execute(service, &command, today)),
        Err(e) => {
            if !matches!(e, CommandError::NotACommand) {
                tracing::debug!(error = %e, text, "rejected command");
            }
            e.reply()
        }
    }
}

fn list_day<R: OrderRepository>(service: &OrderService<R>, day: CanonicalDate) -> String {
    match service.orders_by_date(day) {
        Ok(orders) => format::orders_list(&orders, day),
        Err(e) => failed("fetching orders", "Failed to fetch orders.", &e),
    }
}

fn failed(action: &str, message: &str, err: &crate::Error) -> String {
    tracing::error!(error = %err, "error {}", action);
    format::error(&format!("{} Please try again.", message))
}
