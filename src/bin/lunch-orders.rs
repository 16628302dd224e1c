//! Lunch Orders CLI tool
//!
//! Record and inspect lunch orders from the command line, or run the
//! chat-style command loop on stdin.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};

use lunch_orders::command::{execute, handle_message, Command};
use lunch_orders::config::Config;
use lunch_orders::date::{resolve, CanonicalDate};
use lunch_orders::logger;
use lunch_orders::order::{JsonStore, OrderService};

/// Lunch Orders - Track lunch portions per person and day
#[derive(Parser)]
#[command(name = "lunch-orders")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "DATE EXPRESSIONS:
    today, tomorrow, mon, friday, mon-fri, fri-mon,
    2026-01-25, 25-01-2026, 25-01, 25/01/2026, 25/01, 25 Jan, Jan 25

EXAMPLES:
    # Two portions for Budi today
    lunch-orders order Budi 2

    # One portion every weekday next week
    lunch-orders order Andi 1 mon-fri

    # See what's ordered for Friday
    lunch-orders check fri

    # Type chat commands (/order, /week, ...) on stdin
    lunch-orders chat")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add or replace an order
    Order {
        /// Customer name
        name: String,

        /// Number of portions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// When (defaults to today)
        date: Vec<String>,
    },

    /// Show today's orders
    Today,

    /// Show tomorrow's orders
    Tomorrow,

    /// Show orders for a date
    Check {
        /// When (defaults to today)
        date: Vec<String>,
    },

    /// Show this week's orders, Monday to Sunday
    Week,

    /// Delete an order
    Delete {
        /// Customer name
        name: String,

        /// When (defaults to today)
        date: Vec<String>,
    },

    /// Change the quantity of an existing order
    Update {
        /// Customer name
        name: String,

        /// New number of portions
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// When (defaults to today)
        date: Vec<String>,
    },

    /// Print the dates a date expression resolves to
    Resolve {
        /// Date expression (defaults to today)
        date: Vec<String>,
    },

    /// Read chat commands from stdin, one per line
    Chat,
}

/// Words after the fixed arguments form the date expression
fn date_arg(words: Vec<String>) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

/// The local calendar day; read per command so a long chat session rolls over
fn today() -> anyhow::Result<CanonicalDate> {
    let now = Local::now().date_naive();
    CanonicalDate::new(now).with_context(|| format!("Local date {} is out of range", now))
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.config.verbose);

    if let Err(e) = run(cli) {
        tracing::error!(error = %format!("{:#}", e), "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = match cli.command {
        Commands::Resolve { date } => return cmd_resolve(date_arg(date)),
        Commands::Chat => return cmd_chat(&cli.config),
        Commands::Order { name, quantity, date } => Command::Order {
            name,
            quantity,
            date: date_arg(date),
        },
        Commands::Today => Command::Today,
        Commands::Tomorrow => Command::Tomorrow,
        Commands::Check { date } => Command::Check { date: date_arg(date) },
        Commands::Week => Command::Week,
        Commands::Delete { name, date } => Command::Delete { name, date: date_arg(date) },
        Commands::Update { name, quantity, date } => Command::Update {
            name,
            quantity,
            date: date_arg(date),
        },
    };

    let mut service = open_service(&cli.config)?;
    println!("{}", execute(&mut service, &command, today()?));
    Ok(())
}

fn open_service(config: &Config) -> anyhow::Result<OrderService<JsonStore>> {
    let store = config
        .open_store()
        .with_context(|| format!("Failed to open order store {}", config.database.display()))?;
    Ok(OrderService::new(store))
}

/// Show resolved dates, one per line
fn cmd_resolve(date: Option<String>) -> anyhow::Result<()> {
    let result = resolve(date.as_deref(), today()?);
    for day in result.dates() {
        println!("{}", day);
    }
    Ok(())
}

/// Chat loop: each stdin line is handled like a message to the bot
fn cmd_chat(config: &Config) -> anyhow::Result<()> {
    let mut service = open_service(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    eprintln!("Lunch orders chat. Type /help for commands, Ctrl-D to quit.");

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if let Some(reply) = handle_message(&mut service, &line, today()?) {
            writeln!(stdout, "{}\n", reply)?;
            stdout.flush()?;
        }
    }

    eprintln!("Bye.");
    Ok(())
}
