use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use expense_tracker_backend::config::{ExpenseTrackerConfig, CONFIG_FILE_NAME};
use expense_tracker_backend::domain::commands::expenses::CreateExpenseCommand;
use expense_tracker_backend::domain::ExpenseTableService;
use expense_tracker_backend::Backend;
use shared::{ExpenseId, Money, SpendingTarget, TimeFrame};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "expense-tracker", version, about = "Personal expense tracking")]
struct Cli {
    /// Directory holding expenses.csv and spending_target.yaml
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Date to treat as today (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print balance, list sections and chart series as JSON
    Overview,
    /// List expenses, newest first, with display formatting
    List,
    /// Log a new expense
    Add {
        name: String,
        /// Amount, e.g. "12.50" or "£12.50"
        amount: String,
        /// Day the expense happened, defaults to today
        #[arg(long)]
        on: Option<NaiveDate>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Delete expenses by id
    Delete { ids: Vec<String> },
    /// Set the spending target
    Target {
        amount: String,
        #[arg(value_enum)]
        period: Period,
        #[arg(long)]
        currency: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl From<Period> for TimeFrame {
    fn from(period: Period) -> Self {
        match period {
            Period::Weekly => TimeFrame::Weekly,
            Period::Monthly => TimeFrame::Monthly,
            Period::Yearly => TimeFrame::Yearly,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExpenseTrackerConfig::load(&cli.config)?;
    let data_directory = config.resolve_data_directory(cli.data_dir.as_deref());
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let table = ExpenseTableService::new();

    let mut backend = Backend::open(&config, &data_directory)?;

    match cli.command.unwrap_or(Command::Overview) {
        Command::Overview => {
            let overview = backend.overview(today);
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        Command::List => {
            for group in backend.overview(today).groups {
                println!("{}", group.bucket);
                for row in table.format_expenses(&group.expenses) {
                    println!("  {:<20} {:>10}  {}  {}", row.formatted_date, row.formatted_amount, row.name, row.id);
                }
            }
        }
        Command::Add { name, amount, on, currency } => {
            let amount = table.parse_amount_input(&amount)?;
            let expense = backend.book.add(CreateExpenseCommand {
                name,
                occurred_on: on.unwrap_or(today),
                amount,
                currency_code: currency,
                logged_on: today,
            })?;
            backend.save()?;
            println!("{}", expense.id);
        }
        Command::Delete { ids } => {
            let ids = ids
                .iter()
                .map(|id| ExpenseId::parse(id).with_context(|| format!("Invalid expense id '{}'", id)))
                .collect::<Result<Vec<_>>>()?;
            let result = backend.book.delete(&ids);
            backend.save()?;
            for id in &result.not_found_ids {
                eprintln!("Not found: {}", id);
            }
            println!("Deleted {} expenses", result.deleted_count());
        }
        Command::Target { amount, period, currency } => {
            let amount = table.parse_amount_input(&amount)?;
            let currency = currency.unwrap_or_else(|| config.default_currency_code.clone());
            let target = SpendingTarget::new(Money::with_currency(amount, currency), period.into())?;
            info!("Daily allowance is now {}", target.daily_allowance());
            backend.book.set_target(Some(target));
            backend.save()?;
        }
    }

    Ok(())
}
