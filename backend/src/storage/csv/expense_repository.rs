use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::{Reader, StringRecord, Writer};
use rust_decimal::Decimal;
use shared::{Expense, ExpenseId};
use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::storage::ExpenseStorage;

const HEADER: [&str; 6] = ["id", "name", "occurred_on", "amount", "currency_code", "logged_on"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV-based expense repository
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Parse one CSV row. `line` is only used for error messages.
    fn parse_record(&self, record: &StringRecord, line: u64) -> Result<Expense> {
        let field = |index: usize| -> Result<&str> {
            record
                .get(index)
                .ok_or_else(|| anyhow!("Line {}: missing '{}' column", line, HEADER[index]))
        };

        let id = ExpenseId::parse(field(0)?).with_context(|| format!("Line {}: invalid id", line))?;
        let occurred_on = parse_date(field(2)?).with_context(|| format!("Line {}: invalid occurred_on", line))?;
        let amount =
            Decimal::from_str(field(3)?.trim()).with_context(|| format!("Line {}: invalid amount", line))?;
        let logged_on = parse_date(field(5)?).with_context(|| format!("Line {}: invalid logged_on", line))?;

        Ok(Expense {
            id,
            name: field(1)?.to_string(),
            occurred_on,
            amount,
            currency_code: field(4)?.to_string(),
            logged_on,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

impl ExpenseStorage for ExpenseRepository {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        let file_path = self.connection.expenses_file_path();
        if !file_path.exists() {
            debug!("No expense file at {}, starting empty", file_path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&file_path).with_context(|| format!("Failed to open {}", file_path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut expenses = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            expenses.push(self.parse_record(&record, line)?);
        }

        info!("Loaded {} expenses from {}", expenses.len(), file_path.display());
        Ok(expenses)
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let mut csv_writer = Writer::from_writer(Vec::new());
        csv_writer.write_record(HEADER)?;

        for expense in expenses {
            csv_writer.write_record([
                expense.id.to_string(),
                expense.name.clone(),
                expense.occurred_on.format(DATE_FORMAT).to_string(),
                expense.amount.to_string(),
                expense.currency_code.clone(),
                expense.logged_on.format(DATE_FORMAT).to_string(),
            ])?;
        }

        let contents = csv_writer.into_inner().map_err(|e| anyhow!("Failed to flush CSV: {}", e))?;
        let file_path = self.connection.expenses_file_path();
        self.connection.write_atomically(&file_path, &contents)?;

        info!("Saved {} expenses to {}", expenses.len(), file_path.display());
        Ok(())
    }
}
