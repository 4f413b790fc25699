use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Currency code used when a caller does not supply one.
pub const DEFAULT_CURRENCY_CODE: &str = "GBP";

/// An amount paired with the currency it is expressed in.
///
/// The code is carried as an opaque string; checking that it names a real
/// currency is left to whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency_code: String,
}

impl Money {
    /// Create a value in the default currency
    pub fn new(amount: Decimal) -> Self {
        Self::with_currency(amount, DEFAULT_CURRENCY_CODE)
    }

    /// Create a value with an explicit currency code
    pub fn with_currency(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

/// Identity of an expense record. Assigned once and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single logged expense.
///
/// Two records are the same record only when their ids match; every other
/// field may be edited without changing identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    /// Day the money was spent. Drives bucketing and charting.
    pub occurred_on: NaiveDate,
    pub amount: Decimal,
    pub currency_code: String,
    /// Day the record was entered. Informational only.
    pub logged_on: NaiveDate,
}

impl Expense {
    /// Create a record with a freshly assigned id
    pub fn new(name: impl Into<String>, occurred_on: NaiveDate, money: Money, logged_on: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            occurred_on,
            amount: money.amount,
            currency_code: money.currency_code,
            logged_on,
        }
    }

    pub fn money(&self) -> Money {
        Money::with_currency(self.amount, self.currency_code.clone())
    }
}

impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Expense {}

impl Hash for Expense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Length of a spending target's period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Weekly,
    Monthly,
    Yearly,
}

impl TimeFrame {
    /// Fixed day count used to derive a daily allowance.
    ///
    /// Months are always 30 days and years 365; these are not calendar
    /// accurate and must stay that way or allowances shift silently.
    pub fn days(&self) -> u32 {
        match self {
            TimeFrame::Weekly => 7,
            TimeFrame::Monthly => 30,
            TimeFrame::Yearly => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Weekly => "weekly",
            TimeFrame::Monthly => "monthly",
            TimeFrame::Yearly => "yearly",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TargetValidationError {
    #[error("Spending target amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

/// A budget amount for a recurring period.
///
/// Only constructible through [`SpendingTarget::new`], so every instance has
/// a positive amount and therefore a positive daily allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SpendingTargetFields")]
pub struct SpendingTarget {
    amount: Decimal,
    currency_code: String,
    period: TimeFrame,
}

#[derive(Deserialize)]
struct SpendingTargetFields {
    amount: Decimal,
    #[serde(default = "default_currency_code")]
    currency_code: String,
    period: TimeFrame,
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

impl TryFrom<SpendingTargetFields> for SpendingTarget {
    type Error = TargetValidationError;

    fn try_from(fields: SpendingTargetFields) -> Result<Self, Self::Error> {
        Self::new(Money::with_currency(fields.amount, fields.currency_code), fields.period)
    }
}

impl SpendingTarget {
    pub fn new(money: Money, period: TimeFrame) -> Result<Self, TargetValidationError> {
        if money.amount <= Decimal::ZERO {
            return Err(TargetValidationError::NonPositiveAmount(money.amount));
        }
        Ok(Self {
            amount: money.amount,
            currency_code: money.currency_code,
            period,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn period(&self) -> TimeFrame {
        self.period
    }

    pub fn money(&self) -> Money {
        Money::with_currency(self.amount, self.currency_code.clone())
    }

    /// Target amount spread evenly over the period's fixed day count
    pub fn daily_allowance(&self) -> Decimal {
        self.amount / Decimal::from(self.period.days())
    }
}

/// Running totals derived from an expense snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceMetrics {
    pub days_since_earliest: u32,
    pub total_expenses: Decimal,
    pub projected_balance: Decimal,
}

impl Default for BalanceMetrics {
    fn default() -> Self {
        Self {
            days_since_earliest: 0,
            total_expenses: Decimal::ZERO,
            projected_balance: Decimal::ZERO,
        }
    }
}

/// Date-relative list section an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseBucket {
    #[serde(rename = "Today")]
    Today,
    #[serde(rename = "Yesterday")]
    Yesterday,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Last Month")]
    LastMonth,
    #[serde(rename = "Older")]
    Older,
}

impl ExpenseBucket {
    /// Every bucket, in display order
    pub const ALL: [ExpenseBucket; 6] = [
        ExpenseBucket::Today,
        ExpenseBucket::Yesterday,
        ExpenseBucket::ThisWeek,
        ExpenseBucket::ThisMonth,
        ExpenseBucket::LastMonth,
        ExpenseBucket::Older,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseBucket::Today => "Today",
            ExpenseBucket::Yesterday => "Yesterday",
            ExpenseBucket::ThisWeek => "This Week",
            ExpenseBucket::ThisMonth => "This Month",
            ExpenseBucket::LastMonth => "Last Month",
            ExpenseBucket::Older => "Older",
        }
    }
}

impl fmt::Display for ExpenseBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-empty list section: its bucket and the expenses in it, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGroup {
    pub bucket: ExpenseBucket,
    pub expenses: Vec<Expense>,
}

/// One sample of a spend-over-time chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub amount_spent: Decimal,
    pub currency_code: String,
}

impl ChartPoint {
    /// Room left under `goal` at this point. Negative when overspent.
    pub fn headroom(&self, goal: Decimal) -> Decimal {
        goal - self.amount_spent
    }
}

/// Display symbol for a currency code.
///
/// Only US dollars and pounds are distinguished; every other code renders
/// with the pound sign.
pub fn currency_symbol(currency_code: &str) -> &'static str {
    match currency_code {
        "USD" => "$",
        "GBP" => "£",
        _ => "£",
    }
}

/// Chart-ready points plus the symbol the axis should be labelled with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSeries {
    pub currency_code: String,
    pub currency_symbol: String,
    pub points: Vec<ChartPoint>,
}

/// An expense with display strings precomputed for list rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedExpense {
    pub id: ExpenseId,
    pub name: String,
    pub formatted_date: String,
    pub formatted_amount: String,
    pub raw_amount: Decimal,
}

/// Everything a dashboard needs after a change to the expense list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseOverview {
    pub today: NaiveDate,
    pub daily_allowance: Decimal,
    pub metrics: BalanceMetrics,
    pub groups: Vec<ExpenseGroup>,
    pub series: SpendingSeries,
}
