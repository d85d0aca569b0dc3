//! Financial context records for FundSight.
//!
//! Transactions, accounts, and budgets supplied by the hosting product
//! as grounding data for advice requests. The advisor core never
//! interprets these fields; it forwards the whole bundle to the advice
//! service adapter, which serializes it into the request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("invalid transaction kind: '{other}'")),
        }
    }
}

/// A single transaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// A linked account and its current balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub balance: f64,
}

/// A spending budget for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

/// The read-only bundle of financial data grounding each advice request.
///
/// Treated as an immutable snapshot for the duration of a send; the
/// advisor core never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialContext {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
}
