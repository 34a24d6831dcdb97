//! Generic transaction-table extraction engine.
//!
//! Parses transaction rows out of a statement's text layer: one row per
//! line shaped `date  description  amount[ amount[ amount]]`. Column
//! semantics follow the common statement print layout: with three trailing
//! amounts they are debit / credit / balance (zero meaning empty column);
//! with two, transaction amount and running balance; with one, just the
//! amount. Direction falls back to a CR marker in the narration.
//!
//! Bank-specific layouts are out of scope; this engine is the generic
//! fallback wired up at process start.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::pipeline::batch::error::EngineError;
use crate::pipeline::batch::traits::StatementEngine;
use crate::pipeline::batch::types::{DocumentTask, TransactionRow, TransactionSheet};

use super::text::read_pdf_text;

static TXN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date>\d{1,2}[-/]\d{1,2}[-/]\d{4}|\d{4}-\d{2}-\d{2})\s+(?P<desc>.*?)\s+(?P<amounts>-?\d[\d,]*\.\d{2}(?:\s+-?\d[\d,]*\.\d{2}){0,2})$",
    )
    .unwrap()
});

pub struct TableStatementEngine;

impl TableStatementEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableStatementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementEngine for TableStatementEngine {
    fn extract(
        &self,
        task: &DocumentTask,
        owner_id: &str,
    ) -> Result<TransactionSheet, EngineError> {
        tracing::debug!(
            owner_id,
            bank = task.bank_name,
            path = %task.pdf_path.display(),
            "Extracting transaction table"
        );

        let text = read_pdf_text(&task.pdf_path)?;
        let window = (parse_date(&task.start_date), parse_date(&task.end_date));
        let rows = parse_rows(&text, window.0, window.1);

        if rows.is_empty() {
            return Err(EngineError::Layout);
        }
        Ok(TransactionSheet::from_rows(rows))
    }
}

/// Parse all recognizable transaction lines, keeping rows inside the
/// inclusive date window (an unparsable or empty bound is unbounded).
fn parse_rows(text: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<TransactionRow> {
    text.lines()
        .filter_map(|line| parse_line(line.trim()))
        .filter(|row| start.map_or(true, |s| row.date >= s))
        .filter(|row| end.map_or(true, |e| row.date <= e))
        .collect()
}

fn parse_line(line: &str) -> Option<TransactionRow> {
    let caps = TXN_LINE.captures(line)?;
    let date = parse_date(caps.name("date")?.as_str())?;
    let description = caps.name("desc")?.as_str().trim().to_string();
    let amounts: Vec<f64> = caps
        .name("amounts")?
        .as_str()
        .split_whitespace()
        .filter_map(parse_amount)
        .collect();

    let (debit, credit, balance) = match amounts.as_slice() {
        [amount] => signed(description.as_str(), *amount, None),
        [amount, balance] => signed(description.as_str(), *amount, Some(*balance)),
        [debit, credit, balance] => (nonzero(*debit), nonzero(*credit), Some(*balance)),
        _ => return None,
    };

    Some(TransactionRow {
        date,
        description,
        debit,
        credit,
        balance,
    })
}

/// Single-amount direction: credit when the narration carries a CR marker,
/// debit otherwise.
fn signed(
    description: &str,
    amount: f64,
    balance: Option<f64>,
) -> (Option<f64>, Option<f64>, Option<f64>) {
    let credit_marker = description
        .split_whitespace()
        .any(|token| matches!(token, "CR" | "CR." | "CREDIT"));
    if credit_marker {
        (None, Some(amount), balance)
    } else {
        (Some(amount), None, balance)
    }
}

fn nonzero(amount: f64) -> Option<f64> {
    (amount != 0.0).then_some(amount)
}

fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "").parse().ok()
}

/// Accepts the date formats seen across statement prints and request
/// payloads: `%Y-%m-%d`, `%d-%m-%Y`, `%d/%m/%Y`.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
