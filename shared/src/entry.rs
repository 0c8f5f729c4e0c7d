use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownEntryType;

/// Categories allowed for expense entries
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Carne",
    "Agua",
    "Gas",
    "Salarios",
    "Insumos",
    "Transporte",
    "Servicios",
    "Refresco",
    "Otros",
];

/// Categories allowed for income entries
pub const INCOME_CATEGORIES: &[&str] = &["Efectivo", "Transferencia", "Ventas", "Servicios", "Otros"];

/// Kind of ledger entry. Serialized with the wire values `gasto` / `ingreso`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "gasto")]
    Expense,
    #[serde(rename = "ingreso")]
    Income,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [EntryType::Expense, EntryType::Income];

    /// Wire value, also used as the `<option>` value in forms
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "gasto",
            EntryType::Income => "ingreso",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Expense => "Gasto",
            EntryType::Income => "Ingreso",
        }
    }

    /// The fixed category list for this entry type
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            EntryType::Expense => EXPENSE_CATEGORIES,
            EntryType::Income => INCOME_CATEGORIES,
        }
    }

    pub fn allows_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = UnknownEntryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gasto" => Ok(EntryType::Expense),
            "ingreso" => Ok(EntryType::Income),
            other => Err(UnknownEntryType(other.to_string())),
        }
    }
}

/// A single ledger record as stored by the entry data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub category: String,
    pub amount: f64,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Signed amount for list display, e.g. "-$100.00" for an expense
    pub fn formatted_amount(&self) -> String {
        match self.entry_type {
            EntryType::Expense => format!("-${:.2}", self.amount),
            EntryType::Income => format!("+${:.2}", self.amount),
        }
    }
}

/// Editable fields sent to the update callback.
///
/// A `None` description is left out of the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub category: String,
    pub amount: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Amount as it should appear in a form field.
///
/// Matches how a browser prints numbers: exponent form below `1e-6` and from
/// `1e21` up (`1e+21`, `1e-7`), and `0` for negative zero.
pub fn format_amount_input(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount == 0.0 {
        return "0".to_string();
    }

    let magnitude = amount.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", amount);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => formatted,
        };
    }
    amount.to_string()
}

/// Parse an amount typed into a form field.
///
/// Reads the longest numeric prefix after leading whitespace, so `"12.5kg"`
/// gives `12.5`. Input without any leading digits gives `NaN`.
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - end - 1;
        end = frac_end;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
