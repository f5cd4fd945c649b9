use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Store-assigned employee identifier.
///
/// The store may hand out identifiers as JSON strings or integers; both are
/// normalized to their string form and compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEmployeeId", into = "String")]
pub struct EmployeeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEmployeeId {
    Text(String),
    Integer(i64),
}

impl From<RawEmployeeId> for EmployeeId {
    fn from(raw: RawEmployeeId) -> Self {
        match raw {
            RawEmployeeId::Text(text) => EmployeeId(text),
            RawEmployeeId::Integer(value) => EmployeeId(value.to_string()),
        }
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl EmployeeId {
    /// Parse an identifier taken from a route or form control.
    pub fn parse(raw: &str) -> Result<Self, EmployeeIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmployeeIdError::Empty);
        }
        Ok(EmployeeId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmployeeId {
    type Err = EmployeeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeId::parse(s)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeIdError {
    #[error("Employee ID must not be empty")]
    Empty,
    #[error("Employee record has no id")]
    Missing,
}

/// Avatar background used when the store does not provide one
pub const DEFAULT_AVATAR_COLOR: &str = "bg-blue-300";

/// An employee record as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmployee")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Job title shown under the name
    pub title: String,
    /// Cumulative earned amount, replaced by the grand total on every save
    pub earned: f64,
    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    /// CSS class for the initials avatar background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub work_entries: Vec<WorkEntry>,
}

/// Wire shape of an employee. Stores key the identifier as `id` or `_id`;
/// when both are present `id` wins.
#[derive(Deserialize)]
struct RawEmployee {
    #[serde(default)]
    id: Option<EmployeeId>,
    #[serde(default, rename = "_id")]
    document_id: Option<EmployeeId>,
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "lenient_number")]
    earned: f64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    initials: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    work_entries: Vec<WorkEntry>,
}

impl TryFrom<RawEmployee> for Employee {
    type Error = EmployeeIdError;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        let id = raw.id.or(raw.document_id).ok_or(EmployeeIdError::Missing)?;
        Ok(Employee {
            id,
            name: raw.name,
            title: raw.title,
            earned: raw.earned,
            image: raw.image,
            initials: raw.initials,
            color: raw.color,
            work_entries: raw.work_entries,
        })
    }
}

impl Employee {
    /// Initials for the avatar: the store's value, or derived from the name
    pub fn avatar_initials(&self) -> String {
        match &self.initials {
            Some(initials) if !initials.trim().is_empty() => initials.clone(),
            _ => initials_from_name(&self.name),
        }
    }

    pub fn avatar_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_AVATAR_COLOR)
    }
}

/// First letter of each word, upper-cased, at most two letters
pub fn initials_from_name(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// One dated record of work performed.
///
/// `deposited` is signed: positive is money received, negative is still owed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub work: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub units: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub deposited: f64,
}

impl WorkEntry {
    pub fn blank() -> Self {
        Self {
            date: String::new(),
            work: String::new(),
            rate: 0.0,
            units: 0.0,
            deposited: 0.0,
        }
    }

    /// rate × units, or 0 when either operand is not a finite number
    pub fn amount(&self) -> f64 {
        if self.rate.is_finite() && self.units.is_finite() {
            without_negative_zero(self.rate * self.units)
        } else {
            0.0
        }
    }

    /// Deposit or due, with a non-finite value counted as 0
    pub fn deposit_or_due(&self) -> f64 {
        if self.deposited.is_finite() {
            without_negative_zero(self.deposited)
        } else {
            0.0
        }
    }

    pub fn to_payload(&self) -> WorkEntryPayload {
        WorkEntryPayload {
            date: self.date.clone(),
            work: self.work.clone(),
            rate: self.rate,
            units: self.units,
            deposited: self.deposit_or_due(),
            amount: self.amount(),
        }
    }
}

/// Sum of (amount + deposit or due) over all entries
pub fn grand_total<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a WorkEntry>,
{
    entries
        .into_iter()
        .map(|entry| entry.amount() + entry.deposit_or_due())
        .fold(0.0, |total, value| total + value)
}

/// `-0.0` becomes `0.0`; every other value is unchanged
pub fn without_negative_zero(value: f64) -> f64 {
    value + 0.0
}

/// A work entry as sent on save, with its computed amount attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntryPayload {
    pub date: String,
    pub work: String,
    pub rate: f64,
    pub units: f64,
    pub deposited: f64,
    pub amount: f64,
}

/// Body of `POST /employees`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    /// Always 0 for a new employee
    pub earned: f64,
}

impl CreateEmployeeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            earned: 0.0,
        }
    }
}

/// Body of `PUT /employees/{id}`: full replacement of entries and earnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub work_entries: Vec<WorkEntryPayload>,
    pub earned: f64,
}

impl UpdateEmployeeRequest {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkEntry>,
    {
        let entries: Vec<&WorkEntry> = entries.into_iter().collect();
        Self {
            work_entries: entries.iter().map(|entry| entry.to_payload()).collect(),
            earned: grand_total(entries.iter().copied()),
        }
    }
}

/// Parse numeric user input; anything unparsable or non-finite becomes 0
pub fn parse_number_input(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => without_negative_zero(value),
        _ => 0.0,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number
            .as_f64()
            .filter(|value| value.is_finite())
            .map(without_negative_zero)
            .unwrap_or(0.0),
        Some(serde_json::Value::String(text)) => parse_number_input(&text),
        _ => 0.0,
    })
}

/// Format a `YYYY-MM-DD` entry date for display (e.g. "July 20, 2024").
/// Free-form dates that don't parse are returned unchanged.
pub fn format_entry_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
