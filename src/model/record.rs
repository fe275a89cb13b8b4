//! Typed field access for table records.
//!
//! The view-state core never looks fields up by string. Each record type declares a
//! field enum and hands out [`FieldValue`]s through [`Record::value`].

use std::fmt;

// ===== FieldValue =====

/// A borrowed view of one field of one record.
///
/// Dates travel as `Text`: ISO-8601 strings order correctly under text comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text, categorical labels and ISO-8601 date strings.
    Text(&'a str),
    /// Quantities, prices and counters.
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// The text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric coercion used when a comparison is not text-to-text.
    ///
    /// Blank text coerces to `0.0`, unparseable text to `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// ===== Scalar =====

/// Owned counterpart of [`FieldValue`], used as a filter constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Must equal a `Text` field exactly (case-sensitive).
    Text(String),
    /// Must equal a `Number` field exactly.
    Number(f64),
}

impl Scalar {
    /// Parse a raw literal according to the kind of field it will be compared with.
    ///
    /// Returns `None` when a numeric field is given a non-numeric literal.
    pub fn parse_for(kind: FieldKind, raw: &str) -> Option<Self> {
        match kind {
            FieldKind::Text => Some(Self::Text(raw.to_string())),
            FieldKind::Number => raw.trim().parse().ok().map(Self::Number),
        }
    }

    /// Strict equality against a field value. Mixed kinds never match.
    pub fn matches(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::Text(expected), FieldValue::Text(actual)) => expected == actual,
            (Self::Number(expected), FieldValue::Number(actual)) => *expected == actual,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

// ===== Field metadata =====

/// Whether a field yields `Text` or `Number` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Yields [`FieldValue::Text`].
    Text,
    /// Yields [`FieldValue::Number`].
    Number,
}

/// Static metadata for a record's field enum.
pub trait FieldSet: Copy + Eq + fmt::Debug + 'static {
    /// Every field, in column display order.
    const ALL: &'static [Self];

    /// Stable lowercase key used on the command line (`--sort quantity`).
    fn key(self) -> &'static str;

    /// Column header text.
    fn label(self) -> &'static str;

    /// Value kind produced by this field.
    fn kind(self) -> FieldKind;

    /// Whether the table lets the user sort by this column.
    fn sortable(self) -> bool {
        true
    }

    /// Look a field up by key, ignoring ASCII case and `-`/`_` differences.
    fn from_key(raw: &str) -> Option<Self> {
        let wanted = normalize_key(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize_key(field.key()) == wanted)
    }
}

fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ===== Record =====

/// A row that the view-state core can filter, search and sort.
pub trait Record {
    /// The record's field enum.
    type Field: FieldSet;

    /// Identifier field, unique within a collection.
    fn id(&self) -> &str;

    /// Typed accessor for one field.
    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Cell text shown in the table. Defaults to the raw value.
    fn display(&self, field: Self::Field) -> String {
        self.value(field).to_string()
    }
}
