//! Column sorting with locale-aware text comparison.

use crate::model::{FieldValue, Record, ViewError};
use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};
use icu::locale::Locale;
use std::cmp::Ordering;
use std::fmt;

/// Locale used when none is configured.
pub const DEFAULT_COLLATION_LOCALE: &str = "en";

// ===== SortDirection =====

/// Sort order for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Header indicator glyph.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

// ===== SortSpec =====

/// Field plus direction defining the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    /// Column to sort by.
    pub field: F,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    /// Ascending sort on `field`.
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

// ===== TextCollator =====

/// ICU collator used for text-to-text comparisons.
pub struct TextCollator {
    locale: String,
    collator: CollatorBorrowed<'static>,
}

impl TextCollator {
    /// Build a collator for a BCP 47 locale such as `en` or `de-DE`.
    ///
    /// # Errors
    ///
    /// [`ViewError::Collation`] if the identifier does not parse or ICU has no data for it.
    pub fn new(locale: &str) -> Result<Self, ViewError> {
        let parsed: Locale = locale.parse().map_err(|e| ViewError::Collation {
            locale: locale.to_string(),
            reason: format!("{e:?}"),
        })?;
        let collator =
            Collator::try_new(parsed.into(), CollatorOptions::default()).map_err(|e| {
                ViewError::Collation {
                    locale: locale.to_string(),
                    reason: e.to_string(),
                }
            })?;
        Ok(Self {
            locale: locale.to_string(),
            collator,
        })
    }

    /// Locale this collator was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Compare two strings in collation order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for TextCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCollator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

// ===== Comparison =====

/// Ascending comparison of two field values.
///
/// Two `Text` values use the collator. Any other pairing coerces both sides to numbers;
/// `NaN` orders after every number so the result stays a total order.
pub fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>, collator: &TextCollator) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => collator.compare(x, y),
        _ => compare_numbers(a.to_number(), b.to_number()),
    }
}

fn compare_numbers(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Stable in-place sort of borrowed records.
///
/// Ties keep their incoming order in both directions.
pub fn sort_records<R: Record>(rows: &mut [&R], spec: &SortSpec<R::Field>, collator: &TextCollator) {
    rows.sort_by(|a, b| {
        let ordering = compare_values(a.value(spec.field), b.value(spec.field), collator);
        spec.direction.apply(ordering)
    });
}
