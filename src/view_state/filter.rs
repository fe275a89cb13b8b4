//! Equality filters and case-insensitive search.

use crate::model::{FieldValue, Record, Scalar};

// ===== FilterValue =====

/// Constraint on a single field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    /// Wildcard: every value passes ("All statuses").
    #[default]
    All,
    /// The field must equal this value exactly.
    Equals(Scalar),
}

impl FilterValue {
    /// Whether a field value passes this constraint.
    pub fn accepts(&self, value: FieldValue<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Equals(expected) => expected.matches(value),
        }
    }
}

// ===== FilterSpec =====

/// Conjunction of per-field equality constraints.
///
/// At most one constraint per field; setting a field again replaces its constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec<F> {
    entries: Vec<(F, FilterValue)>,
}

impl<F> Default for FilterSpec<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: Copy + Eq> FilterSpec<F> {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSpec::set`].
    pub fn with(mut self, field: F, value: impl Into<Scalar>) -> Self {
        self.set(field, FilterValue::Equals(value.into()));
        self
    }

    /// Constrain `field`. Setting [`FilterValue::All`] removes the constraint.
    pub fn set(&mut self, field: F, value: FilterValue) {
        if value == FilterValue::All {
            self.clear(field);
            return;
        }
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Drop any constraint on `field`.
    pub fn clear(&mut self, field: F) {
        self.entries.retain(|(f, _)| *f != field);
    }

    /// Current constraint on `field`; [`FilterValue::All`] when unconstrained.
    pub fn get(&self, field: F) -> &FilterValue {
        const ALL: &FilterValue = &FilterValue::All;
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
            .unwrap_or(ALL)
    }

    /// Active constraints, in the order they were first set.
    pub fn active(&self) -> impl Iterator<Item = (F, &Scalar)> + '_ {
        self.entries.iter().filter_map(|(f, v)| match v {
            FilterValue::All => None,
            FilterValue::Equals(s) => Some((*f, s)),
        })
    }

    /// True when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Whether `item` passes every constraint.
    pub fn matches<R: Record<Field = F>>(&self, item: &R) -> bool {
        self.entries
            .iter()
            .all(|(field, value)| value.accepts(item.value(*field)))
    }
}

// ===== SearchSpec =====

/// Case-insensitive substring search over a fixed set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec<F> {
    /// Raw term as typed. Empty means "no search".
    pub term: String,
    /// Fields searched; an item passes if any of them contains the term.
    pub fields: Vec<F>,
}

impl<F: Copy> SearchSpec<F> {
    /// Search `fields` with an empty term.
    pub fn over(fields: impl Into<Vec<F>>) -> Self {
        Self {
            term: String::new(),
            fields: fields.into(),
        }
    }

    /// True when the term is empty and every item passes.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Prepare the term for repeated matching.
    pub fn matcher(&self) -> SearchMatcher<'_, F> {
        SearchMatcher {
            needle: self.term.to_lowercase(),
            fields: &self.fields,
        }
    }
}

/// A [`SearchSpec`] with its term lowercased once.
#[derive(Debug)]
pub struct SearchMatcher<'a, F> {
    needle: String,
    fields: &'a [F],
}

impl<F: Copy> SearchMatcher<'_, F> {
    /// Whether `item` passes the search.
    ///
    /// Numeric fields are searched through their display form.
    pub fn matches<R: Record<Field = F>>(&self, item: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.fields.iter().any(|field| match item.value(*field) {
            FieldValue::Text(text) => text.to_lowercase().contains(&self.needle),
            number @ FieldValue::Number(_) => number.to_string().contains(&self.needle),
        })
    }
}
