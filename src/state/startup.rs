//! Initial table query given on the command line.

use crate::model::{FieldSet, Scalar, ViewError};
use crate::state::TableState;
use crate::view_state::{FilterValue, SortSpec};

/// Search, filters, sort and page to start with, as raw user text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupQuery {
    /// Initial search term.
    pub search: Option<String>,
    /// `(column, value)` equality filters.
    pub filters: Vec<(String, String)>,
    /// Column to sort by.
    pub sort: Option<String>,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// 1-based page to open.
    pub page: Option<usize>,
}

impl StartupQuery {
    /// Resolve column names against `F` and apply everything to `state`.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] for an unknown column, an unsortable sort column,
    /// a filter value that does not fit the column type, or page 0. `state` may be
    /// partially updated on error.
    pub fn apply_to<F: FieldSet>(&self, state: &mut TableState<F>) -> Result<(), ViewError> {
        if let Some(term) = &self.search {
            state.set_search(term.as_str());
        }

        for (key, raw) in &self.filters {
            let field = resolve::<F>("filter column", key)?;
            let value = Scalar::parse_for(field.kind(), raw).ok_or_else(|| {
                ViewError::invalid(
                    "filter value",
                    format!("'{raw}' is not a valid value for {}", field.key()),
                )
            })?;
            state.set_filter(field, FilterValue::Equals(value));
        }

        if let Some(key) = &self.sort {
            let field = resolve::<F>("sort column", key)?;
            if !field.sortable() {
                return Err(ViewError::invalid(
                    "sort column",
                    format!("{} cannot be sorted", field.key()),
                ));
            }
            state.set_sort(Some(if self.descending {
                SortSpec::desc(field)
            } else {
                SortSpec::asc(field)
            }));
        }

        if let Some(page) = self.page {
            state.go_to_page(page)?;
        }

        Ok(())
    }
}

fn resolve<F: FieldSet>(argument: &'static str, key: &str) -> Result<F, ViewError> {
    F::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = F::ALL.iter().map(|f| f.key()).collect();
        ViewError::invalid(
            argument,
            format!("unknown column '{key}' (expected one of: {})", known.join(", ")),
        )
    })
}
