//! Selection lookup.

use trends_model::{CountryRecord, NotFoundError, RecordStore};

/// Resolve a selected country name to its record.
///
/// Matching is exact and case-sensitive; there is no fuzzy matching and no
/// fallback to a default record.
///
/// # Errors
///
/// Returns [`NotFoundError`] when no record carries `country`.
pub fn resolve<'a>(
    store: &'a RecordStore,
    country: &str,
) -> Result<&'a CountryRecord, NotFoundError> {
    store
        .find(country)
        .ok_or_else(|| NotFoundError::new(country))
}
